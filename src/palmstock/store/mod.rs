//! # Storage Layer
//!
//! Collections live entirely in memory: palmstock is seeded at startup and
//! forgets everything at exit. What this module abstracts is not persistence
//! but **where the initial records come from** — the [`DataSource`] trait.
//! The shipped implementation is [`seed::SeedSource`], a compiled-in demo
//! portfolio; a production deployment would substitute a fetch against the
//! company backend returning the same ordered record lists.
//!
//! [`Collection`] is the ordered, id-unique container every command operates
//! on. Insertion order is preserved and is the order listings render in;
//! `filter` never resorts. Identifiers are unique within a collection and
//! never reused after removal.
//!
//! [`MemoryStore`] simply bundles the three collections so the API facade can
//! own one value.

use uuid::Uuid;

use crate::error::{Result, StockError};
use crate::model::{Entity, Property, Reservation, User};

pub mod seed;

/// An ordered, id-unique, in-memory collection of one record type.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    records: Vec<T>,
}

// Manual impl: the derive would demand `T: Default`.
impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Append a new record. Ids are UUIDv4, so collisions are not checked.
    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    /// Remove by id, returning the removed record.
    pub fn remove(&mut self, id: Uuid) -> Result<T> {
        match self.records.iter().position(|r| r.id() == id) {
            Some(pos) => Ok(self.records.remove(pos)),
            None => Err(StockError::NotFound {
                what: T::NOUN,
                reference: id.to_string(),
            }),
        }
    }
}

/// Supplies the initial record lists, in display order.
///
/// This is the data-source contract the rest of the system is written
/// against; errors are for sources that actually can fail (a backend call),
/// the compiled-in seed never does.
pub trait DataSource {
    fn properties(&self) -> Result<Vec<Property>>;
    fn reservations(&self) -> Result<Vec<Reservation>>;
    fn users(&self) -> Result<Vec<User>>;
}

/// The three entity collections, owned together.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    pub properties: Collection<Property>,
    pub reservations: Collection<Reservation>,
    pub users: Collection<User>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            properties: Collection::new(),
            reservations: Collection::new(),
            users: Collection::new(),
        }
    }

    /// Load every collection from `source`.
    pub fn from_source<D: DataSource>(source: &D) -> Result<Self> {
        Ok(Self {
            properties: Collection::from_records(source.properties()?),
            reservations: Collection::from_records(source.reservations()?),
            users: Collection::from_records(source.users()?),
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{PropertyStatus, PropertyType};

    /// Builder-style store for tests: start empty, add what the test needs.
    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        /// The full demo portfolio.
        pub fn seeded() -> Self {
            let store = MemoryStore::from_source(&seed::SeedSource)
                .unwrap_or_else(|e| panic!("seed data must load: {e}"));
            Self { store }
        }

        pub fn with_property(
            mut self,
            number: &str,
            status: PropertyStatus,
            site: &str,
        ) -> Self {
            let property =
                Property::new(number, PropertyType::Apartment, 850.0, 450_000.0, 1, site)
                    .unwrap_or_else(|e| panic!("fixture property must be valid: {e}"))
                    .with_status(status);
            self.store.properties.insert(property);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::seed::SeedSource;
    use super::*;
    use crate::model::PropertyStatus;

    #[test]
    fn remove_not_found() {
        let mut store = MemoryStore::new();
        let id = Uuid::new_v4();
        match store.properties.remove(id) {
            Err(StockError::NotFound { what, reference }) => {
                assert_eq!(what, "property");
                assert_eq!(reference, id.to_string());
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn insert_preserves_order() {
        let fixture = StoreFixture::new()
            .with_property("A101", PropertyStatus::Available, "palm-towers")
            .with_property("A102", PropertyStatus::Sold, "palm-towers")
            .with_property("S101", PropertyStatus::Available, "palm-plaza");

        let numbers: Vec<_> = fixture
            .store
            .properties
            .iter()
            .map(|p| p.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["A101", "A102", "S101"]);
    }

    #[test]
    fn remove_keeps_relative_order_of_the_rest() {
        let mut fixture = StoreFixture::new()
            .with_property("A101", PropertyStatus::Available, "palm-towers")
            .with_property("A102", PropertyStatus::Sold, "palm-towers")
            .with_property("S101", PropertyStatus::Available, "palm-plaza");

        let middle = fixture.store.properties.as_slice()[1].id;
        let removed = fixture.store.properties.remove(middle).unwrap();
        assert_eq!(removed.number, "A102");

        let numbers: Vec<_> = fixture
            .store
            .properties
            .iter()
            .map(|p| p.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["A101", "S101"]);
    }

    #[test]
    fn seed_source_loads_all_collections() {
        let store = MemoryStore::from_source(&SeedSource).unwrap();
        assert_eq!(store.properties.len(), 8);
        assert_eq!(store.reservations.len(), 4);
        assert_eq!(store.users.len(), 5);
    }

    #[test]
    fn seed_ids_are_unique() {
        let store = MemoryStore::from_source(&SeedSource).unwrap();
        let mut ids: Vec<_> = store.properties.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.properties.len());
    }
}
