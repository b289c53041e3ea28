//! Reference resolution shared by the mutating commands.
//!
//! The CLI refers to records by what an operator actually types: a unit
//! number for properties and reservations, an email or full name for users,
//! or a UUID prefix for anything. Resolution happens once here, against the
//! collection, and the commands only ever see ids.

use uuid::Uuid;

use crate::error::{Result, StockError};
use crate::model::{Entity, Property, Reservation, User};
use crate::store::Collection;

/// Minimum prefix length before a reference is tried against raw UUIDs, so
/// short unit numbers never accidentally match an id.
const MIN_ID_PREFIX: usize = 8;

/// Per-entity matching rule for [`resolve`].
pub trait ByReference: Entity {
    fn answers_to(&self, needle: &str) -> bool;
}

fn candidate_ids<T: ByReference>(collection: &Collection<T>, needle: &str) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = collection
        .iter()
        .filter(|r| r.answers_to(needle))
        .map(|r| r.id())
        .collect();

    if ids.is_empty() && needle.len() >= MIN_ID_PREFIX {
        ids = collection
            .iter()
            .filter(|r| r.id().to_string().starts_with(&needle.to_lowercase()))
            .map(|r| r.id())
            .collect();
    }
    ids
}

/// Resolve a human-typed reference to a single record id.
///
/// No match is `NotFound`; more than one is an error asking the operator to
/// disambiguate (reservations for the same unit, say) with the id.
pub fn resolve<T: ByReference>(collection: &Collection<T>, needle: &str) -> Result<Uuid> {
    let ids = candidate_ids(collection, needle);
    match ids.len() {
        0 => Err(StockError::NotFound {
            what: T::NOUN,
            reference: needle.to_string(),
        }),
        1 => Ok(ids[0]),
        n => Err(StockError::Api(format!(
            "reference {needle:?} is ambiguous ({n} matches); use an id prefix instead"
        ))),
    }
}

impl ByReference for Property {
    fn answers_to(&self, needle: &str) -> bool {
        self.number.eq_ignore_ascii_case(needle)
    }
}

impl ByReference for Reservation {
    fn answers_to(&self, needle: &str) -> bool {
        self.unit_number.eq_ignore_ascii_case(needle)
    }
}

impl ByReference for User {
    fn answers_to(&self, needle: &str) -> bool {
        self.email.eq_ignore_ascii_case(needle) || self.name.eq_ignore_ascii_case(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyStatus;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn resolve_by_unit_number_ignores_case() {
        let fixture = StoreFixture::seeded();
        let id = resolve(&fixture.store.properties, "a101").unwrap();
        assert_eq!(fixture.store.properties.get(id).unwrap().number, "A101");
    }

    #[test]
    fn resolve_user_by_email_or_name() {
        let fixture = StoreFixture::seeded();
        let by_email = resolve(&fixture.store.users, "sarah.wilson@palmrealestate.com").unwrap();
        let by_name = resolve(&fixture.store.users, "Sarah Wilson").unwrap();
        assert_eq!(by_email, by_name);
    }

    #[test]
    fn resolve_unknown_is_not_found() {
        let fixture = StoreFixture::seeded();
        let err = resolve(&fixture.store.properties, "Z999").unwrap_err();
        assert!(matches!(err, StockError::NotFound { what: "property", .. }));
    }

    #[test]
    fn resolve_duplicate_reference_is_ambiguous() {
        let fixture = StoreFixture::new()
            .with_property("A101", PropertyStatus::Available, "palm-towers")
            .with_property("A101", PropertyStatus::Sold, "palm-plaza");
        let err = resolve(&fixture.store.properties, "A101").unwrap_err();
        assert!(matches!(err, StockError::Api(_)));
    }

    #[test]
    fn resolve_by_id_prefix() {
        let fixture = StoreFixture::seeded();
        let expected = fixture.store.properties.as_slice()[0].id;
        let prefix = expected.to_string()[..12].to_string();
        let id = resolve(&fixture.store.properties, &prefix).unwrap();
        assert_eq!(id, expected);
    }

    #[test]
    fn short_prefixes_do_not_match_ids() {
        let fixture = StoreFixture::seeded();
        let prefix = fixture.store.properties.as_slice()[0].id.to_string()[..6].to_string();
        assert!(resolve(&fixture.store.properties, &prefix).is_err());
    }
}
