//! # API Facade
//!
//! The single entry point for every palmstock operation, regardless of the
//! client driving it. The facade:
//!
//! - **Dispatches** to the command layer
//! - **Normalizes inputs** (human references — unit numbers, emails, id
//!   prefixes — become record ids)
//! - **Returns structured types** (`Result<CmdResult<T>>`, report structs)
//!
//! No business logic lives here and nothing is printed; that is the command
//! layer's and CLI layer's job respectively. Reports take a site
//! [`Selection`] so the CLI's `--site` flag scopes every report the same way.

use crate::commands::{self, helpers, report, CmdMessage, CmdResult};
use crate::engine::{self, Criteria, Selection};
use crate::error::Result;
use crate::model::{
    Property, PropertyPatch, PropertyStatus, Reservation, ReservationDraft, ReservationPatch,
    ReservationStatus, User, UserPatch, UserStatus,
};
use crate::store::{DataSource, MemoryStore};

/// The main API facade. Owns the in-memory store for the session.
pub struct StockApi {
    store: MemoryStore,
}

impl StockApi {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Load all collections from a data source.
    pub fn from_source<D: DataSource>(source: &D) -> Result<Self> {
        Ok(Self::new(MemoryStore::from_source(source)?))
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    // --- Properties ---

    pub fn list_properties(&self, criteria: &Criteria) -> Result<CmdResult<Property>> {
        commands::list::run(&self.store.properties, criteria)
    }

    /// Fetch one property by reference, for the details view.
    pub fn get_property(&self, reference: &str) -> Result<CmdResult<Property>> {
        let id = helpers::resolve(&self.store.properties, reference)?;
        let listed = self.store.properties.get(id).cloned().into_iter().collect();
        Ok(CmdResult::default().with_listed(listed))
    }

    pub fn create_property(&mut self, property: Property) -> Result<CmdResult<Property>> {
        commands::create::run(&mut self.store.properties, property)
    }

    pub fn update_property(
        &mut self,
        reference: &str,
        patch: PropertyPatch,
    ) -> Result<CmdResult<Property>> {
        let id = helpers::resolve(&self.store.properties, reference)?;
        commands::update::run(&mut self.store.properties, id, |p| patch.apply(p))
    }

    pub fn remove_property(&mut self, reference: &str) -> Result<CmdResult<Property>> {
        let id = helpers::resolve(&self.store.properties, reference)?;
        commands::remove::run(&mut self.store.properties, id)
    }

    pub fn set_property_status(
        &mut self,
        reference: &str,
        status: PropertyStatus,
    ) -> Result<CmdResult<Property>> {
        let id = helpers::resolve(&self.store.properties, reference)?;
        commands::transition::run(&mut self.store.properties, id, status)
    }

    // --- Reservations ---

    pub fn list_reservations(&self, criteria: &Criteria) -> Result<CmdResult<Reservation>> {
        commands::list::run(&self.store.reservations, criteria)
    }

    /// Fetch one reservation by reference, for the client-details view.
    pub fn get_reservation(&self, reference: &str) -> Result<CmdResult<Reservation>> {
        let id = helpers::resolve(&self.store.reservations, reference)?;
        let listed = self
            .store
            .reservations
            .get(id)
            .cloned()
            .into_iter()
            .collect();
        Ok(CmdResult::default().with_listed(listed))
    }

    pub fn create_reservation(&mut self, draft: ReservationDraft) -> Result<CmdResult<Reservation>> {
        let reservation = Reservation::new(draft)?;
        let expiry_warning = reservation.expires_before_reserved();
        let mut result = commands::create::run(&mut self.store.reservations, reservation)?;
        if expiry_warning {
            result.add_message(CmdMessage::warning(
                "expiry date is before the reservation date",
            ));
        }
        Ok(result)
    }

    pub fn update_reservation(
        &mut self,
        reference: &str,
        patch: ReservationPatch,
    ) -> Result<CmdResult<Reservation>> {
        let id = helpers::resolve(&self.store.reservations, reference)?;
        commands::update::run(&mut self.store.reservations, id, |r| patch.apply(r))
    }

    pub fn remove_reservation(&mut self, reference: &str) -> Result<CmdResult<Reservation>> {
        let id = helpers::resolve(&self.store.reservations, reference)?;
        commands::remove::run(&mut self.store.reservations, id)
    }

    pub fn set_reservation_status(
        &mut self,
        reference: &str,
        status: ReservationStatus,
    ) -> Result<CmdResult<Reservation>> {
        let id = helpers::resolve(&self.store.reservations, reference)?;
        commands::transition::run(&mut self.store.reservations, id, status)
    }

    // --- Users ---

    pub fn list_users(&self, criteria: &Criteria) -> Result<CmdResult<User>> {
        commands::list::run(&self.store.users, criteria)
    }

    pub fn create_user(&mut self, user: User) -> Result<CmdResult<User>> {
        commands::create::run(&mut self.store.users, user)
    }

    pub fn update_user(&mut self, reference: &str, patch: UserPatch) -> Result<CmdResult<User>> {
        let id = helpers::resolve(&self.store.users, reference)?;
        commands::update::run(&mut self.store.users, id, |u| patch.apply(u))
    }

    pub fn remove_user(&mut self, reference: &str) -> Result<CmdResult<User>> {
        let id = helpers::resolve(&self.store.users, reference)?;
        commands::remove::run(&mut self.store.users, id)
    }

    pub fn set_user_status(
        &mut self,
        reference: &str,
        status: UserStatus,
    ) -> Result<CmdResult<User>> {
        let id = helpers::resolve(&self.store.users, reference)?;
        commands::transition::run(&mut self.store.users, id, status)
    }

    // --- Reports ---

    fn properties_in(&self, site: &Selection) -> Vec<Property> {
        let criteria = Criteria::new().with("site", site.clone());
        engine::filter(self.store.properties.as_slice(), &criteria)
    }

    fn reservations_in(&self, site: &Selection) -> Vec<Reservation> {
        let criteria = Criteria::new().with("site", site.clone());
        engine::filter(self.store.reservations.as_slice(), &criteria)
    }

    pub fn inventory_report(&self, site: &Selection) -> report::InventoryReport {
        report::inventory(&self.properties_in(site))
    }

    pub fn sales_report(&self, site: &Selection) -> report::SalesReport {
        report::sales(&self.properties_in(site))
    }

    pub fn financial_report(&self, site: &Selection) -> report::FinancialReport {
        report::financial(&self.properties_in(site), &self.reservations_in(site))
    }

    pub fn agent_report(&self, site: &Selection) -> report::AgentReport {
        report::agents(&self.reservations_in(site))
    }

    pub fn user_report(&self) -> report::UserReport {
        report::users(self.store.users.as_slice())
    }
}

pub use crate::commands::report::{
    AgentReport, FinancialReport, InventoryReport, SalesReport, UserReport,
};
pub use crate::commands::MessageLevel;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::seed::SeedSource;

    fn api() -> StockApi {
        StockApi::from_source(&SeedSource).unwrap()
    }

    #[test]
    fn facade_dispatches_list_with_criteria() {
        let api = api();
        let result = api
            .list_properties(&Criteria::new().with("status", Selection::is("available")))
            .unwrap();
        assert_eq!(result.listed.len(), 4);
    }

    #[test]
    fn facade_resolves_references_before_dispatch() {
        let mut api = api();
        let result = api
            .set_property_status("a101", PropertyStatus::Reserved)
            .unwrap();
        assert_eq!(result.affected[0].status, PropertyStatus::Reserved);

        let err = api
            .set_property_status("Z999", PropertyStatus::Reserved)
            .unwrap_err();
        assert!(matches!(err, StockError::NotFound { .. }));
    }

    #[test]
    fn reservation_create_warns_on_inverted_dates() {
        use crate::model::PropertyType;
        use chrono::NaiveDate;

        let mut api = api();
        let draft = ReservationDraft {
            unit_number: "A201".into(),
            unit_type: PropertyType::Apartment,
            client_name: "Test Client".into(),
            client_email: "client@example.com".into(),
            client_phone: "+1".into(),
            agent_name: "Sarah Wilson".into(),
            reservation_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            price: 470_000.0,
            deposit: 47_000.0,
            notes: String::new(),
            site: "palm-towers".into(),
        };
        let result = api.create_reservation(draft).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn reports_scope_to_a_site() {
        let api = api();
        let all = api.inventory_report(&Selection::Any);
        let plaza = api.inventory_report(&Selection::is("palm-plaza"));
        assert_eq!(all.total_units, 8);
        assert_eq!(plaza.total_units, 2);
    }
}
