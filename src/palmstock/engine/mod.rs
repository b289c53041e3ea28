//! # Entity Filter & Aggregate Engine
//!
//! Every listing view in palmstock does the same two things: narrow a
//! collection down by free text plus a handful of categorical selectors, and
//! compute summary counts for the cards above the list. Instead of each view
//! reimplementing that (the properties, reservations, users, and floor-plan
//! views all need it), the engine provides:
//!
//! - **Field access**: a [`Filterable`] trait mapping field names to
//!   [`FieldValue`]s, implemented once per record type
//! - **Criteria**: free-text query + categorical selections, with
//!   [`Selection::Any`] standing in for the "all" option of a dropdown
//! - **Filtering**: a stable, order-preserving [`filter`] over any collection
//! - **Aggregation**: [`aggregate`] counts per category (zero counts kept),
//!   [`categories`] for open groupings, [`sum_of`] for numeric roll-ups
//!
//! ## Matching rule
//!
//! A record is kept iff every non-`Any` selection equals the record's field
//! value exactly (case-sensitive), and, when the query is non-empty, at least
//! one of the record type's search fields contains the query as a
//! case-insensitive substring. Numeric fields participate in search through
//! their rendered text, so a query of "850" matches an area of 850 sqft.
//!
//! With an empty query and all selections `Any`, [`filter`] returns the input
//! unchanged. Filtering is idempotent and never errors; a malformed numeric
//! query simply fails to match anything.
//!
//! ## Usage
//!
//! ```ignore
//! let criteria = Criteria::new()
//!     .with_query("A10")
//!     .with("status", Selection::is("available"));
//! let open_units = filter(&properties, &criteria);
//! let by_status = aggregate(&properties, "status", PropertyStatus::ALL);
//! ```

mod aggregate;
mod filter;
mod value;

pub use aggregate::{aggregate, categories, sum_of};
pub use filter::{filter, Criteria, Selection};
pub use value::FieldValue;

/// Field access for records that the engine can filter and aggregate.
///
/// Each record type names its fields and exposes them as [`FieldValue`]s;
/// the engine never needs to know the concrete type. `SEARCH_FIELDS` lists
/// the fields the free-text query runs over, in match order.
pub trait Filterable {
    /// Fields searched by the free-text query.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Look up a field value by name. Returns `None` for unknown fields;
    /// a selection on an unknown field matches nothing.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
