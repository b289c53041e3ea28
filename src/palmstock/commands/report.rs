//! Derived aggregates for the report views.
//!
//! Everything here is computed live from the collections — the summary
//! figures are never stored, so they can't drift from the records below
//! them. Each report is a plain serializable struct; `--export` writes it
//! as JSON, the CLI renders it as tables.

use serde::Serialize;

use crate::engine::{aggregate, categories, sum_of, Filterable};
use crate::model::{
    Property, PropertyStatus, PropertyType, Reservation, ReservationStatus, Role, User,
    UserStatus,
};

#[derive(Debug, Clone, Serialize)]
pub struct CountRow {
    pub category: String,
    pub count: usize,
}

fn count_rows<T: Filterable>(records: &[T], field: &str, cats: &[&str]) -> Vec<CountRow> {
    aggregate(records, field, cats)
        .into_iter()
        .map(|(category, count)| CountRow { category, count })
        .collect()
}

/// Stock levels: unit counts by status, type, and site.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    pub total_units: usize,
    pub by_status: Vec<CountRow>,
    pub by_type: Vec<CountRow>,
    pub by_site: Vec<CountRow>,
    /// Share of units currently available, in percent.
    pub availability_rate: f64,
}

pub fn inventory(properties: &[Property]) -> InventoryReport {
    let by_status = count_rows(properties, "status", PropertyStatus::ALL);
    let available = by_status
        .iter()
        .find(|row| row.category == "available")
        .map_or(0, |row| row.count);
    let total_units = properties.len();
    let availability_rate = if total_units == 0 {
        0.0
    } else {
        available as f64 / total_units as f64 * 100.0
    };

    InventoryReport {
        total_units,
        by_status,
        by_type: count_rows(properties, "type", PropertyType::ALL),
        by_site: count_rows(properties, "site", &site_names(properties)),
        availability_rate,
    }
}

fn site_names(properties: &[Property]) -> Vec<&str> {
    // Sites are data, not schema; derive the enumeration from the records.
    let mut names: Vec<&str> = Vec::new();
    for p in properties {
        if !names.contains(&p.site.as_str()) {
            names.push(p.site.as_str());
        }
    }
    names
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesRow {
    pub category: String,
    pub units: usize,
    pub revenue: f64,
}

/// Completed sales, grouped by site and by unit type.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    pub sold_units: usize,
    pub revenue: f64,
    pub by_site: Vec<SalesRow>,
    pub by_type: Vec<SalesRow>,
}

pub fn sales(properties: &[Property]) -> SalesReport {
    let sold: Vec<Property> = properties
        .iter()
        .filter(|p| p.status == PropertyStatus::Sold)
        .cloned()
        .collect();

    let rows = |field: &str, cats: &[&str]| -> Vec<SalesRow> {
        aggregate(&sold, field, cats)
            .into_iter()
            .map(|(category, units)| {
                let revenue = sum_of(&sold, |p| {
                    if p.field(field).is_some_and(|v| v.matches_exactly(&category)) {
                        p.price
                    } else {
                        0.0
                    }
                });
                SalesRow {
                    category,
                    units,
                    revenue,
                }
            })
            .collect()
    };

    SalesReport {
        sold_units: sold.len(),
        revenue: sum_of(&sold, |p| p.price),
        by_site: rows("site", &site_names(properties)),
        by_type: rows("type", PropertyType::ALL),
    }
}

/// Money view: what the portfolio is worth, what has been realized, what is
/// held as deposits on open reservations.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub portfolio_value: f64,
    pub sold_revenue: f64,
    /// Deposits on active and confirmed reservations.
    pub deposits_held: f64,
    pub average_unit_price: f64,
}

pub fn financial(properties: &[Property], reservations: &[Reservation]) -> FinancialReport {
    let portfolio_value = sum_of(properties, |p| p.price);
    let sold_revenue = sum_of(properties, |p| {
        if p.status == PropertyStatus::Sold {
            p.price
        } else {
            0.0
        }
    });
    let deposits_held = sum_of(reservations, |r| {
        match r.status {
            ReservationStatus::Active | ReservationStatus::Confirmed => r.deposit,
            ReservationStatus::Expired | ReservationStatus::Cancelled => 0.0,
        }
    });
    let average_unit_price = if properties.is_empty() {
        0.0
    } else {
        portfolio_value / properties.len() as f64
    };

    FinancialReport {
        portfolio_value,
        sold_revenue,
        deposits_held,
        average_unit_price,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentRow {
    pub agent: String,
    pub reservations: usize,
    pub active: usize,
    pub confirmed: usize,
    /// Total price of this agent's confirmed reservations.
    pub confirmed_volume: f64,
}

/// Per-agent reservation performance. The agent enumeration is open, so it
/// is derived from the records in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub rows: Vec<AgentRow>,
}

pub fn agents(reservations: &[Reservation]) -> AgentReport {
    let rows = categories(reservations, "agent")
        .into_iter()
        .map(|agent| {
            let theirs: Vec<&Reservation> = reservations
                .iter()
                .filter(|r| r.agent_name == agent)
                .collect();
            let count_status = |status: ReservationStatus| {
                theirs.iter().filter(|r| r.status == status).count()
            };
            AgentRow {
                reservations: theirs.len(),
                active: count_status(ReservationStatus::Active),
                confirmed: count_status(ReservationStatus::Confirmed),
                confirmed_volume: theirs
                    .iter()
                    .filter(|r| r.status == ReservationStatus::Confirmed)
                    .map(|r| r.price)
                    .sum(),
                agent,
            }
        })
        .collect();
    AgentReport { rows }
}

/// Account counts for the user admin cards.
#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub total: usize,
    pub by_status: Vec<CountRow>,
    pub by_role: Vec<CountRow>,
}

pub fn users(users: &[User]) -> UserReport {
    UserReport {
        total: users.len(),
        by_status: count_rows(users, "status", UserStatus::ALL),
        by_role: count_rows(users, "role", Role::ALL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn inventory_counts_the_seeded_portfolio() {
        let fixture = StoreFixture::seeded();
        let report = inventory(fixture.store.properties.as_slice());

        assert_eq!(report.total_units, 8);
        let counts: Vec<usize> = report.by_status.iter().map(|r| r.count).collect();
        // available, reserved, sold, not-available
        assert_eq!(counts, vec![4, 1, 2, 1]);
        assert_eq!(report.availability_rate, 50.0);

        let types: Vec<usize> = report.by_type.iter().map(|r| r.count).collect();
        assert_eq!(types, vec![4, 2, 2]);
    }

    #[test]
    fn inventory_counts_sum_to_total() {
        let fixture = StoreFixture::seeded();
        let report = inventory(fixture.store.properties.as_slice());
        let sum: usize = report.by_status.iter().map(|r| r.count).sum();
        assert_eq!(sum, report.total_units);
    }

    #[test]
    fn sales_totals_only_sold_units() {
        let fixture = StoreFixture::seeded();
        let report = sales(fixture.store.properties.as_slice());
        assert_eq!(report.sold_units, 2);
        assert_eq!(report.revenue, 1_400_000.0);

        let towers = report
            .by_site
            .iter()
            .find(|r| r.category == "palm-towers")
            .unwrap();
        assert_eq!(towers.units, 1);
        assert_eq!(towers.revenue, 480_000.0);
    }

    #[test]
    fn financial_holds_deposits_for_open_reservations_only() {
        let fixture = StoreFixture::seeded();
        let report = financial(
            fixture.store.properties.as_slice(),
            fixture.store.reservations.as_slice(),
        );
        assert_eq!(report.portfolio_value, 3_930_000.0);
        assert_eq!(report.sold_revenue, 1_400_000.0);
        // active A101 (45k) + confirmed P201 (85k); expired/cancelled excluded
        assert_eq!(report.deposits_held, 130_000.0);
    }

    #[test]
    fn agents_are_ranked_in_first_seen_order_with_their_volumes() {
        let fixture = StoreFixture::seeded();
        let report = agents(fixture.store.reservations.as_slice());

        let names: Vec<&str> = report.rows.iter().map(|r| r.agent.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sarah Wilson", "Emily Rodriguez", "David Thompson"]
        );

        let sarah = &report.rows[0];
        assert_eq!(sarah.reservations, 2);
        assert_eq!(sarah.active, 1);
        assert_eq!(sarah.confirmed, 0);

        let emily = &report.rows[1];
        assert_eq!(emily.confirmed, 1);
        assert_eq!(emily.confirmed_volume, 850_000.0);
    }

    #[test]
    fn user_report_counts_roles_and_statuses() {
        let fixture = StoreFixture::seeded();
        let report = users(fixture.store.users.as_slice());
        assert_eq!(report.total, 5);
        let status_counts: Vec<usize> = report.by_status.iter().map(|r| r.count).collect();
        // active, inactive, pending
        assert_eq!(status_counts, vec![4, 1, 0]);
        let role_counts: Vec<usize> = report.by_role.iter().map(|r| r.count).collect();
        // admin, sales-agent, finance-manager, external-agent
        assert_eq!(role_counts, vec![1, 2, 1, 1]);
    }

    #[test]
    fn empty_collections_produce_zeroed_reports() {
        let report = inventory(&[]);
        assert_eq!(report.total_units, 0);
        assert_eq!(report.availability_rate, 0.0);
        let report = financial(&[], &[]);
        assert_eq!(report.average_unit_price, 0.0);
    }
}
