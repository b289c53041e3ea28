//! Compiled-in demo portfolio.
//!
//! The same inventory the sales team demos against: three Palm sites, eight
//! units across two floors, a handful of reservations in every lifecycle
//! state, and the five back-office accounts. Grid positions place the
//! floor-1/floor-2 units on the floor-plan view.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::DataSource;
use crate::error::Result;
use crate::model::{
    Property, PropertyStatus, PropertyType, Reservation, ReservationDraft, ReservationStatus,
    Role, User, UserStatus,
};

/// The static demo data source.
pub struct SeedSource;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn stamp(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

impl DataSource for SeedSource {
    fn properties(&self) -> Result<Vec<Property>> {
        let rows = [
            (
                "A101",
                PropertyType::Apartment,
                850.0,
                450_000.0,
                PropertyStatus::Available,
                1,
                "palm-towers",
                date(2024, 1, 15),
                "Spacious 2-bedroom apartment with modern finishes and city views.",
                &["Balcony", "Parking", "Storage", "AC"][..],
                Some((10, 10)),
            ),
            (
                "A102",
                PropertyType::Apartment,
                920.0,
                480_000.0,
                PropertyStatus::Sold,
                1,
                "palm-towers",
                date(2024, 1, 14),
                "Premium apartment with upgraded kitchen and bathroom fixtures.",
                &["Balcony", "Parking", "Storage", "AC", "Gym Access"][..],
                Some((150, 10)),
            ),
            (
                "A103",
                PropertyType::Apartment,
                780.0,
                420_000.0,
                PropertyStatus::Reserved,
                1,
                "palm-towers",
                date(2024, 1, 13),
                "Cozy 1-bedroom apartment perfect for young professionals.",
                &["Balcony", "Parking", "AC"][..],
                Some((290, 10)),
            ),
            (
                "S101",
                PropertyType::Shop,
                120.0,
                180_000.0,
                PropertyStatus::Available,
                1,
                "palm-plaza",
                date(2024, 1, 12),
                "Prime retail space with high foot traffic location.",
                &["Street Access", "Storage", "AC", "Security"][..],
                Some((10, 150)),
            ),
            (
                "S102",
                PropertyType::Shop,
                95.0,
                160_000.0,
                PropertyStatus::NotAvailable,
                1,
                "palm-plaza",
                date(2024, 1, 11),
                "Compact retail unit ideal for boutique businesses.",
                &["Street Access", "AC", "Security"][..],
                Some((150, 150)),
            ),
            (
                "P201",
                PropertyType::Penthouse,
                1200.0,
                850_000.0,
                PropertyStatus::Available,
                2,
                "palm-residences",
                date(2024, 1, 10),
                "Luxury penthouse with panoramic views and private terrace.",
                &["Private Terrace", "Parking", "Storage", "AC", "Gym Access", "Concierge"][..],
                Some((10, 10)),
            ),
            (
                "P202",
                PropertyType::Penthouse,
                1350.0,
                920_000.0,
                PropertyStatus::Sold,
                2,
                "palm-residences",
                date(2024, 1, 9),
                "Ultra-luxury penthouse with premium finishes throughout.",
                &[
                    "Private Terrace",
                    "Parking",
                    "Storage",
                    "AC",
                    "Gym Access",
                    "Concierge",
                    "Pool Access",
                ][..],
                Some((200, 10)),
            ),
            (
                "A201",
                PropertyType::Apartment,
                900.0,
                470_000.0,
                PropertyStatus::Available,
                2,
                "palm-towers",
                date(2024, 1, 8),
                "Spacious 2-bedroom apartment with modern amenities.",
                &["Balcony", "Parking", "Storage", "AC", "Gym Access"][..],
                None,
            ),
        ];

        let mut properties = Vec::with_capacity(rows.len());
        for (number, kind, area, price, status, floor, site, updated, desc, amenities, pos) in rows
        {
            let mut property = Property::new(number, kind, area, price, floor, site)?
                .with_status(status)
                .with_description(desc)
                .with_amenities(amenities.iter().copied());
            if let Some((x, y)) = pos {
                property = property.with_position(x, y);
            }
            property.last_updated = stamp(updated);
            properties.push(property);
        }
        Ok(properties)
    }

    fn reservations(&self) -> Result<Vec<Reservation>> {
        let rows = [
            (
                "A101",
                PropertyType::Apartment,
                "Alice Johnson",
                "alice.johnson@email.com",
                "+1 (555) 123-4567",
                "Sarah Wilson",
                date(2024, 1, 15),
                date(2024, 1, 22),
                ReservationStatus::Active,
                450_000.0,
                45_000.0,
                "Client interested in quick closing",
                "palm-towers",
            ),
            (
                "P201",
                PropertyType::Penthouse,
                "Robert Chen",
                "robert.chen@email.com",
                "+1 (555) 234-5678",
                "Emily Rodriguez",
                date(2024, 1, 14),
                date(2024, 1, 21),
                ReservationStatus::Confirmed,
                850_000.0,
                85_000.0,
                "Payment confirmed by finance team",
                "palm-residences",
            ),
            (
                "S102",
                PropertyType::Shop,
                "Maria Garcia",
                "maria.garcia@email.com",
                "+1 (555) 345-6789",
                "David Thompson",
                date(2024, 1, 10),
                date(2024, 1, 17),
                ReservationStatus::Expired,
                160_000.0,
                16_000.0,
                "Client did not respond to follow-up calls",
                "palm-plaza",
            ),
            (
                "A203",
                PropertyType::Apartment,
                "James Wilson",
                "james.wilson@email.com",
                "+1 (555) 456-7890",
                "Sarah Wilson",
                date(2024, 1, 13),
                date(2024, 1, 20),
                ReservationStatus::Cancelled,
                480_000.0,
                48_000.0,
                "Client found another property",
                "palm-towers",
            ),
        ];

        let mut reservations = Vec::with_capacity(rows.len());
        for (
            unit_number,
            unit_type,
            client_name,
            client_email,
            client_phone,
            agent_name,
            reserved,
            expires,
            status,
            price,
            deposit,
            notes,
            site,
        ) in rows
        {
            let mut reservation = Reservation::new(ReservationDraft {
                unit_number: unit_number.into(),
                unit_type,
                client_name: client_name.into(),
                client_email: client_email.into(),
                client_phone: client_phone.into(),
                agent_name: agent_name.into(),
                reservation_date: reserved,
                expiry_date: expires,
                price,
                deposit,
                notes: notes.into(),
                site: site.into(),
            })?;
            reservation.status = status;
            reservation.last_updated = stamp(reserved);
            reservations.push(reservation);
        }
        Ok(reservations)
    }

    fn users(&self) -> Result<Vec<User>> {
        let rows = [
            (
                "John Doe",
                "john.doe@palmrealestate.com",
                Role::Admin,
                UserStatus::Active,
                "+1 (555) 123-4567",
                date(2023, 1, 15),
            ),
            (
                "Sarah Wilson",
                "sarah.wilson@palmrealestate.com",
                Role::SalesAgent,
                UserStatus::Active,
                "+1 (555) 234-5678",
                date(2023, 3, 20),
            ),
            (
                "Michael Chen",
                "michael.chen@palmrealestate.com",
                Role::FinanceManager,
                UserStatus::Active,
                "+1 (555) 345-6789",
                date(2023, 2, 10),
            ),
            (
                "Emily Rodriguez",
                "emily.rodriguez@external.com",
                Role::ExternalAgent,
                UserStatus::Active,
                "+1 (555) 456-7890",
                date(2023, 6, 5),
            ),
            (
                "David Thompson",
                "david.thompson@palmrealestate.com",
                Role::SalesAgent,
                UserStatus::Inactive,
                "+1 (555) 567-8901",
                date(2023, 4, 12),
            ),
        ];

        Ok(rows
            .into_iter()
            .map(|(name, email, role, status, phone, joined)| {
                let mut user = User::new(name, email, role, phone, joined).with_status(status);
                user.last_updated = stamp(joined);
                user
            })
            .collect())
    }
}
