//! # Domain Model: Records, Enumerations, and Lifecycles
//!
//! The three record types the back office tracks — [`Property`],
//! [`Reservation`], [`User`] — plus the closed enumerations their categorical
//! fields draw from. Wire values are kebab-case ("not-available",
//! "sales-agent"), matching the data the sales tools already exchange.
//!
//! Three rules are enforced here, at the record boundary, so no view has to:
//!
//! 1. **Closed enumerations**: unknown status/type/role strings are rejected
//!    with `InvalidValue` when parsed.
//! 2. **Numeric bounds**: area and price must be positive, deposits
//!    non-negative; text input goes through [`parse_positive`] /
//!    [`parse_non_negative`] so a typo surfaces `InvalidNumber` instead of a
//!    NaN drifting into totals.
//! 3. **Status lifecycles**: each record type declares its allowed
//!    source→target transitions through [`Lifecycle`]; anything else is an
//!    `IllegalTransition`. Notably, `sold` and settled reservations are
//!    terminal.
//!
//! Identifiers are UUIDv4, assigned on construction and never reused.
//! `last_updated` is stamped on construction and refreshed by every mutation
//! through [`Entity::touch`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::engine::{FieldValue, Filterable};
use crate::error::{Result, StockError};

/// A record the store can hold: identified, timestamped, filterable.
pub trait Entity: Filterable + Clone {
    /// Lowercase noun for messages and NotFound errors ("property").
    const NOUN: &'static str;

    fn id(&self) -> Uuid;

    /// Refresh `last_updated` to now. Called by every mutating operation.
    fn touch(&mut self);

    /// Short human-facing reference used in messages (unit number, email).
    fn reference(&self) -> String;
}

/// Per-kind status lifecycle: which transitions are legal.
///
/// A transition to the current status is treated as a no-op by the command
/// layer, not an error; everything absent from `allowed_from` is an
/// `IllegalTransition`.
pub trait Lifecycle: Entity {
    type Status: Copy + Eq + fmt::Display + 'static;

    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
    fn allowed_from(from: Self::Status) -> &'static [Self::Status];
}

fn check_transition<T: Lifecycle>(from: T::Status, to: T::Status) -> Result<()> {
    if T::allowed_from(from).contains(&to) {
        Ok(())
    } else {
        Err(StockError::IllegalTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// Validate a status change without applying it.
pub fn ensure_transition<T: Lifecycle>(record: &T, to: T::Status) -> Result<()> {
    check_transition::<T>(record.status(), to)
}

// --- Numeric boundaries ---

/// Parse user-supplied text into a strictly positive number.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(StockError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Parse user-supplied text into a non-negative number.
pub fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(StockError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn ensure_positive(field: &'static str, n: f64) -> Result<f64> {
    if n.is_finite() && n > 0.0 {
        Ok(n)
    } else {
        Err(StockError::InvalidNumber {
            field,
            value: n.to_string(),
        })
    }
}

fn ensure_non_negative(field: &'static str, n: f64) -> Result<f64> {
    if n.is_finite() && n >= 0.0 {
        Ok(n)
    } else {
        Err(StockError::InvalidNumber {
            field,
            value: n.to_string(),
        })
    }
}

// --- Enumerations ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    Shop,
    Penthouse,
}

impl PropertyType {
    pub const ALL: &'static [&'static str] = &["apartment", "shop", "penthouse"];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Shop => "shop",
            PropertyType::Penthouse => "penthouse",
        }
    }

    /// Display label ("Apartment").
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Shop => "Shop",
            PropertyType::Penthouse => "Penthouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "apartment" => Ok(PropertyType::Apartment),
            "shop" => Ok(PropertyType::Shop),
            "penthouse" => Ok(PropertyType::Penthouse),
            _ => Err(StockError::InvalidValue {
                field: "type",
                value: s.to_string(),
                allowed: "apartment, shop, penthouse",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    Available,
    Reserved,
    Sold,
    NotAvailable,
}

impl PropertyStatus {
    pub const ALL: &'static [&'static str] = &["available", "reserved", "sold", "not-available"];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Reserved => "reserved",
            PropertyStatus::Sold => "sold",
            PropertyStatus::NotAvailable => "not-available",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Reserved => "Reserved",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::NotAvailable => "Not Available",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "available" => Ok(PropertyStatus::Available),
            "reserved" => Ok(PropertyStatus::Reserved),
            "sold" => Ok(PropertyStatus::Sold),
            "not-available" => Ok(PropertyStatus::NotAvailable),
            _ => Err(StockError::InvalidValue {
                field: "status",
                value: s.to_string(),
                allowed: "available, reserved, sold, not-available",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    Active,
    Confirmed,
    Expired,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: &'static [&'static str] = &["active", "confirmed", "expired", "cancelled"];

    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Active => "active",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Expired => "expired",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Active => "Active",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Expired => "Expired",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(ReservationStatus::Active),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "expired" => Ok(ReservationStatus::Expired),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            _ => Err(StockError::InvalidValue {
                field: "status",
                value: s.to_string(),
                allowed: "active, confirmed, expired, cancelled",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    SalesAgent,
    FinanceManager,
    ExternalAgent,
}

impl Role {
    pub const ALL: &'static [&'static str] =
        &["admin", "sales-agent", "finance-manager", "external-agent"];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SalesAgent => "sales-agent",
            Role::FinanceManager => "finance-manager",
            Role::ExternalAgent => "external-agent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::SalesAgent => "Sales Agent",
            Role::FinanceManager => "Finance Manager",
            Role::ExternalAgent => "External Agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "sales-agent" => Ok(Role::SalesAgent),
            "finance-manager" => Ok(Role::FinanceManager),
            "external-agent" => Ok(Role::ExternalAgent),
            _ => Err(StockError::InvalidValue {
                field: "role",
                value: s.to_string(),
                allowed: "admin, sales-agent, finance-manager, external-agent",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub const ALL: &'static [&'static str] = &["active", "inactive", "pending"];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "pending" => Ok(UserStatus::Pending),
            _ => Err(StockError::InvalidValue {
                field: "status",
                value: s.to_string(),
                allowed: "active, inactive, pending",
            }),
        }
    }
}

// --- Property ---

/// Placement of a unit on the floor-plan grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub number: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub area: f64,
    pub price: f64,
    pub status: PropertyStatus,
    pub floor: u32,
    pub site: String,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Floor-plan placement; units without one only appear in the grid view.
    #[serde(default)]
    pub position: Option<GridPos>,
}

impl Property {
    pub fn new(
        number: impl Into<String>,
        kind: PropertyType,
        area: f64,
        price: f64,
        floor: u32,
        site: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            number: number.into(),
            kind,
            area: ensure_positive("area", area)?,
            price: ensure_positive("price", price)?,
            status: PropertyStatus::Available,
            floor,
            site: site.into(),
            last_updated: Utc::now(),
            description: None,
            amenities: Vec::new(),
            position: None,
        })
    }

    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_position(mut self, x: u32, y: u32) -> Self {
        self.position = Some(GridPos { x, y });
        self
    }
}

impl Filterable for Property {
    // Search matches the management view: number, type, area, price.
    const SEARCH_FIELDS: &'static [&'static str] = &["number", "type", "area", "price"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "number" => Some(FieldValue::Text(self.number.clone())),
            "type" => Some(FieldValue::Keyword(self.kind.as_str())),
            "area" => Some(FieldValue::Float(self.area)),
            "price" => Some(FieldValue::Float(self.price)),
            "status" => Some(FieldValue::Keyword(self.status.as_str())),
            "floor" => Some(FieldValue::Int(i64::from(self.floor))),
            "site" => Some(FieldValue::Text(self.site.clone())),
            _ => None,
        }
    }
}

impl Entity for Property {
    const NOUN: &'static str = "property";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    fn reference(&self) -> String {
        self.number.clone()
    }
}

impl Lifecycle for Property {
    type Status = PropertyStatus;

    fn status(&self) -> PropertyStatus {
        self.status
    }

    fn set_status(&mut self, status: PropertyStatus) {
        self.status = status;
    }

    fn allowed_from(from: PropertyStatus) -> &'static [PropertyStatus] {
        // Sold is terminal; reserved units can fall back to available when a
        // reservation dies.
        match from {
            PropertyStatus::Available => &[PropertyStatus::Reserved, PropertyStatus::NotAvailable],
            PropertyStatus::Reserved => &[PropertyStatus::Sold, PropertyStatus::Available],
            PropertyStatus::Sold => &[],
            PropertyStatus::NotAvailable => &[PropertyStatus::Available],
        }
    }
}

/// Field-wise update for a property; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub number: Option<String>,
    pub kind: Option<PropertyType>,
    pub area: Option<f64>,
    pub price: Option<f64>,
    pub floor: Option<u32>,
    pub site: Option<String>,
    pub description: Option<String>,
}

impl PropertyPatch {
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.kind.is_none()
            && self.area.is_none()
            && self.price.is_none()
            && self.floor.is_none()
            && self.site.is_none()
            && self.description.is_none()
    }

    pub fn apply(self, property: &mut Property) -> Result<()> {
        // Validate every numeric field before the first assignment so a bad
        // patch leaves the record untouched.
        let area = self.area.map(|a| ensure_positive("area", a)).transpose()?;
        let price = self.price.map(|p| ensure_positive("price", p)).transpose()?;
        if let Some(area) = area {
            property.area = area;
        }
        if let Some(price) = price {
            property.price = price;
        }
        if let Some(number) = self.number {
            property.number = number;
        }
        if let Some(kind) = self.kind {
            property.kind = kind;
        }
        if let Some(floor) = self.floor {
            property.floor = floor;
        }
        if let Some(site) = self.site {
            property.site = site;
        }
        if let Some(description) = self.description {
            property.description = Some(description);
        }
        Ok(())
    }
}

// --- Reservation ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub unit_number: String,
    pub unit_type: PropertyType,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub agent_name: String,
    pub reservation_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: ReservationStatus,
    pub price: f64,
    pub deposit: f64,
    #[serde(default)]
    pub notes: String,
    pub site: String,
    pub last_updated: DateTime<Utc>,
}

/// Everything a new reservation needs besides its id and timestamps.
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    pub unit_number: String,
    pub unit_type: PropertyType,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub agent_name: String,
    pub reservation_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub price: f64,
    pub deposit: f64,
    pub notes: String,
    pub site: String,
}

impl Reservation {
    pub fn new(draft: ReservationDraft) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            unit_number: draft.unit_number,
            unit_type: draft.unit_type,
            client_name: draft.client_name,
            client_email: draft.client_email,
            client_phone: draft.client_phone,
            agent_name: draft.agent_name,
            reservation_date: draft.reservation_date,
            expiry_date: draft.expiry_date,
            status: ReservationStatus::Active,
            price: ensure_positive("price", draft.price)?,
            deposit: ensure_non_negative("deposit", draft.deposit)?,
            notes: draft.notes,
            site: draft.site,
            last_updated: Utc::now(),
        })
    }

    /// An expiry before the reservation date is allowed but suspicious;
    /// the create command reports it as a warning.
    pub fn expires_before_reserved(&self) -> bool {
        self.expiry_date < self.reservation_date
    }
}

impl Filterable for Reservation {
    // Search matches the reservation view: unit number, client, agent.
    const SEARCH_FIELDS: &'static [&'static str] = &["unit", "client", "agent"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "unit" => Some(FieldValue::Text(self.unit_number.clone())),
            "client" => Some(FieldValue::Text(self.client_name.clone())),
            "agent" => Some(FieldValue::Text(self.agent_name.clone())),
            "type" => Some(FieldValue::Keyword(self.unit_type.as_str())),
            "status" => Some(FieldValue::Keyword(self.status.as_str())),
            "site" => Some(FieldValue::Text(self.site.clone())),
            "reserved" => Some(FieldValue::Date(self.reservation_date)),
            "expires" => Some(FieldValue::Date(self.expiry_date)),
            _ => None,
        }
    }
}

impl Entity for Reservation {
    const NOUN: &'static str = "reservation";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    fn reference(&self) -> String {
        format!("{} ({})", self.unit_number, self.client_name)
    }
}

impl Lifecycle for Reservation {
    type Status = ReservationStatus;

    fn status(&self) -> ReservationStatus {
        self.status
    }

    fn set_status(&mut self, status: ReservationStatus) {
        self.status = status;
    }

    fn allowed_from(from: ReservationStatus) -> &'static [ReservationStatus] {
        // Only an active reservation can settle; the settled states are final.
        match from {
            ReservationStatus::Active => &[
                ReservationStatus::Confirmed,
                ReservationStatus::Expired,
                ReservationStatus::Cancelled,
            ],
            ReservationStatus::Confirmed
            | ReservationStatus::Expired
            | ReservationStatus::Cancelled => &[],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub agent_name: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub deposit: Option<f64>,
    pub notes: Option<String>,
}

impl ReservationPatch {
    pub fn is_empty(&self) -> bool {
        self.client_name.is_none()
            && self.client_email.is_none()
            && self.client_phone.is_none()
            && self.agent_name.is_none()
            && self.expiry_date.is_none()
            && self.price.is_none()
            && self.deposit.is_none()
            && self.notes.is_none()
    }

    pub fn apply(self, reservation: &mut Reservation) -> Result<()> {
        let price = self.price.map(|p| ensure_positive("price", p)).transpose()?;
        let deposit = self
            .deposit
            .map(|d| ensure_non_negative("deposit", d))
            .transpose()?;
        if let Some(price) = price {
            reservation.price = price;
        }
        if let Some(deposit) = deposit {
            reservation.deposit = deposit;
        }
        if let Some(client_name) = self.client_name {
            reservation.client_name = client_name;
        }
        if let Some(client_email) = self.client_email {
            reservation.client_email = client_email;
        }
        if let Some(client_phone) = self.client_phone {
            reservation.client_phone = client_phone;
        }
        if let Some(agent_name) = self.agent_name {
            reservation.agent_name = agent_name;
        }
        if let Some(expiry_date) = self.expiry_date {
            reservation.expiry_date = expiry_date;
        }
        if let Some(notes) = self.notes {
            reservation.notes = notes;
        }
        Ok(())
    }
}

// --- User ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub phone: String,
    pub join_date: NaiveDate,
    pub last_updated: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        phone: impl Into<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role,
            status: UserStatus::Pending,
            phone: phone.into(),
            join_date,
            last_updated: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }
}

impl Filterable for User {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "role" => Some(FieldValue::Keyword(self.role.as_str())),
            "status" => Some(FieldValue::Keyword(self.status.as_str())),
            _ => None,
        }
    }
}

impl Entity for User {
    const NOUN: &'static str = "user";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    fn reference(&self) -> String {
        self.email.clone()
    }
}

impl Lifecycle for User {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }

    fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }

    fn allowed_from(from: UserStatus) -> &'static [UserStatus] {
        match from {
            UserStatus::Active => &[UserStatus::Inactive],
            UserStatus::Inactive => &[UserStatus::Active],
            UserStatus::Pending => &[UserStatus::Active, UserStatus::Inactive],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none() && self.phone.is_none()
    }

    pub fn apply(self, user: &mut User) -> Result<()> {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        Ok(())
    }
}
