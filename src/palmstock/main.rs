use std::fs::File;
use std::path::PathBuf;

use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use serde::Serialize;

use palmstock::api::StockApi;
use palmstock::engine::{Criteria, Selection};
use palmstock::error::{Result, StockError};
use palmstock::model::{
    parse_non_negative, parse_positive, Property, PropertyPatch, PropertyStatus, PropertyType,
    Reservation, ReservationDraft, ReservationPatch, ReservationStatus, Role, User, UserPatch,
    UserStatus,
};
use palmstock::store::seed::SeedSource;

mod args;
mod cli;

use args::{Cli, Commands, PropertyCmd, ReportCmd, ReservationCmd, UserCmd};
use cli::print::*;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    // Collections are seeded fresh every run; there is no persistence.
    let mut api = StockApi::from_source(&SeedSource)?;

    match cli.command {
        Commands::Stock {
            search,
            site,
            status,
            floor,
        } => handle_stock(&api, search, site, status, floor),
        Commands::Property(cmd) => handle_property(&mut api, cmd),
        Commands::Reservation(cmd) => handle_reservation(&mut api, cmd),
        Commands::User(cmd) => handle_user(&mut api, cmd),
        Commands::Report { section } => handle_report(&api, section),
    }
}

// --- Flag parsing helpers ---

fn site_selection(site: Option<&str>) -> Selection {
    Selection::parse(site)
}

/// Closed-enum flags are validated up front so a typo surfaces an
/// InvalidValue instead of silently matching nothing.
fn canonical<T>(flag: Option<String>) -> Result<Selection>
where
    T: std::str::FromStr<Err = StockError> + Copy,
    T: std::fmt::Display,
{
    match flag.as_deref() {
        None | Some("all") => Ok(Selection::Any),
        Some(raw) => {
            let value: T = raw.parse()?;
            Ok(Selection::is(value.to_string()))
        }
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| StockError::InvalidValue {
        field,
        value: raw.to_string(),
        allowed: "a date in YYYY-MM-DD form",
    })
}

fn parse_date_or(field: &'static str, raw: Option<&str>, fallback: NaiveDate) -> Result<NaiveDate> {
    match raw {
        Some(s) => parse_date(field, s),
        None => Ok(fallback),
    }
}

// --- Handlers ---

fn handle_stock(
    api: &StockApi,
    search: Option<String>,
    site: Option<String>,
    status: Option<String>,
    floor: Option<u32>,
) -> Result<()> {
    let site_sel = site_selection(site.as_deref());
    let status_sel = canonical::<PropertyStatus>(status)?;

    print_overview(&api.inventory_report(&site_sel));

    let mut criteria = Criteria::new()
        .with_query(search.unwrap_or_default())
        .with("site", site_sel)
        .with("status", status_sel);
    if let Some(floor) = floor {
        criteria = criteria.with("floor", Selection::is(floor.to_string()));
    }

    let result = api.list_properties(&criteria)?;
    match floor {
        Some(floor) => print_floor_plan(floor, &result.listed),
        None => print_properties(&result.listed),
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_property(api: &mut StockApi, cmd: PropertyCmd) -> Result<()> {
    match cmd {
        PropertyCmd::List {
            search,
            site,
            status,
            kind,
        } => {
            let criteria = Criteria::new()
                .with_query(search.unwrap_or_default())
                .with("site", site_selection(site.as_deref()))
                .with("status", canonical::<PropertyStatus>(status)?)
                .with("type", canonical::<PropertyType>(kind)?);
            let result = api.list_properties(&criteria)?;
            print_properties(&result.listed);
            print_messages(&result.messages);
        }
        PropertyCmd::View { reference } => {
            let result = api.get_property(&reference)?;
            if let Some(property) = result.listed.first() {
                print_property_details(property);
            }
            print_messages(&result.messages);
        }
        PropertyCmd::Add {
            number,
            kind,
            area,
            price,
            floor,
            site,
            description,
            amenities,
        } => {
            let mut property = Property::new(
                number,
                kind.parse::<PropertyType>()?,
                parse_positive("area", &area)?,
                parse_positive("price", &price)?,
                floor,
                site,
            )?
            .with_amenities(amenities);
            if let Some(description) = description {
                property = property.with_description(description);
            }
            let result = api.create_property(property)?;
            print_messages(&result.messages);
        }
        PropertyCmd::Edit {
            reference,
            number,
            kind,
            area,
            price,
            floor,
            site,
            description,
        } => {
            let patch = PropertyPatch {
                number,
                kind: kind.map(|k| k.parse::<PropertyType>()).transpose()?,
                area: area.map(|a| parse_positive("area", &a)).transpose()?,
                price: price.map(|p| parse_positive("price", &p)).transpose()?,
                floor,
                site,
                description,
            };
            if patch.is_empty() {
                return Err(StockError::Api("nothing to update; pass at least one field flag".into()));
            }
            let result = api.update_property(&reference, patch)?;
            print_messages(&result.messages);
        }
        PropertyCmd::Delete { reference } => {
            let result = api.remove_property(&reference)?;
            print_messages(&result.messages);
        }
        PropertyCmd::Reserve { reference } => {
            let result = api.set_property_status(&reference, PropertyStatus::Reserved)?;
            print_messages(&result.messages);
        }
        PropertyCmd::Sell { reference } => {
            let result = api.set_property_status(&reference, PropertyStatus::Sold)?;
            print_messages(&result.messages);
        }
        PropertyCmd::Release { reference } | PropertyCmd::Relist { reference } => {
            let result = api.set_property_status(&reference, PropertyStatus::Available)?;
            print_messages(&result.messages);
        }
        PropertyCmd::Withdraw { reference } => {
            let result = api.set_property_status(&reference, PropertyStatus::NotAvailable)?;
            print_messages(&result.messages);
        }
        PropertyCmd::Status { reference, status } => {
            let status = status.parse::<PropertyStatus>()?;
            let result = api.set_property_status(&reference, status)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_reservation(api: &mut StockApi, cmd: ReservationCmd) -> Result<()> {
    match cmd {
        ReservationCmd::List {
            search,
            status,
            site,
        } => {
            let criteria = Criteria::new()
                .with_query(search.unwrap_or_default())
                .with("status", canonical::<ReservationStatus>(status)?)
                .with("site", site_selection(site.as_deref()));
            let result = api.list_reservations(&criteria)?;
            print_reservations(&result.listed);
            print_messages(&result.messages);
        }
        ReservationCmd::Client { reference } => {
            let result = api.get_reservation(&reference)?;
            if let Some(reservation) = result.listed.first() {
                print_client(reservation);
            }
            print_messages(&result.messages);
        }
        ReservationCmd::Add {
            unit,
            kind,
            client,
            email,
            phone,
            agent,
            date,
            expires,
            price,
            deposit,
            notes,
            site,
        } => {
            let reservation_date =
                parse_date_or("date", date.as_deref(), Utc::now().date_naive())?;
            let expiry_date = parse_date_or(
                "expires",
                expires.as_deref(),
                reservation_date + Duration::days(7),
            )?;
            let draft = ReservationDraft {
                unit_number: unit,
                unit_type: kind.parse::<PropertyType>()?,
                client_name: client,
                client_email: email,
                client_phone: phone,
                agent_name: agent,
                reservation_date,
                expiry_date,
                price: parse_positive("price", &price)?,
                deposit: parse_non_negative("deposit", &deposit)?,
                notes,
                site,
            };
            let result = api.create_reservation(draft)?;
            print_messages(&result.messages);
        }
        ReservationCmd::Edit {
            reference,
            client,
            email,
            phone,
            agent,
            expires,
            price,
            deposit,
            notes,
        } => {
            let patch = ReservationPatch {
                client_name: client,
                client_email: email,
                client_phone: phone,
                agent_name: agent,
                expiry_date: expires
                    .map(|e| parse_date("expires", &e))
                    .transpose()?,
                price: price.map(|p| parse_positive("price", &p)).transpose()?,
                deposit: deposit
                    .map(|d| parse_non_negative("deposit", &d))
                    .transpose()?,
                notes,
            };
            if patch.is_empty() {
                return Err(StockError::Api("nothing to update; pass at least one field flag".into()));
            }
            let result = api.update_reservation(&reference, patch)?;
            print_messages(&result.messages);
        }
        ReservationCmd::Delete { reference } => {
            let result = api.remove_reservation(&reference)?;
            print_messages(&result.messages);
        }
        ReservationCmd::Confirm { reference } => {
            let result = api.set_reservation_status(&reference, ReservationStatus::Confirmed)?;
            print_client_of(&result.affected);
            print_messages(&result.messages);
        }
        ReservationCmd::Cancel { reference } => {
            let result = api.set_reservation_status(&reference, ReservationStatus::Cancelled)?;
            print_messages(&result.messages);
        }
        ReservationCmd::Expire { reference } => {
            let result = api.set_reservation_status(&reference, ReservationStatus::Expired)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn print_client_of(affected: &[Reservation]) {
    if let Some(reservation) = affected.first() {
        print_client(reservation);
    }
}

fn handle_user(api: &mut StockApi, cmd: UserCmd) -> Result<()> {
    match cmd {
        UserCmd::List {
            search,
            role,
            status,
        } => {
            let criteria = Criteria::new()
                .with_query(search.unwrap_or_default())
                .with("role", canonical::<Role>(role)?)
                .with("status", canonical::<UserStatus>(status)?);
            let result = api.list_users(&criteria)?;
            print_users(&result.listed);
            print_messages(&result.messages);
        }
        UserCmd::Add {
            name,
            email,
            role,
            phone,
            joined,
        } => {
            let join_date = parse_date_or("joined", joined.as_deref(), Utc::now().date_naive())?;
            let user = User::new(name, email, role.parse::<Role>()?, phone, join_date);
            let result = api.create_user(user)?;
            print_messages(&result.messages);
        }
        UserCmd::Edit {
            reference,
            name,
            email,
            role,
            phone,
        } => {
            let patch = UserPatch {
                name,
                email,
                role: role.map(|r| r.parse::<Role>()).transpose()?,
                phone,
            };
            if patch.is_empty() {
                return Err(StockError::Api("nothing to update; pass at least one field flag".into()));
            }
            let result = api.update_user(&reference, patch)?;
            print_messages(&result.messages);
        }
        UserCmd::Delete { reference } => {
            let result = api.remove_user(&reference)?;
            print_messages(&result.messages);
        }
        UserCmd::Activate { reference } => {
            let result = api.set_user_status(&reference, UserStatus::Active)?;
            print_messages(&result.messages);
        }
        UserCmd::Deactivate { reference } => {
            let result = api.set_user_status(&reference, UserStatus::Inactive)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_report(api: &StockApi, section: ReportCmd) -> Result<()> {
    match section {
        ReportCmd::Inventory { site, export } => {
            let report = api.inventory_report(&site_selection(site.as_deref()));
            finish_report(&report, export, print_inventory)
        }
        ReportCmd::Sales { site, export } => {
            let report = api.sales_report(&site_selection(site.as_deref()));
            finish_report(&report, export, print_sales)
        }
        ReportCmd::Financial { site, export } => {
            let report = api.financial_report(&site_selection(site.as_deref()));
            finish_report(&report, export, print_financial)
        }
        ReportCmd::Agents { site, export } => {
            let report = api.agent_report(&site_selection(site.as_deref()));
            finish_report(&report, export, print_agents)
        }
        ReportCmd::Users { export } => {
            let report = api.user_report();
            finish_report(&report, export, print_user_report)
        }
    }
}

/// Either render the report or write it as JSON, never both.
fn finish_report<R: Serialize>(
    report: &R,
    export: Option<PathBuf>,
    render: impl Fn(&R),
) -> Result<()> {
    match export {
        Some(path) => {
            let file = File::create(&path)?;
            serde_json::to_writer_pretty(file, report)?;
            println!("Report exported to {}", path.display());
            Ok(())
        }
        None => {
            render(report);
            Ok(())
        }
    }
}
