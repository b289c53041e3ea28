//! Terminal rendering for command results and reports.
//!
//! Everything here takes the structured types the library returns and prints
//! them; no business logic, no decisions beyond layout. Plain text is padded
//! to column widths first (ANSI codes confuse `format!` alignment), then
//! colored.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use palmstock::commands::report::{
    AgentReport, CountRow, FinancialReport, InventoryReport, SalesReport, UserReport,
};
use palmstock::commands::{CmdMessage, MessageLevel};
use palmstock::model::{Property, PropertyStatus, Reservation, ReservationStatus, User, UserStatus};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

// Badges are padded before coloring; ANSI codes would throw the column
// widths off otherwise.
fn property_badge(status: PropertyStatus, width: usize) -> ColoredString {
    let label = pad(&format!("[{}]", status.label()), width);
    match status {
        PropertyStatus::Available => label.green(),
        PropertyStatus::Reserved => label.yellow(),
        PropertyStatus::Sold => label.blue(),
        PropertyStatus::NotAvailable => label.red(),
    }
}

fn reservation_badge(status: ReservationStatus, width: usize) -> ColoredString {
    let label = pad(&format!("[{}]", status.label()), width);
    match status {
        ReservationStatus::Active => label.blue(),
        ReservationStatus::Confirmed => label.green(),
        ReservationStatus::Expired => label.red(),
        ReservationStatus::Cancelled => label.dimmed(),
    }
}

fn user_badge(status: UserStatus, width: usize) -> ColoredString {
    let label = pad(&format!("[{}]", status.label()), width);
    match status {
        UserStatus::Active => label.green(),
        UserStatus::Inactive => label.dimmed(),
        UserStatus::Pending => label.yellow(),
    }
}

pub(crate) fn print_properties(properties: &[Property]) {
    if properties.is_empty() {
        println!("No properties found matching your criteria.");
        return;
    }

    for property in properties {
        let left = format!(
            "{}  {} · {} · floor {}",
            pad(&property.number, 6),
            property.kind.label(),
            property.site,
            property.floor
        );
        let middle = format!(
            "{} sqft · {} ETB",
            fmt_number(property.area),
            fmt_number(property.price)
        );
        let badge = property_badge(property.status, 16);
        let time = format_time_ago(property.last_updated);

        let plain_width = left.width() + 2 + middle.width();
        let padding = LINE_WIDTH
            .saturating_sub(plain_width + 16 + TIME_WIDTH)
            .max(1);
        println!(
            "  {}  {}{}{} {}",
            left.bold(),
            middle,
            " ".repeat(padding),
            badge,
            time.dimmed()
        );
    }
    println!();
    println!("{} properties found", properties.len());
}

pub(crate) fn print_property_details(property: &Property) {
    println!(
        "{} {}",
        property.number.bold(),
        property_badge(property.status, 0)
    );
    println!("--------------------------------");
    println!("type        {}", property.kind.label());
    println!("site        {}", property.site);
    println!("floor       {}", property.floor);
    println!("area        {} sqft", fmt_number(property.area));
    println!("price       {} ETB", fmt_number(property.price));
    if let Some(description) = &property.description {
        println!("about       {description}");
    }
    if !property.amenities.is_empty() {
        println!("amenities   {}", property.amenities.join(", "));
    }
    println!("updated     {}", format_time_ago(property.last_updated));
}

pub(crate) fn print_reservations(reservations: &[Reservation]) {
    if reservations.is_empty() {
        println!("No reservations found matching your criteria.");
        return;
    }

    for r in reservations {
        let left = format!(
            "{}  {} · agent {}",
            pad(&r.unit_number, 6),
            truncate_to_width(&r.client_name, 24),
            truncate_to_width(&r.agent_name, 20)
        );
        let dates = format!("{} → {}", r.reservation_date, r.expiry_date);
        let money = format!(
            "{} ETB (deposit {})",
            fmt_number(r.price),
            fmt_number(r.deposit)
        );
        println!(
            "  {}  {}  {}  {}",
            left.bold(),
            reservation_badge(r.status, 13),
            dates.dimmed(),
            money
        );
    }
    println!();
    println!("{} reservations found", reservations.len());
}

pub(crate) fn print_client(reservation: &Reservation) {
    println!("{}", reservation.client_name.bold());
    println!("--------------------------------");
    println!("email       {}", reservation.client_email);
    println!("phone       {}", reservation.client_phone);
    println!("agent       {}", reservation.agent_name);
    println!(
        "unit        {} ({})",
        reservation.unit_number,
        reservation.unit_type.label()
    );
    println!(
        "reserved    {} (expires {})",
        reservation.reservation_date, reservation.expiry_date
    );
    if !reservation.notes.is_empty() {
        println!("notes       {}", reservation.notes);
    }
}

pub(crate) fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users found matching your criteria.");
        return;
    }

    for user in users {
        let left = format!(
            "{}  {}",
            pad(&truncate_to_width(&user.name, 22), 22),
            pad(&truncate_to_width(&user.email, 36), 36)
        );
        println!(
            "  {}  {}  {}  joined {}",
            left.bold(),
            pad(user.role.label(), 15),
            user_badge(user.status, 11),
            user.join_date.to_string().dimmed()
        );
    }
    println!();
    println!("{} users found", users.len());
}

// --- Dashboard & reports ---

pub(crate) fn print_overview(report: &InventoryReport) {
    println!("{}", "Stock Overview".bold());
    card("Total Units", &report.total_units.to_string());
    for row in &report.by_status {
        card(&label_for(&row.category), &row.count.to_string());
    }
    card(
        "Availability",
        &format!("{:.0}%", report.availability_rate),
    );
    println!();
}

fn label_for(category: &str) -> String {
    // Wire values are kebab-case; cards read better in words.
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn card(title: &str, value: &str) {
    println!("  {}  {}", pad(title, 16), value.bold());
}

/// Floor-plan view: units placed on their grid positions, one text row per
/// grid row, colored by status.
pub(crate) fn print_floor_plan(floor: u32, units: &[Property]) {
    println!("{}", format!("Floor {floor}").bold());
    let mut placed: Vec<&Property> = units.iter().filter(|u| u.position.is_some()).collect();
    if placed.is_empty() {
        println!("No units placed on this floor plan.");
        return;
    }
    placed.sort_by_key(|u| u.position.map(|p| (p.y, p.x)));

    let mut current_row = None;
    for unit in placed {
        let row = unit.position.map(|p| p.y);
        if current_row != row {
            if current_row.is_some() {
                println!();
            }
            current_row = row;
        }
        let cell = format!("[{} {}]", unit.number, unit.status.label());
        let colored = match unit.status {
            PropertyStatus::Available => cell.green(),
            PropertyStatus::Reserved => cell.yellow(),
            PropertyStatus::Sold => cell.blue(),
            PropertyStatus::NotAvailable => cell.red(),
        };
        print!("  {colored}");
    }
    println!();

    let unplaced = units.iter().filter(|u| u.position.is_none()).count();
    if unplaced > 0 {
        println!("{}", format!("({unplaced} unplaced units not shown)").dimmed());
    }
}

fn print_count_rows(title: &str, rows: &[CountRow]) {
    println!("{}", title.bold());
    for row in rows {
        println!("  {}  {}", pad(&label_for(&row.category), 16), row.count);
    }
}

pub(crate) fn print_inventory(report: &InventoryReport) {
    println!("{}", "Inventory Report".bold());
    card("Total Units", &report.total_units.to_string());
    card(
        "Availability",
        &format!("{:.0}%", report.availability_rate),
    );
    println!();
    print_count_rows("By status", &report.by_status);
    print_count_rows("By type", &report.by_type);
    print_count_rows("By site", &report.by_site);
}

pub(crate) fn print_sales(report: &SalesReport) {
    println!("{}", "Sales Report".bold());
    card("Units Sold", &report.sold_units.to_string());
    card("Revenue", &format!("{} ETB", fmt_number(report.revenue)));
    println!();
    for (title, rows) in [("By site", &report.by_site), ("By type", &report.by_type)] {
        println!("{}", title.bold());
        for row in rows {
            println!(
                "  {}  {} units  {} ETB",
                pad(&label_for(&row.category), 16),
                row.units,
                fmt_number(row.revenue)
            );
        }
    }
}

pub(crate) fn print_financial(report: &FinancialReport) {
    println!("{}", "Financial Report".bold());
    card(
        "Portfolio",
        &format!("{} ETB", fmt_number(report.portfolio_value)),
    );
    card(
        "Sold Revenue",
        &format!("{} ETB", fmt_number(report.sold_revenue)),
    );
    card(
        "Deposits Held",
        &format!("{} ETB", fmt_number(report.deposits_held)),
    );
    card(
        "Avg Unit Price",
        &format!("{} ETB", fmt_number(report.average_unit_price)),
    );
}

pub(crate) fn print_agents(report: &AgentReport) {
    println!("{}", "Agent Performance".bold());
    if report.rows.is_empty() {
        println!("No reservations recorded.");
        return;
    }
    for row in &report.rows {
        println!(
            "  {}  {} reservations ({} active, {} confirmed)  {} ETB confirmed",
            pad(&truncate_to_width(&row.agent, 22), 22).bold(),
            row.reservations,
            row.active,
            row.confirmed,
            fmt_number(row.confirmed_volume)
        );
    }
}

pub(crate) fn print_user_report(report: &UserReport) {
    println!("{}", "User Accounts".bold());
    card("Total Users", &report.total.to_string());
    println!();
    print_count_rows("By role", &report.by_role);
    print_count_rows("By status", &report.by_status);
}

// --- Layout helpers ---

fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Group thousands: 450000 -> "450,000". Prices and areas in the data are
/// whole numbers; fractions are rounded for display only.
fn fmt_number(n: f64) -> String {
    let whole = n.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
