use assert_cmd::Command;
use predicates::prelude::*;

fn palmstock() -> Command {
    Command::cargo_bin("palmstock").expect("binary builds")
}

#[test]
fn stock_dashboard_shows_live_overview() {
    palmstock()
        .arg("stock")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stock Overview"))
        .stdout(predicate::str::contains("Total Units"))
        .stdout(predicate::str::contains("8 properties found"));
}

#[test]
fn stock_floor_view_places_units() {
    palmstock()
        .args(["stock", "--floor", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Floor 2"))
        .stdout(predicate::str::contains("P201"))
        .stdout(predicate::str::contains("P202"))
        // A101 is on floor 1
        .stdout(predicate::str::contains("A101").not());
}

#[test]
fn property_list_filters_by_status_and_search() {
    palmstock()
        .args(["property", "list", "--search", "A10", "--status", "available"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A101"))
        .stdout(predicate::str::contains("A102").not())
        .stdout(predicate::str::contains("1 properties found"));
}

#[test]
fn property_list_rejects_unknown_status() {
    palmstock()
        .args(["property", "list", "--status", "availble"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status"));
}

#[test]
fn property_site_filter_is_exact() {
    palmstock()
        .args(["property", "list", "--site", "palm-plaza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S101"))
        .stdout(predicate::str::contains("S102"))
        .stdout(predicate::str::contains("2 properties found"));
}

#[test]
fn reserve_an_available_unit_succeeds() {
    palmstock()
        .args(["property", "reserve", "A101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A101 is now reserved"));
}

#[test]
fn selling_an_unreserved_unit_is_rejected() {
    // A101 is seeded available; sold requires going through reserved.
    palmstock()
        .args(["property", "sell", "A101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal status transition"));
}

#[test]
fn sold_units_cannot_be_reserved() {
    palmstock()
        .args(["property", "reserve", "A102"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal status transition: sold -> reserved"));
}

#[test]
fn property_add_validates_numbers() {
    palmstock()
        .args([
            "property", "add", "B301", "--type", "shop", "--area", "140", "--price", "abc",
            "--floor", "3", "--site", "palm-plaza",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid price"));
}

#[test]
fn property_add_reports_the_new_unit() {
    palmstock()
        .args([
            "property", "add", "B301", "--type", "shop", "--area", "140", "--price", "200000",
            "--floor", "3", "--site", "palm-plaza",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Property created: B301"));
}

#[test]
fn property_view_shows_details() {
    palmstock()
        .args(["property", "view", "P201"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Penthouse"))
        .stdout(predicate::str::contains("850,000 ETB"))
        .stdout(predicate::str::contains("Private Terrace"));
}

#[test]
fn reservation_client_details() {
    palmstock()
        .args(["reservation", "client", "P201"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robert Chen"))
        .stdout(predicate::str::contains("robert.chen@email.com"));
}

#[test]
fn unknown_reference_is_not_found() {
    palmstock()
        .args(["property", "delete", "Z999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("property not found: Z999"));
}

#[test]
fn reservation_confirm_prints_client_details() {
    palmstock()
        .args(["reservation", "confirm", "A101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Johnson"))
        .stdout(predicate::str::contains("A101 (Alice Johnson) is now confirmed"));
}

#[test]
fn reservation_add_warns_on_inverted_dates() {
    palmstock()
        .args([
            "reservation", "add", "A201", "--type", "apartment", "--client", "Test Client",
            "--email", "t@example.com", "--phone", "+1", "--agent", "Sarah Wilson", "--date",
            "2024-02-10", "--expires", "2024-02-01", "--price", "470000", "--site", "palm-towers",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reservation created"))
        .stdout(predicate::str::contains(
            "expiry date is before the reservation date",
        ));
}

#[test]
fn user_list_filters_by_role() {
    palmstock()
        .args(["user", "list", "--role", "sales-agent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sarah Wilson"))
        .stdout(predicate::str::contains("David Thompson"))
        .stdout(predicate::str::contains("2 users found"));
}

#[test]
fn report_inventory_counts_the_portfolio() {
    palmstock()
        .args(["report", "inventory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory Report"))
        .stdout(predicate::str::contains("By status"))
        .stdout(predicate::str::contains("By site"));
}

#[test]
fn report_export_writes_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("inventory.json");

    palmstock()
        .args(["report", "inventory", "--export"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to"));

    let raw = std::fs::read_to_string(&path).expect("export file exists");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
    assert_eq!(json["total_units"], 8);
    assert_eq!(json["by_status"][0]["category"], "available");
    assert_eq!(json["by_status"][0]["count"], 4);
}

#[test]
fn report_scopes_to_a_site() {
    palmstock()
        .args(["report", "sales", "--site", "palm-residences"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales Report"))
        .stdout(predicate::str::contains("920,000"));
}
