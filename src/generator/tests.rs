//! Tests for the row generator

use super::*;
use crate::config::DateRange;
use crate::types::{FieldKind, FieldValue};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn id_of(record: &crate::types::Record) -> u64 {
    let resource = record.get("ResourceId").and_then(FieldValue::as_text).unwrap();
    resource.trim_start_matches("res-").parse().unwrap()
}

// ============================================================================
// Row Count Tests
// ============================================================================

#[test]
fn test_default_range_row_count() {
    let rows = generate_rows(&DateRange::default());
    assert_eq!(rows.len(), 1460);
}

#[test_case(day(2025, 1, 1), day(2025, 1, 1), 2 ; "single day")]
#[test_case(day(2025, 1, 1), day(2025, 1, 31), 62 ; "january")]
#[test_case(day(2028, 2, 1), day(2028, 2, 29), 58 ; "leap february")]
#[test_case(day(2025, 12, 31), day(2026, 1, 1), 4 ; "year boundary")]
fn test_row_count(start: NaiveDate, end: NaiveDate, expected: usize) {
    let range = DateRange::new(start, end).unwrap();
    assert_eq!(generate_rows(&range).len(), expected);
}

// ============================================================================
// Identifier Tests
// ============================================================================

#[test]
fn test_identifiers_strictly_increasing_from_one() {
    let rows = generate_rows(&DateRange::default());
    let ids: Vec<u64> = rows.iter().map(id_of).collect();

    assert_eq!(ids[0], 1);
    assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    assert_eq!(*ids.last().unwrap(), 1460);
}

#[test]
fn test_single_day_yields_one_record_per_service() {
    let rows = generate_rows(&DateRange::single(day(2025, 3, 15)));

    assert_eq!(rows.len(), 2);
    assert_eq!(id_of(&rows[0]), 1);
    assert_eq!(id_of(&rows[1]), 2);
    assert_eq!(rows[0].get("ServiceName"), Some(&FieldValue::text("App Service")));
    assert_eq!(rows[1].get("ServiceName"), Some(&FieldValue::text("Database")));
}

// ============================================================================
// Field Value Tests
// ============================================================================

#[test]
fn test_every_record_has_same_field_set() {
    let rows = generate_rows(&DateRange::new(day(2025, 1, 1), day(2025, 1, 10)).unwrap());
    let first: Vec<&str> = rows[0].field_names().collect();

    assert_eq!(first.len(), FIELD_COUNT);
    for row in &rows {
        assert_eq!(row.field_names().collect::<Vec<_>>(), first);
    }
}

#[test]
fn test_date_and_string_siblings_agree() {
    let rows = generate_rows(&DateRange::new(day(2025, 12, 30), day(2026, 1, 2)).unwrap());

    for row in &rows {
        let start = row.get("ChargePeriodStart").and_then(FieldValue::as_date).unwrap();
        let formatted = start.format("%Y-%m-%d").to_string();
        assert_eq!(row.get("ChargePeriodEnd").and_then(FieldValue::as_text), Some(formatted.as_str()));
        assert_eq!(row.get("BillingPeriodStart").and_then(FieldValue::as_text), Some(formatted.as_str()));
    }
}

#[test]
fn test_billing_period_end_is_next_day() {
    let record = focus_record(1, day(2025, 12, 31), ServiceVariant::AppService);
    assert_eq!(record.get("BillingPeriodEnd"), Some(&FieldValue::text("2026-01-01")));
}

#[test_case(1, ServiceVariant::AppService, 26.0 ; "app id 1")]
#[test_case(5, ServiceVariant::AppService, 25.0 ; "app id 5")]
#[test_case(2, ServiceVariant::Database, 42.0 ; "db id 2")]
#[test_case(14, ServiceVariant::Database, 40.0 ; "db id 14")]
fn test_billed_cost(id: u64, service: ServiceVariant, expected: f64) {
    let record = focus_record(id, day(2025, 1, 1), service);
    assert_eq!(record.get("BilledCost").and_then(FieldValue::as_number), Some(expected));
}

#[test]
fn test_service_specific_fields() {
    let app = focus_record(3, day(2025, 1, 2), ServiceVariant::AppService);
    let db = focus_record(4, day(2025, 1, 2), ServiceVariant::Database);

    assert_eq!(app.get("ResourceName"), Some(&FieldValue::text("app-3")));
    assert_eq!(db.get("ResourceName"), Some(&FieldValue::text("db-4")));
    assert_eq!(app.get("ChargeDescription"), Some(&FieldValue::text("App Service usage")));
    assert_eq!(db.get("x_ServiceSubcategory"), Some(&FieldValue::text("SQL")));
    assert_eq!(app.get("ConsumedQuantity").and_then(FieldValue::as_number), Some(10.0));
    assert_eq!(db.get("ConsumedQuantity").and_then(FieldValue::as_number), Some(20.0));
    assert_eq!(db.get("SkuPriceId"), Some(&FieldValue::text("price-4")));
}

#[test]
fn test_field_kinds() {
    let record = focus_record(1, day(2025, 1, 1), ServiceVariant::AppService);
    let count = |kind: FieldKind| record.iter().filter(|(_, v)| v.kind() == kind).count();

    assert_eq!(count(FieldKind::Date), 1);
    assert_eq!(count(FieldKind::Number), 10);
    assert_eq!(count(FieldKind::Text), 33);
}

#[test]
fn test_generation_is_deterministic() {
    let range = DateRange::new(day(2026, 6, 1), day(2026, 6, 7)).unwrap();
    assert_eq!(generate_rows(&range), generate_rows(&range));
}
