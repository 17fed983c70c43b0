//! Schema inference from generated records

use super::types::{ColumnField, ColumnSchema};
use crate::error::{Error, Result};
use crate::types::{FieldKind, Record};
use once_cell::sync::Lazy;
use tracing::debug;

/// Infer the column schema from the first record
///
/// Later records are not inspected; a record that disagrees with the first
/// one fails when columns are built.
pub fn infer_schema(records: &[Record]) -> Result<ColumnSchema> {
    let first = records.first().ok_or(Error::EmptyDataset)?;

    let fields: Vec<ColumnField> = first
        .iter()
        .map(|(name, value)| ColumnField::new(name, value.kind()))
        .collect();

    debug!(columns = fields.len(), "Inferred schema from first record");
    Ok(ColumnSchema::new(fields))
}

static FOCUS_SCHEMA: Lazy<ColumnSchema> = Lazy::new(|| {
    use FieldKind::{Date, Number, Text};

    const COLUMNS: [(&str, FieldKind); 44] = [
        ("AvailabilityZone", Text),
        ("BilledCost", Number),
        ("BillingAccountId", Number),
        ("BillingAccountName", Text),
        ("BillingCurrency", Text),
        ("BillingPeriodStart", Text),
        ("BillingPeriodEnd", Text),
        ("ChargeCategory", Text),
        ("ChargeClass", Text),
        ("ChargeDescription", Text),
        ("ChargeFrequency", Text),
        ("ChargePeriodStart", Date),
        ("ChargePeriodEnd", Text),
        ("CommitmentDiscountCategory", Text),
        ("CommitmentDiscountId", Text),
        ("CommitmentDiscountName", Text),
        ("CommitmentDiscountStatus", Text),
        ("CommitmentDiscountType", Text),
        ("ConsumedQuantity", Number),
        ("ConsumedUnit", Text),
        ("ContractedCost", Number),
        ("ContractedUnitPrice", Number),
        ("EffectiveCost", Number),
        ("InvoiceIssuerName", Text),
        ("ListCost", Number),
        ("ListUnitPrice", Number),
        ("PricingCategory", Text),
        ("PricingQuantity", Number),
        ("PricingUnit", Number),
        ("ProviderName", Text),
        ("PublisherName", Text),
        ("RegionId", Text),
        ("RegionName", Text),
        ("ResourceId", Text),
        ("ResourceName", Text),
        ("ResourceType", Text),
        ("ServiceCategory", Text),
        ("ServiceName", Text),
        ("SkuId", Text),
        ("SkuPriceId", Text),
        ("SubAccountId", Text),
        ("SubAccountName", Text),
        ("Tags", Text),
        ("x_ServiceSubcategory", Text),
    ];

    ColumnSchema::new(
        COLUMNS
            .iter()
            .map(|(name, kind)| ColumnField::new(*name, *kind))
            .collect(),
    )
});

/// Statically declared FOCUS column schema
pub fn focus_schema() -> &'static ColumnSchema {
    &FOCUS_SCHEMA
}
