//! Record construction

use crate::config::DateRange;
use crate::types::Record;
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Number of fields on every generated record
pub const FIELD_COUNT: usize = 44;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service emitted for each day, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceVariant {
    AppService,
    Database,
}

impl ServiceVariant {
    /// All variants in per-day emission order
    pub const ALL: [ServiceVariant; 2] = [ServiceVariant::AppService, ServiceVariant::Database];

    /// Display name, also used as ServiceName and ResourceType
    pub fn name(self) -> &'static str {
        match self {
            ServiceVariant::AppService => "App Service",
            ServiceVariant::Database => "Database",
        }
    }

    /// Billed cost for the record with identifier `id`
    #[allow(clippy::cast_precision_loss)]
    pub fn billed_cost(self, id: u64) -> f64 {
        match self {
            ServiceVariant::AppService => 25.0 + (id % 5) as f64,
            ServiceVariant::Database => 40.0 + (id % 7) as f64,
        }
    }

    fn consumed_quantity(self) -> f64 {
        match self {
            ServiceVariant::AppService => 10.0,
            ServiceVariant::Database => 20.0,
        }
    }

    fn resource_prefix(self) -> &'static str {
        match self {
            ServiceVariant::AppService => "app",
            ServiceVariant::Database => "db",
        }
    }

    fn subcategory(self) -> &'static str {
        match self {
            ServiceVariant::AppService => "WebApp",
            ServiceVariant::Database => "SQL",
        }
    }
}

/// Generate every record for `range`
///
/// Identifiers start at 1 and increase by one per record.
pub fn generate_rows(range: &DateRange) -> Vec<Record> {
    let mut rows = Vec::with_capacity(range.days() * ServiceVariant::ALL.len());
    let mut id: u64 = 1;

    for date in range.iter() {
        for service in ServiceVariant::ALL {
            rows.push(focus_record(id, date, service));
            id += 1;
        }
    }

    debug!(
        rows = rows.len(),
        start = %range.start(),
        end = %range.end(),
        "Generated rows"
    );
    rows
}

/// Build a single FOCUS record
pub fn focus_record(id: u64, date: NaiveDate, service: ServiceVariant) -> Record {
    let day = date.format(DATE_FORMAT).to_string();
    let next_day = date
        .checked_add_days(Days::new(1))
        .unwrap_or(date)
        .format(DATE_FORMAT)
        .to_string();
    let name = service.name();

    let mut r = Record::with_capacity(FIELD_COUNT);
    r.set("AvailabilityZone", "zone-1");
    r.set("BilledCost", service.billed_cost(id));
    r.set("BillingAccountId", 1.0);
    r.set("BillingAccountName", "DemoAccount");
    r.set("BillingCurrency", "EUR");
    r.set("BillingPeriodStart", day.clone());
    r.set("BillingPeriodEnd", next_day);
    r.set("ChargeCategory", "Usage");
    r.set("ChargeClass", "Compute");
    r.set("ChargeDescription", format!("{name} usage"));
    r.set("ChargeFrequency", "Daily");
    r.set("ChargePeriodStart", date);
    r.set("ChargePeriodEnd", day);
    r.set("CommitmentDiscountCategory", "None");
    r.set("CommitmentDiscountId", "CD1");
    r.set("CommitmentDiscountName", "None");
    r.set("CommitmentDiscountStatus", "Inactive");
    r.set("CommitmentDiscountType", "None");
    r.set("ConsumedQuantity", service.consumed_quantity());
    r.set("ConsumedUnit", "Hours");
    r.set("ContractedCost", 100.0);
    r.set("ContractedUnitPrice", 10.0);
    r.set("EffectiveCost", 90.0);
    r.set("InvoiceIssuerName", "Azure");
    r.set("ListCost", 120.0);
    r.set("ListUnitPrice", 12.0);
    r.set("PricingCategory", "Standard");
    r.set("PricingQuantity", 1.0);
    r.set("PricingUnit", 1.0);
    r.set("ProviderName", "Azure");
    r.set("PublisherName", "Microsoft");
    r.set("RegionId", "eu-west");
    r.set("RegionName", "Europe");
    r.set("ResourceId", format!("res-{id}"));
    r.set("ResourceName", format!("{}-{id}", service.resource_prefix()));
    r.set("ResourceType", name);
    r.set("ServiceCategory", "Compute");
    r.set("ServiceName", name);
    r.set("SkuId", format!("sku-{id}"));
    r.set("SkuPriceId", format!("price-{id}"));
    r.set("SubAccountId", "sub-1");
    r.set("SubAccountName", "Demo Sub");
    r.set("Tags", "{}");
    r.set("x_ServiceSubcategory", service.subcategory());
    r
}
