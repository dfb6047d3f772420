use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use super::value_objects::{Condition, PaymentMethod};

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_BRAND_CHARS: usize = 2;

/// One candidate item of a bulk submission, after the transport layer has
/// already settled types, enum values, datetimes, and the category UUID.
/// Value constraints are checked here, in one pass over the whole batch.
#[derive(Debug, Clone)]
pub struct BulkListingDraft {
    pub title: String,
    pub description: String,
    pub brand: String,
    pub category_id: Uuid,
    pub price: f64,
    pub discounted_price: f64,
    pub original_price: Option<f64>,
    pub quantity: i32,
    pub unit: String,
    pub condition: Condition,
    pub manufacturer_date: Option<DateTime<Utc>>,
    pub expiry_date: DateTime<Utc>,
    pub best_before: Option<DateTime<Utc>>,
    pub pickup_address: String,
    pub is_delivery_available: bool,
    pub delivery_fee: Option<f64>,
    pub size: Option<String>,
    pub allergen_info: Option<String>,
    pub storage_info: Option<String>,
    pub is_donation: bool,
    pub commission: f64,
    pub image_urls: Vec<String>,
    pub payment_methods: Vec<PaymentMethod>,
}

/// A single broken constraint, pointing at the item and field that broke it.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub index: usize,
    pub field: String,
    pub code: String,
}

impl Violation {
    fn new(index: usize, field: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            index,
            field: field.into(),
            code: code.into(),
        }
    }
}

/// Checks every draft against the bulk schema and returns every violation
/// found, never stopping at the first one. An empty result means the whole
/// batch is acceptable; anything else aborts it.
pub fn validate_bulk_drafts(drafts: &[BulkListingDraft]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (index, draft) in drafts.iter().enumerate() {
        validate_draft(index, draft, &mut violations);
    }
    violations
}

fn validate_draft(index: usize, draft: &BulkListingDraft, out: &mut Vec<Violation>) {
    if draft.title.chars().count() < MIN_TITLE_CHARS {
        out.push(Violation::new(index, "title", "listing.title_too_short"));
    }
    if draft.description.chars().count() < MIN_DESCRIPTION_CHARS {
        out.push(Violation::new(
            index,
            "description",
            "listing.description_too_short",
        ));
    }
    if draft.brand.chars().count() < MIN_BRAND_CHARS {
        out.push(Violation::new(index, "brand", "listing.brand_too_short"));
    }
    if draft.price <= 0.0 {
        out.push(Violation::new(index, "price", "listing.price_not_positive"));
    }
    if draft.discounted_price <= 0.0 {
        out.push(Violation::new(
            index,
            "discounted_price",
            "listing.discounted_price_not_positive",
        ));
    }
    if !(0.0..=1.0).contains(&draft.commission) {
        out.push(Violation::new(
            index,
            "commission",
            "listing.commission_out_of_range",
        ));
    }
    if draft.quantity < 1 {
        out.push(Violation::new(
            index,
            "quantity",
            "listing.quantity_not_positive",
        ));
    }
    for (image_index, url) in draft.image_urls.iter().enumerate() {
        if Url::parse(url).is_err() {
            out.push(Violation::new(
                index,
                format!("images[{}]", image_index),
                "listing.image_url_invalid",
            ));
        }
    }
}
