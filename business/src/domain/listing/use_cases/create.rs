use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::category::model::Category;
use crate::domain::listing::errors::ListingError;
use crate::domain::listing::model::Listing;
use crate::domain::listing::value_objects::{Condition, ListingStatus};
use crate::domain::shared::value_objects::SellerId;

/// A single listing as the seller submits it: the category arrives as a
/// name to resolve, payment methods as free text to parse.
pub struct CreateListingParams {
    pub seller: SellerId,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub category_name: String,
    pub price: f64,
    pub discounted_price: f64,
    pub original_price: Option<f64>,
    pub quantity: i32,
    pub unit: String,
    pub condition: Condition,
    pub status: ListingStatus,
    pub manufacturer_date: DateTime<Utc>,
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
    pub payment_methods: Vec<String>,
}

pub struct CreatedListing {
    pub listing: Listing,
    pub category: Category,
}

#[async_trait]
pub trait CreateListingUseCase: Send + Sync {
    async fn execute(&self, params: CreateListingParams) -> Result<CreatedListing, ListingError>;
}
