use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::listing::model::{Listing, ListingImage, StoredListingProps};
use business::domain::listing::value_objects::{Condition, ListingStatus, PaymentMethod};
use business::domain::shared::value_objects::SellerId;

#[derive(Debug, FromRow)]
pub struct ListingEntity {
    pub id: Uuid,
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub category_id: Uuid,
    pub price: f64,
    pub discounted_price: f64,
    pub original_price: Option<f64>,
    pub quantity: i32,
    pub unit: String,
    pub condition: String,
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
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the listing_images table.
#[derive(Debug, FromRow)]
pub struct ListingImageEntity {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub url: String,
}

/// One accepted payment method of one listing, joined through the lookup
/// table back to its wire name.
#[derive(Debug, FromRow)]
pub struct ListingPaymentMethodEntity {
    pub listing_id: Uuid,
    pub method: String,
}

impl ListingEntity {
    /// Rebuilds the aggregate from its rows. Images and payment methods are
    /// fetched separately and handed in by the repository.
    pub fn into_domain(
        self,
        images: Vec<ListingImage>,
        payment_methods: Vec<PaymentMethod>,
    ) -> Listing {
        Listing::from_repository(StoredListingProps {
            id: self.id,
            seller_id: SellerId::new(&self.seller_id),
            title: self.title,
            description: self.description,
            brand: self.brand,
            category_id: self.category_id,
            price: self.price,
            discounted_price: self.discounted_price,
            original_price: self.original_price,
            quantity: self.quantity,
            unit: self.unit,
            condition: self
                .condition
                .parse::<Condition>()
                .unwrap_or(Condition::New),
            manufacturer_date: self.manufacturer_date,
            expiry_date: self.expiry_date,
            best_before: self.best_before,
            pickup_address: self.pickup_address,
            is_delivery_available: self.is_delivery_available,
            delivery_fee: self.delivery_fee,
            size: self.size,
            allergen_info: self.allergen_info,
            storage_info: self.storage_info,
            is_donation: self.is_donation,
            commission: self.commission,
            status: self
                .status
                .parse::<ListingStatus>()
                .unwrap_or(ListingStatus::Available),
            images,
            payment_methods,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
