use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ListingError;
use super::value_objects::{Condition, ListingStatus, PaymentMethod};
use crate::domain::shared::value_objects::SellerId;

/// A product photo owned by its listing; created and persisted together
/// with the aggregate.
#[derive(Debug, Clone)]
pub struct ListingImage {
    pub id: Uuid,
    pub url: String,
}

/// A product offered on the marketplace together with everything the
/// marketplace owns about it: its images and the payment methods the
/// seller accepts.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: Uuid,
    pub seller_id: SellerId,
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
    pub status: ListingStatus,
    pub images: Vec<ListingImage>,
    pub payment_methods: Vec<PaymentMethod>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewListingProps {
    pub seller_id: SellerId,
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
    pub status: ListingStatus,
    pub image_urls: Vec<String>,
    pub payment_methods: Vec<PaymentMethod>,
}

/// Already-persisted state, used by repository adapters to rebuild the
/// aggregate without re-running validation.
pub struct StoredListingProps {
    pub id: Uuid,
    pub seller_id: SellerId,
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
    pub status: ListingStatus,
    pub images: Vec<ListingImage>,
    pub payment_methods: Vec<PaymentMethod>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Builds a new listing with a pre-assigned id.
    ///
    /// Generating the id here, before any insert happens, is what lets the
    /// repository write a whole batch and hand the created records back
    /// without re-querying for them afterwards.
    ///
    /// Invariant: commission is a fraction in [0, 1] and is always 0 for
    /// donations, whatever the caller submitted.
    pub fn new(props: NewListingProps) -> Result<Self, ListingError> {
        if props.title.trim().is_empty() {
            return Err(ListingError::TitleEmpty);
        }

        let commission = if props.is_donation {
            0.0
        } else {
            if !(0.0..=1.0).contains(&props.commission) {
                return Err(ListingError::CommissionOutOfRange);
            }
            props.commission
        };

        let images = props
            .image_urls
            .into_iter()
            .map(|url| ListingImage {
                id: Uuid::new_v4(),
                url,
            })
            .collect();

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            seller_id: props.seller_id,
            title: props.title,
            description: props.description,
            brand: props.brand,
            category_id: props.category_id,
            price: props.price,
            discounted_price: props.discounted_price,
            original_price: props.original_price,
            quantity: props.quantity,
            unit: props.unit,
            condition: props.condition,
            manufacturer_date: props.manufacturer_date,
            expiry_date: props.expiry_date,
            best_before: props.best_before,
            pickup_address: props.pickup_address,
            is_delivery_available: props.is_delivery_available,
            delivery_fee: props.delivery_fee,
            size: props.size,
            allergen_info: props.allergen_info,
            storage_info: props.storage_info,
            is_donation: props.is_donation,
            commission,
            status: props.status,
            images,
            payment_methods: props.payment_methods,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(props: StoredListingProps) -> Self {
        Self {
            id: props.id,
            seller_id: props.seller_id,
            title: props.title,
            description: props.description,
            brand: props.brand,
            category_id: props.category_id,
            price: props.price,
            discounted_price: props.discounted_price,
            original_price: props.original_price,
            quantity: props.quantity,
            unit: props.unit,
            condition: props.condition,
            manufacturer_date: props.manufacturer_date,
            expiry_date: props.expiry_date,
            best_before: props.best_before,
            pickup_address: props.pickup_address,
            is_delivery_available: props.is_delivery_available,
            delivery_fee: props.delivery_fee,
            size: props.size,
            allergen_info: props.allergen_info,
            storage_info: props.storage_info,
            is_donation: props.is_donation,
            commission: props.commission,
            status: props.status,
            images: props.images,
            payment_methods: props.payment_methods,
            created_at: props.created_at,
            updated_at: props.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base_props() -> NewListingProps {
        NewListingProps {
            seller_id: SellerId::new("seller-1"),
            title: "Organic oat milk".to_string(),
            description: "Barista edition, two weeks to expiry".to_string(),
            brand: "Oatly".to_string(),
            category_id: Uuid::new_v4(),
            price: 2.5,
            discounted_price: 1.2,
            original_price: Some(3.0),
            quantity: 6,
            unit: "cartons".to_string(),
            condition: Condition::New,
            manufacturer_date: None,
            expiry_date: Utc::now() + chrono::Duration::days(14),
            best_before: None,
            pickup_address: "12 Market Street".to_string(),
            is_delivery_available: false,
            delivery_fee: None,
            size: None,
            allergen_info: Some("Oats (gluten)".to_string()),
            storage_info: None,
            is_donation: false,
            commission: 0.1,
            status: ListingStatus::Available,
            image_urls: vec!["https://img.example.com/oat-milk.jpg".to_string()],
            payment_methods: vec![PaymentMethod::Cash, PaymentMethod::Card],
        }
    }

    #[test]
    fn should_create_listing_with_pre_assigned_ids() {
        let listing = Listing::new(base_props()).unwrap();

        assert!(!listing.id.is_nil());
        assert_eq!(listing.images.len(), 1);
        assert!(!listing.images[0].id.is_nil());
        assert_eq!(listing.images[0].url, "https://img.example.com/oat-milk.jpg");
        assert_eq!(listing.status, ListingStatus::Available);
    }

    #[test]
    fn should_reject_listing_when_title_is_blank() {
        let mut props = base_props();
        props.title = "   ".to_string();

        let result = Listing::new(props);

        assert!(matches!(result.unwrap_err(), ListingError::TitleEmpty));
    }

    #[test]
    fn should_keep_commission_when_not_a_donation() {
        let mut props = base_props();
        props.commission = 0.25;

        let listing = Listing::new(props).unwrap();

        assert_eq!(listing.commission, 0.25);
    }

    #[test]
    fn should_reject_commission_above_one() {
        let mut props = base_props();
        props.commission = 1.5;

        let result = Listing::new(props);

        assert!(matches!(
            result.unwrap_err(),
            ListingError::CommissionOutOfRange
        ));
    }

    #[test]
    fn should_reject_negative_commission() {
        let mut props = base_props();
        props.commission = -0.1;

        let result = Listing::new(props);

        assert!(matches!(
            result.unwrap_err(),
            ListingError::CommissionOutOfRange
        ));
    }

    proptest! {
        /// Donations never carry a commission, no matter what was submitted.
        #[test]
        fn donation_commission_is_always_zero(submitted in -10.0f64..10.0) {
            let mut props = base_props();
            props.is_donation = true;
            props.commission = submitted;

            let listing = Listing::new(props).unwrap();

            prop_assert_eq!(listing.commission, 0.0);
        }
    }
}
