use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::listing::model::{Listing, ListingImage};
use business::domain::listing::use_cases::create::CreatedListing;
use business::domain::listing::validation::BulkListingDraft;
use business::domain::listing::value_objects::{Condition, ListingStatus, PaymentMethod};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ConditionDto {
    #[oai(rename = "NEW")]
    New,
    #[oai(rename = "LIKE_NEW")]
    LikeNew,
    #[oai(rename = "GOOD")]
    Good,
    #[oai(rename = "FAIR")]
    Fair,
    #[oai(rename = "USED")]
    Used,
}

impl Default for ConditionDto {
    fn default() -> Self {
        ConditionDto::New
    }
}

impl From<Condition> for ConditionDto {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::New => ConditionDto::New,
            Condition::LikeNew => ConditionDto::LikeNew,
            Condition::Good => ConditionDto::Good,
            Condition::Fair => ConditionDto::Fair,
            Condition::Used => ConditionDto::Used,
        }
    }
}

impl From<ConditionDto> for Condition {
    fn from(dto: ConditionDto) -> Self {
        match dto {
            ConditionDto::New => Condition::New,
            ConditionDto::LikeNew => Condition::LikeNew,
            ConditionDto::Good => Condition::Good,
            ConditionDto::Fair => Condition::Fair,
            ConditionDto::Used => Condition::Used,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ListingStatusDto {
    #[oai(rename = "AVAILABLE")]
    Available,
    #[oai(rename = "RESERVED")]
    Reserved,
    #[oai(rename = "SOLD")]
    Sold,
    #[oai(rename = "EXPIRED")]
    Expired,
}

impl From<ListingStatus> for ListingStatusDto {
    fn from(status: ListingStatus) -> Self {
        match status {
            ListingStatus::Available => ListingStatusDto::Available,
            ListingStatus::Reserved => ListingStatusDto::Reserved,
            ListingStatus::Sold => ListingStatusDto::Sold,
            ListingStatus::Expired => ListingStatusDto::Expired,
        }
    }
}

impl From<ListingStatusDto> for ListingStatus {
    fn from(dto: ListingStatusDto) -> Self {
        match dto {
            ListingStatusDto::Available => ListingStatus::Available,
            ListingStatusDto::Reserved => ListingStatus::Reserved,
            ListingStatusDto::Sold => ListingStatus::Sold,
            ListingStatusDto::Expired => ListingStatus::Expired,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum PaymentMethodDto {
    #[oai(rename = "CASH")]
    Cash,
    #[oai(rename = "BANK_TRANSFER")]
    BankTransfer,
    #[oai(rename = "MOBILE_PAYMENT")]
    MobilePayment,
    #[oai(rename = "CARD")]
    Card,
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cash => PaymentMethodDto::Cash,
            PaymentMethod::BankTransfer => PaymentMethodDto::BankTransfer,
            PaymentMethod::MobilePayment => PaymentMethodDto::MobilePayment,
            PaymentMethod::Card => PaymentMethodDto::Card,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(dto: PaymentMethodDto) -> Self {
        match dto {
            PaymentMethodDto::Cash => PaymentMethod::Cash,
            PaymentMethodDto::BankTransfer => PaymentMethod::BankTransfer,
            PaymentMethodDto::MobilePayment => PaymentMethod::MobilePayment,
            PaymentMethodDto::Card => PaymentMethod::Card,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ListingImageDto {
    /// Image unique identifier
    pub id: Uuid,
    /// Image URL
    pub url: String,
}

impl From<ListingImage> for ListingImageDto {
    fn from(image: ListingImage) -> Self {
        Self {
            id: image.id,
            url: image.url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryDto {
    /// Category unique identifier
    pub id: Uuid,
    /// Category name
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ListingResponse {
    /// Listing unique identifier
    pub id: Uuid,
    /// Seller who owns the listing
    pub seller_id: String,
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Brand name
    pub brand: String,
    /// Category the product belongs to
    pub category_id: Uuid,
    /// Listed price
    pub price: f64,
    /// Discounted near-expiry price
    pub discounted_price: f64,
    /// Original shelf price
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<f64>,
    /// Number of units for sale
    pub quantity: i32,
    /// Sales unit, e.g. piece or kg
    pub unit: String,
    /// Physical condition
    pub condition: ConditionDto,
    /// Manufacture date
    #[oai(skip_serializing_if_is_none)]
    pub manufacturer_date: Option<DateTime<Utc>>,
    /// Expiry date
    pub expiry_date: DateTime<Utc>,
    /// Best-before date
    #[oai(skip_serializing_if_is_none)]
    pub best_before: Option<DateTime<Utc>>,
    /// Pickup address
    pub pickup_address: String,
    /// Whether the seller offers delivery
    pub is_delivery_available: bool,
    /// Delivery fee, when delivery is offered
    #[oai(skip_serializing_if_is_none)]
    pub delivery_fee: Option<f64>,
    /// Package size
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    /// Allergen information
    #[oai(skip_serializing_if_is_none)]
    pub allergen_info: Option<String>,
    /// Storage instructions
    #[oai(skip_serializing_if_is_none)]
    pub storage_info: Option<String>,
    /// Whether the listing is a donation
    pub is_donation: bool,
    /// Marketplace commission as a fraction in [0, 1]
    pub commission: f64,
    /// Sale status
    pub status: ListingStatusDto,
    /// Product images
    pub images: Vec<ListingImageDto>,
    /// Accepted payment methods
    pub payment_methods: Vec<PaymentMethodDto>,
    /// Resolved category, present when the operation resolved one
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            seller_id: listing.seller_id.to_string(),
            title: listing.title,
            description: listing.description,
            brand: listing.brand,
            category_id: listing.category_id,
            price: listing.price,
            discounted_price: listing.discounted_price,
            original_price: listing.original_price,
            quantity: listing.quantity,
            unit: listing.unit,
            condition: listing.condition.into(),
            manufacturer_date: listing.manufacturer_date,
            expiry_date: listing.expiry_date,
            best_before: listing.best_before,
            pickup_address: listing.pickup_address,
            is_delivery_available: listing.is_delivery_available,
            delivery_fee: listing.delivery_fee,
            size: listing.size,
            allergen_info: listing.allergen_info,
            storage_info: listing.storage_info,
            is_donation: listing.is_donation,
            commission: listing.commission,
            status: listing.status.into(),
            images: listing.images.into_iter().map(Into::into).collect(),
            payment_methods: listing
                .payment_methods
                .into_iter()
                .map(Into::into)
                .collect(),
            category: None,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

impl From<CreatedListing> for ListingResponse {
    fn from(created: CreatedListing) -> Self {
        let mut response = ListingResponse::from(created.listing);
        response.category = Some(created.category.into());
        response
    }
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct BulkListingItemDto {
    /// Product title (min 3 characters)
    pub title: String,
    /// Product description (min 10 characters)
    pub description: String,
    /// Brand name (min 2 characters)
    pub brand: String,
    /// Category the product belongs to
    pub category_id: Uuid,
    /// Listed price (must be positive)
    pub price: f64,
    /// Discounted near-expiry price (must be positive)
    pub discounted_price: f64,
    /// Original shelf price
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<f64>,
    /// Number of units for sale
    #[oai(default = "default_quantity")]
    pub quantity: i32,
    /// Sales unit, e.g. piece or kg
    pub unit: String,
    /// Physical condition
    #[oai(default)]
    pub condition: ConditionDto,
    /// Manufacture date
    #[oai(skip_serializing_if_is_none)]
    pub manufacturer_date: Option<DateTime<Utc>>,
    /// Expiry date
    pub expiry_date: DateTime<Utc>,
    /// Best-before date
    #[oai(skip_serializing_if_is_none)]
    pub best_before: Option<DateTime<Utc>>,
    /// Pickup address
    pub pickup_address: String,
    /// Whether the seller offers delivery
    #[oai(default)]
    pub is_delivery_available: bool,
    /// Delivery fee, when delivery is offered
    #[oai(skip_serializing_if_is_none)]
    pub delivery_fee: Option<f64>,
    /// Package size
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    /// Allergen information
    #[oai(skip_serializing_if_is_none)]
    pub allergen_info: Option<String>,
    /// Storage instructions
    #[oai(skip_serializing_if_is_none)]
    pub storage_info: Option<String>,
    /// Whether the listing is a donation
    pub is_donation: bool,
    /// Marketplace commission as a fraction in [0, 1]
    pub commission: f64,
    /// Image URLs
    pub images: Vec<String>,
    /// Accepted payment methods
    pub payment_methods: Vec<PaymentMethodDto>,
}

impl BulkListingItemDto {
    /// Lowers the wire item into the draft the batch validator checks.
    pub fn into_draft(self) -> BulkListingDraft {
        BulkListingDraft {
            title: self.title,
            description: self.description,
            brand: self.brand,
            category_id: self.category_id,
            price: self.price,
            discounted_price: self.discounted_price,
            original_price: self.original_price,
            quantity: self.quantity,
            unit: self.unit,
            condition: self.condition.into(),
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
            image_urls: self.images,
            payment_methods: self.payment_methods.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BulkCreateListingsRequest {
    /// Items to create in one batch
    pub products: Vec<BulkListingItemDto>,
}

#[derive(Debug, Clone, Object)]
pub struct BulkCreateListingsResult {
    /// Always true on a successful batch
    pub success: bool,
    /// Number of listings created
    pub count: usize,
    /// Number of items rejected by expiry verification
    pub failed: usize,
    /// The created listings
    pub products: Vec<ListingResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct CreateListingRequest {
    /// Product title (cannot be empty)
    pub title: String,
    /// Product description
    pub description: String,
    /// Brand name
    pub brand: String,
    /// Category name; created on first use
    pub category: String,
    /// Listed price
    pub price: f64,
    /// Discounted near-expiry price
    pub discounted_price: f64,
    /// Original shelf price
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<f64>,
    /// Number of units for sale
    #[oai(default = "default_quantity")]
    pub quantity: i32,
    /// Sales unit, e.g. piece or kg
    pub unit: String,
    /// Physical condition
    #[oai(default)]
    pub condition: ConditionDto,
    /// Sale status
    pub status: ListingStatusDto,
    /// Manufacture date
    pub manufacturer_date: DateTime<Utc>,
    /// Expiry date
    pub expiry_date: DateTime<Utc>,
    /// Best-before date
    #[oai(skip_serializing_if_is_none)]
    pub best_before: Option<DateTime<Utc>>,
    /// Pickup address
    pub pickup_address: String,
    /// Whether the seller offers delivery
    #[oai(default)]
    pub is_delivery_available: bool,
    /// Delivery fee, when delivery is offered
    #[oai(skip_serializing_if_is_none)]
    pub delivery_fee: Option<f64>,
    /// Package size
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    /// Allergen information
    #[oai(skip_serializing_if_is_none)]
    pub allergen_info: Option<String>,
    /// Storage instructions
    #[oai(skip_serializing_if_is_none)]
    pub storage_info: Option<String>,
    /// Whether the listing is a donation
    pub is_donation: bool,
    /// Marketplace commission as a fraction in [0, 1]
    pub commission: f64,
    /// Image URLs
    pub images: Vec<String>,
    /// Accepted payment methods, e.g. CASH or BANK_TRANSFER
    pub payment_methods: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CreatedListingResponse {
    /// The created listing with its resolved category
    pub data: ListingResponse,
}
