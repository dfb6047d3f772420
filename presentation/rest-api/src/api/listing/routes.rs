use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::listing::use_cases::browse::{BrowseListingsParams, BrowseListingsUseCase};
use business::domain::listing::use_cases::create::{CreateListingParams, CreateListingUseCase};
use business::domain::listing::use_cases::create_bulk::{
    BulkCreateListingsParams, BulkCreateListingsUseCase,
};
use business::domain::shared::value_objects::SellerId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::listing::dto::{
    BulkCreateListingsRequest, BulkCreateListingsResult, BulkListingItemDto, CreateListingRequest,
    CreatedListingResponse, ListingResponse, ListingStatusDto,
};
use crate::api::security::SellerBearer;
use crate::api::tags::ApiTags;

pub struct ListingApi {
    bulk_create_use_case: Arc<dyn BulkCreateListingsUseCase>,
    create_use_case: Arc<dyn CreateListingUseCase>,
    browse_use_case: Arc<dyn BrowseListingsUseCase>,
}

impl ListingApi {
    pub fn new(
        bulk_create_use_case: Arc<dyn BulkCreateListingsUseCase>,
        create_use_case: Arc<dyn CreateListingUseCase>,
        browse_use_case: Arc<dyn BrowseListingsUseCase>,
    ) -> Self {
        Self {
            bulk_create_use_case,
            create_use_case,
            browse_use_case,
        }
    }
}

/// Marketplace listing API
///
/// Endpoints for publishing near-expiry product listings and browsing the
/// catalogue.
#[OpenApi]
impl ListingApi {
    /// Create listings in bulk
    ///
    /// Validates a batch of near-expiry products, checks their expiry dates
    /// for plausibility, and stores the surviving items in one transaction.
    /// Requires a seller bearer token.
    #[oai(
        path = "/api/products/bulk",
        method = "post",
        tag = "ApiTags::Listings"
    )]
    async fn bulk_create_listings(
        &self,
        seller: SellerBearer,
        body: Json<BulkCreateListingsRequest>,
    ) -> BulkCreateListingsResponse {
        let params = BulkCreateListingsParams {
            seller: SellerId::new(seller.0),
            drafts: body
                .0
                .products
                .into_iter()
                .map(BulkListingItemDto::into_draft)
                .collect(),
        };

        match self.bulk_create_use_case.execute(params).await {
            Ok(outcome) => {
                let products: Vec<ListingResponse> =
                    outcome.created.into_iter().map(Into::into).collect();
                BulkCreateListingsResponse::Ok(Json(BulkCreateListingsResult {
                    success: true,
                    count: products.len(),
                    failed: outcome.failed,
                    products,
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => BulkCreateListingsResponse::BadRequest(json),
                    _ => BulkCreateListingsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a single listing
    ///
    /// Creates one listing, resolving its category by name and creating the
    /// category on first use. Requires a seller bearer token.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Listings")]
    async fn create_listing(
        &self,
        seller: SellerBearer,
        body: Json<CreateListingRequest>,
    ) -> CreateListingResponse {
        let params = CreateListingParams {
            seller: SellerId::new(seller.0),
            title: body.0.title,
            description: body.0.description,
            brand: body.0.brand,
            category_name: body.0.category,
            price: body.0.price,
            discounted_price: body.0.discounted_price,
            original_price: body.0.original_price,
            quantity: body.0.quantity,
            unit: body.0.unit,
            condition: body.0.condition.into(),
            status: body.0.status.into(),
            manufacturer_date: body.0.manufacturer_date,
            expiry_date: body.0.expiry_date,
            best_before: body.0.best_before,
            pickup_address: body.0.pickup_address,
            is_delivery_available: body.0.is_delivery_available,
            delivery_fee: body.0.delivery_fee,
            size: body.0.size,
            allergen_info: body.0.allergen_info,
            storage_info: body.0.storage_info,
            is_donation: body.0.is_donation,
            commission: body.0.commission,
            image_urls: body.0.images,
            payment_methods: body.0.payment_methods,
        };

        match self.create_use_case.execute(params).await {
            Ok(created) => CreateListingResponse::Ok(Json(CreatedListingResponse {
                data: created.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateListingResponse::BadRequest(json),
                    _ => CreateListingResponse::InternalError(json),
                }
            }
        }
    }

    /// Browse the catalogue
    ///
    /// Returns listings filtered by category, seller, and status, newest
    /// first. Unset filters fall back to available listings, first page.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Listings")]
    async fn browse_listings(
        &self,
        category_id: Query<Option<Uuid>>,
        seller_id: Query<Option<String>>,
        status: Query<Option<ListingStatusDto>>,
        limit: Query<Option<i64>>,
        offset: Query<Option<i64>>,
    ) -> BrowseListingsResponse {
        let params = BrowseListingsParams {
            category_id: category_id.0,
            seller_id: seller_id.0.map(SellerId::new),
            status: status.0.map(Into::into),
            limit: limit.0,
            offset: offset.0,
        };

        match self.browse_use_case.execute(params).await {
            Ok(listings) => {
                let responses: Vec<ListingResponse> =
                    listings.into_iter().map(Into::into).collect();
                BrowseListingsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                BrowseListingsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BulkCreateListingsResponse {
    #[oai(status = 200)]
    Ok(Json<BulkCreateListingsResult>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateListingResponse {
    #[oai(status = 200)]
    Ok(Json<CreatedListingResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrowseListingsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ListingResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
