use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::listing::errors::ListingError;
use crate::domain::listing::model::Listing;
use crate::domain::listing::value_objects::ListingStatus;
use crate::domain::shared::value_objects::SellerId;

/// Catalogue query as it arrives from the outside. Unset fields fall back
/// to the catalogue defaults: available listings, newest first, first page.
#[derive(Debug, Clone, Default)]
pub struct BrowseListingsParams {
    pub category_id: Option<Uuid>,
    pub seller_id: Option<SellerId>,
    pub status: Option<ListingStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[async_trait]
pub trait BrowseListingsUseCase: Send + Sync {
    async fn execute(&self, params: BrowseListingsParams) -> Result<Vec<Listing>, ListingError>;
}
