use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SellerId;

use super::model::Listing;
use super::value_objects::ListingStatus;

/// Criteria for one page of the catalogue. `None` fields do not constrain
/// the result; paging is always explicit.
#[derive(Debug, Clone)]
pub struct ListingFilter {
    pub category_id: Option<Uuid>,
    pub seller_id: Option<SellerId>,
    pub status: Option<ListingStatus>,
    pub limit: i64,
    pub offset: i64,
}

/// Listings carry their identifiers with them, so persisting one is a plain
/// write: nothing is generated on the way in and nothing needs reading back.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn save(&self, listing: &Listing) -> Result<(), RepositoryError>;

    /// Persists the whole batch inside a single transaction. Either every
    /// listing lands with its images and payment methods, or none do.
    async fn save_batch(&self, listings: &[Listing]) -> Result<(), RepositoryError>;

    /// Newest first, constrained by the filter.
    async fn find_page(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepositoryError>;
}
