use async_trait::async_trait;

use crate::domain::listing::errors::ListingError;
use crate::domain::listing::model::Listing;
use crate::domain::listing::validation::BulkListingDraft;
use crate::domain::shared::value_objects::SellerId;

pub struct BulkCreateListingsParams {
    pub seller: SellerId,
    pub drafts: Vec<BulkListingDraft>,
}

/// What came out of a bulk submission: the listings that were verified and
/// stored, and how many drafts the verifier turned away.
pub struct BulkCreateOutcome {
    pub created: Vec<Listing>,
    pub failed: usize,
}

#[async_trait]
pub trait BulkCreateListingsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: BulkCreateListingsParams,
    ) -> Result<BulkCreateOutcome, ListingError>;
}
