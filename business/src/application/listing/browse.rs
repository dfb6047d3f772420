use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::listing::errors::ListingError;
use crate::domain::listing::model::Listing;
use crate::domain::listing::repository::{ListingFilter, ListingRepository};
use crate::domain::listing::use_cases::browse::{BrowseListingsParams, BrowseListingsUseCase};
use crate::domain::logger::Logger;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

pub struct BrowseListingsUseCaseImpl {
    pub repository: Arc<dyn ListingRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseListingsUseCase for BrowseListingsUseCaseImpl {
    async fn execute(&self, params: BrowseListingsParams) -> Result<Vec<Listing>, ListingError> {
        let filter = ListingFilter {
            category_id: params.category_id,
            seller_id: params.seller_id,
            status: Some(params.status.unwrap_or_default()),
            limit: params
                .limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            offset: params.offset.unwrap_or(0).max(0),
        };

        let listings = self.repository.find_page(&filter).await?;

        self.logger
            .info(&format!("Browse returned {} listings", listings.len()));
        Ok(listings)
    }
}
