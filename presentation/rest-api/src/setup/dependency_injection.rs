use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::listing::repository::ListingRepositoryPostgres;

use openai::client::OpenAIClient;
use openai::expiry_verifier::ExpiryVerifierOpenAI;

use business::application::listing::browse::BrowseListingsUseCaseImpl;
use business::application::listing::create::CreateListingUseCaseImpl;
use business::application::listing::create_bulk::BulkCreateListingsUseCaseImpl;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub listing_api: crate::api::listing::routes::ListingApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let listing_repository = Arc::new(ListingRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool));

        let openai_config = OpenAIConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key);
        let expiry_verifier = Arc::new(ExpiryVerifierOpenAI::new(openai_client));

        // Listing use cases
        let bulk_create_use_case = Arc::new(BulkCreateListingsUseCaseImpl {
            repository: listing_repository.clone(),
            verifier: expiry_verifier,
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateListingUseCaseImpl {
            repository: listing_repository.clone(),
            categories: category_repository,
            logger: logger.clone(),
        });
        let browse_use_case = Arc::new(BrowseListingsUseCaseImpl {
            repository: listing_repository,
            logger,
        });

        let listing_api = crate::api::listing::routes::ListingApi::new(
            bulk_create_use_case,
            create_use_case,
            browse_use_case,
        );

        Ok(Self {
            health_api,
            listing_api,
        })
    }
}
