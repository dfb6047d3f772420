use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::listing::errors::ListingError;
use crate::domain::listing::model::{Listing, NewListingProps};
use crate::domain::listing::repository::ListingRepository;
use crate::domain::listing::services::{ExpiryCandidate, ExpiryVerifierService};
use crate::domain::listing::use_cases::create_bulk::{
    BulkCreateListingsParams, BulkCreateListingsUseCase, BulkCreateOutcome,
};
use crate::domain::listing::validation::validate_bulk_drafts;
use crate::domain::listing::value_objects::ListingStatus;
use crate::domain::logger::Logger;

pub struct BulkCreateListingsUseCaseImpl {
    pub repository: Arc<dyn ListingRepository>,
    pub verifier: Arc<dyn ExpiryVerifierService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BulkCreateListingsUseCase for BulkCreateListingsUseCaseImpl {
    async fn execute(
        &self,
        params: BulkCreateListingsParams,
    ) -> Result<BulkCreateOutcome, ListingError> {
        let BulkCreateListingsParams { seller, drafts } = params;

        self.logger.info(&format!(
            "Bulk submission of {} drafts from seller {}",
            drafts.len(),
            seller
        ));

        let violations = validate_bulk_drafts(&drafts);
        if !violations.is_empty() {
            self.logger.warn(&format!(
                "Bulk submission rejected with {} violations",
                violations.len()
            ));
            return Err(ListingError::Validation(violations));
        }

        if drafts.is_empty() {
            return Err(ListingError::NoVerifiedListings);
        }

        let candidates: Vec<ExpiryCandidate> = drafts
            .iter()
            .map(|draft| ExpiryCandidate {
                title: draft.title.clone(),
                brand: draft.brand.clone(),
                expiry_date: draft.expiry_date,
                manufacturer_date: draft.manufacturer_date,
                best_before: draft.best_before,
                storage_info: draft.storage_info.clone(),
            })
            .collect();
        let verdicts = self.verifier.verify_batch(&candidates).await;

        let total = drafts.len();
        let mut listings = Vec::new();
        for (draft, verified) in drafts.into_iter().zip(verdicts) {
            if !verified {
                continue;
            }
            listings.push(Listing::new(NewListingProps {
                seller_id: seller.clone(),
                title: draft.title,
                description: draft.description,
                brand: draft.brand,
                category_id: draft.category_id,
                price: draft.price,
                discounted_price: draft.discounted_price,
                original_price: draft.original_price,
                quantity: draft.quantity,
                unit: draft.unit,
                condition: draft.condition,
                status: ListingStatus::default(),
                manufacturer_date: draft.manufacturer_date,
                expiry_date: draft.expiry_date,
                best_before: draft.best_before,
                pickup_address: draft.pickup_address,
                is_delivery_available: draft.is_delivery_available,
                delivery_fee: draft.delivery_fee,
                size: draft.size,
                allergen_info: draft.allergen_info,
                storage_info: draft.storage_info,
                is_donation: draft.is_donation,
                commission: draft.commission,
                image_urls: draft.image_urls,
                payment_methods: draft.payment_methods,
            })?);
        }
        let failed = total - listings.len();

        if listings.is_empty() {
            self.logger
                .warn("Bulk submission rejected: no draft passed expiry verification");
            return Err(ListingError::NoVerifiedListings);
        }

        self.repository.save_batch(&listings).await?;

        self.logger.info(&format!(
            "Stored {} listings for seller {}, {} turned away by verification",
            listings.len(),
            seller,
            failed
        ));
        Ok(BulkCreateOutcome {
            created: listings,
            failed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::listing::repository::ListingFilter;
    use crate::domain::listing::validation::BulkListingDraft;
    use crate::domain::listing::value_objects::{Condition, PaymentMethod};
    use crate::domain::shared::value_objects::SellerId;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ListingRepo {}

        #[async_trait]
        impl ListingRepository for ListingRepo {
            async fn save(&self, listing: &Listing) -> Result<(), RepositoryError>;
            async fn save_batch(&self, listings: &[Listing]) -> Result<(), RepositoryError>;
            async fn find_page(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepositoryError>;
        }
    }

    mock! {
        pub Verifier {}

        #[async_trait]
        impl ExpiryVerifierService for Verifier {
            async fn verify_batch(&self, candidates: &[ExpiryCandidate]) -> Vec<bool>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn draft(title: &str) -> BulkListingDraft {
        BulkListingDraft {
            title: title.to_string(),
            description: "Close to its date but perfectly fine".to_string(),
            brand: "Corner Bakery".to_string(),
            category_id: Uuid::new_v4(),
            price: 4.0,
            discounted_price: 1.5,
            original_price: Some(4.5),
            quantity: 2,
            unit: "loaves".to_string(),
            condition: Condition::New,
            manufacturer_date: None,
            expiry_date: Utc::now() + chrono::Duration::days(3),
            best_before: None,
            pickup_address: "5 Mill Lane".to_string(),
            is_delivery_available: false,
            delivery_fee: None,
            size: None,
            allergen_info: Some("Wheat".to_string()),
            storage_info: Some("Keep cool".to_string()),
            is_donation: false,
            commission: 0.05,
            image_urls: vec!["https://img.example.com/loaf.jpg".to_string()],
            payment_methods: vec![PaymentMethod::Cash],
        }
    }

    fn seller() -> SellerId {
        SellerId::new("seller-123")
    }

    #[tokio::test]
    async fn should_store_every_draft_when_all_pass_verification() {
        let mut mock_repo = MockListingRepo::new();
        mock_repo
            .expect_save_batch()
            .withf(|listings: &[Listing]| listings.len() == 2 && listings[0].images.len() == 1)
            .returning(|_| Ok(()));
        let mut mock_verifier = MockVerifier::new();
        mock_verifier
            .expect_verify_batch()
            .withf(|candidates: &[ExpiryCandidate]| candidates.len() == 2)
            .returning(|_| vec![true, true]);

        let use_case = BulkCreateListingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            verifier: Arc::new(mock_verifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateListingsParams {
                seller: seller(),
                drafts: vec![draft("Sourdough loaf"), draft("Rye loaf")],
            })
            .await;

        assert!(result.is_ok());
        let outcome = result.unwrap();
        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.failed, 0);
        assert_ne!(outcome.created[0].id, outcome.created[1].id);
        assert_eq!(outcome.created[0].seller_id, seller());
    }

    #[tokio::test]
    async fn should_reject_whole_batch_when_any_draft_is_invalid() {
        let mut mock_repo = MockListingRepo::new();
        mock_repo.expect_save_batch().never();
        let mut mock_verifier = MockVerifier::new();
        mock_verifier.expect_verify_batch().never();

        let mut bad = draft("Rye loaf");
        bad.price = -5.0;

        let use_case = BulkCreateListingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            verifier: Arc::new(mock_verifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateListingsParams {
                seller: seller(),
                drafts: vec![draft("Sourdough loaf"), bad],
            })
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            ListingError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].index, 1);
                assert_eq!(violations[0].field, "price");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_store_only_drafts_the_verifier_accepted() {
        let mut mock_repo = MockListingRepo::new();
        mock_repo
            .expect_save_batch()
            .withf(|listings: &[Listing]| {
                listings.len() == 2
                    && listings[0].title == "Sourdough loaf"
                    && listings[1].title == "Oat biscuits"
            })
            .returning(|_| Ok(()));
        let mut mock_verifier = MockVerifier::new();
        mock_verifier
            .expect_verify_batch()
            .returning(|_| vec![true, false, true]);

        let use_case = BulkCreateListingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            verifier: Arc::new(mock_verifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateListingsParams {
                seller: seller(),
                drafts: vec![
                    draft("Sourdough loaf"),
                    draft("Tinned peaches"),
                    draft("Oat biscuits"),
                ],
            })
            .await;

        assert!(result.is_ok());
        let outcome = result.unwrap();
        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.failed, 1);
    }

    #[tokio::test]
    async fn should_reject_batch_when_no_draft_survives_verification() {
        let mut mock_repo = MockListingRepo::new();
        mock_repo.expect_save_batch().never();
        let mut mock_verifier = MockVerifier::new();
        mock_verifier
            .expect_verify_batch()
            .returning(|_| vec![false, false]);

        let use_case = BulkCreateListingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            verifier: Arc::new(mock_verifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateListingsParams {
                seller: seller(),
                drafts: vec![draft("Sourdough loaf"), draft("Rye loaf")],
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ListingError::NoVerifiedListings
        ));
    }

    #[tokio::test]
    async fn should_reject_empty_batch_without_calling_collaborators() {
        let mut mock_repo = MockListingRepo::new();
        mock_repo.expect_save_batch().never();
        let mut mock_verifier = MockVerifier::new();
        mock_verifier.expect_verify_batch().never();

        let use_case = BulkCreateListingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            verifier: Arc::new(mock_verifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateListingsParams {
                seller: seller(),
                drafts: vec![],
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ListingError::NoVerifiedListings
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockListingRepo::new();
        mock_repo
            .expect_save_batch()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut mock_verifier = MockVerifier::new();
        mock_verifier.expect_verify_batch().returning(|_| vec![true]);

        let use_case = BulkCreateListingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            verifier: Arc::new(mock_verifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkCreateListingsParams {
                seller: seller(),
                drafts: vec![draft("Sourdough loaf")],
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ListingError::Repository(_)));
    }
}
