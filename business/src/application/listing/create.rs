use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::listing::errors::ListingError;
use crate::domain::listing::model::{Listing, NewListingProps};
use crate::domain::listing::repository::ListingRepository;
use crate::domain::listing::use_cases::create::{
    CreateListingParams, CreateListingUseCase, CreatedListing,
};
use crate::domain::listing::value_objects::PaymentMethod;
use crate::domain::logger::Logger;

pub struct CreateListingUseCaseImpl {
    pub repository: Arc<dyn ListingRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListingUseCase for CreateListingUseCaseImpl {
    async fn execute(&self, params: CreateListingParams) -> Result<CreatedListing, ListingError> {
        self.logger.info(&format!(
            "Creating listing \"{}\" for seller {}",
            params.title, params.seller
        ));

        if params.category_name.trim().is_empty() {
            return Err(ListingError::CategoryNameEmpty);
        }

        // Sellers type these in; "cash" and "CASH" both mean cash.
        let payment_methods = params
            .payment_methods
            .iter()
            .map(|method| {
                method
                    .trim()
                    .to_uppercase()
                    .parse::<PaymentMethod>()
                    .map_err(|_| ListingError::PaymentMethodUnknown)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let category = self.categories.get_or_create(&params.category_name).await?;

        let listing = Listing::new(NewListingProps {
            seller_id: params.seller,
            title: params.title,
            description: params.description,
            brand: params.brand,
            category_id: category.id,
            price: params.price,
            discounted_price: params.discounted_price,
            original_price: params.original_price,
            quantity: params.quantity,
            unit: params.unit,
            condition: params.condition,
            status: params.status,
            manufacturer_date: Some(params.manufacturer_date),
            expiry_date: params.expiry_date,
            best_before: params.best_before,
            pickup_address: params.pickup_address,
            is_delivery_available: params.is_delivery_available,
            delivery_fee: params.delivery_fee,
            size: params.size,
            allergen_info: params.allergen_info,
            storage_info: params.storage_info,
            is_donation: params.is_donation,
            commission: params.commission,
            image_urls: params.image_urls,
            payment_methods,
        })?;

        self.repository.save(&listing).await?;

        self.logger
            .info(&format!("Listing created with id: {}", listing.id));
        Ok(CreatedListing { listing, category })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::Category;
    use crate::domain::errors::RepositoryError;
    use crate::domain::listing::repository::ListingFilter;
    use crate::domain::listing::value_objects::{Condition, ListingStatus};
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
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn get_or_create(&self, name: &str) -> Result<Category, RepositoryError>;
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

    fn params() -> CreateListingParams {
        CreateListingParams {
            seller: SellerId::new("seller-123"),
            title: "Sourdough loaf".to_string(),
            description: "Close to its date but perfectly fine".to_string(),
            brand: "Corner Bakery".to_string(),
            category_name: "Bakery".to_string(),
            price: 4.0,
            discounted_price: 1.5,
            original_price: None,
            quantity: 2,
            unit: "loaves".to_string(),
            condition: Condition::New,
            status: ListingStatus::Available,
            manufacturer_date: Utc::now() - chrono::Duration::days(1),
            expiry_date: Utc::now() + chrono::Duration::days(3),
            best_before: None,
            pickup_address: "5 Mill Lane".to_string(),
            is_delivery_available: false,
            delivery_fee: None,
            size: None,
            allergen_info: None,
            storage_info: None,
            is_donation: false,
            commission: 0.05,
            image_urls: vec!["https://img.example.com/loaf.jpg".to_string()],
            payment_methods: vec!["CASH".to_string()],
        }
    }

    #[tokio::test]
    async fn should_create_listing_resolving_category_by_name() {
        let category_id = Uuid::new_v4();
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_or_create()
            .withf(|name: &str| name == "Bakery")
            .returning(move |name| Ok(Category::from_repository(category_id, name.to_string())));
        let mut mock_repo = MockListingRepo::new();
        mock_repo
            .expect_save()
            .withf(move |listing: &Listing| listing.category_id == category_id)
            .returning(|_| Ok(()));

        let use_case = CreateListingUseCaseImpl {
            repository: Arc::new(mock_repo),
            categories: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
        let created = result.unwrap();
        assert_eq!(created.category.name, "Bakery");
        assert_eq!(created.listing.category_id, category_id);
    }

    #[tokio::test]
    async fn should_reject_listing_when_category_name_is_blank() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories.expect_get_or_create().never();
        let mut mock_repo = MockListingRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateListingUseCaseImpl {
            repository: Arc::new(mock_repo),
            categories: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let mut blank = params();
        blank.category_name = "   ".to_string();
        let result = use_case.execute(blank).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ListingError::CategoryNameEmpty));
    }

    #[tokio::test]
    async fn should_reject_listing_when_payment_method_is_unknown() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories.expect_get_or_create().never();
        let mut mock_repo = MockListingRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateListingUseCaseImpl {
            repository: Arc::new(mock_repo),
            categories: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let mut bad = params();
        bad.payment_methods = vec!["IOU".to_string()];
        let result = use_case.execute(bad).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ListingError::PaymentMethodUnknown
        ));
    }

    #[tokio::test]
    async fn should_accept_payment_methods_in_any_case() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_or_create()
            .returning(|name| Ok(Category::from_repository(Uuid::new_v4(), name.to_string())));
        let mut mock_repo = MockListingRepo::new();
        mock_repo
            .expect_save()
            .withf(|listing: &Listing| {
                listing.payment_methods == vec![PaymentMethod::Cash, PaymentMethod::BankTransfer]
            })
            .returning(|_| Ok(()));

        let use_case = CreateListingUseCaseImpl {
            repository: Arc::new(mock_repo),
            categories: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let mut mixed = params();
        mixed.payment_methods = vec!["cash".to_string(), "bank_transfer".to_string()];
        let result = use_case.execute(mixed).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_listing_when_title_is_blank() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_or_create()
            .returning(|name| Ok(Category::from_repository(Uuid::new_v4(), name.to_string())));
        let mut mock_repo = MockListingRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateListingUseCaseImpl {
            repository: Arc::new(mock_repo),
            categories: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let mut blank = params();
        blank.title = "   ".to_string();
        let result = use_case.execute(blank).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ListingError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_or_create()
            .returning(|name| Ok(Category::from_repository(Uuid::new_v4(), name.to_string())));
        let mut mock_repo = MockListingRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateListingUseCaseImpl {
            repository: Arc::new(mock_repo),
            categories: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ListingError::Repository(_)));
    }
}
