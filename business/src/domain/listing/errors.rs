use super::validation::Violation;

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("listing.title_empty")]
    TitleEmpty,
    #[error("listing.category_name_empty")]
    CategoryNameEmpty,
    #[error("listing.commission_out_of_range")]
    CommissionOutOfRange,
    #[error("listing.payment_method_unknown")]
    PaymentMethodUnknown,
    /// The batch payload broke the bulk schema; carries one entry per violation.
    #[error("listing.invalid_payload")]
    Validation(Vec<Violation>),
    /// Expiry verification rejected every item in the batch.
    #[error("listing.no_verified_listings")]
    NoVerifiedListings,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
