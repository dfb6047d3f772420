use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::listing::errors::ListingError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, ViolationDto};

impl IntoErrorResponse for ListingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ListingError::Validation(violations) => {
                let details = violations
                    .into_iter()
                    .map(|violation| ViolationDto {
                        index: violation.index,
                        field: violation.field,
                        code: violation.code,
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "listing.invalid_payload".to_string(),
                        details: Some(details),
                    }),
                )
            }
            ListingError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("listing.title_empty")),
            ),
            ListingError::CategoryNameEmpty => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("listing.category_name_empty")),
            ),
            ListingError::CommissionOutOfRange => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("listing.commission_out_of_range")),
            ),
            ListingError::PaymentMethodUnknown => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("listing.payment_method_unknown")),
            ),
            ListingError::NoVerifiedListings => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("listing.no_verified_listings")),
            ),
            ListingError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("repository.persistence")),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::listing::validation::Violation;

    #[test]
    fn should_carry_violation_details_when_validation_fails() {
        let error = ListingError::Validation(vec![Violation {
            index: 2,
            field: "price".to_string(),
            code: "listing.price_not_positive".to_string(),
        }]);

        let (status, body) = error.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "listing.invalid_payload");
        let details = body.0.details.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].index, 2);
        assert_eq!(details[0].field, "price");
        assert_eq!(details[0].code, "listing.price_not_positive");
    }

    #[test]
    fn should_map_repository_errors_to_internal_server_error() {
        let error = ListingError::Repository(RepositoryError::Persistence);

        let (status, body) = error.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "repository.persistence");
        assert!(body.0.details.is_none());
    }

    #[test]
    fn should_reject_empty_batches_as_bad_requests() {
        let (status, body) = ListingError::NoVerifiedListings.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "listing.no_verified_listings");
    }
}
