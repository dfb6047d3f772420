use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// One broken constraint of one item in a submitted batch.
#[derive(Object, Debug)]
pub struct ViolationDto {
    /// Position of the offending item in the submitted array
    pub index: usize,
    /// Field that broke the constraint, e.g. "price" or "images[0]"
    pub field: String,
    /// Machine-readable reason code
    pub code: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// Per-item violations, present when a request body failed validation
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<Vec<ViolationDto>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
