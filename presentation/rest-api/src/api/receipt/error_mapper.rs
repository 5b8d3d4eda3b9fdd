use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub const INVALID_RECEIPT: &str = "The receipt is invalid";
pub const RECEIPT_NOT_FOUND: &str = "No receipt found for that id";
const STORE_FAILURE: &str = "The receipt could not be stored";

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, description) = match &self {
            e if e.is_validation() => (StatusCode::BAD_REQUEST, INVALID_RECEIPT),
            // Unknown ids are a client error, not 404
            ReceiptError::NotFound => (StatusCode::BAD_REQUEST, RECEIPT_NOT_FOUND),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE),
        };

        (status, Json(ErrorResponse::new(description)))
    }
}
