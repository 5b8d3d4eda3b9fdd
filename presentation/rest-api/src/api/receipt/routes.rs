use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::receipt::use_cases::get_points::{
    GetReceiptPointsParams, GetReceiptPointsUseCase,
};
use business::domain::receipt::use_cases::process::ProcessReceiptUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::{PointsResponse, ProcessReceiptRequest, ReceiptIdResponse};
use crate::api::receipt::error_mapper::{INVALID_RECEIPT, RECEIPT_NOT_FOUND};
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    process_use_case: Arc<dyn ProcessReceiptUseCase>,
    get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
}

impl ReceiptApi {
    pub fn new(
        process_use_case: Arc<dyn ProcessReceiptUseCase>,
        get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
    ) -> Self {
        Self {
            process_use_case,
            get_points_use_case,
        }
    }
}

/// Receipt processing API
///
/// Endpoints for submitting receipts and reading the points they earn.
#[OpenApi]
impl ReceiptApi {
    /// Submit a receipt for processing
    ///
    /// Stores the receipt and returns the identifier assigned to it.
    #[oai(path = "/receipts/process", method = "post", tag = "ApiTags::Receipts")]
    async fn process_receipt(&self, body: Json<ProcessReceiptRequest>) -> ProcessReceiptResponse {
        match self.process_use_case.execute(body.0.into()).await {
            Ok(id) => ProcessReceiptResponse::Ok(Json(ReceiptIdResponse { id: id.to_string() })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProcessReceiptResponse::BadRequest(json),
                    _ => ProcessReceiptResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the points awarded for a receipt
    ///
    /// Points are recalculated from the stored receipt on every request.
    #[oai(path = "/receipts/:id/points", method = "get", tag = "ApiTags::Receipts")]
    async fn get_points(&self, id: Path<String>) -> GetPointsResponse {
        // Ids are only ever issued as UUIDs, so anything else is unknown
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetPointsResponse::BadRequest(Json(ErrorResponse::new(RECEIPT_NOT_FOUND)));
        };

        match self
            .get_points_use_case
            .execute(GetReceiptPointsParams { id: uuid })
            .await
        {
            Ok(points) => GetPointsResponse::Ok(Json(PointsResponse { points })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetPointsResponse::BadRequest(json),
                    _ => GetPointsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "invalid_receipt_body")]
pub enum ProcessReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptIdResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Bodies that are not JSON or miss required fields never reach the use case.
fn invalid_receipt_body(err: poem::Error) -> ProcessReceiptResponse {
    tracing::warn!("Rejected receipt body: {}", err);
    ProcessReceiptResponse::BadRequest(Json(ErrorResponse::new(INVALID_RECEIPT)))
}

#[derive(ApiResponse)]
pub enum GetPointsResponse {
    #[oai(status = 200)]
    Ok(Json<PointsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
