use poem_openapi::Object;

use business::domain::receipt::use_cases::process::{ProcessItemParams, ProcessReceiptParams};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemRequest {
    /// Short product description as printed on the receipt
    pub short_description: String,
    /// Price with two decimal places, e.g. "6.49"
    pub price: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    /// Name of the retailer or store
    pub retailer: String,
    /// Date of purchase, "YYYY-MM-DD"
    pub purchase_date: String,
    /// Time of purchase in 24-hour format, "HH:MM"
    pub purchase_time: String,
    /// Total amount paid, e.g. "35.35"
    pub total: String,
    /// Purchased items
    pub items: Vec<ItemRequest>,
}

impl From<ProcessReceiptRequest> for ProcessReceiptParams {
    fn from(request: ProcessReceiptRequest) -> Self {
        Self {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            total: request.total,
            items: request
                .items
                .into_iter()
                .map(|item| ProcessItemParams {
                    short_description: item.short_description,
                    price: item.price,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptIdResponse {
    /// Identifier assigned to the stored receipt
    pub id: String,
}

#[derive(Debug, Clone, Object)]
pub struct PointsResponse {
    /// Points awarded to the receipt
    pub points: u64,
}
