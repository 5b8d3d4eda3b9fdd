use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::receipt::errors::ReceiptError;

pub struct ProcessItemParams {
    pub short_description: String,
    pub price: String,
}

pub struct ProcessReceiptParams {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<ProcessItemParams>,
}

#[async_trait]
pub trait ProcessReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<Uuid, ReceiptError>;
}
