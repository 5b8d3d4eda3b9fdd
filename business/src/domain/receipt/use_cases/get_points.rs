use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::receipt::errors::ReceiptError;

pub struct GetReceiptPointsParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetReceiptPointsUseCase: Send + Sync {
    async fn execute(&self, params: GetReceiptPointsParams) -> Result<u64, ReceiptError>;
}
