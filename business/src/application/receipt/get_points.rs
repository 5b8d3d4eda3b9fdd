use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::points::PointsBreakdown;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::use_cases::get_points::{
    GetReceiptPointsParams, GetReceiptPointsUseCase,
};

pub struct GetReceiptPointsUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReceiptPointsUseCase for GetReceiptPointsUseCaseImpl {
    async fn execute(&self, params: GetReceiptPointsParams) -> Result<u64, ReceiptError> {
        self.logger
            .info(&format!("Calculating points for receipt: {}", params.id));

        let receipt = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger
                        .warn(&format!("No receipt found for id: {}", params.id));
                    ReceiptError::NotFound
                }
                other => ReceiptError::Repository(other),
            })?;

        let breakdown = PointsBreakdown::for_receipt(&receipt);
        self.logger
            .debug(&format!("Points for receipt {}: {}", params.id, breakdown));

        Ok(breakdown.total())
    }
}
