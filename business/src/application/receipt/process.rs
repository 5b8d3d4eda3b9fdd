use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::{NewItemProps, NewReceiptProps, Receipt};
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};

pub struct ProcessReceiptUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessReceiptUseCase for ProcessReceiptUseCaseImpl {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<Uuid, ReceiptError> {
        self.logger.info(&format!(
            "Processing receipt from {} with {} items",
            params.retailer,
            params.items.len()
        ));

        let receipt = Receipt::new(NewReceiptProps {
            retailer: params.retailer,
            purchase_date: params.purchase_date,
            purchase_time: params.purchase_time,
            total: params.total,
            items: params
                .items
                .into_iter()
                .map(|item| NewItemProps {
                    short_description: item.short_description,
                    price: item.price,
                })
                .collect(),
        })
        .inspect_err(|e| self.logger.warn(&format!("Rejected receipt: {}", e)))?;

        let id = self.repository.save(receipt).await.inspect_err(|e| {
            self.logger.error(&format!("Failed to store receipt: {}", e));
        })?;

        self.logger.info(&format!("Receipt stored with id: {}", id));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::receipt::use_cases::process::ProcessItemParams;
    use mockall::mock;

    mock! {
        pub ReceiptRepo {}

        #[async_trait]
        impl ReceiptRepository for ReceiptRepo {
            async fn save(&self, receipt: Receipt) -> Result<Uuid, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Receipt, RepositoryError>;
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

    fn params() -> ProcessReceiptParams {
        ProcessReceiptParams {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "2.65".to_string(),
            items: vec![
                ProcessItemParams {
                    short_description: "Pepsi - 12-oz".to_string(),
                    price: "1.25".to_string(),
                },
                ProcessItemParams {
                    short_description: "Dasani".to_string(),
                    price: "1.40".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn should_store_receipt_and_return_generated_id() {
        let generated_id = Uuid::new_v4();
        let mut mock_repo = MockReceiptRepo::new();
        mock_repo
            .expect_save()
            .withf(|receipt| receipt.retailer == "Walgreens" && receipt.items.len() == 2)
            .times(1)
            .returning(move |_| Ok(generated_id));

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert_eq!(result.unwrap(), generated_id);
    }

    #[tokio::test]
    async fn should_not_store_receipt_when_retailer_is_empty() {
        let mut mock_repo = MockReceiptRepo::new();
        mock_repo.expect_save().never();

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut params = params();
        params.retailer = String::new();
        let result = use_case.execute(params).await;

        assert!(matches!(result.unwrap_err(), ReceiptError::RetailerEmpty));
    }

    #[tokio::test]
    async fn should_not_store_receipt_when_an_item_is_incomplete() {
        let mut mock_repo = MockReceiptRepo::new();
        mock_repo.expect_save().never();

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut params = params();
        params.items[1].short_description = String::new();
        let result = use_case.execute(params).await;

        assert!(matches!(
            result.unwrap_err(),
            ReceiptError::ItemDescriptionEmpty
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockReceiptRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ReceiptError::Repository(RepositoryError::Duplicated)
        ));
    }
}
