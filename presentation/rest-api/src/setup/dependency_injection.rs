use std::sync::Arc;

use logger::TracingLogger;
use persistence::receipt::repository::ReceiptRepositoryInMemory;

use business::application::receipt::get_points::GetReceiptPointsUseCaseImpl;
use business::application::receipt::process::ProcessReceiptUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::receipt::routes::ReceiptApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub receipt_api: ReceiptApi,
}

impl DependencyContainer {
    /// Builds the APIs around a fresh, empty receipt store.
    pub fn new() -> Self {
        // Infrastructure adapters
        let receipt_repository = Arc::new(ReceiptRepositoryInMemory::new());

        // Receipt use cases
        let process_use_case = Arc::new(ProcessReceiptUseCaseImpl {
            repository: receipt_repository.clone(),
            logger: Arc::new(TracingLogger::new("process_receipt")),
        });
        let get_points_use_case = Arc::new(GetReceiptPointsUseCaseImpl {
            repository: receipt_repository,
            logger: Arc::new(TracingLogger::new("get_receipt_points")),
        });

        Self {
            health_api: HealthApi::new(),
            receipt_api: ReceiptApi::new(process_use_case, get_points_use_case),
        }
    }
}

impl Default for DependencyContainer {
    fn default() -> Self {
        Self::new()
    }
}
