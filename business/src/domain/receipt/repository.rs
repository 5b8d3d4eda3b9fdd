use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Receipt;

/// Receipt store port.
///
/// `save` assigns the identifier; there is no update or delete.
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    async fn save(&self, receipt: Receipt) -> Result<Uuid, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Receipt, RepositoryError>;
}
