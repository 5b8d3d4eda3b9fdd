use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::receipt::model::Receipt;
use business::domain::receipt::repository::ReceiptRepository;

/// Receipt store kept in process memory. Contents are lost on restart.
#[derive(Default)]
pub struct ReceiptRepositoryInMemory {
    receipts: RwLock<HashMap<Uuid, Receipt>>,
}

impl ReceiptRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptRepository for ReceiptRepositoryInMemory {
    async fn save(&self, receipt: Receipt) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        let mut receipts = self.receipts.write().await;

        match receipts.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(receipt);
                Ok(id)
            }
            Entry::Occupied(_) => Err(RepositoryError::duplicated()),
        }
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Receipt, RepositoryError> {
        self.receipts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(RepositoryError::not_found)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use business::domain::receipt::model::Item;

    use super::*;

    fn receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "1.25".to_string(),
            items: vec![Item {
                short_description: "Pepsi - 12-oz".to_string(),
                price: "1.25".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn should_return_saved_receipt_by_id() {
        let repository = ReceiptRepositoryInMemory::new();

        let id = repository.save(receipt("Target")).await.unwrap();
        let stored = repository.get_by_id(id).await.unwrap();

        assert_eq!(stored, receipt("Target"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repository = ReceiptRepositoryInMemory::new();
        repository.save(receipt("Target")).await.unwrap();

        let result = repository.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_issue_distinct_ids_for_identical_receipts() {
        let repository = ReceiptRepositoryInMemory::new();

        let first = repository.save(receipt("Target")).await.unwrap();
        let second = repository.save(receipt("Target")).await.unwrap();

        assert_ne!(first, second);
        assert!(repository.get_by_id(first).await.is_ok());
        assert!(repository.get_by_id(second).await.is_ok());
    }

    #[tokio::test]
    async fn should_keep_every_receipt_under_concurrent_saves() {
        let repository = Arc::new(ReceiptRepositoryInMemory::new());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let repository = repository.clone();
                tokio::spawn(async move {
                    let id = repository.save(receipt(&format!("Store {n}"))).await.unwrap();
                    (id, n)
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let (id, n) = handle.await.unwrap();
            let stored = repository.get_by_id(id).await.unwrap();
            assert_eq!(stored.retailer, format!("Store {n}"));
            ids.insert(id);
        }

        assert_eq!(ids.len(), 64);
    }
}
