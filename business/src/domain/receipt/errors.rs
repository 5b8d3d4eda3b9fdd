#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.retailer_empty")]
    RetailerEmpty,
    #[error("receipt.purchase_date_empty")]
    PurchaseDateEmpty,
    #[error("receipt.purchase_time_empty")]
    PurchaseTimeEmpty,
    #[error("receipt.total_empty")]
    TotalEmpty,
    #[error("receipt.item_description_empty")]
    ItemDescriptionEmpty,
    #[error("receipt.item_price_empty")]
    ItemPriceEmpty,
    #[error("receipt.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ReceiptError {
    /// True for the variants raised while building a receipt from a submission.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ReceiptError::NotFound | ReceiptError::Repository(_))
    }
}
