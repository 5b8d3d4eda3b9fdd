use super::errors::ReceiptError;

/// A single purchased line on a receipt.
///
/// `price` keeps the exact text that was submitted; it is only parsed when
/// points are calculated.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

pub struct NewItemProps {
    pub short_description: String,
    pub price: String,
}

pub struct NewReceiptProps {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<NewItemProps>,
}

impl Item {
    pub fn new(props: NewItemProps) -> Result<Self, ReceiptError> {
        if props.short_description.is_empty() {
            return Err(ReceiptError::ItemDescriptionEmpty);
        }
        if props.price.is_empty() {
            return Err(ReceiptError::ItemPriceEmpty);
        }

        Ok(Self {
            short_description: props.short_description,
            price: props.price,
        })
    }
}

impl Receipt {
    /// Builds a receipt from a submission, rejecting empty required fields.
    ///
    /// Date, time and amounts are not parsed here: malformed values are
    /// accepted and simply earn no points for the rules that read them.
    pub fn new(props: NewReceiptProps) -> Result<Self, ReceiptError> {
        if props.retailer.is_empty() {
            return Err(ReceiptError::RetailerEmpty);
        }
        if props.purchase_date.is_empty() {
            return Err(ReceiptError::PurchaseDateEmpty);
        }
        if props.purchase_time.is_empty() {
            return Err(ReceiptError::PurchaseTimeEmpty);
        }
        if props.total.is_empty() {
            return Err(ReceiptError::TotalEmpty);
        }

        let items = props
            .items
            .into_iter()
            .map(Item::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            retailer: props.retailer,
            purchase_date: props.purchase_date,
            purchase_time: props.purchase_time,
            total: props.total,
            items,
        })
    }
}
