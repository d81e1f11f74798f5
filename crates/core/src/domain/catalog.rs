use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::scalar::DisplayValue;

/// Entry of the product listing; other fields the backend sends are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub price: Decimal,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductDetail {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(rename = "countInStock")]
    pub count_in_stock: DisplayValue,
}
