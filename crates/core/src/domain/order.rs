use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::scalar::DisplayValue;

pub const FALLBACK_PAYMENT_URL: &str = "http://example.com/payment";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: DisplayValue,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
    #[serde(default)]
    pub user: Option<OrderUser>,
}

impl Order {
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.name.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrderUser {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    #[serde(default)]
    pub payment_url: Option<String>,
}

impl CheckoutSession {
    pub fn payment_link(&self) -> &str {
        self.payment_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(FALLBACK_PAYMENT_URL)
    }
}
