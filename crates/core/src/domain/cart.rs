use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::scalar::DisplayValue;

/// Quantity used when the user did not say how many, or said something that is not a number.
pub const DEFAULT_QUANTITY: i64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Resolves a raw `quantity` slot, falling back to [`DEFAULT_QUANTITY`].
    pub fn from_slot(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok()).map(Self).unwrap_or_default()
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(DEFAULT_QUANTITY)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Option<Vec<CartLine>>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CartLine {
    pub product: CartProduct,
    pub quantity: DisplayValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CartProduct {
    pub name: String,
}
