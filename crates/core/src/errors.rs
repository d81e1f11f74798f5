use thiserror::Error;

/// Why an action could not produce its success reply.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("backend transport failure: {0}")]
    Transport(String),
    #[error("backend returned unexpected status {0}")]
    HttpStatus(u16),
    #[error("backend payload could not be decoded: {0}")]
    Decode(String),
    #[error("required slot `{0}` is not set")]
    MissingSlot(&'static str),
}

impl ActionError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus(_) => "http_status",
            Self::Decode(_) => "decode",
            Self::MissingSlot(_) => "missing_slot",
        }
    }
}

/// Fixed apologies an action falls back to; the user never sees the error itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackReplies {
    pub not_found: Option<&'static str>,
    pub rejected: &'static str,
    pub unavailable: &'static str,
}

impl FallbackReplies {
    /// Same text whatever went wrong.
    pub const fn uniform(text: &'static str) -> Self {
        Self { not_found: None, rejected: text, unavailable: text }
    }

    pub const fn new(rejected: &'static str, unavailable: &'static str) -> Self {
        Self { not_found: None, rejected, unavailable }
    }

    pub const fn with_not_found(self, text: &'static str) -> Self {
        Self { not_found: Some(text), ..self }
    }

    pub fn user_message(&self, error: &ActionError) -> &'static str {
        match error {
            ActionError::HttpStatus(404) => self.not_found.unwrap_or(self.rejected),
            ActionError::HttpStatus(_) | ActionError::MissingSlot(_) => self.rejected,
            ActionError::Transport(_) | ActionError::Decode(_) => self.unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ActionError, FallbackReplies};

    const CART: FallbackReplies = FallbackReplies::new(
        "Could not add the item to your cart.",
        "Error connecting to the cart service.",
    );

    #[test]
    fn transport_and_decode_failures_share_the_unavailable_text() {
        assert_eq!(
            CART.user_message(&ActionError::Transport("connection refused".to_owned())),
            "Error connecting to the cart service."
        );
        assert_eq!(
            CART.user_message(&ActionError::Decode("expected value".to_owned())),
            "Error connecting to the cart service."
        );
    }

    #[test]
    fn status_failures_use_the_rejected_text() {
        assert_eq!(
            CART.user_message(&ActionError::HttpStatus(500)),
            "Could not add the item to your cart."
        );
        assert_eq!(
            CART.user_message(&ActionError::MissingSlot("item")),
            "Could not add the item to your cart."
        );
    }

    #[test]
    fn not_found_only_applies_when_declared() {
        let product = FallbackReplies::uniform("Could not fetch product details.")
            .with_not_found("Product not found.");

        assert_eq!(product.user_message(&ActionError::HttpStatus(404)), "Product not found.");
        assert_eq!(
            product.user_message(&ActionError::HttpStatus(503)),
            "Could not fetch product details."
        );
        assert_eq!(
            CART.user_message(&ActionError::HttpStatus(404)),
            "Could not add the item to your cart."
        );
    }

    #[test]
    fn error_kinds_are_stable_for_logging() {
        assert_eq!(ActionError::Transport(String::new()).kind(), "transport");
        assert_eq!(ActionError::HttpStatus(418).kind(), "http_status");
        assert_eq!(ActionError::Decode(String::new()).kind(), "decode");
        assert_eq!(ActionError::MissingSlot("item_id").kind(), "missing_slot");
    }
}
