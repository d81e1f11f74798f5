use std::sync::Arc;

use serde::Serialize;
use storefront_actions::storefront_registry;

use crate::commands::{configured_backend, CommandResult};

#[derive(Debug, Serialize)]
struct ActionListing {
    backend: String,
    actions: Vec<String>,
}

pub fn run() -> CommandResult {
    let (_, backend) = match configured_backend("actions") {
        Ok(configured) => configured,
        Err(failure) => return failure,
    };

    let base_url = backend.base_url().to_string();
    let registry = storefront_registry(Arc::new(backend));
    CommandResult::success_with(
        "actions",
        ActionListing { backend: base_url, actions: registry.names() },
    )
}
