use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use storefront_core::Tracker;
use thiserror::Error;

use crate::action::Action;
use crate::output::{BotMessage, CollectingDispatcher};

#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn register<A>(&mut self, action: A)
    where
        A: Action + 'static,
    {
        self.actions.insert(action.name().to_string(), Arc::new(action));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.actions.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionResponse {
    pub events: Vec<Value>,
    pub responses: Vec<BotMessage>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No registered action found for name '{0}'.")]
    UnknownAction(String),
}

/// Runs registered actions by name. Cheap to clone; the registry is shared read-only.
#[derive(Clone)]
pub struct ActionDispatcher {
    registry: Arc<ActionRegistry>,
}

impl ActionDispatcher {
    pub fn new(registry: ActionRegistry) -> Self {
        Self { registry: Arc::new(registry) }
    }

    pub fn action_names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub async fn dispatch(
        &self,
        action_name: &str,
        tracker: &Tracker,
    ) -> Result<ActionResponse, DispatchError> {
        let action = self
            .registry
            .get(action_name)
            .ok_or_else(|| DispatchError::UnknownAction(action_name.to_owned()))?;

        let mut output = CollectingDispatcher::new();
        let events = action.run(&mut output, tracker).await;

        Ok(ActionResponse { events, responses: output.into_messages() })
    }
}
