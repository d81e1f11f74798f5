use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use storefront_actions::{storefront_registry, ActionDispatcher, BotMessage, DispatchError};
use storefront_core::Tracker;

use crate::commands::{
    configured_backend, CommandResult, EXIT_MALFORMED_SLOT, EXIT_RUNTIME_INIT,
    EXIT_UNKNOWN_ACTION,
};

pub const DEFAULT_SENDER: &str = "storefront-cli";

#[derive(Debug, Serialize)]
struct Invocation {
    action: String,
    responses: Vec<BotMessage>,
    events: Vec<Value>,
}

pub fn run(action: &str, slots: &[String], sender: &str) -> CommandResult {
    let tracker = match tracker_from_args(sender, slots) {
        Ok(tracker) => tracker,
        Err(message) => {
            return CommandResult::failure("invoke", "malformed_slot", message, EXIT_MALFORMED_SLOT)
        }
    };

    let (_, backend) = match configured_backend("invoke") {
        Ok(configured) => configured,
        Err(failure) => return failure,
    };
    let dispatcher = ActionDispatcher::new(storefront_registry(Arc::new(backend)));

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "invoke",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                EXIT_RUNTIME_INIT,
            );
        }
    };

    match runtime.block_on(dispatcher.dispatch(action, &tracker)) {
        Ok(response) => CommandResult::success_with(
            "invoke",
            Invocation {
                action: action.to_string(),
                responses: response.responses,
                events: response.events,
            },
        ),
        Err(error @ DispatchError::UnknownAction(_)) => {
            let message = error.to_string();
            CommandResult::failure("invoke", "unknown_action", message, EXIT_UNKNOWN_ACTION)
        }
    }
}

/// Builds the conversation state from repeated `--slot name=value` arguments.
fn tracker_from_args(sender: &str, slots: &[String]) -> Result<Tracker, String> {
    let mut tracker = Tracker::new(sender);
    for raw in slots {
        let Some((name, value)) = raw.split_once('=') else {
            return Err(format!("slot `{raw}` must be written as name=value"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("slot `{raw}` has an empty name"));
        }
        tracker = tracker.with_slot(name, value);
    }
    Ok(tracker)
}

#[cfg(test)]
mod tests {
    use super::tracker_from_args;

    #[test]
    fn parses_repeated_slots() {
        let tracker = tracker_from_args(
            "cli",
            &["item=p-42".to_string(), "quantity= 3 ".to_string(), "note=a=b".to_string()],
        )
        .expect("valid slots");

        assert_eq!(tracker.sender_id.as_deref(), Some("cli"));
        assert_eq!(tracker.get_slot("item").as_deref(), Some("p-42"));
        assert_eq!(tracker.get_slot("quantity").as_deref(), Some("3"));
        assert_eq!(tracker.get_slot("note").as_deref(), Some("a=b"));
    }

    #[test]
    fn rejects_slots_without_a_name_or_separator() {
        assert!(tracker_from_args("cli", &["item".to_string()]).is_err());
        assert!(tracker_from_args("cli", &[" =p-42".to_string()]).is_err());
    }

    #[test]
    fn empty_value_reads_as_unset() {
        let tracker = tracker_from_args("cli", &["item=".to_string()]).expect("valid slot");
        assert_eq!(tracker.get_slot("item"), None);
    }
}
