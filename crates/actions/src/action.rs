use async_trait::async_trait;
use serde_json::Value;
use storefront_core::{ActionError, FallbackReplies, Tracker};
use tracing::{info, warn};

use crate::output::OutputChannel;

/// One intent handler.
///
/// Implementors provide the success path in [`Action::reply`]; the provided
/// [`Action::run`] turns any [`ActionError`] into the handler's fallback text,
/// utters exactly one message and never returns follow-up events.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    fn fallback(&self) -> FallbackReplies;

    async fn reply(&self, tracker: &Tracker) -> Result<String, ActionError>;

    async fn run(&self, output: &mut dyn OutputChannel, tracker: &Tracker) -> Vec<Value> {
        let sender_id = tracker.sender_id.as_deref().unwrap_or("unknown");
        let text = match self.reply(tracker).await {
            Ok(text) => {
                info!(
                    event_name = "action.completed",
                    action = self.name(),
                    sender_id,
                    "action replied with success text"
                );
                text
            }
            Err(error) => {
                warn!(
                    event_name = "action.degraded",
                    action = self.name(),
                    sender_id,
                    error_kind = error.kind(),
                    error = %error,
                    "action fell back to apology text"
                );
                self.fallback().user_message(&error).to_owned()
            }
        };

        output.utter_message(text);
        Vec::new()
    }
}
