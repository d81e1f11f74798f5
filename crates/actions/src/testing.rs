use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use storefront_core::{ActionError, BackendResponse, OutboundRequest, Tracker};

use crate::action::Action;
use crate::backend::StorefrontBackend;
use crate::output::{BotMessage, CollectingDispatcher};

/// Backend fake that replays queued outcomes and records every request.
/// With nothing queued it answers with `always`, or refuses the connection.
#[derive(Default)]
pub(crate) struct ScriptedBackend {
    outcomes: Mutex<VecDeque<Result<BackendResponse, ActionError>>>,
    always: Option<BackendResponse>,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replying(self, response: BackendResponse) -> Self {
        self.outcomes.lock().expect("lock").push_back(Ok(response));
        self
    }

    pub(crate) fn failing(self, error: ActionError) -> Self {
        self.outcomes.lock().expect("lock").push_back(Err(error));
        self
    }

    pub(crate) fn always(mut self, response: BackendResponse) -> Self {
        self.always = Some(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl StorefrontBackend for ScriptedBackend {
    async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, ActionError> {
        self.requests.lock().expect("lock").push(request);
        let queued = self.outcomes.lock().expect("lock").pop_front();
        queued.unwrap_or_else(|| {
            self.always
                .clone()
                .ok_or_else(|| ActionError::Transport("connection refused".to_owned()))
        })
    }
}

pub(crate) fn connection_refused() -> ActionError {
    ActionError::Transport("error sending request: connection refused".to_owned())
}

/// Runs an action the way the dispatcher does and returns what it uttered.
pub(crate) async fn run_action(action: &dyn Action, tracker: &Tracker) -> Vec<BotMessage> {
    let mut output = CollectingDispatcher::new();
    let events = action.run(&mut output, tracker).await;
    assert!(events.is_empty(), "storefront actions never emit events");
    output.into_messages()
}

pub(crate) async fn single_reply(action: &dyn Action, tracker: &Tracker) -> String {
    let mut messages = run_action(action, tracker).await;
    assert_eq!(messages.len(), 1, "every invocation utters exactly one message");
    messages.remove(0).text
}
