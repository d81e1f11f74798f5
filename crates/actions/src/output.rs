use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BotMessage {
    pub text: String,
}

/// Where a handler sends its reply. Owned by the caller, one per invocation.
pub trait OutputChannel: Send {
    fn utter_message(&mut self, text: String);
}

#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[BotMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}

impl OutputChannel for CollectingDispatcher {
    fn utter_message(&mut self, text: String) {
        self.messages.push(BotMessage { text });
    }
}
