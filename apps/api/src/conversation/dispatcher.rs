//! Conversation Dispatcher: decides each turn's reply from the message history.
//!
//! The opening turn is answered locally: a canned template when the first
//! message names a clear intent, the welcome menu otherwise. Every later turn
//! is forwarded to the completion collaborator with the system prompt.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::conversation::intent::detect_initial_intent;
use crate::conversation::prompts::SYSTEM_PROMPT;
use crate::conversation::templates::ConversationState;
use crate::llm_client::{Completion, LlmError};
use crate::models::ChatMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    AwaitingIntent,
    Delegating,
}

impl DispatchState {
    pub fn from_history(history: &[ChatMessage]) -> Self {
        if history.len() <= 1 {
            DispatchState::AwaitingIntent
        } else {
            DispatchState::Delegating
        }
    }
}

/// Reply for the opening turn. `None` (an empty history) gets the welcome menu.
pub fn opening_reply(first_message: Option<&ChatMessage>) -> &'static str {
    let intent = first_message.and_then(|m| detect_initial_intent(&m.content));
    debug!(?intent, "opening turn");
    intent
        .map(|i| i.state())
        .unwrap_or(ConversationState::Welcome)
        .message()
}

#[derive(Clone)]
pub struct Dispatcher {
    completion: Arc<dyn Completion>,
}

impl Dispatcher {
    pub fn new(completion: Arc<dyn Completion>) -> Self {
        Self { completion }
    }

    /// Produces the next assistant reply. Completion errors are returned as-is;
    /// the caller decides whether the turn is retried.
    pub async fn respond(&self, history: &[ChatMessage]) -> Result<String, LlmError> {
        match DispatchState::from_history(history) {
            DispatchState::AwaitingIntent => Ok(opening_reply(history.first()).to_string()),
            DispatchState::Delegating => {
                debug!(turns = history.len(), "delegating turn to completion");
                self.completion.complete(SYSTEM_PROMPT, history).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::conversation::templates::{
        NETWORK_START_MESSAGE, POST_START_MESSAGE, PROFILE_START_MESSAGE, WELCOME_MESSAGE,
    };

    /// Replays canned replies and records what it was asked.
    struct Scripted {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Completion for Scripted {
        async fn complete(
            &self,
            system: &str,
            history: &[ChatMessage],
        ) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), history.len()));
            self.replies.lock().unwrap().remove(0)
        }
    }

    #[test]
    fn test_state_from_history_length() {
        assert_eq!(DispatchState::from_history(&[]), DispatchState::AwaitingIntent);
        assert_eq!(
            DispatchState::from_history(&[ChatMessage::user("hi")]),
            DispatchState::AwaitingIntent
        );
        assert_eq!(
            DispatchState::from_history(&[
                ChatMessage::user("hi"),
                ChatMessage::assistant("hello")
            ]),
            DispatchState::Delegating
        );
    }

    #[tokio::test]
    async fn test_empty_history_gets_welcome() {
        let completion = Scripted::new(vec![]);
        let dispatcher = Dispatcher::new(completion.clone());
        let reply = dispatcher.respond(&[]).await.unwrap();
        assert_eq!(reply, WELCOME_MESSAGE);
        assert!(completion.calls().is_empty());
    }

    #[tokio::test]
    async fn test_first_message_routes_by_intent() {
        let dispatcher = Dispatcher::new(Scripted::new(vec![]));
        let cases = [
            ("Help me improve my profile", PROFILE_START_MESSAGE),
            ("I want to share my hackathon project", POST_START_MESSAGE),
            ("How do I grow network in ML?", NETWORK_START_MESSAGE),
            ("hello there", WELCOME_MESSAGE),
        ];
        for (message, expected) in cases {
            let reply = dispatcher
                .respond(&[ChatMessage::user(message)])
                .await
                .unwrap();
            assert_eq!(reply, expected, "message: {message}");
        }
    }

    #[tokio::test]
    async fn test_later_turns_delegate_with_system_prompt() {
        let completion = Scripted::new(vec![Ok("Tell me about your stack.".to_string())]);
        let dispatcher = Dispatcher::new(completion.clone());
        let history = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant(WELCOME_MESSAGE),
            ChatMessage::user("profile please"),
        ];

        let reply = dispatcher.respond(&history).await.unwrap();

        assert_eq!(reply, "Tell me about your stack.");
        assert_eq!(completion.calls(), vec![(SYSTEM_PROMPT.to_string(), 3)]);
    }

    #[tokio::test]
    async fn test_completion_error_propagates_without_retry() {
        let completion = Scripted::new(vec![
            Err(LlmError::EmptyContent),
            Ok("unused".to_string()),
        ]);
        let dispatcher = Dispatcher::new(completion.clone());
        let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];

        let result = dispatcher.respond(&history).await;

        assert!(matches!(result, Err(LlmError::EmptyContent)));
        assert_eq!(completion.calls().len(), 1);
    }
}
