//! Multi-turn chat sessions.

use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::capability::ChatConfig;
use crate::client::GenAiClient;
use crate::error::HeroResult;
use crate::extract::content_text;
use crate::observability::SpanStatus;
use crate::types::{Content, GenerateContentRequest, Part};

/// A stateful conversation with the general text model.
///
/// Clones share the same history. Turns are single-flight: the history lock
/// is held for the whole turn, so concurrent messages on one session are
/// answered one after another, in the order they acquire the lock.
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<ChatSessionInner>,
}

struct ChatSessionInner {
    id: Uuid,
    client: Arc<GenAiClient>,
    config: ChatConfig,
    history: Mutex<Vec<Content>>,
}

impl ChatSession {
    pub(crate) fn new(client: Arc<GenAiClient>, config: ChatConfig) -> Self {
        Self {
            inner: Arc::new(ChatSessionInner {
                id: Uuid::new_v4(),
                client,
                config,
                history: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Unique session identifier.
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Model serving this session.
    pub fn model(&self) -> &str {
        &self.inner.config.model
    }

    /// System instruction sent with every turn.
    pub fn system_instruction(&self) -> Option<&Content> {
        self.inner.config.system_instruction.as_ref()
    }

    /// Sends one user message and returns the model's reply.
    ///
    /// Both turns are appended to the history only when the call succeeds.
    pub async fn send_message(&self, message: &str) -> HeroResult<String> {
        let mut history = self.inner.history.lock().await;
        let observability = self.inner.client.observability();

        let mut span = observability.tracer.start_span("hero.chat_message");
        span.set_attribute("model", self.model());
        span.set_attribute("session_id", &self.inner.id.to_string());

        let user_turn = Content::user(vec![Part::text(message)]);
        let mut contents = history.clone();
        contents.push(user_turn.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: self.inner.config.system_instruction.clone(),
            ..GenerateContentRequest::default()
        };

        let result = match self.inner.client.generate_content(self.model(), &request).await {
            Ok(response) => content_text(&response),
            Err(e) => Err(e),
        };

        match &result {
            Ok(reply) => {
                history.push(user_turn);
                history.push(Content::model(vec![Part::text(reply.as_str())]));
                span.set_status(SpanStatus::Ok);
                observability.logger.debug("Chat turn completed", json!({
                    "session_id": self.inner.id.to_string(),
                    "turns": history.len(),
                }));
            }
            Err(e) => {
                span.set_status(SpanStatus::failed(e));
                observability.logger.warn("Chat turn failed", json!({
                    "session_id": self.inner.id.to_string(),
                    "error": e.to_string(),
                }));
            }
        }
        span.end();

        result
    }

    /// Snapshot of the conversation so far, oldest first.
    pub async fn history(&self) -> Vec<Content> {
        self.inner.history.lock().await.clone()
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.inner.id)
            .field("model", &self.inner.config.model)
            .finish_non_exhaustive()
    }
}
