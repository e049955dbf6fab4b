//! Contextual chat assistant contract.
//!
//! Like the damage assessment, the assistant is an external text model
//! reached through a trait. This module owns the conversation it sees: the
//! system prompt, the role-tagged history and the turn-taking rules.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assessment::ModelError;

/// Name the assistant answers to.
pub const ASSISTANT_NAME: &str = "Neo";

#[derive(thiserror::Error, Debug)]
pub enum ChatError {
    #[error("chat message is empty")]
    EmptyMessage,

    #[error("chat model failed: {0}")]
    Model(#[source] ModelError),

    #[error("chat model returned an empty reply")]
    EmptyReply,
}

impl ChatError {
    /// Message safe to show to an end user in place of a reply.
    pub fn user_message(&self) -> &'static str {
        match self {
            ChatError::EmptyMessage => "Please type a question first.",
            _ => "Sorry, I couldn't get a response. Please try again.",
        }
    }
}

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }
}

/// System instructions for the assistant.
///
/// The date is passed in so the prompt is reproducible.
pub fn system_prompt(today: NaiveDate) -> String {
    format!(
        "You are a helpful AI assistant named {ASSISTANT_NAME}, embedded in the NeoSentinel \
         application.\n\
         Answer questions about asteroids, meteorite impacts and space science.\n\
         Keep every answer short, direct and easy to understand. Avoid technical jargon. \
         Be friendly and informative.\n\
         Today's date is {date}.\n\
         The application you are in simulates meteorite impacts on Earth.\n",
        date = today.format("%a %b %d %Y"),
    )
}

/// One turn of the conversation: prior history plus the new user message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<ChatMessage>,
    pub message: String,
}

impl ChatRequest {
    pub fn new(history: Vec<ChatMessage>, message: impl Into<String>) -> Self {
        Self {
            history,
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ChatError> {
        if self.message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(())
    }
}

/// A conversational text backend.
pub trait ChatModel {
    /// Reply to `message` given the system instructions and prior turns.
    fn reply(
        &self,
        system: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ModelError>;
}

impl<F> ChatModel for F
where
    F: Fn(&str, &[ChatMessage], &str) -> Result<String, ModelError>,
{
    fn reply(
        &self,
        system: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ModelError> {
        self(system, history, message)
    }
}

/// Answer one chat turn.
pub fn contextual_chat(
    model: &impl ChatModel,
    request: &ChatRequest,
    today: NaiveDate,
) -> Result<String, ChatError> {
    request.validate()?;

    debug!(
        "Chat turn with {} prior messages ({} bytes)",
        request.history.len(),
        request.message.len()
    );

    let system = system_prompt(today);
    let reply = model
        .reply(&system, &request.history, &request.message)
        .map_err(ChatError::Model)?;

    let reply = reply.trim();
    if reply.is_empty() {
        warn!("Chat model returned an empty reply");
        return Err(ChatError::EmptyReply);
    }
    Ok(reply.to_string())
}

/// Conversation state across turns.
///
/// A turn is only recorded once the model has answered, so a failed turn can
/// be retried without duplicating the question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Ask a question and record both sides of the exchange.
    pub fn send(
        &mut self,
        model: &impl ChatModel,
        message: &str,
        today: NaiveDate,
    ) -> Result<&str, ChatError> {
        let request = ChatRequest::new(self.history.clone(), message);
        let reply = contextual_chat(model, &request, today)?;

        self.history.push(ChatMessage::user(request.message));
        self.history.push(ChatMessage::model(reply));
        Ok(&self.history[self.history.len() - 1].content)
    }
}
