//! Chat session: message log, delayed bot replies, simulated voice capture

use super::deferred::DeferredTask;
use super::routing::route_reply;
use crate::error::AssistantError;
use crate::i18n::Translator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays for the simulated asynchronous parts of the assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    pub voice_capture_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            voice_capture_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// One conversation with the assistant.
///
/// Replies and voice capture run as deferred tasks; each allows a single
/// pending operation. Must be driven from within a tokio runtime.
#[derive(Debug)]
pub struct ChatSession {
    translator: Translator,
    config: AssistantConfig,
    messages: Vec<ChatMessage>,
    next_id: u64,
    reply: DeferredTask<&'static str>,
    voice: DeferredTask<&'static str>,
}

impl ChatSession {
    /// Start a conversation with the welcome message
    pub fn new(translator: Translator, config: AssistantConfig) -> Self {
        let mut session = Self {
            translator,
            config,
            messages: Vec::new(),
            next_id: 1,
            reply: DeferredTask::new(),
            voice: DeferredTask::new(),
        };
        let welcome = session.translator.translate("chatbotWelcome").to_string();
        session.push(Sender::Bot, welcome);
        session
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Post a user message and schedule the bot's reply.
    ///
    /// Blank messages are ignored (`Ok(false)`). A second message while a reply
    /// is still pending is rejected with [`AssistantError::Busy`].
    pub fn send(&mut self, text: &str) -> Result<bool, AssistantError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        if self.reply.is_pending() {
            return Err(AssistantError::Busy);
        }

        let key = route_reply(text);
        self.reply
            .schedule(Duration::from_millis(self.config.reply_delay_ms), move || key)?;
        self.push(Sender::User, text.to_string());
        log::debug!("assistant reply '{}' scheduled", key);
        Ok(true)
    }

    pub fn reply_pending(&self) -> bool {
        self.reply.is_pending()
    }

    /// Wait for the pending reply and append it to the log
    pub async fn await_reply(&mut self) -> Result<Option<&ChatMessage>, AssistantError> {
        match self.reply.wait().await? {
            Some(key) => {
                let text = self.translator.translate(key).to_string();
                Ok(Some(self.push(Sender::Bot, text)))
            }
            None => Ok(None),
        }
    }

    /// Drop a pending reply without appending anything
    pub fn cancel_reply(&mut self) -> bool {
        self.reply.cancel()
    }

    /// Start simulated voice capture
    pub fn start_recording(&mut self) -> Result<(), AssistantError> {
        self.voice.schedule(
            Duration::from_millis(self.config.voice_capture_ms),
            || "voiceMessageExample",
        )
    }

    pub fn is_recording(&self) -> bool {
        self.voice.is_pending()
    }

    /// Stop recording early; nothing is transcribed
    pub fn stop_recording(&mut self) -> bool {
        self.voice.cancel()
    }

    /// Wait for capture to finish and return the transcribed draft text
    pub async fn finish_recording(&mut self) -> Result<Option<String>, AssistantError> {
        Ok(self
            .voice
            .wait()
            .await?
            .map(|key| self.translator.translate(key).to_string()))
    }
}
