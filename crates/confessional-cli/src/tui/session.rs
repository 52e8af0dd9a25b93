//! Chat view-model.
//!
//! Owns everything the chat window shows: the message list, whether a reply
//! is pending, and whether the try-again prompt is offered. Rendering and
//! networking live elsewhere, so this is plain state and can be tested
//! without a terminal.

use std::fmt;

use chrono::{DateTime, Local};
use confessional_server::AnalyzeFeelingsResponse;
use uuid::Uuid;

pub const TYPING_INDICATOR: &str = "...";
pub const NO_SONG_REPLY: &str =
    "I'm having trouble finding the perfect song right now. Could you tell me more about how you're feeling?";
pub const CONNECTION_ERROR_REPLY: &str =
    "I'm having trouble connecting to the music agent. Please try again later.";
pub const TRY_AGAIN_REPLY: &str =
    "I'm ready to help you find another song. How are you feeling today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub is_typing: bool,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            is_typing: false,
            timestamp: Local::now(),
        }
    }
}

#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    processing: bool,
    show_try_again: bool,
    typing_id: Option<Uuid>,
}

impl ChatSession {
    /// Start a session with the agent's sign-on line.
    pub fn new(agent_name: &str) -> Self {
        let now = Local::now();
        let mut sign_on = ChatMessage::new(
            format!("{} has signed on at {}", agent_name, now.format("%-I:%M:%S %p")),
            Sender::Bot,
        );
        sign_on.timestamp = now;

        Self {
            messages: vec![sign_on],
            processing: false,
            show_try_again: false,
            typing_id: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn show_try_again(&self) -> bool {
        self.show_try_again
    }

    fn push(&mut self, text: impl Into<String>, sender: Sender) {
        self.messages.push(ChatMessage::new(text, sender));
    }

    /// Accept a message from the user.
    ///
    /// Returns the trimmed text to send, or `None` when the input is blank or
    /// a reply is still pending. On success the message and a typing
    /// indicator are appended.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() || self.processing {
            return None;
        }

        self.push(message, Sender::User);
        let mut typing = ChatMessage::new(TYPING_INDICATOR, Sender::Bot);
        typing.is_typing = true;
        self.typing_id = Some(typing.id);
        self.messages.push(typing);
        self.processing = true;

        Some(message.to_string())
    }

    /// Show the outcome of the pending request.
    pub fn resolve<E: fmt::Display>(&mut self, outcome: Result<AnalyzeFeelingsResponse, E>) {
        if let Some(id) = self.typing_id.take() {
            self.messages.retain(|m| m.id != id);
        }

        match outcome {
            Ok(AnalyzeFeelingsResponse {
                song: Some(song),
                themes,
                ..
            }) => {
                self.push(
                    format!("I found a song that might resonate with you: \"{song}\""),
                    Sender::Bot,
                );
                if !themes.is_empty() {
                    self.push(format!("Themes: {}", themes.join(", ")), Sender::Bot);
                }
            }
            Ok(_) => self.push(NO_SONG_REPLY, Sender::Bot),
            Err(e) => {
                log::debug!("Chat request failed: {}", e);
                self.push(CONNECTION_ERROR_REPLY, Sender::Bot);
            }
        }

        self.show_try_again = true;
        self.processing = false;
    }

    /// Dismiss the try-again prompt and invite another message.
    pub fn try_again(&mut self) {
        if !self.show_try_again {
            return;
        }
        self.show_try_again = false;
        self.push(TRY_AGAIN_REPLY, Sender::Bot);
    }
}
