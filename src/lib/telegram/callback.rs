use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{decode, is_false, Message, User};

/// Press of a callback button in an inline keyboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Callback {
    pub id: String,

    /// Missing for buttons pressed in channels.
    #[serde(rename = "from", default)]
    pub sender: Option<User>,

    /// Set when the button was attached to a message sent by the bot.
    #[serde(default)]
    pub message: Option<Message>,

    /// Set instead of `message` when the button was attached to a message
    /// sent via the bot in inline mode.
    #[serde(rename = "inline_message_id", default)]
    pub message_id: String,

    /// Whatever the client sent along. Never trust it to be well-formed.
    #[serde(default)]
    pub data: String,
}

impl Callback {
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let callback: Callback = decode(raw)?;
        debug!(id = %callback.id, "Received callback");
        Ok(callback)
    }

    /// Starts an answer to this callback.
    pub fn respond(&self) -> CallbackResponse {
        CallbackResponse::new(self)
    }
}

/// Answer to a callback query, see `answerCallbackQuery`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CallbackResponse {
    // only set from the callback being answered
    #[serde(rename = "callback_query_id")]
    callback_id: String,

    /// Notification text, nothing is shown when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Show an alert instead of a notification at the top of the chat.
    #[serde(skip_serializing_if = "is_false")]
    pub show_alert: bool,

    /// URL opened by the client, only honoured for game buttons and
    /// `t.me/<bot>?start=` links.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl CallbackResponse {
    pub fn new(callback: &Callback) -> Self {
        CallbackResponse {
            callback_id: callback.id.clone(),
            text: String::new(),
            show_alert: false,
            url: String::new(),
        }
    }

    pub fn callback_id(&self) -> &str {
        &self.callback_id
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_alert(mut self, show_alert: bool) -> Self {
        self.show_alert = show_alert;
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }
}
