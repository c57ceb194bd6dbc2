use serde::{Deserialize, Serialize};

use super::types::is_false;

/// Button of a reply keyboard.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(rename = "request_contact", default, skip_serializing_if = "is_false")]
    pub contact: bool,
    #[serde(rename = "request_location", default, skip_serializing_if = "is_false")]
    pub location: bool,
}

/// Button attached to a message. Only one of `url`, `data` and
/// `inline_query` is expected to be set, the service rejects the rest.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(rename = "callback_data", default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(
        rename = "switch_inline_query",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub inline_query: String,
}

impl InlineButton {
    pub fn callback(text: &str, data: &str) -> Self {
        InlineButton {
            text: text.to_string(),
            data: data.to_string(),
            ..Default::default()
        }
    }

    pub fn link(text: &str, url: &str) -> Self {
        InlineButton {
            text: text.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }
}

/// Rows of buttons shown right below the message they belong to.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineKeyboardMarkup {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_keyboard: Vec<Vec<InlineButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    /// Appends a row below the existing ones.
    pub fn row(mut self, buttons: Vec<InlineButton>) -> Self {
        self.inline_keyboard.push(buttons);
        self
    }
}
