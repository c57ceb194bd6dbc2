use std::fmt;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_with::TimestampSeconds;
use tracing::debug;

use super::callback::Callback;
use super::media::{
    Audio, Contact, Document, Location, Photo, Sticker, Venue, Video, VideoNote, Voice,
};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Decodes any wire entity from its raw JSON payload.
pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    serde_json::from_slice(raw)
        .with_context(|| format!("Could not decode {}", std::any::type_name::<T>()))
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    #[default]
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Private => "private",
            ChatType::Group => "group",
            ChatType::Supergroup => "supergroup",
            ChatType::Channel => "channel",
        }
    }
}

impl fmt::Display for ChatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A private conversation, a group or a channel.
///
/// `first_name` and `last_name` are only filled in for private chats,
/// `title` for everything else.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

impl Chat {
    pub fn is_group_chat(&self) -> bool {
        self.chat_type != ChatType::Private
    }
}

#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,

    // attachments, at most one of them is set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
}

/// Incoming inline query.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Query {
    pub id: String,
    pub from: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub offset: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatMember {
    pub user: User,
    // free-form, the service keeps adding new ones
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfilePhotos {
    #[serde(rename = "total_count")]
    pub count: u32,
    /// One entry per picture, each holding up to 4 sizes of it.
    #[serde(default)]
    pub photos: Vec<Vec<Photo>>,
}

/// The payload carried by an update.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateKind {
    Message(Message),
    Callback(Callback),
    Query(Query),
    /// None of the known payloads was present.
    Empty,
}

/// An incoming update.
///
/// On the wire this is an envelope with independently optional
/// `message`, `callback_query` and `inline_query` fields. Decoding keeps a
/// single one of them, preferring a callback, then an inline query, then
/// the plain message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "RawUpdate", into = "RawUpdate")]
pub struct Update {
    pub id: i64,
    pub kind: UpdateKind,
}

#[derive(Serialize, Deserialize)]
struct RawUpdate {
    update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    callback_query: Option<Callback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_query: Option<Query>,
}

impl From<RawUpdate> for Update {
    fn from(raw: RawUpdate) -> Self {
        let kind = match (raw.callback_query, raw.inline_query, raw.message) {
            (Some(callback), query, message) => {
                if query.is_some() || message.is_some() {
                    debug!(update_id = raw.update_id, "Keeping the callback, dropping the rest");
                }
                UpdateKind::Callback(callback)
            }
            (None, Some(query), message) => {
                if message.is_some() {
                    debug!(update_id = raw.update_id, "Keeping the inline query, dropping the message");
                }
                UpdateKind::Query(query)
            }
            (None, None, Some(message)) => UpdateKind::Message(message),
            (None, None, None) => UpdateKind::Empty,
        };
        Update {
            id: raw.update_id,
            kind,
        }
    }
}

impl From<Update> for RawUpdate {
    fn from(update: Update) -> Self {
        let mut raw = RawUpdate {
            update_id: update.id,
            message: None,
            callback_query: None,
            inline_query: None,
        };
        match update.kind {
            UpdateKind::Message(message) => raw.message = Some(message),
            UpdateKind::Callback(callback) => raw.callback_query = Some(callback),
            UpdateKind::Query(query) => raw.inline_query = Some(query),
            UpdateKind::Empty => {}
        }
        raw
    }
}

impl Update {
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let update: Update = decode(raw)?;
        debug!("Received {:#?}", update);
        Ok(update)
    }

    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn callback(&self) -> Option<&Callback> {
        match &self.kind {
            UpdateKind::Callback(callback) => Some(callback),
            _ => None,
        }
    }

    pub fn query(&self) -> Option<&Query> {
        match &self.kind {
            UpdateKind::Query(query) => Some(query),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, UpdateKind::Empty)
    }
}

/// Envelope wrapping every reply of the HTTP API.
#[derive(Serialize, Deserialize, Debug)]
pub struct Response<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<T> Response<T> {
    pub fn into_result(self) -> Result<T> {
        if !self.ok {
            bail!(
                "Telegram answered with an error: {}",
                self.description.unwrap_or_else(|| "no description".into())
            );
        }
        self.result.context("Telegram answered without a result")
    }
}
