pub mod callback;
pub mod client;
pub mod keyboard;
pub mod media;
pub mod recipient;
pub mod types;

pub use callback::{Callback, CallbackResponse};
pub use client::{SendOptions, TelegramClient, Transport};
pub use recipient::Recipient;
pub use types::{decode, Chat, ChatType, Message, Query, Response, Update, UpdateKind, User};
