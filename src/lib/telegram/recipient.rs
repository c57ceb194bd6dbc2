use tracing::warn;

use super::types::{Chat, ChatType, User};

/// Anything a message can be sent to.
pub trait Recipient {
    /// Chat target as the HTTP API expects it: the numeric id, or
    /// `@username` for channels.
    fn destination(&self) -> String;
}

impl<R: Recipient + ?Sized> Recipient for &R {
    fn destination(&self) -> String {
        (**self).destination()
    }
}

impl Recipient for User {
    fn destination(&self) -> String {
        self.id.to_string()
    }
}

impl Recipient for Chat {
    fn destination(&self) -> String {
        if self.chat_type != ChatType::Channel {
            return self.id.to_string();
        }
        if self.username.is_empty() {
            // the service will reject a bare "@"
            warn!(chat_id = self.id, "Channel has no username, destination is malformed");
        }
        format!("@{}", self.username)
    }
}
