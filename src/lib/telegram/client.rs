use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::callback::CallbackResponse;
use super::keyboard::InlineKeyboardMarkup;
use super::recipient::Recipient;
use super::types::{decode, is_false, Message, Response};
use crate::types::BotConfig;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: String,
    text: &'a str,
    #[serde(flatten)]
    options: &'a SendOptions,
}

/// Outbound side of the bot API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_text(
        &self,
        to: &(dyn Recipient + Sync),
        text: &str,
        options: &SendOptions,
    ) -> Result<Message>;

    async fn answer_callback(&self, response: &CallbackResponse) -> Result<bool>;
}

pub struct TelegramClient {
    client: reqwest::Client,
    config: BotConfig,
}

impl TelegramClient {
    pub fn new(config: BotConfig) -> Self {
        TelegramClient {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.token,
            method
        )
    }

    async fn call<P, T>(&self, method: &str, payload: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(payload)?;
        debug!("[{}] {}", method, body);
        let resp = self
            .client
            .post(self.method_url(method))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .with_context(|| format!("Could not call {}", method))?
            .text()
            .await?;
        let response: Response<T> = decode(resp.as_bytes())?;
        response
            .into_result()
            .with_context(|| format!("{} failed", method))
    }
}

#[async_trait]
impl Transport for TelegramClient {
    async fn send_text(
        &self,
        to: &(dyn Recipient + Sync),
        text: &str,
        options: &SendOptions,
    ) -> Result<Message> {
        let payload = SendMessage {
            chat_id: to.destination(),
            text,
            options,
        };
        self.call("sendMessage", &payload).await
    }

    async fn answer_callback(&self, response: &CallbackResponse) -> Result<bool> {
        self.call("answerCallbackQuery", response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::callback::Callback;
    use crate::telegram::keyboard::InlineButton;
    use crate::telegram::types::{Chat, ChatType};
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> TelegramClient {
        TelegramClient::new(BotConfig {
            name: "test".into(),
            token: "TOKEN".into(),
            api_url: server.base_url(),
        })
    }

    fn sent_message(chat_id: i64) -> serde_json::Value {
        json!({
            "ok": true,
            "result": {
                "message_id": 10,
                "chat": {"id": chat_id, "type": "channel", "title": "News", "username": "news"},
                "date": 1700000000,
                "text": "hi"
            }
        })
    }

    #[tokio::test]
    async fn test_send_text_to_channel_uses_handle() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/botTOKEN/sendMessage")
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "chat_id": "@news",
                        "text": "hi",
                        "reply_markup": {"inline_keyboard": [[{"text": "ok", "callback_data": "ok"}]]}
                    }));
                then.status(200).json_body(sent_message(-100555));
            })
            .await;

        let channel = Chat {
            id: -100555,
            chat_type: ChatType::Channel,
            username: "news".into(),
            ..Default::default()
        };
        let options = SendOptions {
            reply_markup: Some(InlineKeyboardMarkup::new(vec![vec![InlineButton::callback(
                "ok", "ok",
            )]])),
            ..Default::default()
        };
        let message = client(&server)
            .send_text(&channel, "hi", &options)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(message.message_id, 10);
        assert_eq!(message.chat.username, "news");
    }

    #[tokio::test]
    async fn test_send_text_to_group_uses_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/botTOKEN/sendMessage")
                    .json_body(json!({"chat_id": "-42", "text": "hi", "reply_to_message_id": 3}));
                then.status(200).json_body(sent_message(-42));
            })
            .await;

        let group = Chat {
            id: -42,
            chat_type: ChatType::Group,
            username: "ignored".into(),
            ..Default::default()
        };
        let options = SendOptions {
            reply_to_message_id: Some(3),
            ..Default::default()
        };
        client(&server)
            .send_text(&group, "hi", &options)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_answer_callback() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/botTOKEN/answerCallbackQuery")
                    .json_body(json!({"callback_query_id": "abc123", "text": "Saved", "show_alert": true}));
                then.status(200).json_body(json!({"ok": true, "result": true}));
            })
            .await;

        let callback: Callback = serde_json::from_value(json!({"id": "abc123", "data": "x"})).unwrap();
        let answered = client(&server)
            .answer_callback(&callback.respond().with_text("Saved").with_alert(true))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(answered);
    }

    #[tokio::test]
    async fn test_error_envelope_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/botTOKEN/sendMessage");
                then.status(400).json_body(json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: chat not found"
                }));
            })
            .await;

        let channel = Chat {
            id: 1,
            chat_type: ChatType::Channel,
            ..Default::default()
        };
        let err = client(&server)
            .send_text(&channel, "hi", &SendOptions::default())
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("chat not found"));
    }
}
