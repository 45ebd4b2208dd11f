//! Thin Telegram Bot API client.
//!
//! Long-polling `getUpdates` plus the two outbound calls the bot needs.
//! Carries no decision logic; Bot API failures surface as
//! [`ClinicError::Transport`] for the caller to log.

use clinic_core::error::{ClinicError, Result};
use clinic_core::ChatKind;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Long-poll window for `getUpdates`.
const POLL_TIMEOUT_SECS: u64 = 25;

/// An incoming update from the Bot API.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

/// An inbound chat message. `text` is absent for stickers, photos and
/// service messages; those updates are dropped by the dispatcher.
#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<TgUser>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatKind,
}

#[derive(Debug, Deserialize)]
pub struct TgUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

/// A button press on an inline keyboard.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: TgUser,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
}

/// Inline keyboard attached to an outgoing message.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// One keyboard button: a label plus either a URL or a callback token.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
}

impl InlineKeyboardButton {
    /// A button opening a URL.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            callback_data: None,
        }
    }

    /// A button sending an opaque callback token back to the bot.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: Some(data.into()),
        }
    }
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Serialize)]
struct GetUpdatesBody {
    offset: i64,
    timeout: u64,
    allowed_updates: &'static [&'static str],
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
}

#[derive(Serialize)]
struct AnswerCallbackQueryBody<'a> {
    callback_query_id: &'a str,
}

/// HTTP client for the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

impl TelegramClient {
    /// Creates a client for the given bot token.
    pub fn new(token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("https://api.telegram.org/bot{token}"),
        }
    }

    /// Long-polls for new updates starting at `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let body = GetUpdatesBody {
            offset,
            timeout: POLL_TIMEOUT_SECS,
            allowed_updates: &["message", "callback_query"],
        };
        self.call("getUpdates", &body).await
    }

    /// Sends a text message, optionally with an inline keyboard and as a
    /// reply to an earlier message.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
        reply_to_message_id: Option<i64>,
    ) -> Result<()> {
        let body = SendMessageBody {
            chat_id,
            text,
            reply_markup,
            reply_to_message_id,
        };
        // The sent Message comes back in the envelope; nothing needs it
        let _: serde_json::Value = self.call("sendMessage", &body).await?;
        Ok(())
    }

    /// Acknowledges a callback query so the client stops its spinner.
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<()> {
        let body = AnswerCallbackQueryBody { callback_query_id };
        let _: serde_json::Value = self.call("answerCallbackQuery", &body).await?;
        Ok(())
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(body)
            .send()
            .await
            .map_err(|err| ClinicError::transport(format!("{method} request failed: {err}")))?;

        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await.map_err(|err| {
            ClinicError::transport(format!("{method} returned unreadable body ({status}): {err}"))
        })?;

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(ClinicError::transport(format!(
                "{method} rejected: {description}"
            )));
        }

        envelope
            .result
            .ok_or_else(|| ClinicError::transport(format!("{method} returned ok without result")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_deserializes_chat_kind() {
        let raw = r#"{
            "update_id": 10,
            "message": {
                "message_id": 1,
                "from": {"id": 42, "username": "ivan"},
                "chat": {"id": -100, "type": "supergroup"},
                "text": "болит спина"
            }
        }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        let message = update.message.unwrap();
        assert_eq!(message.chat.kind, ChatKind::Supergroup);
        assert!(message.chat.kind.is_group());
        assert_eq!(message.from.unwrap().id, 42);
    }

    #[test]
    fn test_message_without_text() {
        let raw = r#"{
            "update_id": 11,
            "message": {
                "message_id": 2,
                "chat": {"id": 5, "type": "private"}
            }
        }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        assert!(update.message.unwrap().text.is_none());
    }

    #[test]
    fn test_button_serialization_skips_empty_side() {
        let url_button = InlineKeyboardButton::url("Сайт", "https://hunchun.ru");
        let value = serde_json::to_value(&url_button).unwrap();
        assert!(value.get("callback_data").is_none());
        assert_eq!(value["url"], "https://hunchun.ru");

        let cb_button = InlineKeyboardButton::callback("Оператор", "show_contacts");
        let value = serde_json::to_value(&cb_button).unwrap();
        assert!(value.get("url").is_none());
        assert_eq!(value["callback_data"], "show_contacts");
    }
}
