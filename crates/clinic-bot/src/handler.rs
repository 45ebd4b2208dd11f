//! Update dispatch: the single point where classifier output, session
//! state and the decision matrix turn into outbound sends.

use clinic_core::error::Result;
use clinic_core::policy::{StaticReply, TextSource};
use clinic_core::{classify, decide, replies, SessionStore};
use clinic_gateway::GenerationGateway;

use crate::keyboards::{answer_keyboard, contacts_keyboard};
use crate::telegram::{CallbackQuery, Message, TelegramClient, TgUser, Update};

/// Callback token on the "contact an operator" button. Resolves to the same
/// static contacts response as `/contacts`.
const SHOW_CONTACTS_CALLBACK: &str = "show_contacts";

/// Routes inbound updates through the dialogue engine.
pub struct Dispatcher {
    store: SessionStore,
    gateway: GenerationGateway,
    client: TelegramClient,
}

impl Dispatcher {
    pub fn new(store: SessionStore, gateway: GenerationGateway, client: TelegramClient) -> Self {
        Self {
            store,
            gateway,
            client,
        }
    }

    /// Handles one update. Failures are logged and swallowed so the polling
    /// loop keeps running.
    pub async fn dispatch(&self, update: Update) {
        let result = if let Some(message) = update.message {
            self.handle_message(message).await
        } else if let Some(callback) = update.callback_query {
            self.handle_callback(callback).await
        } else {
            Ok(())
        };

        if let Err(err) = result {
            tracing::error!("update {} failed: {err}", update.update_id);
        }
    }

    async fn handle_message(&self, message: Message) -> Result<()> {
        // Messages without a text payload are dropped: no reply, no
        // session mutation
        let Some(text) = message.text.as_deref() else {
            return Ok(());
        };
        let Some(from) = message.from.as_ref() else {
            return Ok(());
        };

        match command_of(text) {
            Some("/start") => return self.handle_start(message.chat.id, from).await,
            Some("/contacts") => return self.send_contacts(message.chat.id).await,
            _ => {}
        }

        let display_name = display_name(from);
        tracing::debug!(
            "message from {display_name} ({}) in {:?}: {:.30}",
            from.id,
            message.chat.kind,
            text
        );

        let session = self.store.get_or_create(from.id, &display_name).await;
        self.store.touch(from.id).await;

        let classification = classify(text, message.chat.kind);
        let decision = decide(&classification, text, message.chat.kind, &session);

        // Commit state before dispatching so it survives a generation
        // failure
        self.store.apply(from.id, &decision.mutations).await;

        if !decision.should_respond {
            return Ok(());
        }

        match decision.text_source {
            Some(TextSource::Static(reply)) => {
                let keyboard = match &reply {
                    StaticReply::ContactsListing => Some(contacts_keyboard()),
                    StaticReply::PersonalizedGreeting(_) => {
                        answer_keyboard(decision.attach_contacts_button, decision.attach_site_button)
                    }
                    StaticReply::AskName | StaticReply::IntroductionAck(_) => None,
                };
                self.client
                    .send_message(message.chat.id, &reply.text(), keyboard.as_ref(), None)
                    .await
            }
            Some(TextSource::Generate(prompt)) => {
                let answer = self.gateway.generate(&prompt).await;
                let keyboard =
                    answer_keyboard(decision.attach_contacts_button, decision.attach_site_button);
                self.client
                    .send_message(
                        message.chat.id,
                        &answer,
                        keyboard.as_ref(),
                        Some(message.message_id),
                    )
                    .await
            }
            None => Ok(()),
        }
    }

    /// `/start`: introduction or personalized welcome depending on session
    /// state, always with the contact keyboard.
    async fn handle_start(&self, chat_id: i64, from: &TgUser) -> Result<()> {
        let display_name = display_name(from);
        let session = self.store.get_or_create(from.id, &display_name).await;
        self.store.touch(from.id).await;

        let text = if session.introduced {
            replies::start_welcome(&session.name)
        } else {
            replies::START_ANONYMOUS.to_string()
        };
        self.client
            .send_message(chat_id, &text, Some(&contacts_keyboard()), None)
            .await
    }

    /// `/contacts` and the show-contacts callback share this response.
    async fn send_contacts(&self, chat_id: i64) -> Result<()> {
        self.client
            .send_message(
                chat_id,
                replies::CONTACTS_LISTING,
                Some(&contacts_keyboard()),
                None,
            )
            .await
    }

    async fn handle_callback(&self, callback: CallbackQuery) -> Result<()> {
        tracing::debug!("callback {:?} from user {}", callback.data, callback.from.id);
        if callback.data.as_deref() == Some(SHOW_CONTACTS_CALLBACK) {
            if let Some(message) = &callback.message {
                self.send_contacts(message.chat.id).await?;
            }
        }
        self.client.answer_callback_query(&callback.id).await
    }
}

/// First token of the message when it is a bot command, with any
/// `@botname` suffix stripped.
fn command_of(text: &str) -> Option<&str> {
    let first = text.trim().split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    Some(first.split('@').next().unwrap_or(first))
}

fn display_name(from: &TgUser) -> String {
    from.username
        .clone()
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_of() {
        assert_eq!(command_of("/start"), Some("/start"));
        assert_eq!(command_of("/start@clinic_bot"), Some("/start"));
        assert_eq!(command_of("  /contacts  "), Some("/contacts"));
        assert_eq!(command_of("привет"), None);
        assert_eq!(command_of(""), None);
    }

    #[test]
    fn test_display_name_falls_back() {
        let named = TgUser {
            id: 1,
            username: Some("ivan".to_string()),
        };
        assert_eq!(display_name(&named), "ivan");

        let anonymous = TgUser {
            id: 2,
            username: None,
        };
        assert_eq!(display_name(&anonymous), "Unknown");
    }
}
