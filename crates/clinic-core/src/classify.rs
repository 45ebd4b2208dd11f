//! Intent classification for inbound messages.
//!
//! A pure, stateless function over the message text and chat kind. The
//! keyword tables it consults live in [`crate::keywords`].

use serde::Deserialize;

use crate::keywords::{matched_keywords, CONTACT_KEYWORDS, GREETING_KEYWORDS, TRIGGER_KEYWORDS};

/// Greeting detection only applies to short messages; longer sentences that
/// merely contain a greeting word are treated as real questions.
const GREETING_MAX_TOKENS: usize = 5;

/// The kind of chat a message arrived in, as reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    /// True for multi-party contexts where unsolicited replies must be
    /// gated by domain keywords.
    pub fn is_group(&self) -> bool {
        !matches!(self, ChatKind::Private)
    }
}

/// The classified category of an inbound message.
///
/// `NameCandidate` is never produced by [`classify`] itself: the dialogue
/// policy upgrades a `Generic` classification to it when the name extractor
/// fires for an anonymous session in a private chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The user asks for an operator or a direct contact.
    ContactRequest,
    /// A short greeting or courtesy phrase.
    Greeting,
    /// A group message containing a domain keyword.
    TopicTriggered,
    /// An introduction carrying the extracted name.
    NameCandidate(String),
    /// A free-form question warranting full generation.
    Generic,
}

/// Classifier output: the intent plus the matched keywords, kept for
/// diagnostics and logging.
#[derive(Debug, Clone)]
pub struct Classification {
    pub intent: Intent,
    pub matched: Vec<&'static str>,
}

/// Classifies a message. First match wins, in this priority order:
///
/// 1. `ContactRequest` - contact keywords are an unambiguous, cheap
///    interrupt and preempt everything else.
/// 2. `Greeting` - greeting keyword plus the short-message heuristic.
/// 3. `TopicTriggered` - only in group contexts, where unconditional replies
///    would be noisy. Private messages are never gated on domain keywords.
/// 4. `Generic` otherwise.
pub fn classify(text: &str, chat_kind: ChatKind) -> Classification {
    let lowered = text.to_lowercase();

    let contact_hits = matched_keywords(&lowered, CONTACT_KEYWORDS);
    if !contact_hits.is_empty() {
        return Classification {
            intent: Intent::ContactRequest,
            matched: contact_hits,
        };
    }

    if text.split_whitespace().count() < GREETING_MAX_TOKENS {
        let greeting_hits = matched_keywords(&lowered, GREETING_KEYWORDS);
        if !greeting_hits.is_empty() {
            tracing::debug!("greeting detected: {:?}", greeting_hits);
            return Classification {
                intent: Intent::Greeting,
                matched: greeting_hits,
            };
        }
    }

    if chat_kind.is_group() {
        let topic_hits = matched_keywords(&lowered, TRIGGER_KEYWORDS);
        if !topic_hits.is_empty() {
            return Classification {
                intent: Intent::TopicTriggered,
                matched: topic_hits,
            };
        }
    }

    Classification {
        intent: Intent::Generic,
        matched: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_request() {
        let c = classify("дайте телефон оператора", ChatKind::Private);
        assert_eq!(c.intent, Intent::ContactRequest);
        assert!(c.matched.contains(&"телефон"));
        assert!(c.matched.contains(&"оператор"));
    }

    #[test]
    fn test_contact_preempts_greeting() {
        // Both keyword families match; contact must win
        let c = classify("привет, дайте контакт", ChatKind::Private);
        assert_eq!(c.intent, Intent::ContactRequest);
    }

    #[test]
    fn test_short_greeting() {
        let c = classify("Привет!", ChatKind::Private);
        assert_eq!(c.intent, Intent::Greeting);
    }

    #[test]
    fn test_long_message_with_greeting_word_is_not_greeting() {
        let c = classify(
            "Добрый день, подскажите пожалуйста где посмотреть цены на лечение",
            ChatKind::Private,
        );
        assert_ne!(c.intent, Intent::Greeting);
    }

    #[test]
    fn test_group_topic_gate() {
        let c = classify("у меня болит спина", ChatKind::Group);
        assert_eq!(c.intent, Intent::TopicTriggered);
        assert!(c.matched.contains(&"спина"));

        let c = classify("кто смотрел вчерашний матч?", ChatKind::Group);
        assert_eq!(c.intent, Intent::Generic);
    }

    #[test]
    fn test_private_is_never_topic_gated() {
        // The same domain text in a private chat falls through to Generic
        let c = classify("у меня болит спина", ChatKind::Private);
        assert_eq!(c.intent, Intent::Generic);
    }

    #[test]
    fn test_supergroup_counts_as_group() {
        let c = classify("сколько стоит тур?", ChatKind::Supergroup);
        assert_eq!(c.intent, Intent::TopicTriggered);
    }
}
