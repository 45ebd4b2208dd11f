//! Dialogue policy: the single decision matrix over classification, chat
//! kind and session state.
//!
//! The policy is a pure function. It produces a [`ResponseDecision`] whose
//! session mutations the caller commits through
//! [`crate::session::SessionStore::apply`] before dispatching the reply, so
//! state changes survive a downstream generation failure.

use crate::classify::{ChatKind, Classification, Intent};
use crate::keywords::{contains_any, WEIGHT_KEYWORDS, WEIGHT_LOSS_TOPIC};
use crate::name::extract_name;
use crate::replies;
use crate::session::UserSession;

/// A fixed reply selected by the policy. The transport maps each variant to
/// its text and keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticReply {
    /// The operator contacts listing.
    ContactsListing,
    /// Ask an anonymous user for their name.
    AskName,
    /// Greeting addressed to an introduced user by name.
    PersonalizedGreeting(String),
    /// One-time acknowledgement of an introduction.
    IntroductionAck(String),
}

impl StaticReply {
    /// Renders the reply text.
    pub fn text(&self) -> String {
        match self {
            StaticReply::ContactsListing => replies::CONTACTS_LISTING.to_string(),
            StaticReply::AskName => replies::ASK_NAME.to_string(),
            StaticReply::PersonalizedGreeting(name) => replies::personalized_greeting(name),
            StaticReply::IntroductionAck(name) => replies::introduction_ack(name),
        }
    }
}

/// Where the outgoing text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A fixed reply, sent as is.
    Static(StaticReply),
    /// A prompt for the generation gateway.
    Generate(String),
}

/// A session change the policy wants committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMutation {
    /// Record the user's name and mark the session introduced.
    SetName(String),
    /// Tag a discussed topic.
    AddTopic(String),
}

/// The policy's verdict for one inbound message.
#[derive(Debug, Clone)]
pub struct ResponseDecision {
    /// False means the message is ignored entirely.
    pub should_respond: bool,
    /// What to send, when responding.
    pub text_source: Option<TextSource>,
    /// Attach the "contact an operator" affordance.
    pub attach_contacts_button: bool,
    /// Attach the website link affordance.
    pub attach_site_button: bool,
    /// Session changes to commit before the reply is dispatched.
    pub mutations: Vec<SessionMutation>,
}

impl ResponseDecision {
    fn ignore() -> Self {
        Self {
            should_respond: false,
            text_source: None,
            attach_contacts_button: false,
            attach_site_button: false,
            mutations: Vec::new(),
        }
    }

    fn respond(text_source: TextSource, buttons: bool) -> Self {
        Self {
            should_respond: true,
            text_source: Some(text_source),
            attach_contacts_button: buttons,
            attach_site_button: buttons,
            mutations: Vec::new(),
        }
    }
}

/// Decides how to handle one classified message.
///
/// Implements the decision matrix:
///
/// | Classification | Private                         | Group              |
/// |----------------|---------------------------------|--------------------|
/// | ContactRequest | contacts listing + buttons      | same               |
/// | Greeting       | greeting or name request        | no response        |
/// | TopicTriggered | -                               | generate + buttons |
/// | NameCandidate  | introduction transition         | -                  |
/// | Generic        | generate + buttons              | no response        |
///
/// A Generic message in a private chat from a not-yet-introduced user is
/// first run through the name extractor; a hit upgrades it to
/// `NameCandidate`, which emits the introduction acknowledgement and
/// suppresses all other processing for that message. Group messages are
/// never treated as introductions.
pub fn decide(
    classification: &Classification,
    text: &str,
    chat_kind: ChatKind,
    session: &UserSession,
) -> ResponseDecision {
    let mut intent = classification.intent.clone();

    if intent == Intent::Generic && !chat_kind.is_group() && !session.introduced {
        if let Some(name) = extract_name(text) {
            intent = Intent::NameCandidate(name);
        }
    }

    match intent {
        Intent::ContactRequest => {
            ResponseDecision::respond(TextSource::Static(StaticReply::ContactsListing), true)
        }

        Intent::Greeting => {
            if chat_kind.is_group() {
                // Greetings in multi-party chats are noise
                return ResponseDecision::ignore();
            }
            if session.introduced {
                ResponseDecision::respond(
                    TextSource::Static(StaticReply::PersonalizedGreeting(session.name.clone())),
                    true,
                )
            } else {
                ResponseDecision::respond(TextSource::Static(StaticReply::AskName), false)
            }
        }

        Intent::TopicTriggered => {
            // Group answers are built from the raw text, unpersonalized
            ResponseDecision::respond(TextSource::Generate(text.to_string()), true)
        }

        Intent::NameCandidate(name) => {
            let mut decision = ResponseDecision::respond(
                TextSource::Static(StaticReply::IntroductionAck(name.clone())),
                false,
            );
            decision.mutations.push(SessionMutation::SetName(name));
            decision
        }

        Intent::Generic => {
            if chat_kind.is_group() {
                // Without a topic match a group message never gets a reply
                return ResponseDecision::ignore();
            }

            let lowered = text.to_lowercase();
            let mut mutations = Vec::new();
            let mut topics: Vec<&str> = session.topics.iter().map(String::as_str).collect();
            if contains_any(&lowered, WEIGHT_KEYWORDS) {
                mutations.push(SessionMutation::AddTopic(WEIGHT_LOSS_TOPIC.to_string()));
                if !session.topics.iter().any(|t| t == WEIGHT_LOSS_TOPIC) {
                    topics.push(WEIGHT_LOSS_TOPIC);
                }
            }

            let prompt = if session.introduced {
                replies::personalized_prompt(&session.name, &topics, text)
            } else {
                text.to_string()
            };

            let mut decision = ResponseDecision::respond(TextSource::Generate(prompt), true);
            decision.mutations = mutations;
            decision
        }
    }
}
