//! End-to-end dialogue scenarios over the classifier, policy and session
//! store, without transport or generation.

use clinic_core::policy::{StaticReply, TextSource};
use clinic_core::{classify, decide, ChatKind, SessionStore};

/// Runs one inbound message through the full core pipeline, committing
/// session mutations the way the dispatcher does.
async fn process(
    store: &SessionStore,
    user_id: i64,
    text: &str,
    chat_kind: ChatKind,
) -> clinic_core::ResponseDecision {
    let session = store.get_or_create(user_id, "tester").await;
    store.touch(user_id).await;
    let classification = classify(text, chat_kind);
    let decision = decide(&classification, text, chat_kind, &session);
    store.apply(user_id, &decision.mutations).await;
    decision
}

#[tokio::test]
async fn private_dialogue_from_greeting_to_personalized_answer() {
    let store = SessionStore::new();

    // 1. Anonymous greeting: asked for a name
    let decision = process(&store, 7, "привет", ChatKind::Private).await;
    assert_eq!(
        decision.text_source,
        Some(TextSource::Static(StaticReply::AskName))
    );

    // 2. Introduction: transition fires, nothing else happens
    let decision = process(&store, 7, "меня зовут Олег", ChatKind::Private).await;
    assert_eq!(
        decision.text_source,
        Some(TextSource::Static(StaticReply::IntroductionAck(
            "Олег".to_string()
        )))
    );
    let session = store.get_or_create(7, "tester").await;
    assert!(session.introduced);
    assert_eq!(session.name, "Олег");

    // 3. Weight question: topic tagged, prompt personalized
    let decision = process(&store, 7, "хочу похудеть к лету", ChatKind::Private).await;
    match decision.text_source {
        Some(TextSource::Generate(prompt)) => {
            assert!(prompt.starts_with("Запрос от пользователя по имени Олег."));
            assert!(prompt.contains("похудение"));
        }
        other => panic!("expected generation prompt, got {other:?}"),
    }

    // 4. Follow-up question carries the accumulated topic list
    let decision = process(
        &store,
        7,
        "сколько стоит такое лечение в вашей клинике?",
        ChatKind::Private,
    )
    .await;
    match decision.text_source {
        Some(TextSource::Generate(prompt)) => {
            assert!(prompt.starts_with(
                "Запрос от пользователя по имени Олег. \
                 Ранее интересовался темами: похудение. Запрос:"
            ));
        }
        other => panic!("expected generation prompt, got {other:?}"),
    }

    let session = store.get_or_create(7, "tester").await;
    assert_eq!(session.topics, vec!["похудение"]);
}

#[tokio::test]
async fn introduction_fires_at_most_once() {
    let store = SessionStore::new();

    process(&store, 3, "Анна", ChatKind::Private).await;
    let session = store.get_or_create(3, "tester").await;
    assert!(session.introduced);
    assert_eq!(session.name, "Анна");

    // A later introduction phrase is a plain question now
    let decision = process(&store, 3, "меня зовут Мария", ChatKind::Private).await;
    assert!(matches!(
        decision.text_source,
        Some(TextSource::Generate(_))
    ));

    let session = store.get_or_create(3, "tester").await;
    assert_eq!(session.name, "Анна");
}

#[tokio::test]
async fn group_chat_only_answers_domain_messages() {
    let store = SessionStore::new();

    // Small talk: silence
    let decision = process(&store, 5, "всем привет", ChatKind::Group).await;
    assert!(!decision.should_respond);

    let decision = process(&store, 5, "кто смотрел кино вчера?", ChatKind::Group).await;
    assert!(!decision.should_respond);

    // Domain keyword: generation-backed answer from the raw text
    let decision = process(&store, 5, "у меня болит спина", ChatKind::Group).await;
    assert!(decision.should_respond);
    assert_eq!(
        decision.text_source,
        Some(TextSource::Generate("у меня болит спина".to_string()))
    );

    // The group exchange never introduced the user
    let session = store.get_or_create(5, "tester").await;
    assert!(!session.introduced);
}

#[tokio::test]
async fn contact_request_preempts_everything() {
    let store = SessionStore::new();

    let decision = process(
        &store,
        9,
        "привет, скиньте номер оператора",
        ChatKind::Private,
    )
    .await;
    assert_eq!(
        decision.text_source,
        Some(TextSource::Static(StaticReply::ContactsListing))
    );
    assert!(decision.attach_contacts_button);
    assert!(decision.attach_site_button);
}
