//! Per-user dialogue state and its in-memory store.
//!
//! Sessions are created lazily on first contact and live for the process
//! lifetime unless evicted for inactivity. All mutation goes through
//! [`SessionStore`]; no other component touches a session directly.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::policy::SessionMutation;

/// Dialogue state for one user.
#[derive(Debug, Clone)]
pub struct UserSession {
    /// Stable platform user identifier (primary key).
    pub user_id: i64,
    /// Last-known platform-supplied label, informational only.
    pub display_name: String,
    /// Whether the user has introduced themselves. Transitions false->true
    /// exactly once and never reverts.
    pub introduced: bool,
    /// The user-supplied name once `introduced` is true; empty otherwise.
    pub name: String,
    /// Updated on every inbound message from this user.
    pub last_activity: DateTime<Utc>,
    /// Topics the user has discussed. Insertion-ordered set: membership is
    /// checked before insertion, entries are never removed.
    pub topics: Vec<String>,
}

impl UserSession {
    fn new(user_id: i64, display_name: String) -> Self {
        Self {
            user_id,
            display_name,
            introduced: false,
            name: String::new(),
            last_activity: Utc::now(),
            topics: Vec::new(),
        }
    }
}

/// In-memory store of user sessions.
///
/// Cloning the store clones the handle, not the data; a fresh store per test
/// gives full isolation. Per-key operations are serialized by the inner
/// lock, preserving the monotonic introduction transition when callers run
/// concurrently.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<i64, UserSession>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing session for `user_id`, creating one on first
    /// contact. The returned value is a snapshot; mutations go through the
    /// store methods.
    pub async fn get_or_create(&self, user_id: i64, display_name: &str) -> UserSession {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id).or_insert_with(|| {
            tracing::info!("new session for user {user_id} ({display_name})");
            UserSession::new(user_id, display_name.to_string())
        });
        if session.display_name != display_name {
            session.display_name = display_name.to_string();
        }
        session.clone()
    }

    /// Updates `last_activity` to now.
    pub async fn touch(&self, user_id: i64) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(&user_id) {
            session.last_activity = Utc::now();
        }
    }

    /// Records the user's name and flips `introduced`.
    ///
    /// A no-op for an already-introduced session: the caller must not
    /// re-trigger the introduction reply, and this guard keeps the stored
    /// name stable even if another introduction phrase arrives later.
    pub async fn mark_introduced(&self, user_id: i64, name: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(&user_id) {
            if session.introduced {
                return;
            }
            session.name = name.to_string();
            session.introduced = true;
            tracing::info!("user {user_id} introduced as {name}");
        }
    }

    /// Adds a topic tag unless it is already present.
    pub async fn add_topic(&self, user_id: i64, topic: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(&user_id) {
            if !session.topics.iter().any(|t| t == topic) {
                session.topics.push(topic.to_string());
            }
        }
    }

    /// Commits the mutations produced by the dialogue policy.
    ///
    /// Called before the reply is dispatched so state survives a downstream
    /// generation failure.
    pub async fn apply(&self, user_id: i64, mutations: &[SessionMutation]) {
        for mutation in mutations {
            match mutation {
                SessionMutation::SetName(name) => self.mark_introduced(user_id, name).await,
                SessionMutation::AddTopic(topic) => self.add_topic(user_id, topic).await,
            }
        }
    }

    /// Removes sessions that have been idle longer than `max_idle`.
    pub async fn evict_idle(&self, max_idle: Duration) {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_activity >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!("evicted {evicted} idle sessions");
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True when no sessions exist.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
