//! Core dialogue engine for the clinic assistant.
//!
//! This crate holds everything with real decision logic and no I/O: keyword
//! tables, name extraction, intent classification, per-user session state
//! and the dialogue policy. The transport and the generation gateway live in
//! sibling crates and consume this one.

pub mod classify;
pub mod error;
pub mod keywords;
pub mod name;
pub mod policy;
pub mod replies;
pub mod session;

pub use classify::{classify, ChatKind, Classification, Intent};
pub use error::{ClinicError, Result};
pub use name::extract_name;
pub use policy::{decide, ResponseDecision, SessionMutation, StaticReply, TextSource};
pub use session::{SessionStore, UserSession};
