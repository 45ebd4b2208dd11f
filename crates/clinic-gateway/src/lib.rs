//! Generation gateway for the clinic assistant.
//!
//! Boundary crate: turns a caller-built prompt into reply text via an
//! external completion service. Failures terminate here in a fixed
//! fallback; nothing propagates to the dialogue engine.

pub mod backend;
pub mod gateway;
pub mod instruction;
pub mod legacy;
pub mod openai;

pub use backend::{ApiGeneration, CompletionBackend, CompletionRequest};
pub use gateway::GenerationGateway;
pub use instruction::FALLBACK_TEXT;
pub use legacy::LegacyCompletionsBackend;
pub use openai::ChatCompletionsBackend;
