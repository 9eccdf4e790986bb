//! Capability services exposed to the presentation layer.

mod chat;
mod orchestrator;

pub use chat::ChatSession;
pub use orchestrator::{CapabilityOutcome, Orchestrator};
