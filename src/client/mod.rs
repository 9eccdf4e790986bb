//! The shared provider client and the factory that lazily constructs it.

mod builder;
mod client;
mod factory;

pub use builder::{GenAiClientBuilder, SERVICE_NAME};
pub use client::GenAiClient;
pub use factory::ClientFactory;
