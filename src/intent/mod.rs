//! Intent classification
//!
//! Free-text chat messages are forwarded to an external classifier service
//! (a Rasa-compatible `/model/parse` endpoint) which labels them with an intent.

pub mod client;
pub mod error;
pub mod types;

use async_trait::async_trait;

pub use client::{ClassifierConfig, RasaClient};
pub use error::IntentError;

/// Labels free text with an intent
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify `text`, returning the intent name
    async fn classify(&self, text: &str) -> Result<String, IntentError>;
}
