//! Wire types for the classifier's parse endpoint

use serde::{Deserialize, Serialize};

/// Request body sent to the classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseRequest {
    pub text: String,
}

/// Response body returned by the classifier
///
/// Only `intent` is required; entities and other fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ParseResponse {
    pub intent: IntentField,
}

/// The `intent` field, either a bare label or a ranked object
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IntentField {
    Label(String),
    Ranked {
        name: String,
        #[serde(default)]
        confidence: Option<f64>,
    },
}

impl IntentField {
    pub fn name(&self) -> &str {
        match self {
            IntentField::Label(name) => name,
            IntentField::Ranked { name, .. } => name,
        }
    }
}
