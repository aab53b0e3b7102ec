//! Dispatch of parsed commands to the image store or the classifier

use std::sync::Arc;

use crate::error::ChatError;
use crate::image_store::ImageStore;
use crate::intent::IntentClassifier;

use super::parser::{parse_command, Command};

pub const SAVED_RESPONSE: &str = "Image saved successfully.";

/// Routes chat messages and image requests to their backends
#[derive(Clone)]
pub struct CommandRouter {
    store: Arc<dyn ImageStore>,
    classifier: Arc<dyn IntentClassifier>,
}

impl CommandRouter {
    pub fn new(store: Arc<dyn ImageStore>, classifier: Arc<dyn IntentClassifier>) -> Self {
        Self { store, classifier }
    }

    /// Interpret a chat message and produce the reply text
    pub async fn handle_message(&self, message: &str) -> Result<String, ChatError> {
        match parse_command(message)? {
            Command::Save { url, name } => self.save_image(&name, &url).await,
            Command::Retrieve { name } => self.retrieve_image(&name).await,
            Command::Freeform(text) => {
                let intent = self.classifier.classify(&text).await?;
                Ok(format!("Intent: {}", intent))
            }
        }
    }

    pub async fn save_image(&self, name: &str, url: &str) -> Result<String, ChatError> {
        if name.trim().is_empty() {
            return Err(ChatError::BadRequest("Image name not provided".to_string()));
        }
        if url.trim().is_empty() {
            return Err(ChatError::BadRequest("Image URL not provided".to_string()));
        }

        self.store.put(name, url).await?;
        tracing::info!(name, url, "image saved");
        Ok(SAVED_RESPONSE.to_string())
    }

    pub async fn retrieve_image(&self, name: &str) -> Result<String, ChatError> {
        if name.trim().is_empty() {
            return Err(ChatError::BadRequest("Image name not provided".to_string()));
        }

        let url = self.store.get(name).await?;
        Ok(format!("Retrieved image link: {}", url))
    }

    pub async fn list_images(&self) -> Result<Vec<String>, ChatError> {
        Ok(self.store.list().await?)
    }
}
