#![allow(dead_code)]

use async_trait::async_trait;
use imagebot::intent::{IntentClassifier, IntentError};
use std::sync::{Arc, Mutex};
use testcontainers::{core::WaitFor, GenericImage, RunnableImage};

/// PostgreSQL image used by the store tests
pub const POSTGRES_IMAGE: &str = "postgres";
pub const POSTGRES_TAG: &str = "16-alpine";

pub const POSTGRES_PORT: u16 = 5432;
pub const POSTGRES_USER: &str = "postgres";
pub const POSTGRES_PASSWORD: &str = "imagebot_password";
pub const POSTGRES_DB: &str = "postgres";

/// Create a runnable PostgreSQL container
pub fn create_postgres_container() -> RunnableImage<GenericImage> {
    let image = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
        .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ));

    RunnableImage::from(image).with_tag(POSTGRES_TAG)
}

/// Build a connection string for the running container
pub fn build_connection_string(host: &str, port: u16) -> String {
    format!(
        "postgresql://{}:{}@{}:{}/{}",
        POSTGRES_USER, POSTGRES_PASSWORD, host, port, POSTGRES_DB
    )
}

/// Classifier double that records its input and replays a fixed outcome
pub struct FakeClassifier {
    pub seen: Mutex<Vec<String>>,
    outcome: Result<String, (u16, String)>,
}

impl FakeClassifier {
    pub fn answering(intent: &str) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            outcome: Ok(intent.to_string()),
        })
    }

    pub fn failing_with_status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            outcome: Err((status, "upstream exploded".to_string())),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl IntentClassifier for FakeClassifier {
    async fn classify(&self, text: &str) -> Result<String, IntentError> {
        self.seen.lock().unwrap().push(text.to_string());
        match &self.outcome {
            Ok(intent) => Ok(intent.clone()),
            Err((status, body)) => Err(IntentError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
