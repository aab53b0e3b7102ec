// POST /chat handler

use crate::commands::CommandRouter;
use crate::models::ChatRequest;
use std::convert::Infallible;
use tracing::Instrument;
use uuid::Uuid;

use super::respond;

pub async fn chat_handler(
    request: ChatRequest,
    router: CommandRouter,
) -> Result<warp::reply::Response, Infallible> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        tracing::info!(message_len = request.message.len(), "POST /chat");
        tracing::debug!(message = %request.message, "chat message");
        Ok::<_, Infallible>(respond(router.handle_message(&request.message).await))
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_store::InMemoryImageStore;
    use crate::intent::{IntentClassifier, IntentError};
    use async_trait::async_trait;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct Greeter;

    #[async_trait]
    impl IntentClassifier for Greeter {
        async fn classify(&self, _text: &str) -> Result<String, IntentError> {
            Ok("greet".to_string())
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_message_text_stays_out_of_info_logs() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let router = CommandRouter::new(Arc::new(InMemoryImageStore::new()), Arc::new(Greeter));
        let request = ChatRequest {
            message: "my secret words".to_string(),
        };

        tracing::subscriber::with_default(subscriber, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(chat_handler(request, router)).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("POST /chat"));
        assert!(output.contains("message_len=15"));
        assert!(!output.contains("my secret words"));
    }
}
