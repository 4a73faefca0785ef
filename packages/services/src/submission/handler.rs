use std::fmt;

use async_trait::async_trait;
use mockall::automock;

/// Failure reported by a submit handler.
#[derive(Debug)]
pub struct SubmitError {
    pub message: String,
}

impl SubmitError {
    pub fn new(msg: &str) -> Self {
        SubmitError {
            message: msg.to_string(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// The injected collaborator that actually delivers a form submission
/// (eventually an API call; nothing is wired up yet). The state machine
/// hands it the sanitized payload and maps any `Err` to the `Error` status;
/// handler failures never propagate past the session.
#[automock]
#[async_trait]
pub trait SubmitHandler<D: Send + Sync + 'static>: Send + Sync {
    async fn submit(&self, data: D) -> Result<(), SubmitError>;
}
