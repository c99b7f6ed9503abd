//! Async task management for background operations
//!
//! The one background task this app runs is the GitHub dispatch call;
//! its outcome crosses back to the event loop as a task message.

use crate::github::{DispatchClient, DispatchError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Messages sent from background tasks to the main thread
#[derive(Debug)]
pub enum TaskMessage {
    /// The dispatch call finished, successfully or not
    DispatchFinished(Result<(), DispatchError>),
}

/// Manages spawning and communication with background tasks
pub struct TaskRunner {
    tx: mpsc::UnboundedSender<TaskMessage>,
    client: Arc<DispatchClient>,
}

impl TaskRunner {
    /// Create a new task runner
    pub fn new(tx: mpsc::UnboundedSender<TaskMessage>) -> Self {
        Self {
            tx,
            client: Arc::new(DispatchClient::new()),
        }
    }

    /// Spawn the dispatch call. No cancellation: once issued, the call
    /// runs to completion or transport failure.
    pub fn spawn_dispatch(&self, token: String) -> JoinHandle<()> {
        let tx = self.tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            let result = client.trigger(&token).await;
            let _ = tx.send(TaskMessage::DispatchFinished(result));
        })
    }
}
