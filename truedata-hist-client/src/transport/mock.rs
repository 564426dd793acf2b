use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use super::Transport;
use crate::error::ClientError;

/// Scripted transport for tests: replays a fixed sequence of server
/// frames and records every frame the session sends.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: VecDeque<String>,
    sent: Arc<Mutex<Vec<String>>>,
    closed: Arc<AtomicBool>,
}

impl MockTransport {
    pub fn new(script: impl IntoIterator<Item = impl Into<String>>) -> Self {
        MockTransport {
            script: script.into_iter().map(Into::into).collect(),
            sent: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle that stays valid after the session (and transport) is dropped.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.sent)
    }

    pub fn closed_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("mock sent lock").clone()
    }
}

impl Transport for MockTransport {
    async fn send(&mut self, text: String) -> Result<(), ClientError> {
        self.sent.lock().expect("mock sent lock").push(text);

        Ok(())
    }

    async fn recv(&mut self) -> Result<String, ClientError> {
        self.script.pop_front().ok_or(ClientError::ConnectionClosed)
    }

    async fn close(&mut self) -> Result<(), ClientError> {
        self.closed.store(true, Ordering::SeqCst);

        Ok(())
    }
}
