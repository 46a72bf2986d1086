//! Scripted `TextGenerator` for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ChatMessage, LlmError, TextGenerator};

enum Reply {
    Text(String),
    Fail,
}

pub struct StubGenerator {
    reply: Reply,
    calls: AtomicUsize,
    last_system: Mutex<String>,
    last_messages: Mutex<Vec<ChatMessage>>,
}

impl StubGenerator {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::with(Reply::Text(text.into())))
    }

    /// Every call fails as an upstream 503.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self::with(Reply::Fail))
    }

    fn with(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_system: Mutex::new(String::new()),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_system(&self) -> String {
        self.last_system.lock().unwrap().clone()
    }

    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_system.lock().unwrap() = system.to_string();
        *self.last_messages.lock().unwrap() = messages.to_vec();
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(LlmError::Api {
                status: 503,
                message: "upstream overloaded".to_string(),
            }),
        }
    }
}
