use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{AgentClient, AgentResponse, AskError, HealthStatus};

/// A scripted client for tests. Returns pre-defined replies in order and
/// records every question it was asked. Health is `ok` unless scripted.
pub struct MockClient {
    replies: Vec<Result<AgentResponse, AskError>>,
    health: Result<HealthStatus, AskError>,
    index: AtomicUsize,
    asked: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new(replies: Vec<Result<AgentResponse, AskError>>) -> Self {
        Self {
            replies,
            health: Ok(HealthStatus {
                status: "ok".to_string(),
                message: "mock agent".to_string(),
            }),
            index: AtomicUsize::new(0),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Answer health checks with `health` instead.
    pub fn with_health(mut self, health: Result<HealthStatus, AskError>) -> Self {
        self.health = health;
        self
    }

    /// Questions received so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.asked.lock().unwrap().len()
    }
}

#[async_trait]
impl AgentClient for MockClient {
    async fn ask(&self, question: &str) -> Result<AgentResponse, AskError> {
        self.asked.lock().unwrap().push(question.to_string());
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.replies.get(i).cloned().unwrap_or_else(|| {
            Err(AskError::Unexpected(format!(
                "MockClient: no more replies (called {} times)",
                i + 1
            )))
        })
    }

    async fn health(&self) -> Result<HealthStatus, AskError> {
        self.health.clone()
    }
}
