pub mod http;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the agent sent back for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Markdown text.
    pub answer: String,
    #[serde(default)]
    pub trace: Trace,
}

/// The agent's record of how it got to the answer.
///
/// Schema-free JSON. The agent usually includes `plan` and `tools_used`,
/// both lists of strings, but nothing else is promised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(pub Value);

impl Trace {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    /// Planned steps, if the agent reported them.
    pub fn plan(&self) -> Option<Vec<&str>> {
        self.string_list("plan")
    }

    /// Tools the agent called, if it reported them.
    pub fn tools_used(&self) -> Option<Vec<&str>> {
        self.string_list("tools_used")
    }

    /// Two-space indented JSON for display.
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    fn string_list(&self, key: &str) -> Option<Vec<&str>> {
        let items = self.0.get(key)?.as_array()?;
        Some(items.iter().filter_map(Value::as_str).collect())
    }
}

impl From<Value> for Trace {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Reply from the agent's health endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Why a request failed. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    /// The agent failed or could not be reached. Carries the agent's own
    /// `detail` text when it sent one, the generic fallback otherwise.
    #[error("{0}")]
    Agent(String),
    /// Anything that is not an HTTP failure, passed through as described.
    #[error("{0}")]
    Unexpected(String),
}

/// Talks to the agent. Could be HTTP or a test script.
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Send one question. No validation, no retries.
    async fn ask(&self, question: &str) -> Result<AgentResponse, AskError>;

    /// Ask the agent's health endpoint whether it is up.
    async fn health(&self) -> Result<HealthStatus, AskError>;
}
