use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::consts::{FALLBACK_ERROR, HEALTH_TIMEOUT};

use super::{AgentClient, AgentResponse, AskError, HealthStatus};

/// An [`AgentClient`] that calls the agent's REST API.
pub struct HttpAgentClient {
    http: reqwest::Client,
    ask_url: String,
    health_url: String,
    health_timeout: Duration,
}

impl HttpAgentClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            ask_url: config.ask_url(),
            health_url: config.health_url(),
            health_timeout: HEALTH_TIMEOUT,
        }
    }

    /// Cap how long [`health`](AgentClient::health) waits for the agent.
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    /// Turn a non-2xx response into the agent's `detail`, or the fallback.
    async fn reject(resp: reqwest::Response) -> AskError {
        let status = resp.status();
        let body = resp.bytes().await.unwrap_or_default();
        let message = failure_message(&body);
        warn!(%status, %message, "agent returned an error status");
        AskError::Agent(message)
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    async fn ask(&self, question: &str) -> Result<AgentResponse, AskError> {
        debug!(url = %self.ask_url, chars = question.len(), "asking agent");

        let resp = self
            .http
            .post(&self.ask_url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            return Err(Self::reject(resp).await);
        }

        let body = resp.bytes().await.map_err(transport_error)?;
        let parsed: AgentResponse = serde_json::from_slice(&body)
            .map_err(|e| AskError::Unexpected(format!("invalid agent response: {e}")))?;

        debug!(answer_chars = parsed.answer.len(), "agent answered");
        Ok(parsed)
    }

    async fn health(&self) -> Result<HealthStatus, AskError> {
        debug!(url = %self.health_url, "probing agent health");

        let resp = self
            .http
            .get(&self.health_url)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            return Err(Self::reject(resp).await);
        }

        let body = resp.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body)
            .map_err(|e| AskError::Unexpected(format!("invalid health response: {e}")))
    }
}

fn transport_error(e: reqwest::Error) -> AskError {
    warn!(error = %e, "agent request failed");
    AskError::Agent(FALLBACK_ERROR.to_string())
}

/// Pull a usable message out of an error body.
///
/// Only a non-empty string `detail` counts. Anything else, including a
/// structured `detail` such as a validation error list, gets the fallback.
fn failure_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.as_str().map(str::to_string))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

// --- wire types ---

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}
