//! Project-wide constants.

use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Agent endpoint used when `AGENT_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the agent base URL.
pub const BASE_URL_ENV: &str = "AGENT_API_URL";

/// Path of the question endpoint, appended to the base URL.
pub const ASK_PATH: &str = "/api/ask";

/// Path of the health endpoint, appended to the base URL.
pub const HEALTH_PATH: &str = "/";

/// How long a health check may take. Questions have no such limit.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Shown when the agent fails without telling us why.
pub const FALLBACK_ERROR: &str = "Failed to get response from agent";
