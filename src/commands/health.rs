use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render::health_report;

pub struct HealthCommand;

impl HealthCommand {
    /// Check the agent; the report and whether it is up.
    async fn report(info: &SessionInfo<'_>) -> (String, bool) {
        let result = info.client.health().await;
        let up = matches!(&result, Ok(h) if h.is_ok());
        (format!("  {}", health_report(info.endpoint, &result)), up)
    }
}

#[async_trait]
impl Command for HealthCommand {
    fn name(&self) -> &str {
        "/health"
    }

    fn description(&self) -> &str {
        "check that the agent is reachable"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        match Self::report(info).await {
            (report, true) => println!("{report}"),
            (report, false) => eprintln!("{report}"),
        }
        CommandResult::Handled
    }
}
