//! One-shot flows behind `--run` and `--check`, plus the spinner-wrapped
//! submission the REPL shares with them.

use std::process::ExitCode;

use tracing::debug;

use crate::client::AgentClient;
use crate::controller::{Controller, Phase};
use crate::render;
use crate::spinner::Spinner;

/// How a one-shot flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Submit the held question with a spinner up, then print the outcome.
/// Returns whether a request was sent.
pub async fn ask(controller: &mut Controller, client: &dyn AgentClient) -> bool {
    let spinner = Spinner::start("asking agent");
    let sent = controller.submit(client).await;
    spinner.stop().await;
    debug!(sent, "submission finished");
    render::print_view(&controller.view());
    sent
}

/// Ask a single question. Fails on a blank question without contacting
/// the agent, and on any failed request.
pub async fn run_once(
    controller: &mut Controller,
    client: &dyn AgentClient,
    question: impl Into<String>,
) -> Status {
    controller.set_question(question);
    if !controller.can_submit() {
        eprintln!("{}", render::error_line("question is empty"));
        return Status::Failure;
    }
    ask(controller, client).await;
    match controller.phase() {
        Phase::Succeeded(_) => Status::Success,
        _ => Status::Failure,
    }
}

/// Check the agent once and report. Anything but an `ok` status fails.
pub async fn check(client: &dyn AgentClient, endpoint: &str) -> Status {
    let result = client.health().await;
    let report = render::health_report(endpoint, &result);
    match result {
        Ok(health) if health.is_ok() => {
            println!("{report}");
            Status::Success
        }
        _ => {
            eprintln!("{report}");
            Status::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_exit_code() {
        assert_eq!(
            format!("{:?}", ExitCode::from(Status::Success)),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", ExitCode::from(Status::Failure)),
            format!("{:?}", ExitCode::FAILURE)
        );
    }
}
