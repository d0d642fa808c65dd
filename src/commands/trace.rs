use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::controller::View;
use crate::render::trace_block;

pub struct TraceCommand;

/// The latest trace, or a note that there is none to show.
fn trace_text(view: &View<'_>) -> String {
    match view.trace {
        Some(trace) => trace_block(trace),
        None if view.loading => "  still waiting on the agent".to_string(),
        None => "  no trace yet".to_string(),
    }
}

#[async_trait]
impl Command for TraceCommand {
    fn name(&self) -> &str {
        "/trace"
    }

    fn description(&self) -> &str {
        "show the agent trace for the latest answer"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("{}", trace_text(&info.controller.view()));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AgentResponse, AskError, Trace};
    use crate::commands::tests::Fixture;
    use serde_json::json;

    #[test]
    fn shows_trace_after_success() {
        let fx = Fixture::settled(
            "q",
            Ok(AgentResponse {
                answer: "done".into(),
                trace: Trace::new(json!({"tools_used": ["k8s_query"]})),
            }),
        );
        let text = trace_text(&fx.controller.view());
        assert!(text.contains("agent trace"));
        assert!(text.contains("\"k8s_query\""));
    }

    #[test]
    fn nothing_after_failure() {
        let fx = Fixture::settled("q", Err(AskError::Agent("index unavailable".into())));
        let text = trace_text(&fx.controller.view());
        assert_eq!(text, "  no trace yet");
        assert!(!text.contains("index unavailable"));
    }

    #[test]
    fn nothing_before_first_question() {
        let fx = Fixture::new();
        assert_eq!(trace_text(&fx.controller.view()), "  no trace yet");
    }

    #[tokio::test]
    async fn execute_is_handled() {
        let fx = Fixture::new();
        assert_eq!(
            TraceCommand.execute(&fx.info()).await,
            CommandResult::Handled
        );
    }
}
