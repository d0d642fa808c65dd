//! The submission life-cycle for one question at a time.
//!
//! State lives in a single [`Phase`] so the answer and the error can never
//! be shown together. The question text sits beside it and survives every
//! transition.

use tracing::{debug, info};

use crate::client::{AgentClient, AgentResponse, AskError, Trace};

/// Where the current submission stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// Nothing asked yet.
    #[default]
    Idle,
    /// Waiting on the agent. Submission is disabled.
    InFlight,
    /// The latest submission produced an answer.
    Succeeded(AgentResponse),
    /// The latest submission failed with this message.
    Failed(String),
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View<'a> {
    pub question: &'a str,
    pub loading: bool,
    pub answer: Option<&'a str>,
    pub trace: Option<&'a Trace>,
    pub error: Option<&'a str>,
}

/// Owns the question and the submission phase.
#[derive(Debug, Default)]
pub struct Controller {
    question: String,
    phase: Phase,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Replace the question text. Allowed in any phase.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::InFlight)
    }

    /// True when there is something to send and nothing outstanding.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.question.trim().is_empty()
    }

    /// Enter `InFlight` and hand back the question to send, exactly as held.
    /// Returns `None` and changes nothing if submission is not allowed.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            debug!(loading = self.is_loading(), "submission suppressed");
            return None;
        }
        self.phase = Phase::InFlight;
        Some(self.question.clone())
    }

    /// Settle an in-flight submission. Ignored in any other phase.
    pub fn complete(&mut self, result: Result<AgentResponse, AskError>) {
        if !self.is_loading() {
            debug!("completion without a submission in flight, ignoring");
            return;
        }
        self.phase = match result {
            Ok(response) => {
                info!("agent answered");
                Phase::Succeeded(response)
            }
            Err(e) => {
                info!(error = %e, "agent request failed");
                Phase::Failed(e.to_string())
            }
        };
    }

    /// Run one full submission against `client`.
    /// Returns whether a request was actually sent.
    pub async fn submit(&mut self, client: &dyn AgentClient) -> bool {
        let Some(question) = self.begin() else {
            return false;
        };
        let result = client.ask(&question).await;
        self.complete(result);
        true
    }

    pub fn view(&self) -> View<'_> {
        let (answer, trace, error) = match &self.phase {
            Phase::Succeeded(resp) => (
                Some(resp.answer.as_str()).filter(|a| !a.is_empty()),
                Some(&resp.trace).filter(|t| !t.is_empty()),
                None,
            ),
            Phase::Failed(message) => (None, None, Some(message.as_str())),
            Phase::Idle | Phase::InFlight => (None, None, None),
        };
        View {
            question: &self.question,
            loading: self.is_loading(),
            answer,
            trace,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answered(answer: &str) -> Result<AgentResponse, AskError> {
        Ok(AgentResponse {
            answer: answer.to_string(),
            trace: Trace::new(json!({"plan": ["look"]})),
        })
    }

    #[test]
    fn starts_idle_with_empty_view() {
        let controller = Controller::new();
        assert_eq!(controller.phase(), &Phase::Idle);
        let view = controller.view();
        assert_eq!(view.question, "");
        assert!(!view.loading);
        assert!(view.answer.is_none());
        assert!(view.trace.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn cannot_submit_blank_question() {
        let mut controller = Controller::new();
        controller.set_question(" \t\n ");
        assert!(!controller.can_submit());
        assert!(controller.begin().is_none());
        assert_eq!(controller.phase(), &Phase::Idle);
    }

    #[test]
    fn begin_returns_question_untouched() {
        let mut controller = Controller::new();
        controller.set_question("  padded?  ");
        assert_eq!(controller.begin().as_deref(), Some("  padded?  "));
        assert!(controller.is_loading());
    }

    #[test]
    fn begin_clears_previous_result() {
        let mut controller = Controller::new();
        controller.set_question("q");
        controller.begin();
        controller.complete(Err(AskError::Agent("bad".into())));
        assert_eq!(controller.view().error, Some("bad"));

        controller.begin();
        let view = controller.view();
        assert!(view.loading);
        assert!(view.error.is_none());
        assert!(view.answer.is_none());
    }

    #[test]
    fn second_begin_while_in_flight_is_suppressed() {
        let mut controller = Controller::new();
        controller.set_question("q");
        assert!(controller.begin().is_some());
        assert!(controller.begin().is_none());
        assert!(controller.is_loading());
    }

    #[test]
    fn complete_outside_flight_is_ignored() {
        let mut controller = Controller::new();
        controller.complete(answered("stray"));
        assert_eq!(controller.phase(), &Phase::Idle);
    }

    #[test]
    fn success_fills_answer_and_trace() {
        let mut controller = Controller::new();
        controller.set_question("q");
        controller.begin();
        controller.complete(answered("done"));
        let view = controller.view();
        assert_eq!(view.answer, Some("done"));
        assert_eq!(view.trace.and_then(|t| t.plan()), Some(vec!["look"]));
        assert!(view.error.is_none());
        assert!(!view.loading);
    }

    #[test]
    fn null_trace_is_not_shown() {
        let mut controller = Controller::new();
        controller.set_question("q");
        controller.begin();
        controller.complete(Ok(AgentResponse {
            answer: "a".into(),
            trace: Trace::default(),
        }));
        assert!(controller.view().trace.is_none());
    }

    #[test]
    fn empty_answer_is_not_shown() {
        let mut controller = Controller::new();
        controller.set_question("q");
        controller.begin();
        controller.complete(Ok(AgentResponse {
            answer: String::new(),
            trace: Trace::new(json!({"plan": []})),
        }));
        let view = controller.view();
        assert!(view.answer.is_none());
        assert!(view.trace.is_some());
        assert!(matches!(controller.phase(), Phase::Succeeded(_)));
    }

    #[test]
    fn question_survives_submission() {
        let mut controller = Controller::new();
        controller.set_question("keep me");
        controller.begin();
        controller.complete(answered("ok"));
        assert_eq!(controller.question(), "keep me");
        assert!(controller.can_submit());
    }
}
