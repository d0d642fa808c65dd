use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct QuestionCommand;

fn question_text(question: &str) -> String {
    if question.trim().is_empty() {
        "  no question yet".to_string()
    } else {
        format!("  {question}")
    }
}

#[async_trait]
impl Command for QuestionCommand {
    fn name(&self) -> &str {
        "/question"
    }

    fn description(&self) -> &str {
        "show the last question asked"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("{}", question_text(info.controller.question()));
        CommandResult::Handled
    }
}
