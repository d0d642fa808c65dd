//! Built-in REPL commands prefixed with `/`.
//!
//! Each command implements [`Command`]. The [`CommandRegistry`] matches the
//! whole input line against names and aliases; anything unmatched is a
//! question for the agent.

mod health;
mod help;
mod question;
mod quit;
mod trace;

use async_trait::async_trait;

use crate::client::AgentClient;
use crate::controller::Controller;

/// Session state available to commands during execution.
pub struct SessionInfo<'a> {
    pub endpoint: &'a str,
    pub client: &'a dyn AgentClient,
    pub controller: &'a Controller,
}

/// What the REPL should do after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command — treat the input as a question.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Primary trigger, e.g. `"/health"`.
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One line for `/help`.
    fn description(&self) -> &str;

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult;
}

fn answers_to(command: &dyn Command, word: &str) -> bool {
    command.name() == word || command.aliases().contains(&word)
}

/// A lone `/word` that matched nothing. Slash-led sentences such as
/// `/var/log is full` are still questions.
fn looks_like_command(word: &str) -> bool {
    word.starts_with('/') && !word.contains(char::is_whitespace)
}

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut commands: Vec<Box<dyn Command>> = vec![
            Box::new(health::HealthCommand),
            Box::new(trace::TraceCommand),
            Box::new(question::QuestionCommand),
            Box::new(quit::QuitCommand),
        ];
        let help = help::HelpCommand::listing(&commands);
        commands.insert(0, Box::new(help));
        Self { commands }
    }

    fn find(&self, word: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .map(Box::as_ref)
            .find(|c| answers_to(*c, word))
    }

    /// Run the command `input` names, or report `NotACommand`.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let word = input.trim();
        match self.find(word) {
            Some(command) => command.execute(info).await,
            None if looks_like_command(word) => {
                println!("unknown command: {word} (try /help)");
                CommandResult::Handled
            }
            None => CommandResult::NotACommand,
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
