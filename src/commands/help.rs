use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

const NAME: &str = "/help";
const ALIASES: &[&str] = &["/h", "/?"];
const DESCRIPTION: &str = "show available commands";

/// Prints a listing of every command, built once when the registry is.
pub struct HelpCommand {
    text: String,
}

impl HelpCommand {
    /// List itself followed by `others`, in order.
    pub fn listing(others: &[Box<dyn Command>]) -> Self {
        let mut rows = vec![(triggers(NAME, ALIASES), DESCRIPTION)];
        rows.extend(
            others
                .iter()
                .map(|c| (triggers(c.name(), c.aliases()), c.description())),
        );

        let width = rows.iter().map(|(t, _)| t.chars().count()).max().unwrap_or(0);
        let text = rows
            .iter()
            .map(|(t, desc)| format!("  {t:<width$}  {desc}\n"))
            .collect();
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// `"/help, /h, /?"`
fn triggers(name: &str, aliases: &[&str]) -> String {
    std::iter::once(name)
        .chain(aliases.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        NAME
    }

    fn aliases(&self) -> &[&str] {
        ALIASES
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        print!("{}", self.text);
        CommandResult::Handled
    }
}
