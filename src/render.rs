//! Terminal rendering of the controller's view.
//!
//! The answer is markdown and is printed verbatim. The trace is printed
//! as two-space indented JSON.

use crate::client::{AskError, HealthStatus, Trace};
use crate::controller::View;

const ANSWER_HEADING: &str = "── answer ──";
const TRACE_HEADING: &str = "── agent trace ──";

pub fn answer_block(markdown: &str) -> String {
    format!("{ANSWER_HEADING}\n{}", markdown.trim_end())
}

pub fn trace_block(trace: &Trace) -> String {
    format!("{TRACE_HEADING}\n{}", trace.to_pretty())
}

pub fn error_line(message: &str) -> String {
    format!("error: {message}")
}

/// One line describing a health check against `endpoint`.
pub fn health_report(endpoint: &str, result: &Result<HealthStatus, AskError>) -> String {
    match result {
        Ok(health) if health.is_ok() => match health.message.as_str() {
            "" => format!("✓ {endpoint} is up"),
            message => format!("✓ {endpoint} is up ({message})"),
        },
        Ok(health) => format!("? {endpoint} answered with status {:?}", health.status),
        Err(e) => format!("✗ {endpoint}: {e}"),
    }
}

/// Short form of a health check for the banner.
pub fn health_summary(result: &Result<HealthStatus, AskError>) -> String {
    match result {
        Ok(health) if health.is_ok() => "ok ✓".to_string(),
        Ok(health) => format!("status {:?}", health.status),
        Err(e) => format!("unreachable ({e})"),
    }
}

/// Everything that belongs on stdout for this view, or `None` if the view
/// has nothing to show there.
pub fn output(view: &View<'_>) -> Option<String> {
    let mut blocks = Vec::new();
    if let Some(answer) = view.answer {
        blocks.push(answer_block(answer));
    }
    if let Some(trace) = view.trace {
        blocks.push(trace_block(trace));
    }
    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}

/// Print a settled view: answer and trace to stdout, errors to stderr.
pub fn print_view(view: &View<'_>) {
    if let Some(out) = output(view) {
        println!("\n{out}");
    }
    if let Some(message) = view.error {
        eprintln!("\n{}", error_line(message));
    }
}
