use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use askdesk::banner::{BannerInfo, print_banner};
use askdesk::client::AgentClient;
use askdesk::client::http::HttpAgentClient;
use askdesk::commands::{CommandRegistry, CommandResult, SessionInfo};
use askdesk::config::ClientConfig;
use askdesk::controller::Controller;
use askdesk::spinner::Spinner;
use askdesk::{logging, render, session};

#[derive(Parser)]
#[command(
    name = "askdesk",
    version,
    about = "Ask the enterprise knowledge agent from your terminal."
)]
struct Cli {
    /// Agent base URL [env: AGENT_API_URL] [default: http://localhost:8000]
    #[arg(long)]
    api_url: Option<String>,

    /// Ask a single question and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,

    /// Check that the agent is reachable and exit
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Debug logging to stderr (RUST_LOG also works)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ClientConfig::resolve(cli.api_url.as_deref());
    info!(base_url = config.base_url(), "agent endpoint resolved");
    let client = HttpAgentClient::new(&config);

    if cli.check {
        return Ok(session::check(&client, config.base_url()).await.into());
    }

    let mut controller = Controller::new();

    // Single question mode
    if let Some(question) = cli.run {
        return Ok(session::run_once(&mut controller, &client, question)
            .await
            .into());
    }

    let spinner = Spinner::start("contacting agent");
    let health = client.health().await;
    spinner.stop().await;
    print_banner(&BannerInfo {
        endpoint: config.base_url(),
        health: &render::health_summary(&health),
    });

    repl(&mut controller, &client, config.base_url()).await?;
    println!("goodbye.");
    Ok(ExitCode::SUCCESS)
}

async fn repl(
    controller: &mut Controller,
    client: &dyn AgentClient,
    endpoint: &str,
) -> anyhow::Result<()> {
    let commands = CommandRegistry::new();

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nask> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result.context("failed to read input")? {
                    Some(line) => line,
                    None => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let info = SessionInfo {
            endpoint,
            client,
            controller: &*controller,
        };
        match commands.dispatch(&line, &info).await {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::NotACommand => {}
        }

        controller.set_question(line);

        // Requests are not cancellable; Ctrl+C while waiting leaves the REPL
        tokio::select! {
            _ = session::ask(controller, client) => {}
            _ = tokio::signal::ctrl_c() => {
                println!("\n\ninterrupted");
                break;
            }
        }
    }

    Ok(())
}
