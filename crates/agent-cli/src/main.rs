//! research-agent CLI
//!
//! Takes one research objective, runs the decision loop against the
//! configured model gateway, and prints the outcome.

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::{AgentBuilder, LlmProvider, RunOutcome};
use agent_runtime::OpenAiProvider;
use arxiv_search::{ArxivClient, HttpArxivClient, MockArxivClient, SearchArxivTool};

#[derive(Parser, Debug)]
#[command(name = "research-agent", version)]
#[command(about = "Answer research questions with a model plus arXiv search")]
struct Cli {
    /// Research objective; prompts interactively when omitted
    objective: Option<String>,

    /// Model identifier passed to the gateway
    #[arg(long, default_value = "gpt-3.5-turbo")]
    model: String,

    /// Pass budget ceiling (at most ceiling + 1 passes run)
    #[arg(long, default_value_t = 2)]
    iteration_ceiling: usize,

    /// Use canned search results instead of the live index
    #[arg(long)]
    mock_arxiv: bool,

    /// Print the full run transcript after the result
    #[arg(long)]
    show_transcript: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize the model gateway
    let provider =
        Arc::new(OpenAiProvider::from_env().context("configuring the model gateway")?);

    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ Model gateway reachable"),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ Model gateway not reachable - the run may fail");
        }
    }

    // Pick the paper index
    let index: Arc<dyn ArxivClient> = if cli.mock_arxiv {
        Arc::new(MockArxivClient::new())
    } else {
        Arc::new(HttpArxivClient::new().context("configuring the arXiv client")?)
    };

    let agent = AgentBuilder::new()
        .provider(provider)
        .tool(SearchArxivTool::new(index))
        .model(cli.model)
        .iteration_ceiling(cli.iteration_ceiling)
        .build()?;

    tracing::info!("Registered {} tools:", agent.tools().len());
    for name in agent.tools().names() {
        tracing::info!("  • {}", name);
    }

    let objective = match cli.objective {
        Some(objective) => objective,
        None => prompt_for_objective()?,
    };

    let report = match agent.run(&objective).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("run aborted: {}", e);
            anyhow::bail!(e.user_message());
        }
    };

    match &report.outcome {
        RunOutcome::Answered(answer) => println!("{}", answer),
        RunOutcome::CannotAnswer => println!("FINAL: CANNOT ANSWER"),
        RunOutcome::LimitReached => println!("Ended for reaching limit."),
    }

    if cli.show_transcript {
        println!();
        println!("--- transcript ({} passes) ---", report.iterations);
        for entry in report.memory.entries() {
            println!("{}", entry);
        }
    }

    Ok(())
}

fn prompt_for_objective() -> anyhow::Result<String> {
    print!("What is your research question? ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    let objective = line.trim().to_string();
    anyhow::ensure!(!objective.is_empty(), "no objective given");
    Ok(objective)
}
