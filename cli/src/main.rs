//! CLI entrypoint for Policy Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use assistant_application::{NoQueryLogger, QueryController, QueryLogger};
use assistant_domain::{DomainError, Question, RequestState};
use assistant_infrastructure::{ConfigLoader, HttpAnswerGateway, JsonlQueryLogger};
use assistant_presentation::{AskSpinner, Cli, ConsoleFormatter, OutputFormat, TuiApp};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }
    config.validate()?;

    ConsoleFormatter::set_color_enabled(config.output.color);

    info!(
        "Starting Policy Assistant against {}",
        config.backend.base_url
    );

    // === Dependency Injection ===
    let gateway = Arc::new(HttpAnswerGateway::with_timeout(
        &config.backend.base_url,
        config.backend.timeout(),
    )?);

    let logger: Arc<dyn QueryLogger> = match &cli.log_file {
        Some(path) => match JsonlQueryLogger::new(path) {
            Some(jsonl) => Arc::new(jsonl),
            None => {
                warn!("Query log disabled: cannot write {}", path.display());
                Arc::new(NoQueryLogger)
            }
        },
        None => Arc::new(NoQueryLogger),
    };

    let mut controller = QueryController::new(gateway).with_query_logger(logger);

    // Interactive mode
    if cli.tui {
        let mut app = TuiApp::new(controller);
        app.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --tui for interactive mode."),
    };
    if Question::try_new(question.as_str()).is_none() {
        return Err(DomainError::InvalidQuestion("question cannot be empty".to_string()).into());
    }

    controller.update_question(question.clone());

    let spinner = (!cli.quiet).then(|| AskSpinner::start("Asking the policy backend..."));
    controller.submit().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match controller.state() {
        RequestState::Succeeded(payload) => {
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format(&question, payload),
                OutputFormat::Json => ConsoleFormatter::format_json(payload),
            };
            println!("{output}");
            Ok(())
        }
        RequestState::Failed(message) => {
            eprintln!("{}", ConsoleFormatter::format_failure(message));
            std::process::exit(1);
        }
        // A validated non-blank question always settles the submission
        state => bail!("Unexpected request state after submission: {state:?}"),
    }
}
