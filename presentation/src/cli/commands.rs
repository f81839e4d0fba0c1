//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted summary and key details
    Text,
    /// Raw answer payload as JSON
    Json,
}

/// CLI arguments for policy-assistant
#[derive(Parser, Debug)]
#[command(name = "policy-assistant")]
#[command(author, version, about = "Ask questions about company policies from your terminal")]
#[command(long_about = r#"
Policy Assistant sends your question to the policy-answering backend and
renders the returned summary plus a list of key details.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./assistant.toml       Project-level config
3. ~/.config/policy-assistant/config.toml   Global config

Example:
  policy-assistant "What's the vacation policy?"
  policy-assistant --backend-url http://hr.internal:5000 "Expense limits?"
  policy-assistant --tui
"#)]
pub struct Cli {
    /// The policy question to ask (omit when using --tui)
    pub question: Option<String>,

    /// Start the interactive terminal UI
    #[arg(short, long)]
    pub tui: bool,

    /// Base URL of the policy backend (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL transcript of questions and answers to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
