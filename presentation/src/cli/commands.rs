//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for duo-chat
#[derive(Parser, Debug)]
#[command(name = "duo-chat")]
#[command(author, version, about = "Two-stage chat - one model drafts, another reviews")]
#[command(long_about = r#"
duo-chat answers every message in two steps:
1. Generate: a Gemini model drafts an answer
2. Evaluate: a Together.ai model reviews the draft and improves it

If the draft fails, an apology goes through review instead. If the review
fails, the draft is shown as is.

API keys are taken from the flags, then the environment
(GEMINI_API_KEY or GOOGLE_API_KEY, TOGETHER_API_KEY), and are prompted
for if still missing.

Configuration files are loaded from (in priority order):
1. --config <path>                     Explicit config file
2. ./duo-chat.toml                     Project-level config
3. ~/.config/duo-chat/config.toml      Global config

In chat, type `salir`/`exit` to quit and `limpiar`/`clear`/`reset` to
forget the conversation.
"#)]
pub struct Cli {
    /// API key for the generator (Gemini)
    #[arg(long, value_name = "KEY")]
    pub generator_key: Option<String>,

    /// API key for the evaluator (Together.ai)
    #[arg(long, value_name = "KEY")]
    pub evaluator_key: Option<String>,

    /// Model used to draft answers
    #[arg(long, value_name = "MODEL")]
    pub generator_model: Option<String>,

    /// Model used to review drafts
    #[arg(long, value_name = "MODEL")]
    pub evaluator_model: Option<String>,

    /// Never prompt for missing API keys
    #[arg(long)]
    pub no_prompt: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to daily files in this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
