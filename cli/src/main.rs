//! CLI entrypoint for duo-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use duo_application::{ChatSession, CredentialSource, RunTurnUseCase};
use duo_domain::Model;
use duo_infrastructure::{
    ConfigLoader, EnvCredentialSource, FileConfig, GeminiGenerator, TogetherEvaluator,
};
use duo_presentation::{
    ChatRepl, Cli, ConsoleFormatter, InteractiveCredentialSource, OutputConfig, ReplConfig,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting duo-chat");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    OutputConfig {
        color: config.output.color && !cli.no_color,
    }
    .apply();

    // === Credentials ===
    let env = EnvCredentialSource::from_env();
    let mut source = InteractiveCredentialSource::new(
        cli.generator_key.clone().or_else(|| env.generator_key()),
        cli.evaluator_key.clone().or_else(|| env.evaluator_key()),
    );
    if cli.no_prompt {
        source = source.without_prompt();
    }

    let credentials = match source.resolve() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            std::process::exit(1);
        }
    };
    let (generator_key, evaluator_key) = credentials.into_parts();

    // === Dependency Injection ===
    let generator_model = cli
        .generator_model
        .as_deref()
        .map(Model::from)
        .unwrap_or_else(|| config.generator.parse_model());
    let evaluator_model = cli
        .evaluator_model
        .as_deref()
        .map(Model::from)
        .unwrap_or_else(|| config.evaluator.parse_model());

    info!("Generator: {}, evaluator: {}", generator_model, evaluator_model);

    let generator = Arc::new(
        GeminiGenerator::new(generator_key, generator_model)
            .with_base_url(config.generator.base_url.clone()),
    );
    let evaluator = Arc::new(
        TogetherEvaluator::new(evaluator_key, evaluator_model).with_url(config.evaluator.url.clone()),
    );

    let session = ChatSession::new(RunTurnUseCase::new(generator, evaluator));
    let mut repl = ChatRepl::new(session, repl_config(&cli, &config));

    repl.run().await?;

    info!("Session ended");
    Ok(())
}

/// Initialize logging based on verbosity level
///
/// The REPL owns stdout, so logs go to stderr or to a rolling file.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "duo-chat.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn repl_config(cli: &Cli, config: &FileConfig) -> ReplConfig {
    ReplConfig::default()
        .with_progress(config.repl.show_progress && !cli.quiet)
        .with_history_file(config.repl.history_file.as_deref())
}
