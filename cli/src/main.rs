//! CLI entrypoint for Symposium
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use symposium_application::{
    ConversationLogger, DebateObserver, NoConversationLogger, NoObserver, Symposium,
};
use symposium_domain::{Model, OutputFormat, PromptTemplate};
use symposium_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiAgentRuntime, debug_log_file_name,
};
use symposium_presentation::{Cli, ConsoleFormatter, DebateReporter};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    let _log_guard = init_tracing(cli.verbose, config.logging.debug_log_dir.as_deref())?;
    info!("Starting Symposium");

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Credential precondition: fail before any session starts
    let runtime = OpenAiAgentRuntime::from_config(&config.provider)?;
    let debate_config = config.debate.to_debate_config()?;
    let opening_prompt = config
        .debate
        .opening_prompt
        .clone()
        .unwrap_or_else(|| PromptTemplate::opening_prompt(&debate_config));

    // === Dependency Injection ===
    let live_output = !cli.quiet;
    let observer: Arc<dyn DebateObserver> = if live_output {
        Arc::new(DebateReporter::new(config.output.show_progress))
    } else {
        Arc::new(NoObserver)
    };
    let conversation_logger = transcript_logger(config.logging.transcript_dir.as_deref());

    let mut symposium = Symposium::new(Arc::new(runtime), config.models.base.clone())
        .with_observer(observer)
        .with_conversation_logger(conversation_logger);

    symposium.setup_debate(debate_config)?;
    let result = match symposium.run_debate(&opening_prompt).await {
        Ok(result) => result,
        Err(e) => {
            error!("Debate failed: {}", e);
            return Err(e).context("Error running debate");
        }
    };

    // The live reporter already printed the summary and statistics
    let format = config.output.format.unwrap_or_default();
    if !(live_output && format == OutputFormat::Summary) {
        println!("{}", ConsoleFormatter::render(&result, format));
    }

    Ok(())
}

/// Install the console subscriber and, if a directory is configured, a
/// debug-level file layer writing `debate_logs_<timestamp>.log`.
fn init_tracing(verbose: u8, debug_log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let (file, guard) = match debug_log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, debug_log_file_name());
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(guard)
}

fn transcript_logger(dir: Option<&Path>) -> Arc<dyn ConversationLogger> {
    let Some(dir) = dir else {
        return Arc::new(NoConversationLogger);
    };
    match JsonlConversationLogger::in_dir(dir) {
        Ok(logger) => {
            info!("Writing debate transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Transcript logging disabled for {}: {}", dir.display(), e);
            Arc::new(NoConversationLogger)
        }
    }
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    let debate = &mut config.debate;
    if let Some(topic) = &cli.topic {
        debate.topic = Some(topic.clone());
    }
    if let Some(pro) = &cli.pro {
        debate.pro_position = Some(pro.clone());
    }
    if let Some(con) = &cli.con {
        debate.con_position = Some(con.clone());
    }
    if let Some(max_turns) = cli.max_turns {
        debate.max_turns = max_turns;
    }
    if let Some(style) = &cli.style {
        debate.style = style.clone();
    }
    if let Some(prompt) = &cli.opening_prompt {
        debate.opening_prompt = Some(prompt.clone());
    }
    if let Some(model) = &cli.model {
        let Ok(model) = model.parse::<Model>();
        config.models.base = model;
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if let Some(dir) = &cli.transcript_dir {
        config.logging.transcript_dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.log_dir {
        config.logging.debug_log_dir = Some(dir.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("symposium").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_overrides_file_config() {
        let mut config: FileConfig = toml::from_str(
            r#"
[debate]
topic = "From file"
pro_position = "A"
con_position = "B"
max_turns = 8

[models]
base = "gpt-4o"
"#,
        )
        .unwrap();

        apply_cli_overrides(&mut config, &parse(&["From CLI", "-t", "2", "-o", "json"]));

        assert_eq!(config.debate.topic.as_deref(), Some("From CLI"));
        assert_eq!(config.debate.pro_position.as_deref(), Some("A"));
        assert_eq!(config.debate.max_turns, 2);
        assert_eq!(config.models.base, Model::Gpt4o);
        assert_eq!(config.output.format, Some(OutputFormat::Json));

        let debate = config.debate.to_debate_config().unwrap();
        assert_eq!(debate.topic(), "From CLI");
        assert_eq!(debate.max_turns(), 2);
    }

    #[test]
    fn test_model_flag_accepts_custom_names() {
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &parse(&["X", "-m", "local-llama"]));
        assert_eq!(config.models.base, Model::Custom("local-llama".to_string()));
    }

    #[test]
    fn test_missing_positions_fail_validation() {
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &parse(&["Topic only"]));
        assert!(config.debate.to_debate_config().is_err());
    }

    #[test]
    fn test_transcript_logger_without_dir_is_noop() {
        // Constructing must not touch the filesystem
        let _logger = transcript_logger(None);
    }
}
