//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the debate result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript followed by the summary
    Full,
    /// Only the final summary
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for symposium_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => symposium_domain::OutputFormat::Full,
            OutputFormat::Summary => symposium_domain::OutputFormat::Summary,
            OutputFormat::Json => symposium_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for symposium
#[derive(Parser, Debug)]
#[command(name = "symposium")]
#[command(author, version, about = "AI Symposium - A moderated debate between LLM personas")]
#[command(long_about = r#"
Symposium runs a structured debate between three LLM personas: a moderator,
a pro speaker and a con speaker.

The debate moves through five phases:
  opening -> discussion -> rebuttal -> closing -> summary
The moderator decides who speaks and when to advance; the debate ends when
the moderator concludes it or the turn budget runs out, followed by a
closing summary.

Configuration is merged from (lowest to highest priority):
  1. Built-in defaults
  2. ~/.config/symposium/config.toml        Global config
  3. ./symposium.toml or ./.symposium.toml  Project config
  4. --config <path>                        Explicit config file
  5. SYMPOSIUM_<SECTION>__<KEY>             Environment variables
  6. Command-line flags

The API key is read from OPENAI_API_KEY (see [provider] api_key_env).

Example:
  symposium "Should AI be regulated?" \
    --pro "Regulation is necessary for safety" \
    --con "Regulation would stifle innovation"
  symposium "Remote work" --pro "..." --con "..." -t 4 -m gpt-4o -o json
"#)]
pub struct Cli {
    /// The debate topic (falls back to [debate] topic in the config)
    pub topic: Option<String>,

    /// Position argued by the pro speaker
    #[arg(long, value_name = "POSITION")]
    pub pro: Option<String>,

    /// Position argued by the con speaker
    #[arg(long, value_name = "POSITION")]
    pub con: Option<String>,

    /// Maximum number of turns before the debate is forced to conclude
    #[arg(short = 't', long, value_name = "N")]
    pub max_turns: Option<u32>,

    /// Debate style tag passed to the moderator
    #[arg(long)]
    pub style: Option<String>,

    /// Model used by every persona
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Opening prompt (derived from the topic and positions by default)
    #[arg(long, value_name = "TEXT")]
    pub opening_prompt: Option<String>,

    /// Output format for the final result
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory for the JSONL debate transcript
    #[arg(long, value_name = "DIR")]
    pub transcript_dir: Option<PathBuf>,

    /// Directory for the debug log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress live debate output and progress indicators
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "symposium",
            "Should AI be regulated?",
            "--pro",
            "Yes",
            "--con",
            "No",
            "-t",
            "4",
            "-m",
            "gpt-4o",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.topic.as_deref(), Some("Should AI be regulated?"));
        assert_eq!(cli.pro.as_deref(), Some("Yes"));
        assert_eq!(cli.con.as_deref(), Some("No"));
        assert_eq!(cli.max_turns, Some(4));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_show_config_without_topic() {
        let cli = Cli::try_parse_from(["symposium", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.topic.is_none());
    }

    #[test]
    fn test_rejects_non_numeric_turns() {
        assert!(Cli::try_parse_from(["symposium", "X", "-t", "many"]).is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            symposium_domain::OutputFormat::from(OutputFormat::Summary),
            symposium_domain::OutputFormat::Summary
        );
    }
}
