//! Live console reporting while a debate runs

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use symposium_application::{DebateEvent, DebateObserver};
use symposium_domain::{DebateConfig, DebateResult, Phase};

const RULE_WIDTH: usize = 80;

/// Prints each message as it is added to the transcript, with a spinner
/// while a persona is thinking
pub struct DebateReporter {
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl DebateReporter {
    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }

    /// Framed block for one transcript message
    pub fn message_block(event: &DebateEvent<'_>) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!(
            "\n{}\n{}\n{} {}\n{}\n{}\n{}\n",
            rule,
            event.speaker.to_uppercase().yellow().bold(),
            "Phase:".dimmed(),
            capitalize(event.phase),
            "-".repeat(RULE_WIDTH),
            event.content.trim(),
            rule
        )
    }

    /// Banner printed before the opening prompt
    pub fn session_banner(config: &DebateConfig) -> String {
        format!(
            "\n{}\n{} {}\n{} {}\n{} {}\n{} {} · {} {}\n",
            ConsoleFormatter::header("AI Symposium"),
            "Topic:".cyan().bold(),
            config.topic(),
            "Pro Position:".green().bold(),
            config.pro_position(),
            "Con Position:".red().bold(),
            config.con_position(),
            "Max Turns:".dimmed(),
            config.max_turns(),
            "Style:".dimmed(),
            config.style()
        )
    }
}

impl DebateObserver for DebateReporter {
    fn on_session_start(&self, config: &DebateConfig) {
        println!("{}", Self::session_banner(config));
    }

    fn on_exchange_start(&self, speaker: &str, phase: Phase) {
        if !self.show_progress {
            return;
        }
        self.clear_spinner();

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(speaker.to_string());
        pb.set_message(format!("is thinking ({})...", phase.display_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_message(&self, event: &DebateEvent<'_>) {
        self.clear_spinner();
        println!("{}", Self::message_block(event));
    }

    fn on_turn_limit_reached(&self, max_turns: u32) {
        self.clear_spinner();
        println!(
            "\n{} {}\n",
            "!".yellow().bold(),
            format!("Maximum turns ({max_turns}) reached, concluding debate...").yellow()
        );
    }

    fn on_summary_start(&self) {
        println!("\n{}\n", "Generating final summary...".cyan());
    }

    fn on_session_end(&self, result: &DebateResult) {
        self.clear_spinner();
        println!(
            "\n{}\n{}\n{}",
            "DEBATE SUMMARY".cyan().bold(),
            "=".repeat(RULE_WIDTH),
            result.final_summary
        );
        println!("{}", ConsoleFormatter::statistics(result));
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_block() {
        colored::control::set_override(false);
        let block = DebateReporter::message_block(&DebateEvent {
            speaker: "Pro Speaker",
            content: "  Safety matters.\n",
            phase: "opening",
        });
        assert!(block.contains("PRO SPEAKER"));
        assert!(block.contains("Phase: Opening"));
        assert!(block.contains("\nSafety matters.\n"));
    }

    #[test]
    fn test_session_banner() {
        colored::control::set_override(false);
        let config = DebateConfig::new("AI regulation", "Yes", "No").unwrap();
        let banner = DebateReporter::session_banner(&config);
        assert!(banner.contains("Topic: AI regulation"));
        assert!(banner.contains("Pro Position: Yes"));
        assert!(banner.contains("Con Position: No"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("setup"), "Setup");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_spinner_lifecycle_without_progress() {
        let reporter = DebateReporter::new(false);
        reporter.on_exchange_start("Moderator", Phase::Opening);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
