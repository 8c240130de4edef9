//! Console output formatter for debate results

use colored::Colorize;
use symposium_domain::{DebateResult, OutputFormat};

const WIDTH: usize = 80;

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a result in the requested format
    pub fn render(result: &DebateResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Summary => Self::format_summary_only(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the full transcript followed by the summary
    pub fn format(result: &DebateResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate Transcript"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            result.topic
        ));

        output.push_str(&Self::section_header("Transcript"));
        for message in &result.messages {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", message.speaker()).yellow().bold(),
                message.content.trim()
            ));
        }

        output.push_str(&Self::section_header("Summary"));
        output.push('\n');
        output.push_str(&result.final_summary);
        output.push('\n');

        output.push_str(&Self::statistics(result));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &DebateResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the summary only (concise output)
    pub fn format_summary_only(result: &DebateResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Debate Summary ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Topic:".bold(), result.topic));
        output.push_str(&result.final_summary);
        output.push('\n');
        output.push_str(&Self::statistics(result));

        output
    }

    /// Total turns and final phase
    pub fn statistics(result: &DebateResult) -> String {
        let mut output = format!(
            "\n{}\n{} {}\n{} {}\n",
            "Debate Statistics".cyan().bold(),
            "Total Turns:".dimmed(),
            result.turns,
            "Final Phase:".dimmed(),
            result.final_phase
        );
        if result.concluded {
            output.push_str(&format!("{}\n", "Concluded by the moderator".dimmed()));
        }
        output
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(WIDTH).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symposium_domain::{Message, Phase};

    fn result() -> DebateResult {
        DebateResult::new(
            "AI regulation",
            vec![
                Message::user("Welcome."),
                Message::assistant("Pro Speaker", "Safety first."),
            ],
            3,
            Some("Both sides made points."),
            Phase::Rebuttal,
            false,
        )
    }

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_format_full_includes_transcript() {
        let out = plain(|| ConsoleFormatter::render(&result(), OutputFormat::Full));
        assert!(out.contains("── User ──"));
        assert!(out.contains("── Pro Speaker ──"));
        assert!(out.contains("Safety first."));
        assert!(out.contains("Both sides made points."));
        assert!(out.contains("Total Turns: 3"));
        assert!(out.contains("Final Phase: rebuttal"));
    }

    #[test]
    fn test_format_summary_only() {
        let out = plain(|| ConsoleFormatter::render(&result(), OutputFormat::Summary));
        assert!(out.contains("Both sides made points."));
        assert!(!out.contains("Safety first."));
    }

    #[test]
    fn test_format_json() {
        let out = ConsoleFormatter::render(&result(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["turns"], 3);
        assert_eq!(value["final_phase"], "rebuttal");
        assert_eq!(value["messages"][1]["sender"], "Pro Speaker");
    }
}
