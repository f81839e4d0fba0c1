//! Console output formatter for policy answers

use assistant_domain::AnswerPayload;
use colored::Colorize;

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Disable colored output when the configuration asks for plain text.
    ///
    /// Colors stay on terminal auto-detection otherwise.
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a successful answer: summary section plus key details
    pub fn format(question: &str, payload: &AnswerPayload) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), question));

        output.push_str(&format!("{}\n{}\n", "Summary".cyan().bold(), payload.summary));

        if payload.has_bullets() {
            output.push_str(&format!("\n{}\n", "Key Details".cyan().bold()));
            for bullet in &payload.bullets {
                output.push_str(&format!("  * {}\n", bullet));
            }
        }

        output
    }

    /// Format the raw answer payload as JSON
    pub fn format_json(payload: &AnswerPayload) -> String {
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a failure message
    pub fn format_failure(message: &str) -> String {
        format!("{} {}", "Query failed:".red().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_includes_summary_and_bullets_in_order() {
        plain();
        let payload = AnswerPayload::new(
            "15 days/year.",
            vec![
                "15 days paid vacation".to_string(),
                "Manager approval required".to_string(),
            ],
        );
        let output = ConsoleFormatter::format("What's the vacation policy?", &payload);

        assert!(output.contains("Q: What's the vacation policy?"));
        assert!(output.contains("Summary\n15 days/year."));
        let first = output.find("15 days paid vacation").unwrap();
        let second = output.find("Manager approval required").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_format_omits_key_details_when_empty() {
        plain();
        let payload = AnswerPayload::new("Nothing more to add.", vec![]);
        let output = ConsoleFormatter::format("Dress code?", &payload);
        assert!(!output.contains("Key Details"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let payload = AnswerPayload::new("S", vec!["a".to_string(), "b".to_string()]);
        let json = ConsoleFormatter::format_json(&payload);
        let parsed: AnswerPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_format_failure_keeps_message() {
        plain();
        let output = ConsoleFormatter::format_failure("Policy backend returned status 500");
        assert!(output.contains("500"));
    }
}
