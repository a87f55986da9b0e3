use std::ffi::{OsStr, OsString};

use colored::{ColoredString, Colorize};

use crate::program::ProgramSummary;

// =============================================================================
// Console presentation of built programs
// =============================================================================

pub struct ProgramFormatter {
    use_color: bool,
}

impl ProgramFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn no_color_env() -> Option<OsString> {
        std::env::var_os("NO_COLOR")
    }

    /// Color is on unless `--no-color`, `[output] color = false`, or a
    /// non-empty `NO_COLOR` turns it off.
    pub fn resolve_color(no_color_flag: bool, config_color: bool, no_color_env: Option<impl AsRef<OsStr>>) -> bool {
        let env_allows = no_color_env.map_or(true, |value| value.as_ref().is_empty());
        !no_color_flag && config_color && env_allows
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_text(&self, title: &str, summary: &ProgramSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            self.paint(&format!("Educational program: {title}"), |s| s.bold().cyan())
        ));
        output.push_str(&format!(
            "Duration: {} weeks\n",
            self.paint(&summary.duration_in_weeks.to_string(), |s| s.yellow())
        ));
        output.push_str(&format!(
            "Difficulty: {}\n",
            self.paint(&summary.difficulty_level, |s| s.green())
        ));

        if summary.subjects.is_empty() {
            output.push_str("Subjects: (none)\n");
        } else {
            output.push_str("Subjects:\n");
            for subject in &summary.subjects {
                output.push_str(&format!("- {subject}\n"));
            }
        }
        output
    }

    pub fn format_json(summary: &ProgramSummary) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(summary)
    }

    pub fn format_error(&self, message: &str) -> String {
        self.paint(&format!("error: {message}"), |s| s.red())
    }
}
