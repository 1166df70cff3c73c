//! Console output formatter for case listings and config warnings

use colored::Colorize;
use panel_domain::{Case, ConfigIssue, Severity};

/// Formats catalog and configuration output for plain terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the case catalog for `--list-cases`
    pub fn format_cases(cases: &[Case]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Cases"));
        output.push('\n');

        for case in cases {
            output.push_str(&format!(
                "\n{} {}\n",
                case.id.yellow().bold(),
                format!("({})", case.title).dimmed()
            ));
            output.push_str(&Self::indent(case.prompt, "  "));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a single case with its data and deliverables
    pub fn format_case(case: &Case) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(case.title));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Id:".cyan().bold(), case.id));

        output.push_str(&Self::section_header("题目"));
        output.push_str(case.prompt);
        output.push('\n');

        output.push_str(&Self::section_header("数据"));
        output.push_str(case.data);
        output.push('\n');

        output.push_str(&Self::section_header("产出"));
        for item in case.deliverables {
            output.push_str(&format!("  * {}\n", item));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format configuration issues, one per line
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => {
                    format!("{} {}", "warning:".yellow().bold(), issue.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
