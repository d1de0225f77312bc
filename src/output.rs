//! Output formatting for human, JSON, and Markdown modes
//!
//! A [`ReportDocument`] is the serializable view of a
//! [`ComplianceReport`]; it renders as colored console text, pretty JSON,
//! or a Markdown file.

use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{ComplianceReport, SourceKind, Status, Tier, Verdict};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One check in a rendered report
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// Check identifier (e.g. "python-version")
    pub name: String,
    /// Display title
    pub title: String,
    /// Report grouping
    pub category: String,
    /// pass / warn / fail
    pub status: Status,
    /// Explanation
    pub message: String,
    /// Scoring weight; 0 for informational entries
    pub weight: u32,
    /// Why the check could not be verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl From<&Verdict> for CheckEntry {
    fn from(v: &Verdict) -> Self {
        Self {
            name: v.name().to_string(),
            title: v.title().to_string(),
            category: v.category().to_string(),
            status: v.status(),
            message: v.message().to_string(),
            weight: v.weight(),
            error_detail: v.error_detail().map(str::to_string),
        }
    }
}

/// Serializable compliance report
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    /// Identifier as given on the command line
    pub repository: String,
    /// Directory name or `owner/repo`
    pub name: String,
    /// local / remote
    #[serde(rename = "type")]
    pub kind: SourceKind,
    /// Score in percent, one decimal
    pub score: f64,
    /// Score tier
    pub tier: Tier,
    /// Scored checks that passed
    pub passed: usize,
    /// Scored checks that warned
    pub warnings: usize,
    /// Scored checks that failed
    pub failed: usize,
    /// Scored checks
    pub total: usize,
    /// Every verdict in report order
    pub checks: Vec<CheckEntry>,
    #[serde(skip)]
    summary: String,
}

impl From<&ComplianceReport> for ReportDocument {
    fn from(report: &ComplianceReport) -> Self {
        Self {
            repository: report.subject().to_string(),
            name: report.name().to_string(),
            kind: report.kind(),
            score: report.rounded_score(),
            tier: report.tier(),
            passed: report.passed_checks(),
            warnings: report.warning_checks(),
            failed: report.failed_checks(),
            total: report.total_checks(),
            checks: report.verdicts().iter().map(CheckEntry::from).collect(),
            summary: report.get_summary(),
        }
    }
}

fn icon(entry: &CheckEntry) -> ColoredString {
    if entry.weight == 0 {
        return "-".dimmed();
    }
    match entry.status {
        Status::Pass => "✓".green(),
        Status::Warn => "⚠".yellow(),
        Status::Fail => "✗".red(),
    }
}

fn tier_colored(tier: Tier) -> ColoredString {
    let label = tier.to_string();
    match tier {
        Tier::Excellent | Tier::Good => label.green().bold(),
        Tier::Fair => label.yellow().bold(),
        Tier::NeedsWork => label.red().bold(),
    }
}

impl ReportDocument {
    /// Entries grouped by category, categories in first-appearance order
    #[must_use]
    pub fn by_category(&self) -> Vec<(&str, Vec<&CheckEntry>)> {
        let mut groups: Vec<(&str, Vec<&CheckEntry>)> = Vec::new();
        for entry in &self.checks {
            match groups.iter().position(|(name, _)| *name == entry.category) {
                Some(i) => groups[i].1.push(entry),
                None => groups.push((entry.category.as_str(), vec![entry])),
            }
        }
        groups
    }

    /// Tier label plus description
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Render the report to stdout based on output mode
    pub fn render(&self, mode: OutputMode, verbose: bool) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human(verbose)),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Console text
    ///
    /// Passing checks read "No problems noted" and informational entries
    /// are hidden unless `verbose`.
    #[must_use]
    pub fn to_human(&self, verbose: bool) -> String {
        let rule = "=".repeat(80);
        let mut lines = vec![
            String::new(),
            rule.bright_blue().to_string(),
            "PYTHON PROJECT STANDARDS COMPLIANCE REPORT".bold().to_string(),
            rule.bright_blue().to_string(),
            format!("Repository: {}", self.name),
            format!("Type: {}", self.kind.to_string().to_uppercase()),
        ];
        if self.kind == SourceKind::Remote {
            lines.push(format!("Location: {}", self.repository));
        }
        lines.push(format!("Compliance Score: {:.1}%", self.score));
        lines.push(format!(
            "Checks Passed: {}/{} ({} warnings, {} failed)",
            self.passed, self.total, self.warnings, self.failed
        ));
        lines.push("-".repeat(80));

        for (category, entries) in self.by_category() {
            let shown: Vec<&&CheckEntry> =
                entries.iter().filter(|e| verbose || e.weight > 0).collect();
            if shown.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(format!("{}:", category.bold()));
            for entry in shown {
                let message = if entry.status == Status::Pass && entry.weight > 0 && !verbose {
                    "No problems noted"
                } else {
                    entry.message.as_str()
                };
                lines.push(format!("  {} {}: {message}", icon(entry), entry.title));
                if let Some(detail) = &entry.error_detail {
                    lines.push(format!("      {}", detail.dimmed()));
                }
            }
        }

        lines.push(String::new());
        lines.push(rule.bright_blue().to_string());
        lines.push(match self.summary.split_once(": ") {
            Some((_, description)) => format!("{}: {description}", tier_colored(self.tier)),
            None => tier_colored(self.tier).to_string(),
        });
        lines.push(rule.bright_blue().to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    /// Pretty-printed JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Markdown document stamped with `generated_at`
    #[must_use]
    pub fn to_markdown(&self, generated_at: DateTime<Local>) -> String {
        let mut lines = vec![
            format!("# Compliance Report: {}", self.name),
            String::new(),
            format!("_Generated {}_", generated_at.format("%Y-%m-%d %H:%M:%S %Z")),
            String::new(),
            "| | |".to_string(),
            "|---|---|".to_string(),
            format!("| Repository | `{}` |", self.repository),
            format!("| Type | {} |", self.kind),
            format!("| Score | {:.1}% |", self.score),
            format!("| Tier | {} |", self.tier),
            format!(
                "| Checks | {} passed, {} warnings, {} failed of {} |",
                self.passed, self.warnings, self.failed, self.total
            ),
            String::new(),
            format!("**{}**", self.summary),
        ];

        for (category, entries) in self.by_category() {
            lines.push(String::new());
            lines.push(format!("## {category}"));
            lines.push(String::new());
            lines.push("| Status | Check | Weight | Message |".to_string());
            lines.push("|---|---|---|---|".to_string());
            for entry in entries {
                let status = if entry.weight == 0 {
                    "N/A".to_string()
                } else {
                    entry.status.label().to_string()
                };
                let mut message = entry.message.replace('|', "\\|");
                if let Some(detail) = &entry.error_detail {
                    message = format!("{message} ({})", detail.replace('|', "\\|"));
                }
                lines.push(format!(
                    "| {status} | {} | {} | {message} |",
                    entry.title, entry.weight
                ));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}
