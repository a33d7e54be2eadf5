//! Output formatting utilities

use colored::*;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};
use typetraits_evaluator::TraitReport;
use typetraits_types::Attribute;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Table row for the attribute vocabulary
#[derive(Debug, Serialize, Tabled)]
pub struct AttributeRow {
    /// Wire name
    pub name: String,
    /// Concern the flag belongs to
    pub group: String,
    /// What the flag means
    pub description: String,
}

impl From<Attribute> for AttributeRow {
    fn from(attribute: Attribute) -> Self {
        Self {
            name: attribute.name().to_string(),
            group: attribute.group().to_string(),
            description: attribute.description().to_string(),
        }
    }
}

fn mark(holds: bool) -> ColoredString {
    if holds {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Render a trait report as indented text, one predicate per line
pub fn format_report(report: &TraitReport) -> String {
    let mut out = format!("Type: {}\n", report.type_class.to_string().bold());

    out.push_str(&format!("{} aggregate\n", mark(report.is_aggregate())));
    for reason in report.aggregate.explain() {
        out.push_str(&format!("    - {}\n", reason.dimmed()));
    }
    out.push_str(&format!(
        "{} default constructible\n",
        mark(report.default_constructible)
    ));
    out.push_str(&format!(
        "{} trivially default constructible\n",
        mark(report.trivially_default_constructible)
    ));
    out
}

/// Render the attribute vocabulary as a table
pub fn format_attributes(rows: Vec<AttributeRow>) -> String {
    Table::new(rows).to_string()
}

/// Serialize any value as pretty JSON
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
