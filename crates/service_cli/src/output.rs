//! Report rendering.
//!
//! Every command produces a serialisable report that can be printed as a
//! box-drawn table or as pretty JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output format for command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// A command result that can be rendered in either format.
pub trait Report: Serialize {
    /// Table rows as (label, value) pairs.
    fn rows(&self) -> Vec<(String, String)>;
}

/// Renders `report` in the requested format.
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(table(&report.rows())),
    }
}

/// Prints `report` to stdout.
pub fn emit<R: Report>(report: &R, format: OutputFormat) -> Result<()> {
    println!("{}", render(report, format)?);
    Ok(())
}

fn table(rows: &[(String, String)]) -> String {
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(label_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = vec![rule("┌", "┬", "┐")];
    for (label, value) in rows {
        lines.push(format!(
            "│ {:<lw$} │ {:>vw$} │",
            label,
            value,
            lw = label_width,
            vw = value_width
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Formats a price or sensitivity for table output.
pub fn fmt_value(value: f64) -> String {
    format!("{:.6}", value)
}
