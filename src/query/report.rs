//! Detection report assembly and rendering.
//!
//! A report combines a date-range query with all-time statistics. Rendering
//! is a plain summary; charts and styled templates are left to consumers of
//! the structured form.

use super::DetectionQueryResult;
use crate::analytics::{PeriodStatistics, unique_species};
use crate::constants::confidence::PERCENT_DECIMAL_PLACES;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format of a detection report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Standalone HTML page.
    #[default]
    Html,
    /// Markdown document.
    Markdown,
    /// Structured JSON bundle.
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "html" => Ok(Self::Html),
            "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidArgument {
                name: "report format",
                value: s.to_string(),
                expected: "html, markdown or json",
            }),
        }
    }
}

/// Requested report range, echoed back as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Range start.
    pub start: String,
    /// Range end.
    pub end: String,
}

/// Data feeding a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Requested range.
    pub period: ReportPeriod,
    /// All-time statistics with no confidence threshold.
    pub summary: PeriodStatistics,
    /// Detections inside the requested range.
    pub detections: DetectionQueryResult,
}

/// Report content, either rendered text or the structured bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportBody {
    /// HTML or Markdown text.
    Rendered(String),
    /// Structured data.
    Structured(Box<ReportData>),
}

/// A generated detection report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Report content.
    pub report: ReportBody,
    /// Format of `report`.
    pub format: ReportFormat,
}

impl DetectionReport {
    /// Render `data` in `format`.
    pub fn render(data: ReportData, format: ReportFormat) -> Self {
        let report = match format {
            ReportFormat::Html => ReportBody::Rendered(render_html(&data)),
            ReportFormat::Markdown => ReportBody::Rendered(render_markdown(&data)),
            ReportFormat::Json => ReportBody::Structured(Box::new(data)),
        };
        Self { report, format }
    }
}

/// Summary lines shared by the text renderers.
struct Summary {
    range_total: usize,
    range_species: usize,
    range_confidence: String,
    all_time_total: usize,
    all_time_species: usize,
}

impl Summary {
    fn of(data: &ReportData) -> Self {
        Self {
            range_total: data.detections.total,
            range_species: unique_species(&data.detections.detections),
            range_confidence: format_percent(data.detections.stats.average),
            all_time_total: data.summary.total_detections,
            all_time_species: data.summary.unique_species,
        }
    }
}

fn format_percent(fraction: f64) -> String {
    format!("{:.prec$}%", fraction * 100.0, prec = PERCENT_DECIMAL_PLACES)
}

/// Render the report as a standalone HTML page.
pub fn render_html(data: &ReportData) -> String {
    let summary = Summary::of(data);
    let mut html = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html>");
    let _ = writeln!(html, "<head><title>Bird Detection Report</title></head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<h1>Bird Detection Report</h1>");
    let _ = writeln!(
        html,
        "<p>Period: {} to {}</p>",
        escape_html(&data.period.start),
        escape_html(&data.period.end)
    );
    let _ = writeln!(html, "<h2>Summary</h2>");
    let _ = writeln!(html, "<ul>");
    let _ = writeln!(html, "<li>Detections in period: {}</li>", summary.range_total);
    let _ = writeln!(html, "<li>Species in period: {}</li>", summary.range_species);
    let _ = writeln!(html, "<li>Average confidence: {}</li>", summary.range_confidence);
    let _ = writeln!(html, "<li>Total Detections: {}</li>", summary.all_time_total);
    let _ = writeln!(html, "<li>Unique Species: {}</li>", summary.all_time_species);
    let _ = writeln!(html, "</ul>");

    if !data.summary.top_species.is_empty() {
        let _ = writeln!(html, "<h2>Top Species</h2>");
        let _ = writeln!(html, "<ol>");
        for entry in &data.summary.top_species {
            let _ = writeln!(html, "<li>{} ({})</li>", escape_html(&entry.species), entry.count);
        }
        let _ = writeln!(html, "</ol>");
    }

    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}

/// Render the report as Markdown.
pub fn render_markdown(data: &ReportData) -> String {
    let summary = Summary::of(data);
    let mut md = String::new();

    let _ = writeln!(md, "# Bird Detection Report");
    let _ = writeln!(md, "{} to {}", data.period.start, data.period.end);
    let _ = writeln!(md);
    let _ = writeln!(md, "## Summary Statistics");
    let _ = writeln!(md, "- Detections in period: {}", summary.range_total);
    let _ = writeln!(md, "- Species in period: {}", summary.range_species);
    let _ = writeln!(md, "- Average Confidence: {}", summary.range_confidence);
    let _ = writeln!(md, "- Total Detections: {}", summary.all_time_total);
    let _ = writeln!(md, "- Unique Species: {}", summary.all_time_species);

    if !data.summary.top_species.is_empty() {
        let _ = writeln!(md);
        let _ = writeln!(md, "## Top Species");
        for (rank, entry) in data.summary.top_species.iter().enumerate() {
            let _ = writeln!(md, "{}. {} ({})", rank + 1, entry.species, entry.count);
        }
    }

    md
}

/// Escape text for inclusion in HTML element content.
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
