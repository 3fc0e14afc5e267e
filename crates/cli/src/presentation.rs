// crates/cli/src/presentation.rs
use std::fmt::Write;

use dirsizer_domain::SizeSummary;
use serde::Serialize;

use crate::{error::Result, options::OutputFormat, runner::RootReport};

#[derive(Debug, Serialize)]
struct RootView {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&RootReport> for RootView {
    fn from(report: &RootReport) -> Self {
        let path = report.root.display().to_string();
        match &report.outcome {
            Ok(summary) => Self {
                path,
                size: Some(summary.size.bytes()),
                count: Some(summary.count.value()),
                error: None,
            },
            Err(err) => Self { path, size: None, count: None, error: Some(err.to_string()) },
        }
    }
}

#[derive(Debug, Serialize)]
struct Document {
    roots: Vec<RootView>,
    total: SizeSummary,
}

/// Renders the reports in `format`. The returned text ends with a newline.
///
/// Failed roots appear in the structured formats with an `error` field and
/// are left out of the table; the caller reports them on stderr.
///
/// # Errors
/// Fails only if serialization fails.
pub fn render(
    reports: &[RootReport],
    total: SizeSummary,
    format: OutputFormat,
    human: bool,
) -> Result<String> {
    let views: Vec<RootView> = reports.iter().map(RootView::from).collect();
    match format {
        OutputFormat::Table => Ok(render_table(reports, total, human)),
        OutputFormat::Json => {
            let doc = Document { roots: views, total };
            Ok(serde_json::to_string_pretty(&doc)? + "\n")
        }
        OutputFormat::Yaml => {
            let doc = Document { roots: views, total };
            Ok(serde_yaml::to_string(&doc)?)
        }
        OutputFormat::Jsonl => render_jsonl(&views, total),
    }
}

fn render_table(reports: &[RootReport], total: SizeSummary, human: bool) -> String {
    let size_of = |summary: &SizeSummary| {
        if human { summary.size.to_human() } else { summary.size.to_string() }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{:>14}{:>12}  PATH", "SIZE", "FILES");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for report in reports {
        if let Ok(summary) = &report.outcome {
            let _ = writeln!(
                out,
                "{:>14}{:>12}  {}",
                size_of(summary),
                summary.count,
                report.root.display()
            );
        }
    }
    if reports.len() > 1 {
        let _ = writeln!(out, "---");
        let _ = writeln!(out, "{:>14}{:>12}  TOTAL", size_of(&total), total.count);
    }
    out
}

fn render_jsonl(views: &[RootView], total: SizeSummary) -> Result<String> {
    let mut out = String::new();
    for view in views {
        let mut value = serde_json::to_value(view)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type".to_string(), "root".into());
        }
        out.push_str(&serde_json::to_string(&value)?);
        out.push('\n');
    }
    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "size": total.size,
        "count": total.count,
    });
    out.push_str(&total_obj.to_string());
    out.push('\n');
    Ok(out)
}
