use crate::guard::canonical_root;
use crate::prelude::{println, *};
use bootstrapper_core::plan::{summarize, PlanSummary, WriteAction, WritePlan};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything the caller sees after a materialization.
#[derive(Debug, Serialize)]
pub struct MaterializeReport {
    pub output_root: PathBuf,
    pub dry_run: bool,
    pub plans: Vec<WritePlan>,
    pub summary: PlanSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MaterializeReport {
    pub fn new(
        output_root: &Path,
        plans: Vec<WritePlan>,
        notes: Option<String>,
        dry_run: bool,
    ) -> Result<Self> {
        Ok(Self {
            output_root: canonical_root(output_root)?,
            dry_run,
            summary: summarize(&plans),
            plans,
            notes,
        })
    }

    /// Plan path relative to the output root, for display.
    fn display_path(&self, plan: &WritePlan) -> String {
        plan.path
            .strip_prefix(&self.output_root)
            .unwrap_or(&plan.path)
            .display()
            .to_string()
    }
}

fn format_report_json(report: &MaterializeReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_summary(report: &MaterializeReport) -> String {
    let verb = if report.dry_run {
        "Would write"
    } else {
        "Wrote"
    };
    format!(
        "{} {} files ({} bytes) into {}: {} created, {} overwritten",
        verb,
        report.summary.files,
        report.summary.total_bytes,
        report.output_root.display(),
        report.summary.creates,
        report.summary.overwrites
    )
}

fn output_formatted(report: &MaterializeReport) -> Result<()> {
    if report.dry_run {
        println!("{}", "[dry-run] Nothing was written.".yellow().bold());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Path", "Bytes", "Action"]);
    for plan in &report.plans {
        let action = match plan.action {
            WriteAction::Create => plan.action.to_string().green(),
            WriteAction::Overwrite => plan.action.to_string().yellow(),
        };
        table.add_row(prettytable::row![report.display_path(plan), plan.bytes, action]);
    }
    table.printstd();

    println!();
    println!("{}", format_summary(report));

    if let Some(notes) = &report.notes {
        println!();
        println!("{}", "Notes:".bright_cyan().bold());
        println!("{}", notes);
    }

    Ok(())
}

pub fn output_report(report: &MaterializeReport, json: bool) -> Result<()> {
    if json {
        println!("{}", format_report_json(report)?);
        Ok(())
    } else {
        output_formatted(report)
    }
}
