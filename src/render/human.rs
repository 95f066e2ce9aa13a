//! Human-readable output.
//!
//! List tables are laid out with `rich_rust`; everything else is plain lines
//! styled with `colored`.

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};
use rich_rust::prelude::*;
use rich_rust::{ColorSystem, Segment};

use crate::core::models::{ActivationStatus, Network, NetworkList};
use crate::core::sync::SyncReport;
use crate::render::ActionOutcome;

/// Apply a style unless colors are disabled.
fn paint(text: &str, no_color: bool, style: fn(&str) -> ColoredString) -> String {
    if no_color {
        text.to_string()
    } else {
        style(text).to_string()
    }
}

/// Width the list table is laid out in.
const TABLE_WIDTH: usize = 120;

/// Join rendered segments, styling them unless colors are disabled.
fn segments_to_string(segments: &[Segment], no_color: bool) -> String {
    segments
        .iter()
        .map(|seg| match &seg.style {
            Some(style) if !no_color => style.render(&seg.text, ColorSystem::TrueColor),
            _ => seg.text.to_string(),
        })
        .collect()
}

/// Build the list table: a header row, then one row per list.
fn build_list_table(lists: &[NetworkList]) -> Table {
    let extended = lists
        .iter()
        .any(|list| list.staging_activation_status.is_some() || list.production_activation_status.is_some());

    let mut table = Table::new();
    if extended {
        table.add_row_cells(["UNIQUE ID", "NAME", "TYPE", "ELEMENTS", "STAGING", "PRODUCTION"]);
    } else {
        table.add_row_cells(["UNIQUE ID", "NAME", "TYPE", "ELEMENTS"]);
    }

    for list in lists {
        let list_type = list.list_type.to_string();
        let count = list.count().to_string();
        if extended {
            let staging = status_or_dash(list.staging_activation_status.as_deref());
            let production = status_or_dash(list.production_activation_status.as_deref());
            table.add_row_cells([
                list.unique_id.as_str(),
                &list.name,
                &list_type,
                &count,
                &staging,
                &production,
            ]);
        } else {
            table.add_row_cells([list.unique_id.as_str(), &list.name, &list_type, &count]);
        }
    }

    table
}

/// Render lists as a table.
#[must_use]
pub fn render_lists(lists: &[NetworkList], no_color: bool) -> String {
    if lists.is_empty() {
        return paint("No network lists found", no_color, |s| s.dimmed());
    }

    let table = build_list_table(lists);
    let mut output = segments_to_string(&table.render(TABLE_WIDTH), no_color);
    if !output.ends_with('\n') {
        output.push('\n');
    }
    let _ = write!(output, "{} list(s)", lists.len());
    output
}

fn status_or_dash(status: Option<&str>) -> String {
    status.unwrap_or("-").to_string()
}

/// Render one list with its details and elements.
#[must_use]
pub fn render_list(list: &NetworkList, no_color: bool) -> String {
    let mut output = String::new();

    let title = format!("{} ({})", list.name, list.unique_id);
    output.push_str(&paint(&title, no_color, |s| s.cyan().bold()));
    output.push('\n');

    let mut field = |label: &str, value: &str| {
        let _ = writeln!(output, "  {:<12} {value}", format!("{label}:"));
    };
    field("Type", list.list_type.as_str());
    field("Elements", &list.count().to_string());
    if let Some(description) = &list.description {
        field("Description", description);
    }
    if let Some(sync_point) = list.sync_point {
        field("Sync point", &sync_point.to_string());
    }
    if list.read_only {
        field("Read only", "yes");
    }
    if let Some(status) = &list.staging_activation_status {
        field("Staging", status);
    }
    if let Some(status) = &list.production_activation_status {
        field("Production", status);
    }
    if let (Some(date), Some(user)) = (&list.update_date, &list.updated_by) {
        field("Updated", &format!("{date} by {user}"));
    }

    if let Some(elements) = &list.list {
        output.push('\n');
        if elements.is_empty() {
            output.push_str(&paint("  (no elements)", no_color, |s| s.dimmed()));
            output.push('\n');
        }
        for element in elements {
            let _ = writeln!(output, "  {element}");
        }
    }

    output.trim_end().to_string()
}

/// Render a sync report as a diff.
#[must_use]
pub fn render_sync_report(report: &SyncReport, no_color: bool) -> String {
    let mut output = String::new();
    let title = format!("Sync {} -> {}", report.source, report.destination);
    output.push_str(&paint(&title, no_color, |s| s.cyan().bold()));
    output.push('\n');

    if report.additions.is_empty() && report.removals.is_empty() {
        output.push_str("  Already in sync, nothing to do");
        return output;
    }

    for element in &report.additions {
        let _ = writeln!(output, "  {} {element}", paint("+", no_color, |s| s.green()));
    }
    for element in &report.removals {
        if report.removals_applied {
            let _ = writeln!(output, "  {} {element}", paint("-", no_color, |s| s.red()));
        } else {
            let _ = writeln!(
                output,
                "  {} {element} {}",
                paint("-", no_color, |s| s.yellow()),
                paint("(skipped)", no_color, |s| s.dimmed())
            );
        }
    }

    let _ = write!(
        output,
        "\n{} added, {} removed",
        report.additions.len(),
        if report.removals_applied {
            report.removals.len()
        } else {
            0
        }
    );

    let pending = report.pending_removals();
    if !pending.is_empty() {
        output.push('\n');
        output.push_str(&paint(
            &format!(
                "{} element(s) only in the destination were kept; rerun with --force to remove them",
                pending.len()
            ),
            no_color,
            |s| s.yellow(),
        ));
    }

    output
}

/// Render an activation record.
#[must_use]
pub fn render_activation(status: &ActivationStatus, network: Network, no_color: bool) -> String {
    let mut output = String::new();

    let state = match status.activation_status.as_str() {
        "ACTIVATED" => paint(&status.activation_status, no_color, |s| s.green().bold()),
        "FAILED" => paint(&status.activation_status, no_color, |s| s.red().bold()),
        other => paint(other, no_color, |s| s.yellow()),
    };
    let list = status.network_list_id.as_deref().unwrap_or("-");
    let _ = writeln!(output, "{list} on {network}: {state}");

    if let Some(id) = status.activation_id {
        let _ = writeln!(output, "  Activation id: {id}");
    }
    if let Some(sync_point) = status.sync_point {
        let _ = writeln!(output, "  Sync point:    {sync_point}");
    }
    if let Some(comments) = &status.activation_comments {
        let _ = writeln!(output, "  Comments:      {comments}");
    }

    output.trim_end().to_string()
}

/// Render a state change confirmation.
#[must_use]
pub fn render_action(outcome: &ActionOutcome, no_color: bool) -> String {
    format!("{} {}", paint("✓", no_color, |s| s.green()), outcome.message)
}
