//! Terminal summary table for a finished run.

use crate::types::RunSummary;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color,
    ContentArrangement, Table,
};

/// Render the run summary as a terminal table.
pub fn render_summary(summary: &RunSummary) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Run").add_attribute(Attribute::Bold),
        Cell::new("Addresses").add_attribute(Attribute::Bold),
        Cell::new("Pass").add_attribute(Attribute::Bold),
        Cell::new("Partial").add_attribute(Attribute::Bold),
        Cell::new("Fail").add_attribute(Attribute::Bold),
        Cell::new("Total (s)").add_attribute(Attribute::Bold),
        Cell::new("Avg (s)").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new(&summary.run_id),
        Cell::new(summary.total),
        Cell::new(summary.passed).fg(Color::Green),
        Cell::new(summary.partial).fg(Color::Yellow),
        Cell::new(summary.failed).fg(if summary.failed > 0 {
            Color::Red
        } else {
            Color::Reset
        }),
        Cell::new(format!("{:.3}", summary.total_duration_secs)),
        Cell::new(format!("{:.3}", summary.average_duration_secs())),
    ]);

    table.to_string()
}
