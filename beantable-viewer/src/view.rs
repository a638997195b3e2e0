//! Plain-text table rendering.

use std::fmt::Write as _;

use beantable_lib::BeanTable;
use beantable_lib::model::BeanRecord;

/// Renders the visible columns in view order, one line per view row.
///
/// Column widths are the stored widths scaled down to characters, widened to
/// fit the header.
pub fn render<R: BeanRecord>(table: &BeanTable<R>) -> String {
    let columns: Vec<_> = table.columns().visible_columns().collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|c| usize::from(c.width() / 5).max(c.header().chars().count()))
        .collect();

    let mut out = String::from(" ");
    for (column, &width) in columns.iter().zip(&widths) {
        let _ = write!(out, "{:<width$} ", column.header());
    }
    out.push_str("\n ");
    for width in &widths {
        let _ = write!(out, "{} ", "-".repeat(*width));
    }
    out.push('\n');

    for view_row in 0..table.view_row_count() {
        let Some(row) = table.bridge().to_model_row(view_row) else {
            continue;
        };
        let marker = if table.selection().is_row_selected(view_row) { '>' } else { ' ' };
        out.push(marker);
        for (column, &width) in columns.iter().zip(&widths) {
            let text = table.format_cell(row, column.model_index());
            let _ = write!(out, "{:<width$} ", truncate(&text, width));
        }
        out.push('\n');
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
