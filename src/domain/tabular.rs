//! Tabular rendering of entities for the admin view.

use super::{Metric, Score, User};

/// An entity that can be listed as a table row.
pub trait TabularRecord {
    /// Column headers
    fn columns() -> Vec<&'static str>;

    /// Cell values, one per column
    fn row(&self) -> Vec<String>;
}

impl TabularRecord for User {
    fn columns() -> Vec<&'static str> {
        vec!["id", "user_id", "print_name", "password", "is_admin", "n_submit"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_id.clone(),
            self.print_name.clone(),
            self.password_hash().to_string(),
            self.is_admin.to_string(),
            self.n_submit.to_string(),
        ]
    }
}

impl TabularRecord for Score {
    fn columns() -> Vec<&'static str> {
        let mut columns = vec!["id", "created_at", "user_primary_key", "comment"];
        columns.extend(Metric::ALL.into_iter().map(Metric::label));
        columns
    }

    fn row(&self) -> Vec<String> {
        let mut row = vec![
            self.id.to_string(),
            self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.user_primary_key.to_string(),
            self.comment.clone().unwrap_or_default(),
        ];
        row.extend(Metric::ALL.into_iter().map(|m| format!("{:.4}", self.metric(m))));
        row
    }
}

/// Lay records out as a left-aligned text table with a header rule.
pub fn render_table<T: TabularRecord>(records: &[T]) -> String {
    let header: Vec<String> = T::columns().into_iter().map(str::to_string).collect();
    let rows: Vec<Vec<String>> = records.iter().map(TabularRecord::row).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_line(&header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_line(&rule, &widths));
    for row in &rows {
        out.push_str(&format_line(row, &widths));
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let mut line = padded.join(" | ").trim_end().to_string();
    line.push('\n');
    line
}
