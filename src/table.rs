//! Aligned plain-text tables for the menus.

use std::fmt;

/// Extra padding added to every column after the first.
const COLUMN_GAP: usize = 4;

/// Rows of text cells rendered with the first column left-aligned and every
/// other column right-aligned. Rows may be shorter than the widest row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0);
                if col == 0 {
                    longest
                } else {
                    longest + COLUMN_GAP
                }
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        writeln!(f)?;
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                if col == 0 {
                    write!(f, "{:<width$}", cell, width = widths[col])?;
                } else {
                    write!(f, "{:>width$}", cell, width = widths[col])?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
