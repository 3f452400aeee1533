//! Aligned plain-text tables.

use unicode_width::UnicodeWidthStr;

/// A table rendered with right-justified, space-separated columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Create a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Cells beyond the header count are ignored when rendering.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows.push(cells.into_iter().map(|c| c.to_string()).collect());
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Display width of every column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    /// Render header and rows, one line each.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();
        write_line(&mut out, &self.headers, &widths);
        for row in &self.rows {
            write_line(&mut out, row, &widths);
        }
        out
    }
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let pad = width.saturating_sub(cell.width());
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(cell);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_justifies_to_widest_cell() {
        let mut table = TextTable::new(["Number", "X"]);
        table.push_row([1, 100_000]);
        table.push_row([2, 5]);

        assert_eq!(
            table.render(),
            "Number      X\n     1 100000\n     2      5\n"
        );
    }

    #[test]
    fn width_counts_display_columns() {
        let mut table = TextTable::new(["name"]);
        table.push_row(["Größe"]);
        assert_eq!(table.column_widths(), vec![5]);
    }

    #[test]
    fn header_only_table_renders_one_line() {
        let table = TextTable::new(["a", "bb"]);
        assert_eq!(table.render(), "a bb\n");
    }
}
