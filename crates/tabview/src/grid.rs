#![forbid(unsafe_code)]

//! Table data: columns, rows, and the grid that owns them.

use crate::debug;

/// One line of the table. Each entry is a cell.
pub type Row = Vec<String>;

/// A column header and its fixed display width in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub width: usize,
}

impl Column {
    #[must_use]
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// Rows of string cells, all of the same width.
///
/// The row width is computed once when the grid is built. Short rows are
/// padded with empty cells so every row has exactly [`Grid::row_width`]
/// cells and index arithmetic never has to consult an individual row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    row_width: usize,
}

impl Grid {
    /// Build a grid, padding ragged rows to the widest row.
    #[must_use]
    pub fn new(mut rows: Vec<Row>) -> Self {
        let row_width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut padded = 0usize;
        for row in rows.iter_mut().filter(|r| r.len() < row_width) {
            row.resize(row_width, String::new());
            padded += 1;
        }
        if padded > 0 {
            debug!(padded, row_width, "normalized ragged rows");
        }
        Self { rows, row_width }
    }

    /// Parse a block of delimited text.
    ///
    /// Lines are split on `\n` and each line on `separator`. There is no
    /// quoting: a separator inside a value always ends the field. An empty
    /// separator yields one cell per character.
    #[must_use]
    pub fn from_values(value: &str, separator: &str) -> Self {
        let rows = value
            .split('\n')
            .map(|line| {
                if separator.is_empty() {
                    line.chars().map(String::from).collect()
                } else {
                    line.split(separator).map(str::to_owned).collect()
                }
            })
            .collect();
        Self::new(rows)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells in every row.
    #[inline]
    pub fn row_width(&self) -> usize {
        self.row_width
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_splits_lines_and_fields() {
        let grid = Grid::from_values("a,b\nc,d", ",");
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.row_width(), 2);
        assert_eq!(grid.rows()[0], vec!["a", "b"]);
        assert_eq!(grid.rows()[1], vec!["c", "d"]);
    }

    #[test]
    fn from_values_multichar_separator() {
        let grid = Grid::from_values("1::2::3", "::");
        assert_eq!(grid.rows()[0], vec!["1", "2", "3"]);
    }

    #[test]
    fn from_values_empty_separator_splits_chars() {
        let grid = Grid::from_values("abc", "");
        assert_eq!(grid.rows()[0], vec!["a", "b", "c"]);
    }

    #[test]
    fn from_values_trailing_newline_adds_empty_row() {
        let grid = Grid::from_values("a,b\n", ",");
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.rows()[1], vec!["", ""]);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let grid = Grid::from_values("a,b,c\nd", ",");
        assert_eq!(grid.row_width(), 3);
        assert_eq!(grid.rows()[1], vec!["d", "", ""]);
    }

    #[test]
    fn separator_inside_data_is_a_boundary() {
        let grid = Grid::from_values("\"x,y\",z", ",");
        assert_eq!(grid.row_width(), 3);
        assert_eq!(grid.cell(0, 0), Some("\"x"));
    }

    #[test]
    fn empty_grid_has_zero_width() {
        let grid = Grid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.row_width(), 0);
        assert_eq!(grid.row(0), None);
        assert_eq!(grid.cell(0, 0), None);
    }

    #[test]
    fn column_new() {
        let col = Column::new("Name", 12);
        assert_eq!(col.title, "Name");
        assert_eq!(col.width, 12);
    }
}
