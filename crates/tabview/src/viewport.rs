#![forbid(unsafe_code)]

//! Viewport and cursor arithmetic for a scrollable grid.
//!
//! [`Viewport`] tracks four things that must stay consistent:
//!
//! - the grid dimensions (`row_count` x `row_width`),
//! - the visible window (`width` columns x `height` rows),
//! - the scroll offset (`x_offset`, `y_offset`): the first visible column
//!   and row,
//! - the cursor (`row`, `col`) and the [`SelectionMode`].
//!
//! The cursor is absolute: `row` and `col` index the grid directly, and the
//! offsets only decide which slice of the grid is on screen. Vertical moves
//! scroll just far enough to keep the cursor row inside the window.
//! Horizontal moves do the same for the cursor column in cell mode; in row
//! mode they pan the window instead.
//!
//! Every operation is total. Out-of-range requests saturate at the grid
//! edges, and on an empty grid every move is a no-op.

use std::ops::Range;

use crate::trace;

/// Default number of visible columns and rows.
pub const DEFAULT_SIZE: usize = 20;

/// What the cursor highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// The whole cursor row is highlighted; left/right pan the window.
    #[default]
    Row,
    /// A single cell is highlighted; left/right move the cursor column.
    Cell,
}

impl SelectionMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Row => Self::Cell,
            Self::Cell => Self::Row,
        }
    }
}

/// Scroll offset, window size and cursor for a grid of `row_count` rows of
/// `row_width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    x_offset: usize,
    y_offset: usize,
    width: usize,
    height: usize,
    row: usize,
    col: usize,
    mode: SelectionMode,
    row_count: usize,
    row_width: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl Viewport {
    /// A viewport showing `width` columns and `height` rows of an empty grid.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            x_offset: 0,
            y_offset: 0,
            width,
            height,
            row: 0,
            col: 0,
            mode: SelectionMode::Row,
            row_count: 0,
            row_width: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Dimensions
    // ---------------------------------------------------------------------

    /// Update the grid dimensions after the data changed.
    ///
    /// The cursor is clamped into the new grid, `y_offset` is pulled back so
    /// it never points past the cursor, and `x_offset` never pans past the
    /// point where the last column is flush with the right edge.
    pub fn set_dimensions(&mut self, row_count: usize, row_width: usize) {
        self.row_count = row_count;
        self.row_width = row_width;
        self.row = self.row.min(self.last_row());
        self.col = self.col.min(self.last_col());
        self.y_offset = self.y_offset.min(self.row);
        self.x_offset = self.x_offset.min(self.max_x_offset());
    }

    /// Number of rows in the grid.
    #[inline]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of cells per row.
    #[inline]
    pub const fn row_width(&self) -> usize {
        self.row_width
    }

    /// Visible column count.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Visible row count.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Set the visible column count.
    ///
    /// `x_offset` is pulled back to the widest valid pan; in cell mode it
    /// also follows the cursor column so it stays on screen.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.x_offset = self.x_offset.min(self.max_x_offset());
        if self.mode == SelectionMode::Cell {
            let span = self.width.saturating_sub(1);
            let col = self.col_index();
            if col > self.x_offset.saturating_add(span) {
                self.x_offset = col - span;
            }
        }
    }

    /// Set the visible row count, scrolling down if the cursor row would
    /// fall below the shorter window.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        let span = self.height.saturating_sub(1);
        let row = self.cursor();
        if row > self.y_offset.saturating_add(span) {
            self.y_offset = row - span;
        }
    }

    /// Index of the first visible column.
    #[inline]
    pub const fn x_offset(&self) -> usize {
        self.x_offset
    }

    /// Index of the first visible row.
    #[inline]
    pub const fn y_offset(&self) -> usize {
        self.y_offset
    }

    #[inline]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Flip between row and cell selection. Cursor and offsets are kept.
    pub fn toggle_cell_select(&mut self) {
        self.mode = self.mode.toggled();
        trace!(mode = ?self.mode, "toggle_cell_select");
    }

    // ---------------------------------------------------------------------
    // Cursor accessors
    // ---------------------------------------------------------------------

    /// Cursor row, clamped into the grid (0 when the grid is empty).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.row.min(self.last_row())
    }

    /// Same as [`Viewport::cursor`].
    #[inline]
    pub fn row_index(&self) -> usize {
        self.cursor()
    }

    /// Cursor column, clamped into the row width (0 when rows are empty).
    #[inline]
    pub fn col_index(&self) -> usize {
        self.col.min(self.last_col())
    }

    /// Place the cursor on row `n`, clamped into the grid.
    ///
    /// The window is not scrolled: a caller jumping the cursor directly can
    /// leave it outside the visible rows.
    pub fn set_cursor(&mut self, n: usize) {
        self.row = n.min(self.last_row());
    }

    /// Same as [`Viewport::set_cursor`].
    pub fn set_row_index(&mut self, n: usize) {
        self.set_cursor(n);
    }

    /// Place the cursor on column `n`, clamped into the row width. Does not
    /// scroll.
    pub fn set_col_index(&mut self, n: usize) {
        self.col = n.min(self.last_col());
    }

    /// Rows currently inside the window, bounded by the grid.
    pub fn visible_rows(&self) -> Range<usize> {
        let start = self.y_offset.min(self.row_count);
        let end = self.y_offset.saturating_add(self.height).min(self.row_count);
        start..end
    }

    /// Columns currently inside the window, bounded by the row width.
    pub fn visible_cols(&self) -> Range<usize> {
        let start = self.x_offset.min(self.row_width);
        let end = self.x_offset.saturating_add(self.width).min(self.row_width);
        start..end
    }

    // ---------------------------------------------------------------------
    // Movement
    // ---------------------------------------------------------------------

    /// Move the cursor up `n` rows, stopping at the first row.
    ///
    /// Scrolls up when the cursor leaves the top of the window; never
    /// scrolls down.
    pub fn move_up(&mut self, n: usize) {
        if self.row_count == 0 {
            return;
        }
        self.row = self.row.saturating_sub(n).min(self.last_row());
        if self.row < self.y_offset {
            self.y_offset = self.row;
        }
        trace!(n, row = self.row, y_offset = self.y_offset, "move_up");
    }

    /// Move the cursor down `n` rows, stopping at the last row.
    ///
    /// Scrolls down when the cursor leaves the bottom of the window; never
    /// scrolls up.
    pub fn move_down(&mut self, n: usize) {
        if self.row_count == 0 {
            return;
        }
        self.row = self.row.saturating_add(n).min(self.last_row());
        let span = self.height.saturating_sub(1);
        if self.row > self.y_offset.saturating_add(span) {
            self.y_offset = self.row - span;
        }
        trace!(n, row = self.row, y_offset = self.y_offset, "move_down");
    }

    /// Cell mode: move the cursor `n` columns left, scrolling to keep it
    /// visible. Row mode: pan the window `n` columns left, stopping at the
    /// first column.
    pub fn move_left(&mut self, n: usize) {
        if self.row_count == 0 || self.row_width == 0 {
            return;
        }
        match self.mode {
            SelectionMode::Cell => {
                self.col = self.col.saturating_sub(n).min(self.last_col());
                if self.col < self.x_offset {
                    self.x_offset = self.col;
                }
            }
            SelectionMode::Row => {
                self.x_offset = self.x_offset.saturating_sub(n);
            }
        }
        trace!(n, col = self.col, x_offset = self.x_offset, "move_left");
    }

    /// Cell mode: move the cursor `n` columns right, scrolling to keep it
    /// visible. Row mode: pan the window `n` columns right until the last
    /// column is flush with the right edge.
    pub fn move_right(&mut self, n: usize) {
        if self.row_count == 0 || self.row_width == 0 {
            return;
        }
        match self.mode {
            SelectionMode::Cell => {
                self.col = self.col.saturating_add(n).min(self.last_col());
                let span = self.width.saturating_sub(1);
                if self.col > self.x_offset.saturating_add(span) {
                    self.x_offset = self.col - span;
                }
            }
            SelectionMode::Row => {
                self.x_offset = self.x_offset.saturating_add(n).min(self.max_x_offset());
            }
        }
        trace!(n, col = self.col, x_offset = self.x_offset, "move_right");
    }

    /// Move one window height up.
    pub fn page_up(&mut self) {
        self.move_up(self.height);
    }

    /// Move one window height down.
    pub fn page_down(&mut self) {
        self.move_down(self.height);
    }

    /// Move half a window height up.
    pub fn half_page_up(&mut self) {
        self.move_up(self.height / 2);
    }

    /// Move half a window height down.
    pub fn half_page_down(&mut self) {
        self.move_down(self.height / 2);
    }

    /// Move to the first row. The up-scroll rule resets `y_offset` to 0.
    pub fn goto_top(&mut self) {
        self.move_up(self.row.saturating_add(self.y_offset));
    }

    /// Move to the last row, scrolling so it sits at the bottom of the window.
    pub fn goto_bottom(&mut self) {
        self.move_down(self.row_count);
    }

    #[inline]
    fn last_row(&self) -> usize {
        self.row_count.saturating_sub(1)
    }

    #[inline]
    fn last_col(&self) -> usize {
        self.row_width.saturating_sub(1)
    }

    /// Row-mode pan limit: the last column flush with the right edge.
    #[inline]
    fn max_x_offset(&self) -> usize {
        self.row_width.saturating_sub(self.width)
    }
}
