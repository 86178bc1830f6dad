#![forbid(unsafe_code)]

//! The interactive table model.
//!
//! [`Table`] owns the data ([`Grid`] and [`Column`]s), the [`Viewport`], the
//! [`Styles`] and the [`KeyMap`]. A host loop feeds it [`Event`]s through
//! [`Table::update`] and draws whatever [`Table::view`] returns.
//!
//! ```
//! use tabview::{Column, Table};
//!
//! let mut table = Table::new()
//!     .columns(vec![Column::new("ID", 4), Column::new("Name", 10)])
//!     .height(5)
//!     .focused(true);
//! table.from_values("1,alice\n2,bob", ",");
//! table.move_down(1);
//! assert_eq!(table.selected_row().map(|r| r[1].as_str()), Some("bob"));
//! ```

use crate::event::Event;
use crate::grid::{Column, Grid, Row};
use crate::keymap::{Action, KeyMap};
use crate::render::{TableSnapshot, TableView};
use crate::style::Styles;
use crate::viewport::{SelectionMode, Viewport};
use crate::trace;

/// A scrollable table with a row or cell cursor.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    grid: Grid,
    viewport: Viewport,
    focus: bool,
    styles: Styles,
    key_map: KeyMap,
}

impl Table {
    /// An empty, unfocused table with a 20 x 20 window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Builder
    // ---------------------------------------------------------------------

    /// Set the columns (headers).
    #[must_use]
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.set_columns(columns);
        self
    }

    /// Set the rows (data).
    #[must_use]
    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Set the number of visible columns.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.viewport.set_width(width);
        self
    }

    /// Set the number of visible rows.
    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.viewport.set_height(height);
        self
    }

    /// Set the focus state.
    #[must_use]
    pub fn focused(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    // ---------------------------------------------------------------------
    // Data
    // ---------------------------------------------------------------------

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Replace the rows. The cursor is clamped into the new grid.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.set_grid(Grid::new(rows));
    }

    /// Replace the grid. The cursor is clamped into the new grid.
    pub fn set_grid(&mut self, grid: Grid) {
        self.viewport.set_dimensions(grid.len(), grid.row_width());
        self.grid = grid;
    }

    /// Replace the rows with the parsed contents of a delimited text block.
    ///
    /// See [`Grid::from_values`] for the splitting rules.
    pub fn from_values(&mut self, value: &str, separator: &str) {
        self.set_grid(Grid::from_values(value, separator));
    }

    pub fn get_columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get_rows(&self) -> &[Row] {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // ---------------------------------------------------------------------
    // Focus, size and styling
    // ---------------------------------------------------------------------

    pub fn is_focused(&self) -> bool {
        self.focus
    }

    /// Focus the table so key events move the cursor.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Blur the table. Key events are ignored until it is focused again.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    pub fn set_width(&mut self, width: usize) {
        self.viewport.set_width(width);
    }

    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
    }

    /// Visible column count.
    pub fn get_width(&self) -> usize {
        self.viewport.width()
    }

    /// Visible row count.
    pub fn get_height(&self) -> usize {
        self.viewport.height()
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    pub fn key_map_mut(&mut self) -> &mut KeyMap {
        &mut self.key_map
    }

    // ---------------------------------------------------------------------
    // Cursor and selection
    // ---------------------------------------------------------------------

    pub fn mode(&self) -> SelectionMode {
        self.viewport.mode()
    }

    pub fn toggle_cell_select(&mut self) {
        self.viewport.toggle_cell_select();
    }

    /// Index of the cursor row.
    pub fn cursor(&self) -> usize {
        self.viewport.cursor()
    }

    /// Same as [`Table::cursor`].
    pub fn row_index(&self) -> usize {
        self.viewport.row_index()
    }

    pub fn col_index(&self) -> usize {
        self.viewport.col_index()
    }

    /// Move the cursor to row `n` without scrolling.
    pub fn set_cursor(&mut self, n: usize) {
        self.viewport.set_cursor(n);
    }

    /// Same as [`Table::set_cursor`].
    pub fn set_row_index(&mut self, n: usize) {
        self.viewport.set_row_index(n);
    }

    /// Move the cursor to column `n` without scrolling.
    pub fn set_col_index(&mut self, n: usize) {
        self.viewport.set_col_index(n);
    }

    /// The cursor row, or `None` when the table has no rows.
    pub fn selected_row(&self) -> Option<&Row> {
        self.grid.row(self.viewport.cursor())
    }

    /// The cursor cell in cell-select mode; an empty string in row mode or
    /// when the table is empty.
    pub fn selected_cell(&self) -> &str {
        match self.viewport.mode() {
            SelectionMode::Cell => self
                .grid
                .cell(self.viewport.cursor(), self.viewport.col_index())
                .unwrap_or(""),
            SelectionMode::Row => "",
        }
    }

    // ---------------------------------------------------------------------
    // Movement
    // ---------------------------------------------------------------------

    pub fn move_up(&mut self, n: usize) {
        self.viewport.move_up(n);
    }

    pub fn move_down(&mut self, n: usize) {
        self.viewport.move_down(n);
    }

    pub fn move_left(&mut self, n: usize) {
        self.viewport.move_left(n);
    }

    pub fn move_right(&mut self, n: usize) {
        self.viewport.move_right(n);
    }

    pub fn goto_top(&mut self) {
        self.viewport.goto_top();
    }

    pub fn goto_bottom(&mut self) {
        self.viewport.goto_bottom();
    }

    /// Run one navigation action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LineUp => self.viewport.move_up(1),
            Action::LineDown => self.viewport.move_down(1),
            Action::LineLeft => self.viewport.move_left(1),
            Action::LineRight => self.viewport.move_right(1),
            Action::PageUp => self.viewport.page_up(),
            Action::PageDown => self.viewport.page_down(),
            Action::HalfPageUp => self.viewport.half_page_up(),
            Action::HalfPageDown => self.viewport.half_page_down(),
            Action::GotoTop => self.viewport.goto_top(),
            Action::GotoBottom => self.viewport.goto_bottom(),
            Action::ToggleCellSelect => self.viewport.toggle_cell_select(),
        }
    }

    /// Handle an input event.
    ///
    /// Returns `true` when a key binding matched and an action ran. An
    /// unfocused table ignores everything.
    pub fn update(&mut self, event: &Event) -> bool {
        if !self.focus {
            return false;
        }
        let Event::Key(key) = event else {
            return false;
        };
        let Some(action) = self.key_map.action_for(key) else {
            return false;
        };
        trace!(?action, "table action");
        self.apply(action);
        true
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// Borrow everything the renderer needs.
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        TableSnapshot {
            grid: &self.grid,
            columns: &self.columns,
            viewport: &self.viewport,
            styles: &self.styles,
        }
    }

    /// Render the visible part of the table.
    #[must_use]
    pub fn view(&self) -> TableView {
        self.snapshot().render()
    }
}
