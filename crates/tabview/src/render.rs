#![forbid(unsafe_code)]

//! Turning table state into styled lines.
//!
//! Rendering reads an immutable [`TableSnapshot`] and never touches the
//! viewport, so header and body are independent and can be produced in
//! either order, or concurrently with the `parallel-render` feature.

use std::fmt;
use std::ops::Range;

use crate::debug_span;
use crate::grid::{Column, Grid};
use crate::style::{SGR_RESET, Style, Styles};
use crate::text::{display_width, fit_to_width};
use crate::viewport::{SelectionMode, Viewport};

/// A run of text in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }
}

/// One rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Display width in terminal cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.content)).sum()
    }

    /// The text without any styling.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }

    /// Append the line with SGR escapes around each styled span.
    pub fn write_ansi(&self, out: &mut String) {
        for span in &self.spans {
            if span.style.is_empty() {
                out.push_str(&span.content);
            } else {
                span.style.write_sgr(out);
                out.push_str(&span.content);
                out.push_str(SGR_RESET);
            }
        }
    }
}

/// A rendered table: the header line and one line per visible row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub header: Line,
    pub body: Vec<Line>,
}

impl TableView {
    /// Header, a newline, then every body line followed by a newline.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let mut out = self.header.plain();
        out.push('\n');
        for line in &self.body {
            out.push_str(&line.plain());
            out.push('\n');
        }
        out
    }

    /// Same layout as [`TableView::to_plain_string`], with SGR styling.
    #[must_use]
    pub fn to_ansi_string(&self) -> String {
        let mut out = String::new();
        self.header.write_ansi(&mut out);
        out.push('\n');
        for line in &self.body {
            line.write_ansi(&mut out);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

/// Everything the renderer reads, borrowed for the duration of one render.
#[derive(Debug, Clone, Copy)]
pub struct TableSnapshot<'a> {
    pub grid: &'a Grid,
    pub columns: &'a [Column],
    pub viewport: &'a Viewport,
    pub styles: &'a Styles,
}

impl TableSnapshot<'_> {
    /// Render header and body.
    #[must_use]
    pub fn render(&self) -> TableView {
        let _span = debug_span!(
            "widget_render",
            widget = "Table",
            rows = self.viewport.visible_rows().len(),
            cols = self.viewport.visible_cols().len()
        )
        .entered();

        #[cfg(feature = "parallel-render")]
        let (header, body) = std::thread::scope(|s| {
            let header = s.spawn(|| self.header());
            let body = self.body();
            match header.join() {
                Ok(header) => (header, body),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        });

        #[cfg(not(feature = "parallel-render"))]
        let (header, body) = (self.header(), self.body());

        TableView { header, body }
    }

    /// Header line: one padded title per visible column.
    ///
    /// Columns without data (more titles than cells) are still shown, so an
    /// empty table keeps its header.
    #[must_use]
    pub fn header(&self) -> Line {
        let bound = self.grid.row_width().max(self.columns.len());
        let spans = self
            .col_range(bound)
            .filter_map(|c| self.columns.get(c))
            .map(|col| self.padded(&col.title, col.width, self.styles.header))
            .collect();
        Line { spans }
    }

    /// Body lines for the visible rows.
    #[must_use]
    pub fn body(&self) -> Vec<Line> {
        self.viewport
            .visible_rows()
            .filter_map(|r| self.grid.row(r).map(|row| self.render_row(r, row)))
            .collect()
    }

    fn render_row(&self, index: usize, row: &[String]) -> Line {
        let mode = self.viewport.mode();
        let is_cursor_row = index == self.viewport.cursor();
        let bound = self.grid.row_width().min(self.columns.len());

        let spans = self
            .col_range(bound)
            .filter_map(|c| Some((c, row.get(c)?, self.columns.get(c)?)))
            .map(|(c, value, col)| {
                let style = if mode == SelectionMode::Cell
                    && is_cursor_row
                    && c == self.viewport.col_index()
                {
                    self.styles.selected_cell
                } else {
                    self.styles.cell
                };
                self.padded(value, col.width, style)
            })
            .map(|mut span| {
                if mode == SelectionMode::Row && is_cursor_row {
                    span.style = span.style.patch(self.styles.selected);
                }
                span
            })
            .collect();
        Line { spans }
    }

    fn col_range(&self, bound: usize) -> Range<usize> {
        let start = self.viewport.x_offset().min(bound);
        let end = self
            .viewport
            .x_offset()
            .saturating_add(self.viewport.width())
            .min(bound);
        start..end
    }

    fn padded(&self, text: &str, width: usize, style: Style) -> Span {
        let pad = " ".repeat(usize::from(self.styles.padding));
        Span::new(format!("{pad}{}{pad}", fit_to_width(text, width)), style)
    }
}
