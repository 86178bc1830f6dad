#![forbid(unsafe_code)]

//! The demo application: load input, drive a [`Table`], draw it.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crossterm::{cursor, queue, style, terminal};
use tabview::{Column, Event, Grid, KeyCode, KeyEvent, KeyEventKind, SelectionMode, Table};
use tracing::{debug, info};

use crate::cli::Opts;
use crate::error::DemoError;
use crate::session::TerminalSession;

/// Lines the screen needs besides the table body: header and status line.
const CHROME_ROWS: usize = 2;

/// What the event loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Exit without output.
    Quit,
    /// Exit and print the selection.
    Submit(String),
}

/// Read the whole input from `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String, DemoError> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(bytes = text.len(), "input read");
    Ok(text)
}

/// Build a table from delimited `input` according to `opts`.
///
/// Trailing line breaks are dropped so a final newline does not produce an
/// empty row. With `opts.header` the first line supplies the column titles;
/// otherwise columns are numbered from 1.
pub fn build_table(input: &str, opts: &Opts) -> Result<Table, DemoError> {
    let text = input.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return Err(DemoError::EmptyInput);
    }

    let (titles, body) = if opts.header {
        let (head, rest) = text.split_once('\n').unwrap_or((text, ""));
        let head = head.strip_suffix('\r').unwrap_or(head);
        let titles = Grid::from_values(head, &opts.separator)
            .row(0)
            .cloned()
            .unwrap_or_default();
        (Some(titles), rest)
    } else {
        (None, text)
    };

    let grid = if body.is_empty() {
        Grid::default()
    } else {
        Grid::from_values(body, &opts.separator)
    };

    let titles = titles.unwrap_or_else(|| (1..=grid.row_width()).map(|c| c.to_string()).collect());
    let columns = titles
        .into_iter()
        .map(|title| Column::new(title, opts.col_width))
        .collect();

    info!(rows = grid.len(), cols = grid.row_width(), "table loaded");

    let mut table = Table::new()
        .columns(columns)
        .width(opts.width)
        .height(opts.height)
        .focused(true);
    table.set_grid(grid);
    if opts.cell_mode {
        table.toggle_cell_select();
    }
    Ok(table)
}

/// Demo state: the table plus the height the user asked for.
#[derive(Debug, Clone)]
pub struct App {
    table: Table,
    separator: String,
    requested_height: usize,
}

impl App {
    pub fn new(table: Table, separator: impl Into<String>) -> Self {
        let requested_height = table.get_height();
        Self {
            table,
            separator: separator.into(),
            requested_height,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Fit the table body into a terminal `rows` lines tall.
    pub fn resize(&mut self, rows: u16) {
        let available = usize::from(rows).saturating_sub(CHROME_ROWS).max(1);
        self.table.set_height(self.requested_height.min(available));
    }

    /// The current selection as text: the cursor cell in cell mode, the
    /// cursor row joined with the separator in row mode.
    pub fn selection(&self) -> Option<String> {
        match self.table.mode() {
            SelectionMode::Cell => self
                .table
                .selected_row()
                .map(|_| self.table.selected_cell().to_string()),
            SelectionMode::Row => self
                .table
                .selected_row()
                .map(|row| row.join(&self.separator)),
        }
    }

    /// Handle one event.
    pub fn handle(&mut self, event: &Event) -> Flow {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if is_quit(key) {
                    return Flow::Quit;
                }
                if key.code == KeyCode::Enter {
                    return self.selection().map_or(Flow::Quit, Flow::Submit);
                }
                self.table.update(event);
                Flow::Continue
            }
            Event::Resize { height, .. } => {
                self.resize(*height);
                Flow::Continue
            }
            Event::Focus(true) => {
                self.table.focus();
                Flow::Continue
            }
            Event::Focus(false) => {
                self.table.blur();
                Flow::Continue
            }
            Event::Key(_) => Flow::Continue,
        }
    }

    /// One status line: position, mode and short help.
    pub fn status_line(&self) -> String {
        let (row, rows, col, cols) = position(&self.table);
        let mode = match self.table.mode() {
            SelectionMode::Row => "row",
            SelectionMode::Cell => "cell",
        };
        let help = self
            .table
            .key_map()
            .short_help()
            .iter()
            .map(|h| format!("{} {}", h.key, h.desc))
            .collect::<Vec<_>>()
            .join(" • ");
        format!(
            "row {row}/{rows}  col {col}/{cols}  [{mode}]  {help} • q quit"
        )
    }

    /// Queue a full redraw.
    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let view = self.table.view();
        queue!(out, terminal::Clear(terminal::ClearType::All))?;

        let mut lines = Vec::with_capacity(view.body.len() + 1);
        for line in std::iter::once(&view.header).chain(&view.body) {
            let mut text = String::new();
            line.write_ansi(&mut text);
            lines.push(text);
        }
        lines.push(self.status_line());

        for (y, text) in lines.iter().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(out, cursor::MoveTo(0, y), style::Print(text))?;
        }
        out.flush()
    }
}

/// 1-based cursor row, row count, 1-based cursor column, column count.
fn position(table: &Table) -> (usize, usize, usize, usize) {
    let rows = table.get_rows().len();
    let cols = table.grid().row_width();
    let row = if rows == 0 { 0 } else { table.cursor() + 1 };
    let col = if cols == 0 { 0 } else { table.col_index() + 1 };
    (row, rows, col, cols)
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Escape | KeyCode::Char('q') => !key.ctrl(),
        KeyCode::Char('c') => key.ctrl(),
        _ => false,
    }
}

/// Load the input, run the interactive loop and return the submitted
/// selection, if any.
///
/// The terminal is restored before this returns, on success and on error.
pub fn run(opts: &Opts) -> Result<Option<String>, DemoError> {
    let input = read_input(opts.input.as_deref())?;
    let table = build_table(&input, opts)?;
    let mut app = App::new(table, opts.separator.clone());

    let session = TerminalSession::new()?;
    let result = event_loop(&mut app, &session);
    drop(session);

    if let Ok(Some(selection)) = &result {
        info!(len = selection.len(), "selection submitted");
    }
    result
}

fn event_loop(app: &mut App, session: &TerminalSession) -> Result<Option<String>, DemoError> {
    let (_, rows) = session.size()?;
    app.resize(rows);

    let mut stdout = io::stdout();
    loop {
        app.draw(&mut stdout)?;
        let Some(event) = Event::from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        match app.handle(&event) {
            Flow::Continue => {}
            Flow::Quit => return Ok(None),
            Flow::Submit(selection) => return Ok(Some(selection)),
        }
    }
}
