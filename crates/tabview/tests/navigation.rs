#![forbid(unsafe_code)]

//! End-to-end navigation through the public `Table` API.

use tabview::{Column, Event, KeyCode, KeyEvent, Modifiers, SelectionMode, Table};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

fn rows(n: usize) -> String {
    (0..n)
        .map(|i| format!("{i},name{i},extra{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn table_with(n: usize, width: usize, height: usize) -> Table {
    let mut table = Table::new()
        .columns(vec![
            Column::new("ID", 3),
            Column::new("Name", 8),
            Column::new("Extra", 8),
        ])
        .width(width)
        .height(height)
        .focused(true);
    table.from_values(&rows(n), ",");
    table
}

#[test]
fn move_down_clamps_and_scrolls_then_move_up_resets() {
    let mut table = table_with(5, 3, 3);
    table.move_down(4);
    assert_eq!(table.cursor(), 4);
    assert_eq!(table.viewport().y_offset(), 2);
    table.move_up(10);
    assert_eq!(table.cursor(), 0);
    assert_eq!(table.viewport().y_offset(), 0);
}

#[test]
fn bulk_load_two_rows() {
    let mut table = Table::new();
    table.from_values("a,b\nc,d", ",");
    assert_eq!(
        table.get_rows(),
        &[vec!["a".to_string(), "b".to_string()], vec!["c".to_string(), "d".to_string()]]
    );
}

#[test]
fn row_mode_pan_left_floors_at_zero() {
    let mut table = table_with(5, 2, 3);
    table.move_right(1);
    assert_eq!(table.viewport().x_offset(), 1);
    table.move_left(1);
    assert_eq!(table.viewport().x_offset(), 0);
    table.move_left(1);
    table.move_left(1);
    assert_eq!(table.viewport().x_offset(), 0);
    assert_eq!(table.col_index(), 0);
}

#[test]
fn row_mode_pan_right_stops_flush() {
    let mut table = table_with(5, 2, 3);
    for _ in 0..5 {
        table.update(&key(KeyCode::Right));
    }
    assert_eq!(table.viewport().x_offset(), 1);
    assert_eq!(table.view().header.plain(), " Name      Extra    ");
}

#[test]
fn narrow_grid_never_pans() {
    let mut table = table_with(5, 10, 3);
    table.move_right(3);
    assert_eq!(table.viewport().x_offset(), 0);
}

#[test]
fn keyboard_session() {
    let mut table = table_with(40, 3, 10);

    table.update(&key(KeyCode::PageDown));
    assert_eq!(table.cursor(), 10);
    table.update(&Event::Key(KeyEvent::new(KeyCode::Char(' '))));
    assert_eq!(table.cursor(), 20);
    table.update(&key(KeyCode::End));
    assert_eq!(table.cursor(), 39);
    assert_eq!(table.viewport().y_offset(), 30);
    table.update(&key(KeyCode::Home));
    assert_eq!(table.cursor(), 0);
    assert_eq!(table.viewport().y_offset(), 0);

    table.update(&Event::Key(
        KeyEvent::new(KeyCode::Char('t')).with_modifiers(Modifiers::CTRL),
    ));
    assert_eq!(table.mode(), SelectionMode::Cell);
    table.update(&key(KeyCode::Char('l')));
    table.update(&key(KeyCode::Char('j')));
    assert_eq!(table.selected_cell(), "name1");
}

#[test]
fn toggle_twice_restores_state() {
    let mut table = table_with(20, 2, 4);
    table.move_down(7);
    table.move_right(1);
    let before = table.viewport().clone();
    table.toggle_cell_select();
    table.toggle_cell_select();
    assert_eq!(*table.viewport(), before);
}

#[test]
fn cursor_and_selected_row_agree_after_scroll() {
    let mut table = table_with(100, 3, 7);
    for step in [13, 2, 40, 1] {
        table.move_down(step);
        let idx = table.row_index();
        assert_eq!(
            table.selected_row().map(|r| r[0].clone()),
            Some(idx.to_string())
        );
    }
}

#[test]
fn view_body_tracks_window() {
    let mut table = table_with(10, 3, 3);
    table.goto_bottom();
    let view = table.view();
    assert_eq!(view.body.len(), 3);
    assert!(view.body[0].plain().starts_with(" 7 "));
    assert!(view.body[2].plain().starts_with(" 9 "));
    assert!(view.to_ansi_string().contains("\x1b[1;38;5;212m"));
}

#[test]
fn truncated_cells_end_in_ellipsis() {
    let mut table = Table::new().columns(vec![Column::new("C", 4)]);
    table.from_values("abcdefgh", ",");
    let body = table.view().body;
    assert_eq!(body[0].plain(), " abc… ");
}

#[test]
fn empty_table_ignores_navigation() {
    let mut table = Table::new().focused(true);
    let before = table.viewport().clone();
    for code in [
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::PageDown,
        KeyCode::End,
    ] {
        table.update(&key(code));
    }
    assert_eq!(*table.viewport(), before);
    assert!(table.selected_row().is_none());
}
