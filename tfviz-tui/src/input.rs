//! Input dispatch — overlays → global keys → focused pane; mouse → hit-testing.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tfviz_core::outline::RowKind;
use tfviz_core::DetailSection;

use crate::app::{AppState, Focus, Overlay};
use crate::ui::{self, diagram_panel, outline_panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::History => {
            handle_history_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::Esc => {
            app.clear_selection();
            return;
        }
        KeyCode::Char('?') => {
            app.open_overlay(Overlay::Help);
            return;
        }
        KeyCode::Char('e') => {
            app.open_overlay(Overlay::History);
            app.history_scroll = 0;
            return;
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(section) = c.to_digit(10).and_then(DetailSection::from_number) {
                app.activate_section(section);
            }
            return;
        }
        _ => {}
    }

    // 3. Pane-specific keys.
    match app.focus {
        Focus::Outline => handle_outline_key(app, key),
        Focus::Detail => handle_detail_key(app, key),
    }
}

fn handle_history_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.history_scroll + 1 < app.history.len() {
                app.history_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.history_scroll = app.history_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_outline_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.outline.rows().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.outline.cursor + 1 < row_count {
                app.outline.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.outline.cursor = app.outline.cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_outline_row(app.outline.cursor);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            // Expand group
            if let Some(row) = app.outline.cursor_row() {
                if row.kind == (RowKind::Group { expanded: false }) {
                    app.activate_group(row.name);
                }
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            // Collapse group
            if let Some(row) = app.outline.cursor_row() {
                if row.kind == (RowKind::Group { expanded: true }) {
                    app.activate_group(row.name);
                }
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    let section_count = DetailSection::ALL.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.detail.cursor + 1 < section_count {
                app.detail.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail.cursor = app.detail.cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let section = app.detail.cursor_section();
            app.activate_section(section);
        }
        _ => {}
    }
}

/// Handle a mouse event against the layout of the last drawn frame.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }

    let panes = ui::panes(app.viewport);
    let diagram_area = panes.diagram_inner();
    let geo = diagram_panel::layout(diagram_area, &app.diagram.diagram);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            for (reveal, rect) in app.diagram.reveals.iter_mut().zip(&geo.blocks) {
                reveal.track(ui::contains(*rect, column, row));
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(idx) = geo.block_at(column, row) {
                let component = app.diagram.diagram.blocks[idx].component;
                app.select_component(component);
            } else if let Some(idx) =
                outline_panel::row_at(panes.outline_inner(), app, column, row)
            {
                app.focus = Focus::Outline;
                app.activate_outline_row(idx);
            } else if ui::contains(panes.detail, column, row) {
                app.focus = Focus::Detail;
            }
        }
        _ => {}
    }
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("Tab", "Switch focus: outline / detail"),
        ("↑/k, ↓/j", "Move cursor"),
        ("Enter / Space", "Select component, toggle group or section"),
        ("h / l", "Collapse / expand outline group"),
        ("1-4", "Toggle detail section"),
        ("Esc", "Clear selection"),
        ("e", "Activity history"),
        ("?", "This help"),
    ]
}
