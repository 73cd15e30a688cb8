//! Top-level UI layout — diagram, outline and detail panes with a status bar.

pub mod detail_panel;
pub mod diagram_panel;
pub mod outline_panel;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Focus, Overlay};
use crate::theme;

/// Screen regions for one frame. Inner areas exclude the pane borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub diagram: Rect,
    pub outline: Rect,
    pub detail: Rect,
    pub status: Rect,
}

impl Panes {
    pub fn diagram_inner(&self) -> Rect {
        inner(self.diagram)
    }

    pub fn outline_inner(&self) -> Rect {
        inner(self.outline)
    }

    pub fn detail_inner(&self) -> Rect {
        inner(self.detail)
    }
}

/// Shrink a bordered area by one cell on each side.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Whether a terminal cell lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && u32::from(column) < u32::from(area.x) + u32::from(area.width)
        && u32::from(row) < u32::from(area.y) + u32::from(area.height)
}

/// Split the terminal: diagram | outline on top, detail below, status bar last.
pub fn panes(area: Rect) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),
            Constraint::Percentage(35),
            Constraint::Length(1),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[0]);

    Panes {
        diagram: top[0],
        outline: top[1],
        detail: rows[1],
        status: rows[2],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let panes = panes(f.area());
    f.render_widget(Block::default().style(theme::surface()), f.area());

    draw_pane(f, panes.diagram, "Architecture", false);
    diagram_panel::render(f, panes.diagram_inner(), app);

    draw_pane(f, panes.outline, "Components", app.focus == Focus::Outline);
    outline_panel::render(f, panes.outline_inner(), app);

    draw_pane(f, panes.detail, "Component Analysis", app.focus == Focus::Detail);
    detail_panel::render(f, panes.detail_inner(), app);

    status_bar::render(f, panes.status, app);

    // Tooltips float over the other panes.
    diagram_panel::render_tooltip(f, panes.diagram_inner(), app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, f.area()),
        Overlay::History => overlays::render_history(f, f.area(), app),
        Overlay::None => {}
    }
}

fn draw_pane(f: &mut Frame, area: Rect, title: &str, active: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(active));
    f.render_widget(block, area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tfviz_core::catalog::ComponentKey;
    use tfviz_core::ExplorerConfig;

    #[test]
    fn panes_cover_the_screen() {
        let area = Rect::new(0, 0, 120, 48);
        let p = panes(area);
        assert_eq!(p.status.height, 1);
        assert_eq!(p.status.y, 47);
        assert_eq!(p.diagram.y, 0);
        assert_eq!(p.diagram.x + p.diagram.width, p.outline.x);
        assert!(p.detail.y >= p.diagram.y + p.diagram.height);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(contains(r, 2, 3));
        assert!(contains(r, 5, 4));
        assert!(!contains(r, 6, 4));
        assert!(!contains(r, 5, 5));
        assert!(!contains(r, 1, 3));
    }

    #[test]
    fn renders_selected_component() {
        let mut app = crate::app::AppState::new(&ExplorerConfig::default()).unwrap();
        app.select_component(ComponentKey::Attention);
        app.diagram.reveals[2].on_enter();
        app.overlay = Overlay::None;

        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Multi-Head Attention"));
        assert!(text.contains("Mathematical Notation"));
    }

    #[test]
    fn paints_theme_background() {
        let app = crate::app::AppState::new(&ExplorerConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let cell = &terminal.backend().buffer()[(119, 47)];
        assert_eq!(cell.bg, crate::theme::Theme::default().background);
    }

    #[test]
    fn renders_on_tiny_terminal() {
        let app = crate::app::AppState::new(&ExplorerConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
