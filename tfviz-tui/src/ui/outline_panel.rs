//! Outline pane — component hierarchy with collapsible groups.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tfviz_core::outline::RowKind;

use crate::app::{AppState, Focus};
use crate::theme;

/// Row index under a terminal line of the outline pane.
pub fn row_at(area: Rect, app: &AppState, column: u16, line: u16) -> Option<usize> {
    if !crate::ui::contains(area, column, line) {
        return None;
    }
    let idx = usize::from(line - area.y);
    (idx < app.outline.rows().len()).then_some(idx)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Outline;
    let mut lines: Vec<Line> = Vec::new();

    for (i, row) in app.outline.rows().iter().enumerate() {
        let is_cursor = focused && i == app.outline.cursor;
        let indent = "  ".repeat(row.depth);

        let (label, style) = match row.kind {
            RowKind::Group { expanded } => {
                let arrow = if expanded { "▾" } else { "▸" };
                (format!("{indent}{arrow} {}", row.name), theme::neutral().add_modifier(Modifier::BOLD))
            }
            RowKind::Leaf(key) => {
                let style = if app.selection.is_selected(key) {
                    theme::accent_bold()
                } else {
                    theme::text()
                };
                (format!("{indent}  {}", row.name), style)
            }
        };

        let style = if is_cursor { theme::cursor() } else { style };
        lines.push(Line::from(Span::styled(label, style)));
    }

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfviz_core::ExplorerConfig;

    #[test]
    fn row_hit_testing() {
        let app = AppState::new(&ExplorerConfig::default()).unwrap();
        let area = Rect::new(10, 5, 30, 20);
        assert_eq!(row_at(area, &app, 12, 5), Some(0));
        assert_eq!(row_at(area, &app, 12, 11), Some(6));
        assert_eq!(row_at(area, &app, 12, 12), None);
        assert_eq!(row_at(area, &app, 2, 5), None);
    }
}
