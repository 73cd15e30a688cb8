//! Overlay widgets — key help and activity history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

/// Keyboard and mouse help.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = vec![Line::from(Span::styled("Keys", theme::accent_bold()))];
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:>16}  "), theme::accent()),
            Span::styled(desc, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Mouse", theme::accent_bold())));
    lines.push(Line::from(Span::styled(
        "  Click a diagram block or list row to select it. Hover a block for its formula.",
        theme::muted(),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

/// Activity history overlay, newest first.
pub fn render_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(
            " History ({}) [Esc]close [j/k]scroll ",
            app.history.len()
        ))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.history.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("Nothing yet.", theme::muted())),
            inner,
        );
        return;
    }

    let start = app.history_scroll.min(app.history.len() - 1);
    let end = (start + inner.height as usize).min(app.history.len());

    let lines: Vec<Line> = app
        .history
        .range(start..end)
        .enumerate()
        .map(|(offset, record)| {
            let level_style = match record.level {
                StatusLevel::Info => theme::accent(),
                StatusLevel::Warning => theme::warning(),
            };
            let style = if offset == 0 {
                level_style.add_modifier(Modifier::BOLD)
            } else {
                level_style
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", record.timestamp.format("%H:%M:%S")),
                    theme::muted(),
                ),
                Span::styled(record.message.as_str(), style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
