//! Detail pane — accordion of notation, description, formula and key points.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use tfviz_core::DetailSection;

use crate::app::{AppState, Focus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(info) = app.selection.info() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Click a block in the diagram or pick a component from the list.",
                theme::muted(),
            )),
        ]);
        f.render_widget(hint, area);
        return;
    };

    let focused = app.focus == Focus::Detail;
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("■ ", theme::block_border(info, true)),
            Span::styled(info.name, theme::accent_bold()),
            Span::styled(
                format!("  [{}]", app.detail.sections.mode().label()),
                theme::muted(),
            ),
        ]),
        Line::from(""),
    ];

    for (i, section) in DetailSection::ALL.into_iter().enumerate() {
        let expanded = app.detail.sections.is_expanded(&section);
        let arrow = if expanded { "▾" } else { "▸" };
        let header = format!("{arrow} {} {}", i + 1, section.title());
        let style = if focused && i == app.detail.cursor {
            theme::cursor()
        } else if expanded {
            theme::positive()
        } else {
            theme::neutral()
        };
        lines.push(Line::from(Span::styled(header, style)));

        if expanded {
            for body in section.body(info) {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(body, theme::text()),
                ]));
            }
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
