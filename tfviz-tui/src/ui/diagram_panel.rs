//! Diagram pane — the transformer stack as bordered blocks, with tooltips.
//!
//! Layout is a pure function of the pane area so that mouse hit-testing in
//! `input` and drawing here always agree.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use tfviz_core::catalog;
use tfviz_core::diagram::Diagram;

use crate::app::AppState;
use crate::theme;
use crate::ui::contains;

/// Rows taken by one block: border, notation, border.
const BLOCK_HEIGHT: u16 = 3;
/// Columns kept free right of framed blocks for residual markers.
const RESIDUAL_GUTTER: u16 = 4;

/// Where each part of the diagram lands inside the pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramLayout {
    /// Title row.
    pub title: Rect,
    /// Encoder frame, if the diagram has framed blocks.
    pub frame: Option<Rect>,
    /// One rect per diagram block, clipped to the pane (possibly empty).
    pub blocks: Vec<Rect>,
    /// Single-cell arrow positions between consecutive blocks.
    pub arrows: Vec<Rect>,
}

impl DiagramLayout {
    /// Index of the block under a terminal cell.
    pub fn block_at(&self, column: u16, row: u16) -> Option<usize> {
        self.blocks.iter().position(|r| contains(*r, column, row))
    }
}

fn clip(r: Rect, area: Rect) -> Rect {
    let x0 = r.x.max(area.x);
    let y0 = r.y.max(area.y);
    let x1 = r.right().min(area.right());
    let y1 = r.bottom().min(area.bottom());
    if x1 <= x0 || y1 <= y0 {
        // Fully outside: collapse to an empty rect at the area origin.
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(x0, y0, x1 - x0, y1 - y0)
}

/// Lay the diagram out top to bottom inside `area`.
pub fn layout(area: Rect, diagram: &Diagram) -> DiagramLayout {
    let margin = area.width / 16;
    let outer_x = area.x + margin;
    let outer_w = area.width.saturating_sub(margin * 2);
    let framed_x = outer_x + 2;
    let framed_w = outer_w.saturating_sub(2 + RESIDUAL_GUTTER);
    let center_x = outer_x + outer_w / 2;

    let mut y = area.y.saturating_add(1);
    let mut blocks = Vec::with_capacity(diagram.blocks.len());
    let mut arrows = Vec::new();
    let mut frame_top = None;
    let mut frame_bottom = None;

    for (i, block) in diagram.blocks.iter().enumerate() {
        let prev_in_frame = i > 0 && diagram.blocks[i - 1].in_frame;

        if prev_in_frame && !block.in_frame {
            frame_bottom = Some(y);
            y = y.saturating_add(1);
        }
        if i > 0 {
            arrows.push(clip(Rect::new(center_x, y, 1, 1), area));
            y = y.saturating_add(1);
        }
        if block.in_frame && !prev_in_frame {
            frame_top = Some(y);
            y = y.saturating_add(1);
        }

        let rect = if block.in_frame {
            Rect::new(framed_x, y, framed_w, BLOCK_HEIGHT)
        } else {
            Rect::new(outer_x, y, outer_w, BLOCK_HEIGHT)
        };
        blocks.push(clip(rect, area));
        y = y.saturating_add(BLOCK_HEIGHT);
    }

    if diagram.blocks.last().is_some_and(|b| b.in_frame) {
        frame_bottom = Some(y);
    }

    let frame = match (frame_top, frame_bottom) {
        (Some(top), Some(bottom)) => Some(clip(
            Rect::new(outer_x, top, outer_w, bottom.saturating_sub(top) + 1),
            area,
        )),
        _ => None,
    };

    DiagramLayout {
        title: clip(Rect::new(area.x, area.y, area.width, 1), area),
        frame,
        blocks,
        arrows,
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let diagram = &app.diagram.diagram;
    let geo = layout(area, diagram);

    f.render_widget(
        Paragraph::new(Span::styled(diagram.title, theme::accent_bold()))
            .alignment(Alignment::Center),
        geo.title,
    );

    if let Some(frame) = geo.frame {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::neutral())
            .title(format!(" {} ", diagram.frame_label))
            .title_style(theme::neutral());
        f.render_widget(block, frame);
    }

    for arrow in &geo.arrows {
        if !arrow.is_empty() {
            f.render_widget(Paragraph::new(Span::styled("▼", theme::text())), *arrow);
        }
    }

    for (block, rect) in diagram.blocks.iter().zip(&geo.blocks) {
        if rect.is_empty() {
            continue;
        }
        let info = catalog::lookup(block.component);
        let selected = app.selection.is_selected(block.component);
        let border = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(theme::block_border(info, selected))
            .title(Span::styled(format!(" {} ", block.label), theme::block_label(info, selected)))
            .title_alignment(Alignment::Center);
        let notation = Paragraph::new(Span::styled(block.notation, theme::muted()))
            .alignment(Alignment::Center)
            .block(border);
        f.render_widget(notation, *rect);
    }

    render_residuals(f, area, app, &geo);
}

/// Draw each residual as a bracket right of the framed blocks.
fn render_residuals(f: &mut Frame, area: Rect, app: &AppState, geo: &DiagramLayout) {
    let buf = f.buffer_mut();
    for residual in &app.diagram.diagram.residuals {
        let (Some(from), Some(to)) = (geo.blocks.get(residual.from), geo.blocks.get(residual.to))
        else {
            continue;
        };
        if from.is_empty() || to.is_empty() {
            continue;
        }
        let x = from.right().saturating_add(1);
        let top = from.y + from.height / 2;
        let bottom = to.y + to.height / 2;
        for y in top..=bottom {
            if !contains(area, x, y) {
                continue;
            }
            let symbol = if y == top {
                "┐"
            } else if y == bottom {
                "┘"
            } else {
                "│"
            };
            buf.set_string(x, y, symbol, theme::muted());
        }
        let label_x = x.saturating_add(1);
        let label_y = top + (bottom - top) / 2;
        if contains(area, label_x, label_y) {
            buf.set_string(label_x, label_y, "R", theme::muted());
        }
    }
}

/// Tooltip for the hovered block: component name and formula.
pub fn render_tooltip(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(idx) = app.diagram.hovered() else {
        return;
    };
    if !app.diagram.reveals[idx].content().is_shown() {
        return;
    }
    let geo = layout(area, &app.diagram.diagram);
    let Some(anchor) = geo.blocks.get(idx).copied().filter(|r| !r.is_empty()) else {
        return;
    };

    let block = &app.diagram.diagram.blocks[idx];
    let info = catalog::lookup(block.component);
    let screen = f.area();

    let content_w = info.formula.chars().count().max(info.name.len()) as u16;
    let width = (content_w + 4).min(screen.width);
    let height = 4u16.min(screen.height);
    let x = anchor.x.saturating_add(2).min(screen.right().saturating_sub(width));
    let y = if anchor.bottom() + height <= screen.bottom() {
        anchor.bottom()
    } else {
        anchor.y.saturating_sub(height)
    };
    let popup = clip(Rect::new(x, y, width, height), screen);
    if popup.is_empty() {
        return;
    }

    f.render_widget(Clear, popup);
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(Span::styled(format!(" {} ", info.name), theme::accent_bold()));
    let body = Paragraph::new(Line::from(Span::styled(info.formula, theme::text())))
        .wrap(Wrap { trim: true })
        .block(frame);
    f.render_widget(body, popup);
}
