//! Colour tokens for the explorer TUI.
//!
//! Neon accents on a dark background; diagram blocks take their colour from
//! the component catalog.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, highlights)
//! - **Positive**: Neon green (expanded sections)
//! - **Warning**: Neon orange (warnings, rejected input)
//! - **Neutral**: Cool purple (group rows, frames)
//! - **Muted**: Steel blue (hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

use tfviz_core::catalog::{parse_hex_color, ComponentInfo};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (expanded, active)
    pub positive: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Cool purple (structure, group rows)
    pub neutral: Color,
    /// Steel blue (muted text, hints)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Catalog colour of a component, gray if the entry is malformed.
    pub fn component_color(&self, info: &ComponentInfo) -> Color {
        parse_hex_color(info.color)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(self.text_secondary)
    }
}

fn theme() -> Theme {
    Theme::default()
}

/// Frame background behind every pane.
pub fn surface() -> Style {
    Style::default().bg(theme().background)
}

pub fn accent() -> Style {
    Style::default().fg(theme().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(theme().positive)
}

pub fn warning() -> Style {
    Style::default().fg(theme().warning)
}

pub fn neutral() -> Style {
    Style::default().fg(theme().neutral)
}

pub fn muted() -> Style {
    Style::default().fg(theme().muted)
}

pub fn text() -> Style {
    Style::default().fg(theme().text_primary)
}

/// Cursor row in a focused list.
pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Border of a diagram block.
pub fn block_border(info: &ComponentInfo, selected: bool) -> Style {
    let style = Style::default().fg(theme().component_color(info));
    if selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Label of a diagram block; selected blocks are filled with the component colour.
pub fn block_label(info: &ComponentInfo, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(theme().component_color(info))
            .add_modifier(Modifier::BOLD)
    } else {
        text().add_modifier(Modifier::BOLD)
    }
}
