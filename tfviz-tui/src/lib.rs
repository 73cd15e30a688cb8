//! tfviz TUI — terminal explorer for the transformer architecture.
//!
//! Provides interactive exploration of the encoder stack with:
//! - A block diagram (click to select, hover for the formula)
//! - A collapsible component outline
//! - An accordion of notation, description, formula and key points

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
