//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Event handlers in `input` mutate it, the `ui`
//! module only reads it.

use std::collections::VecDeque;

use chrono::NaiveDateTime;
use ratatui::layout::Rect;

use tfviz_core::catalog::{self, ComponentKey};
use tfviz_core::config::DetailConfig;
use tfviz_core::diagram::{transformer_diagram, Diagram};
use tfviz_core::outline::{transformer_outline, Outline, OutlineRow, RowKind};
use tfviz_core::{
    ConfigError, DetailSection, DisclosureGroup, ExplorerConfig, HoverReveal, Selection,
};

/// Maximum number of entries kept in the activity history.
pub const HISTORY_CAP: usize = 50;

/// Which pane receives list keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Outline,
    Detail,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Outline => Focus::Detail,
            Focus::Detail => Focus::Outline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Outline => "Outline",
            Focus::Detail => "Detail",
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// An entry in the activity history overlay.
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub timestamp: NaiveDateTime,
    pub level: StatusLevel,
    pub message: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    History,
}

/// Diagram pane: the static stack plus one hover reveal per block.
#[derive(Debug)]
pub struct DiagramState {
    pub diagram: Diagram,
    pub reveals: Vec<HoverReveal>,
}

impl DiagramState {
    pub fn new(diagram: Diagram) -> Self {
        let reveals = vec![HoverReveal::new(); diagram.blocks.len()];
        Self { diagram, reveals }
    }

    /// Block whose tooltip is currently visible.
    pub fn hovered(&self) -> Option<usize> {
        self.reveals.iter().position(|r| r.is_visible())
    }

    /// Hide every tooltip, e.g. when the pointer leaves the pane.
    pub fn leave_all(&mut self) {
        for reveal in &mut self.reveals {
            reveal.on_leave();
        }
    }
}

/// Outline pane: hierarchy, group expansion and cursor.
#[derive(Debug)]
pub struct OutlineState {
    pub outline: Outline,
    pub groups: DisclosureGroup<String>,
    pub cursor: usize,
}

impl OutlineState {
    pub fn rows(&self) -> Vec<OutlineRow> {
        self.outline.visible_rows(&self.groups)
    }

    pub fn cursor_row(&self) -> Option<OutlineRow> {
        self.rows().get(self.cursor).copied()
    }

    /// Keep the cursor on a visible row after groups collapse.
    pub fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Row index of the leaf for `component`, if visible.
    pub fn row_of(&self, component: ComponentKey) -> Option<usize> {
        self.rows()
            .iter()
            .position(|r| r.kind == RowKind::Leaf(component))
    }
}

/// Detail pane: the section accordion for the selected component.
#[derive(Debug)]
pub struct DetailState {
    pub config: DetailConfig,
    pub sections: DisclosureGroup<DetailSection>,
    pub cursor: usize,
}

impl DetailState {
    pub fn new(config: DetailConfig) -> Result<Self, ConfigError> {
        let sections = config.build_group()?;
        Ok(Self {
            config,
            sections,
            cursor: 0,
        })
    }

    /// Fresh accordion for a newly shown component.
    pub fn reset(&mut self) {
        // The config was validated in `new`, so rebuilding cannot fail.
        if let Ok(sections) = self.config.build_group() {
            self.sections = sections;
        }
        self.cursor = 0;
    }

    pub fn cursor_section(&self) -> DetailSection {
        DetailSection::ALL[self.cursor.min(DetailSection::ALL.len() - 1)]
    }
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    pub overlay: Overlay,

    pub selection: Selection,
    pub diagram: DiagramState,
    pub outline: OutlineState,
    pub detail: DetailState,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub history: VecDeque<HistoryRecord>,
    pub history_scroll: usize,

    /// Terminal area of the last frame, for mouse hit-testing.
    pub viewport: Rect,
}

impl AppState {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        let outline = transformer_outline();
        let groups = config.outline.build_group(&outline)?;
        Ok(Self {
            running: true,
            focus: Focus::Outline,
            overlay: Overlay::None,
            selection: Selection::new(),
            diagram: DiagramState::new(transformer_diagram()),
            outline: OutlineState {
                outline,
                groups,
                cursor: 0,
            },
            detail: DetailState::new(config.detail.clone())?,
            status_message: None,
            history: VecDeque::with_capacity(HISTORY_CAP),
            history_scroll: 0,
            viewport: Rect::default(),
        })
    }

    /// Select a component from either the diagram or the outline.
    pub fn select_component(&mut self, key: ComponentKey) {
        if !self.selection.select(key) {
            return;
        }
        self.detail.reset();
        if let Some(row) = self.outline.row_of(key) {
            self.outline.cursor = row;
        }
        let name = catalog::lookup(key).name;
        self.set_status(format!("Selected {name}"));
    }

    pub fn clear_selection(&mut self) {
        if self.selection.current().is_some() {
            self.selection.clear();
            self.set_status("Selection cleared");
        }
    }

    /// Activate a detail section. Needs a selected component.
    pub fn activate_section(&mut self, section: DetailSection) {
        if self.selection.current().is_none() {
            self.set_warning("Select a component first");
            return;
        }
        self.detail.cursor = DetailSection::ALL
            .iter()
            .position(|s| *s == section)
            .unwrap_or(0);
        match self.detail.sections.activate(&section) {
            Ok(true) => {
                let state = if self.detail.sections.is_expanded(&section) {
                    "expanded"
                } else {
                    "collapsed"
                };
                self.set_status(format!("{} {state}", section.title()));
            }
            Ok(false) => {}
            Err(e) => self.set_warning(e.to_string()),
        }
    }

    /// Toggle an outline group.
    pub fn activate_group(&mut self, name: &str) {
        match self.outline.groups.activate(&name.to_string()) {
            Ok(_) => self.outline.clamp_cursor(),
            Err(e) => self.set_warning(e.to_string()),
        }
    }

    /// Activate the row under the outline cursor: toggle a group or select a leaf.
    pub fn activate_outline_row(&mut self, row: usize) {
        let Some(item) = self.outline.rows().get(row).copied() else {
            return;
        };
        self.outline.cursor = row;
        match item.kind {
            RowKind::Group { .. } => self.activate_group(item.name),
            RowKind::Leaf(key) => self.select_component(key),
        }
    }

    /// Show an overlay. Tooltips are hidden since pointer motion is ignored
    /// until it closes.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = overlay;
        self.diagram.leave_all();
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.push_status(msg.into(), StatusLevel::Info);
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.push_status(msg.into(), StatusLevel::Warning);
    }

    fn push_status(&mut self, message: String, level: StatusLevel) {
        if level == StatusLevel::Warning {
            tracing::warn!(%message, "status");
        }
        self.history.push_front(HistoryRecord {
            timestamp: chrono::Local::now().naive_local(),
            level,
            message: message.clone(),
        });
        if self.history.len() > HISTORY_CAP {
            self.history.pop_back();
        }
        self.status_message = Some((message, level));
    }
}
