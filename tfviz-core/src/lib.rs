//! tfviz core — state controllers and static model for the transformer explorer.
//!
//! This crate holds everything the host views share:
//! - Disclosure groups (accordion state, exclusive or independent)
//! - Hover reveals (tooltip visibility per anchor)
//! - The static component catalog, outline and block diagram
//! - The selected-component store
//! - Configuration and logging setup

pub mod catalog;
pub mod config;
pub mod detail;
pub mod diagram;
pub mod disclosure;
pub mod error;
pub mod logging;
pub mod outline;
pub mod reveal;
pub mod selection;

pub use catalog::{ComponentInfo, ComponentKey};
pub use config::ExplorerConfig;
pub use detail::DetailSection;
pub use disclosure::{DisclosureGroup, DisclosureMember, DisclosureMode, DisclosurePolicy};
pub use error::{CatalogError, ConfigError, DisclosureError};
pub use reveal::HoverReveal;
pub use selection::Selection;
