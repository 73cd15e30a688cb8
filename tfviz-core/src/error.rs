//! Error types for the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from disclosure group construction and activation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisclosureError {
    #[error("unknown member {0:?}")]
    UnknownMember(String),

    #[error("member {0:?} is already registered")]
    DuplicateMember(String),

    #[error("initially expanded key {0:?} is not a member")]
    InitialNotMember(String),

    #[error("exclusive group can start with at most one expanded member, got {0}")]
    TooManyInitial(usize),
}

/// Errors from catalog lookups by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown component {0:?} (expected one of: input, positional, attention, norm, ffn, output)")]
    UnknownComponent(String),

    #[error("unknown detail section {0:?} (expected one of: notation, description, formula, key_points)")]
    UnknownSection(String),
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid {section} config: {source}")]
    Invalid {
        section: &'static str,
        #[source]
        source: DisclosureError,
    },
}
