//! Detail view sections — the accordion panels shown for a selected component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentInfo;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailSection {
    Notation,
    Description,
    Formula,
    KeyPoints,
}

impl DetailSection {
    pub const ALL: [DetailSection; 4] = [
        DetailSection::Notation,
        DetailSection::Description,
        DetailSection::Formula,
        DetailSection::KeyPoints,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DetailSection::Notation => "notation",
            DetailSection::Description => "description",
            DetailSection::Formula => "formula",
            DetailSection::KeyPoints => "key_points",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DetailSection::Notation => "Mathematical Notation",
            DetailSection::Description => "Description",
            DetailSection::Formula => "Mathematical Formulation",
            DetailSection::KeyPoints => "Key Points",
        }
    }

    /// Section for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = usize::try_from(n.checked_sub(1)?).ok()?;
        DetailSection::ALL.get(idx).copied()
    }

    /// Body lines of this section for a component.
    pub fn body(self, info: &ComponentInfo) -> Vec<String> {
        match self {
            DetailSection::Notation => vec![info.math_notation.to_string()],
            DetailSection::Description => vec![info.description.to_string()],
            DetailSection::Formula => vec![info.formula.to_string()],
            DetailSection::KeyPoints => info
                .key_points
                .iter()
                .map(|p| format!("• {p}"))
                .collect(),
        }
    }
}

impl fmt::Display for DetailSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailSection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        DetailSection::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{lookup, ComponentKey};

    #[test]
    fn number_keys() {
        assert_eq!(DetailSection::from_number(1), Some(DetailSection::Notation));
        assert_eq!(DetailSection::from_number(4), Some(DetailSection::KeyPoints));
        assert_eq!(DetailSection::from_number(0), None);
        assert_eq!(DetailSection::from_number(5), None);
    }

    #[test]
    fn key_points_are_bulleted() {
        let body = DetailSection::KeyPoints.body(lookup(ComponentKey::Ffn));
        assert_eq!(body.len(), 3);
        assert!(body.iter().all(|l| l.starts_with("• ")));
    }

    #[test]
    fn parse_accepts_dashes() {
        assert_eq!("key-points".parse::<DetailSection>().unwrap(), DetailSection::KeyPoints);
        assert!("summary".parse::<DetailSection>().is_err());
    }
}
