//! Static component catalog — what the detail view shows for each block.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A selectable transformer component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKey {
    Input,
    Positional,
    Attention,
    Norm,
    Ffn,
    Output,
}

impl ComponentKey {
    pub const ALL: [ComponentKey; 6] = [
        ComponentKey::Input,
        ComponentKey::Positional,
        ComponentKey::Attention,
        ComponentKey::Norm,
        ComponentKey::Ffn,
        ComponentKey::Output,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKey::Input => "input",
            ComponentKey::Positional => "positional",
            ComponentKey::Attention => "attention",
            ComponentKey::Norm => "norm",
            ComponentKey::Ffn => "ffn",
            ComponentKey::Output => "output",
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ComponentKey::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownComponent(s.to_string()))
    }
}

/// Everything the detail view knows about one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    pub key: ComponentKey,
    /// Block fill colour, `#RRGGBB`.
    pub color: &'static str,
    pub name: &'static str,
    pub math_notation: &'static str,
    pub description: &'static str,
    pub formula: &'static str,
    pub key_points: &'static [&'static str],
}

static CATALOG: [ComponentInfo; 6] = [
    ComponentInfo {
        key: ComponentKey::Input,
        color: "#E6F3FF",
        name: "Input Embedding",
        math_notation: "E(X) ∈ ℝ^(n×d_model)",
        description: "Transforms input tokens into continuous vector representations. \
                      Each token is mapped to a d_model-dimensional vector.",
        formula: "E(x_i) = W_e * x_i, where W_e ∈ ℝ^(d_model × vocab_size)",
        key_points: &[
            "Converts discrete tokens to dense vectors",
            "Allows the model to process input in a continuous space",
            "Learned during training to capture semantic relationships",
        ],
    },
    ComponentInfo {
        key: ComponentKey::Positional,
        color: "#FFE6E6",
        name: "Positional Encoding",
        math_notation: "PE(pos,2i) = sin(pos/10000^(2i/d_model))",
        description: "Adds information about the position of tokens in the sequence, \
                      allowing the model to utilize the order of the sequence.",
        formula: "PE(pos,2i+1) = cos(pos/10000^(2i/d_model))",
        key_points: &[
            "Injects sequence order information",
            "Uses sinusoidal functions for position representation",
            "Allows the model to attend to relative positions",
        ],
    },
    ComponentInfo {
        key: ComponentKey::Attention,
        color: "#E6FFE6",
        name: "Multi-Head Attention",
        math_notation: "Attention(Q,K,V) = softmax(QK^T/√d_k)V",
        description: "Allows the model to jointly attend to information from different \
                      representation subspaces at different positions.",
        formula: "MultiHead(Q,K,V) = Concat(head_1, ..., head_h)W^O",
        key_points: &[
            "Captures contextual relationships between tokens",
            "Uses multiple attention heads for diverse representations",
            "Enables parallel computation for efficiency",
        ],
    },
    ComponentInfo {
        key: ComponentKey::Norm,
        color: "#FFE6FF",
        name: "Layer Normalization",
        math_notation: "LN(x) = α * (x - μ) / (σ + ε) + β",
        description: "Normalizes the inputs to have zero mean and unit variance, \
                      stabilizing the learning process.",
        formula: "μ = 1/n Σx_i, σ^2 = 1/n Σ(x_i - μ)^2",
        key_points: &[
            "Stabilizes the learning process",
            "Allows for training of very deep networks",
            "Applied after each sub-layer in the encoder and decoder",
        ],
    },
    ComponentInfo {
        key: ComponentKey::Ffn,
        color: "#FFFDE6",
        name: "Feed-Forward Network",
        math_notation: "FFN(x) = max(0, xW_1 + b_1)W_2 + b_2",
        description: "Applies non-linear transformations to each position separately \
                      and identically.",
        formula: "ReLU(x) = max(0, x)",
        key_points: &[
            "Introduces non-linearity to the model",
            "Processes each position independently",
            "Typically uses ReLU activation function",
        ],
    },
    ComponentInfo {
        key: ComponentKey::Output,
        color: "#E6FFF9",
        name: "Output Linear & Softmax",
        math_notation: "P(y|x) = softmax(xW_o + b_o)",
        description: "Transforms the final hidden states into output probabilities over \
                      the vocabulary.",
        formula: "softmax(x_i) = exp(x_i) / Σexp(x_j)",
        key_points: &[
            "Projects hidden states onto output vocabulary",
            "Applies softmax to obtain probability distribution",
            "Used for final prediction or generation",
        ],
    },
];

/// All catalog entries in diagram order.
pub fn all() -> &'static [ComponentInfo] {
    &CATALOG
}

pub fn lookup(key: ComponentKey) -> &'static ComponentInfo {
    // CATALOG is laid out in ComponentKey::ALL order.
    &CATALOG[key as usize]
}

/// Parse `#RRGGBB` into RGB components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_key() {
        for key in ComponentKey::ALL {
            assert_eq!(lookup(key).key, key);
        }
    }

    #[test]
    fn every_entry_has_three_key_points() {
        for info in all() {
            assert_eq!(info.key_points.len(), 3, "{}", info.name);
            assert!(parse_hex_color(info.color).is_some(), "{}", info.color);
        }
    }

    #[test]
    fn key_parsing() {
        assert_eq!("attention".parse::<ComponentKey>().unwrap(), ComponentKey::Attention);
        assert_eq!(" FFN ".parse::<ComponentKey>().unwrap(), ComponentKey::Ffn);
        assert!(matches!(
            "decoder".parse::<ComponentKey>(),
            Err(CatalogError::UnknownComponent(_))
        ));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#E6F3FF"), Some((0xE6, 0xF3, 0xFF)));
        assert_eq!(parse_hex_color("E6F3FF"), None);
        assert_eq!(parse_hex_color("#E6F3"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn description_continuation_is_single_spaced() {
        let info = lookup(ComponentKey::Input);
        assert!(info.description.contains("representations. Each token"));
    }
}
