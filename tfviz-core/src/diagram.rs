//! Block diagram model — the drawable transformer stack.
//!
//! Purely declarative. Hosts lay the blocks out top to bottom, draw an arrow
//! between consecutive blocks and wrap the framed blocks in the encoder frame.

use crate::catalog::ComponentKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramBlock {
    pub label: &'static str,
    pub notation: &'static str,
    pub component: ComponentKey,
    /// Drawn inside the repeated encoder frame.
    pub in_frame: bool,
}

/// A skip connection drawn beside the stack, between two block indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Residual {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub title: &'static str,
    pub frame_label: &'static str,
    pub blocks: Vec<DiagramBlock>,
    pub residuals: Vec<Residual>,
}

impl Diagram {
    /// Indices of blocks showing `component`. Several blocks may share one.
    pub fn blocks_for(&self, component: ComponentKey) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.component == component)
            .map(|(i, _)| i)
            .collect()
    }

    /// Index range of the framed blocks, if any.
    pub fn frame_span(&self) -> Option<(usize, usize)> {
        let first = self.blocks.iter().position(|b| b.in_frame)?;
        let last = self.blocks.iter().rposition(|b| b.in_frame)?;
        Some((first, last))
    }

    /// Residual arriving at block `idx`.
    pub fn residual_into(&self, idx: usize) -> Option<&Residual> {
        self.residuals.iter().find(|r| r.to == idx)
    }
}

fn block(
    label: &'static str,
    notation: &'static str,
    component: ComponentKey,
    in_frame: bool,
) -> DiagramBlock {
    DiagramBlock {
        label,
        notation,
        component,
        in_frame,
    }
}

/// The encoder-only transformer stack.
pub fn transformer_diagram() -> Diagram {
    Diagram {
        title: "Transformer Architecture",
        frame_label: "Encoder Stack (×N)",
        blocks: vec![
            block(
                "Input Sequence",
                "X = (x₁, ..., xₙ) ∈ ℝ^(n×d_model)",
                ComponentKey::Input,
                false,
            ),
            block(
                "Positional Encoding",
                "PE(pos,2i) = sin(pos/10000^(2i/d_model))",
                ComponentKey::Positional,
                false,
            ),
            block(
                "Multi-Head Attention",
                "Attention(Q,K,V) = softmax(QK^T/√d_k)V",
                ComponentKey::Attention,
                true,
            ),
            block(
                "Add & Norm",
                "LayerNorm(x + MultiHeadAttention(x))",
                ComponentKey::Norm,
                true,
            ),
            block(
                "Feed Forward Network",
                "FFN(x) = max(0, xW₁ + b₁)W₂ + b₂",
                ComponentKey::Ffn,
                true,
            ),
            block(
                "Add & Norm",
                "LayerNorm(x + FFN(x))",
                ComponentKey::Norm,
                true,
            ),
            block(
                "Output Linear & Softmax",
                "P(y|x) = softmax(xW_o + b_o)",
                ComponentKey::Output,
                false,
            ),
        ],
        residuals: vec![Residual { from: 2, to: 3 }, Residual { from: 4, to: 5 }],
    }
}
