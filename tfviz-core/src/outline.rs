//! Hierarchical component outline — the selector list beside the diagram.
//!
//! Top-level items are either leaves (select a component) or groups holding
//! leaves. Group expansion is owned by a [`DisclosureGroup`] keyed by group
//! name, so the outline itself stays immutable.

use crate::catalog::ComponentKey;
use crate::disclosure::{DisclosureGroup, DisclosurePolicy};
use crate::error::DisclosureError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLeaf {
    pub name: &'static str,
    pub component: ComponentKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineItem {
    Leaf(OutlineLeaf),
    Group {
        name: &'static str,
        children: Vec<OutlineLeaf>,
    },
}

/// One visible line of the flattened outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub name: &'static str,
    pub kind: RowKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Group { expanded: bool },
    Leaf(ComponentKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub items: Vec<OutlineItem>,
}

impl Outline {
    /// Group names in display order.
    pub fn group_names(&self) -> Vec<&'static str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                OutlineItem::Group { name, .. } => Some(*name),
                OutlineItem::Leaf(_) => None,
            })
            .collect()
    }

    /// A disclosure group with one member per outline group.
    pub fn disclosure(
        &self,
        policy: DisclosurePolicy,
        initial: impl IntoIterator<Item = String>,
    ) -> Result<DisclosureGroup<String>, DisclosureError> {
        DisclosureGroup::new(
            policy,
            self.group_names().into_iter().map(String::from),
            initial,
        )
    }

    /// Flatten into visible rows. Children of collapsed groups are hidden.
    pub fn visible_rows(&self, groups: &DisclosureGroup<String>) -> Vec<OutlineRow> {
        let mut rows = Vec::new();
        for item in &self.items {
            match item {
                OutlineItem::Leaf(leaf) => rows.push(OutlineRow {
                    depth: 0,
                    name: leaf.name,
                    kind: RowKind::Leaf(leaf.component),
                }),
                OutlineItem::Group { name, children } => {
                    let expanded = groups.is_expanded(&name.to_string());
                    rows.push(OutlineRow {
                        depth: 0,
                        name: *name,
                        kind: RowKind::Group { expanded },
                    });
                    if expanded {
                        rows.extend(children.iter().map(|leaf| OutlineRow {
                            depth: 1,
                            name: leaf.name,
                            kind: RowKind::Leaf(leaf.component),
                        }));
                    }
                }
            }
        }
        rows
    }

    /// Name of the group containing `component`, if any.
    pub fn group_of(&self, component: ComponentKey) -> Option<&'static str> {
        self.items.iter().find_map(|item| match item {
            OutlineItem::Group { name, children }
                if children.iter().any(|c| c.component == component) =>
            {
                Some(*name)
            }
            _ => None,
        })
    }
}

/// The transformer outline: embedding, positional encoding, the encoder stack
/// and the output head.
pub fn transformer_outline() -> Outline {
    Outline {
        items: vec![
            OutlineItem::Leaf(OutlineLeaf {
                name: "Input Embedding",
                component: ComponentKey::Input,
            }),
            OutlineItem::Leaf(OutlineLeaf {
                name: "Positional Encoding",
                component: ComponentKey::Positional,
            }),
            OutlineItem::Group {
                name: "Encoder Stack",
                children: vec![
                    OutlineLeaf {
                        name: "Multi-Head Attention",
                        component: ComponentKey::Attention,
                    },
                    OutlineLeaf {
                        name: "Layer Normalization",
                        component: ComponentKey::Norm,
                    },
                    OutlineLeaf {
                        name: "Feed-Forward Network",
                        component: ComponentKey::Ffn,
                    },
                ],
            },
            OutlineItem::Leaf(OutlineLeaf {
                name: "Output Linear & Softmax",
                component: ComponentKey::Output,
            }),
        ],
    }
}
