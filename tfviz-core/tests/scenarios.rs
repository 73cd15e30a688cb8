//! End-to-end scenarios across the public API.

use tfviz_core::catalog::{self, ComponentKey};
use tfviz_core::diagram::transformer_diagram;
use tfviz_core::outline::{transformer_outline, RowKind};
use tfviz_core::{
    DetailSection, DisclosureGroup, DisclosurePolicy, ExplorerConfig, HoverReveal, Selection,
};

fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn exclusive_non_collapsible_scenario() {
    let mut group =
        DisclosureGroup::new(DisclosurePolicy::exclusive(), keys(&["a", "b", "c"]), keys(&["a"]))
            .unwrap();

    group.activate(&"b".to_string()).unwrap();
    assert!(!group.is_expanded(&"a".to_string()));
    assert!(group.is_expanded(&"b".to_string()));

    group.activate(&"b".to_string()).unwrap();
    assert_eq!(group.expanded().cloned().collect::<Vec<_>>(), keys(&["b"]));
}

#[test]
fn independent_scenario() {
    let mut group =
        DisclosureGroup::new(DisclosurePolicy::independent(), keys(&["x", "y"]), Vec::new())
            .unwrap();

    group.activate(&"x".to_string()).unwrap();
    assert_eq!(group.expanded().cloned().collect::<Vec<_>>(), keys(&["x"]));
    group.activate(&"y".to_string()).unwrap();
    assert_eq!(group.expanded().cloned().collect::<Vec<_>>(), keys(&["x", "y"]));
    group.activate(&"x".to_string()).unwrap();
    assert_eq!(group.expanded().cloned().collect::<Vec<_>>(), keys(&["y"]));
}

#[test]
fn two_reveals_do_not_share_state() {
    let mut a = HoverReveal::new();
    let b = HoverReveal::new();
    a.on_enter();
    assert!(!b.is_visible());
}

#[test]
fn diagram_click_drives_detail_accordion() {
    let config = ExplorerConfig::default();
    let diagram = transformer_diagram();
    let mut selection = Selection::new();
    let mut detail = config.detail.build_group().unwrap();

    // Clicking the second "Add & Norm" block selects layer normalization.
    selection.select(diagram.blocks[5].component);
    let info = selection.info().unwrap();
    assert_eq!(info.name, "Layer Normalization");

    detail.activate(&DetailSection::KeyPoints).unwrap();
    let open: Vec<DetailSection> = detail.expanded().copied().collect();
    assert_eq!(open, vec![DetailSection::KeyPoints]);
    assert_eq!(DetailSection::KeyPoints.body(info).len(), 3);
}

#[test]
fn collapsing_outline_group_hides_its_leaves() {
    let outline = transformer_outline();
    let mut groups = ExplorerConfig::default()
        .outline
        .build_group(&outline)
        .unwrap();
    assert_eq!(outline.visible_rows(&groups).len(), 7);

    groups.activate(&"Encoder Stack".to_string()).unwrap();
    let rows = outline.visible_rows(&groups);
    assert_eq!(rows.len(), 4);
    assert!(rows
        .iter()
        .all(|r| !matches!(r.kind, RowKind::Leaf(ComponentKey::Attention))));
}

#[test]
fn catalog_covers_every_outline_leaf() {
    let outline = transformer_outline();
    let groups = outline
        .disclosure(DisclosurePolicy::independent(), keys(&["Encoder Stack"]))
        .unwrap();
    for row in outline.visible_rows(&groups) {
        if let RowKind::Leaf(key) = row.kind {
            assert_eq!(catalog::lookup(key).key, key);
        }
    }
}
