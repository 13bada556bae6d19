use super::*;

fn node(id: u64, rect: Rect, layer: u8, z: u32, sense: Sense) -> Node {
    Node {
        id: Id::raw(id),
        rect,
        layer,
        z,
        sense,
        kind: NodeKind::Unknown,
    }
}

#[test]
fn hit_test_prefers_higher_layer() {
    let mut tree = UiTree::new();
    let r = Rect::new(0, 0, 10, 10);
    tree.push(node(1, r, 0, 1, Sense::CLICK));
    tree.push(node(2, r, 1, 0, Sense::CLICK));

    assert_eq!(tree.hit_test(Pos::new(5, 5)).unwrap().id, Id::raw(2));
}

#[test]
fn hit_test_prefers_later_nodes_within_a_layer() {
    let mut tree = UiTree::new();
    let r = Rect::new(0, 0, 10, 10);
    tree.push(node(1, r, 0, 0, Sense::CLICK));
    tree.push(node(2, r, 0, 0, Sense::CLICK));

    assert_eq!(tree.hit_test(Pos::new(5, 5)).unwrap().id, Id::raw(2));
}

#[test]
fn hit_test_with_sense_filters_nodes() {
    let mut tree = UiTree::new();
    let r = Rect::new(0, 0, 10, 10);
    tree.push(node(1, r, 0, 1, Sense::CLICK));
    tree.push(node(2, r, 0, 2, Sense::HOVER));

    let hit = tree.hit_test_with_sense(Pos::new(5, 5), Sense::CLICK).unwrap();
    assert_eq!(hit.id, Id::raw(1));
    assert!(tree.hit_test_with_sense(Pos::new(50, 5), Sense::CLICK).is_none());
}

#[test]
fn node_lookup_and_clear() {
    let mut tree = UiTree::new();
    tree.push(node(7, Rect::new(0, 0, 1, 1), 0, 0, Sense::NONE));
    assert!(tree.node(Id::raw(7)).is_some());
    tree.clear();
    assert!(tree.nodes().is_empty());
}
