use super::*;

fn scene() -> Scene {
    build_scene(&LogoConfig::default()).unwrap()
}

#[test]
fn canonical_scene_has_eight_nodes_and_ten_edges() {
    let s = scene();
    assert_eq!(s.nodes().len(), 8);
    assert_eq!(s.edges().len(), 10);
}

#[test]
fn nodes_are_ring_first_then_fans() {
    let s = scene();
    let keys: Vec<NodeKey> = s.nodes().iter().map(|n| n.key).collect();
    assert_eq!(
        keys,
        vec![
            NodeKey::Ring(0),
            NodeKey::Ring(1),
            NodeKey::Ring(2),
            NodeKey::Ring(3),
            NodeKey::Ring(4),
            NodeKey::Ring(5),
            NodeKey::Fan(FanSide::Left),
            NodeKey::Fan(FanSide::Right),
        ]
    );
}

#[test]
fn ring_nodes_take_palette_colors_and_fans_are_neutral() {
    let cfg = LogoConfig::default();
    let s = scene();
    for i in 0..6 {
        assert_eq!(
            s.node_by_key(NodeKey::Ring(i)).unwrap().fill,
            cfg.palette.ring[i]
        );
    }
    for side in FanSide::ALL {
        assert_eq!(
            s.node_by_key(NodeKey::Fan(side)).unwrap().fill,
            cfg.palette.neutral
        );
    }
}

#[test]
fn fan_edges_connect_to_their_anchor() {
    let s = scene();
    let left = s.edge_by_key(EdgeKey::Fan(FanSide::Left)).unwrap();
    assert_eq!(left.a, Point::new(15.0, 65.0));
    assert_eq!(left.to, s.node_by_key(NodeKey::Ring(3)).unwrap().id);

    let right = s.edge_by_key(EdgeKey::Fan(FanSide::Right)).unwrap();
    assert_eq!(right.a, Point::new(195.0, 65.0));
    assert_eq!(right.to, s.node_by_key(NodeKey::Ring(0)).unwrap().id);
}

#[test]
fn edges_use_default_stroke() {
    for e in scene().edges() {
        assert_eq!(e.stroke, Color::GRAY);
        assert_eq!(e.width, 2.5);
    }
}

#[test]
fn excluded_pairs_are_not_resolvable() {
    let s = scene();
    assert!(s.edge_by_key(EdgeKey::Ring(0, 3)).is_err());
    assert!(s.edge_by_key(EdgeKey::Ring(1, 2)).is_err());
    assert!(s.edge_by_key(EdgeKey::Ring(2, 3)).is_ok());
}

#[test]
fn builder_rejects_duplicates_and_missing_endpoints() {
    let mut b = SceneBuilder::new(Canvas::default());
    b.node(NodeKey::Ring(0), Point::ZERO, 1.0, Color::BLUE)
        .unwrap();
    assert!(
        b.node(NodeKey::Ring(0), Point::ZERO, 1.0, Color::BLUE)
            .is_err()
    );
    let err = b
        .edge(
            EdgeKey::Ring(0, 1),
            NodeKey::Ring(0),
            NodeKey::Ring(1),
            Color::GRAY,
            1.0,
        )
        .unwrap_err();
    assert!(err.to_string().contains("has not been placed"));
}

#[test]
fn invalid_config_fails_before_building() {
    let mut cfg = LogoConfig::default();
    cfg.fan_distance = -3.0;
    assert!(matches!(
        build_scene(&cfg),
        Err(HexlogoError::Validation(_))
    ));
}
