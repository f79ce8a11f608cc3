//! Integration tests for the connection layout engine.
//!
//! These exercise the engine the way the hosting explorer does: build a
//! topology, calculate, and read the annotations back off the result.

use float_cmp::assert_approx_eq;

use odograph::OdographError;
use odograph::config::LayoutConfig;
use odograph::geometry::{Axis, Point, Side, Size};
use odograph::identifier::Id;
use odograph::layout::Engine;
use odograph::topology::{ConnectionPoint, Node, Relation, Role, Topology};

fn sized_node(name: &str, x: f32, y: f32) -> Node {
    Node::new(Id::new(name), Point::new(x, y)).with_size(Size::new(100.0, 100.0))
}

fn relation(name: &str, source: &str, target: &str) -> Relation {
    Relation::new(Id::new(name), Id::new(source), Id::new(target))
}

fn points_on<'a>(topology: &'a Topology, node: &str, side: Side) -> Vec<&'a ConnectionPoint> {
    topology
        .node(Id::new(node))
        .expect("node missing from layout")
        .connection_points()
        .iter()
        .filter(|point| point.side() == side)
        .collect()
}

#[test]
fn test_horizontal_pair_attaches_right_to_left() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_relation(relation("a_to_b", "A", "B"));

    let layout = Engine::new().calculate(&topology).expect("layout failed");
    let annotated = layout.topology();

    let source_points = points_on(annotated, "A", Side::Right);
    let target_points = points_on(annotated, "B", Side::Left);
    assert_eq!(source_points.len(), 1);
    assert_eq!(target_points.len(), 1);
    assert_approx_eq!(f32, source_points[0].offset_percent(), 50.0);
    assert_approx_eq!(f32, target_points[0].offset_percent(), 50.0);

    // The relation cross-references exactly those two points.
    let annotated_relation = annotated.relation(Id::new("a_to_b")).unwrap();
    assert_eq!(
        annotated_relation.source_connection_point(),
        Some(source_points[0].id())
    );
    assert_eq!(
        annotated_relation.target_connection_point(),
        Some(target_points[0].id())
    );
    assert_eq!(source_points[0].role(), Role::Source);
    assert_eq!(target_points[0].role(), Role::Target);
}

#[test]
fn test_relations_pick_sides_independently() {
    // B sits to the right of A, C sits diagonally below; the diagonal delta
    // is an exact tie and resolves vertically.
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_node(sized_node("C", 300.0, 300.0));
    topology.add_relation(relation("a_to_b", "A", "B"));
    topology.add_relation(relation("a_to_c", "A", "C"));

    let layout = Engine::new().calculate(&topology).expect("layout failed");
    let annotated = layout.topology();

    // Each point is alone on its side, so both stay mid-side.
    let right = points_on(annotated, "A", Side::Right);
    let bottom = points_on(annotated, "A", Side::Bottom);
    assert_eq!(right.len(), 1);
    assert_eq!(bottom.len(), 1);
    assert_approx_eq!(f32, right[0].offset_percent(), 50.0);
    assert_approx_eq!(f32, bottom[0].offset_percent(), 50.0);
}

#[test]
fn test_parallel_relations_share_a_side_in_thirds() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_relation(relation("first", "A", "B"));
    topology.add_relation(relation("second", "A", "B"));

    let layout = Engine::new().calculate(&topology).expect("layout failed");
    let annotated = layout.topology();

    // Parallel relations are not bundled; each keeps its own points, spread
    // in input order.
    let source_points = points_on(annotated, "A", Side::Right);
    assert_eq!(source_points.len(), 2);
    assert_approx_eq!(f32, source_points[0].offset_percent(), 100.0 / 3.0);
    assert_approx_eq!(f32, source_points[1].offset_percent(), 200.0 / 3.0);

    assert_eq!(
        source_points[0].id().relation(),
        Id::new("first"),
        "points must keep input-relation order"
    );

    let target_points = points_on(annotated, "B", Side::Left);
    assert_eq!(target_points.len(), 2);
}

#[test]
fn test_self_loop_routes_top_to_bottom() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_relation(relation("loop", "A", "A"));

    let layout = Engine::new().calculate(&topology).expect("layout failed");
    let annotated = layout.topology();

    let top = points_on(annotated, "A", Side::Top);
    let bottom = points_on(annotated, "A", Side::Bottom);
    assert_eq!(top.len(), 1);
    assert_eq!(bottom.len(), 1);
    assert_approx_eq!(f32, top[0].offset_percent(), 50.0);
    assert_approx_eq!(f32, bottom[0].offset_percent(), 50.0);
    assert_eq!(top[0].role(), Role::Source);
    assert_eq!(bottom[0].role(), Role::Target);
}

#[test]
fn test_unresolvable_relation_passes_through() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_relation(relation("dangling", "A", "NotLoadedYet"));
    topology.add_relation(relation("a_to_b", "A", "B"));

    let layout = Engine::new().calculate(&topology).expect("layout failed");
    let annotated = layout.topology();

    let dangling = annotated.relation(Id::new("dangling")).unwrap();
    assert_eq!(dangling.source_connection_point(), None);
    assert_eq!(dangling.target_connection_point(), None);
    assert_eq!(layout.skipped_relations(), [Id::new("dangling")]);

    // The dangling relation leaves no trace on the nodes and does not shift
    // the resolvable relation's offsets.
    let right = points_on(annotated, "A", Side::Right);
    assert_eq!(right.len(), 1);
    assert_approx_eq!(f32, right[0].offset_percent(), 50.0);

    let missing_source = {
        let mut t = Topology::new();
        t.add_node(sized_node("B", 300.0, 0.0));
        t.add_relation(relation("orphan", "Ghost", "B"));
        Engine::new().calculate(&t).expect("layout failed")
    };
    assert_eq!(missing_source.skipped_relations().len(), 1);
    assert!(
        missing_source
            .topology()
            .node(Id::new("B"))
            .unwrap()
            .connection_points()
            .is_empty()
    );
}

#[test]
fn test_three_relations_into_one_side_quarter_spread() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("D", 0.0, 0.0));
    topology.add_node(sized_node("E1", -300.0, -50.0));
    topology.add_node(sized_node("E2", -300.0, 0.0));
    topology.add_node(sized_node("E3", -300.0, 50.0));
    topology.add_relation(relation("r1", "E1", "D"));
    topology.add_relation(relation("r2", "E2", "D"));
    topology.add_relation(relation("r3", "E3", "D"));

    let layout = Engine::new().calculate(&topology).expect("layout failed");
    let annotated = layout.topology();

    let left = points_on(annotated, "D", Side::Left);
    assert_eq!(left.len(), 3);
    assert_approx_eq!(f32, left[0].offset_percent(), 25.0);
    assert_approx_eq!(f32, left[1].offset_percent(), 50.0);
    assert_approx_eq!(f32, left[2].offset_percent(), 75.0);

    // Input order, not geometric order.
    assert_eq!(left[0].id().relation(), Id::new("r1"));
    assert_eq!(left[1].id().relation(), Id::new("r2"));
    assert_eq!(left[2].id().relation(), Id::new("r3"));
}

#[test]
fn test_recomputation_is_idempotent() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_node(sized_node("C", 300.0, 300.0));
    topology.add_relation(relation("a_to_b", "A", "B"));
    topology.add_relation(relation("b_to_c", "B", "C"));
    topology.add_relation(relation("loop", "C", "C"));
    topology.add_relation(relation("dangling", "A", "Ghost"));

    let first = Engine::new().calculate(&topology).expect("layout failed");
    // Feed the annotated output straight back in; the stale derived fields
    // must be regenerated, not accumulated.
    let second = Engine::new()
        .calculate(first.topology())
        .expect("layout failed");

    for (before, after) in first
        .topology()
        .nodes()
        .iter()
        .zip(second.topology().nodes())
    {
        assert_eq!(before.id(), after.id());
        assert_eq!(before.connection_points(), after.connection_points());
    }
    for (before, after) in first
        .topology()
        .relations()
        .iter()
        .zip(second.topology().relations())
    {
        assert_eq!(
            before.source_connection_point(),
            after.source_connection_point()
        );
        assert_eq!(
            before.target_connection_point(),
            after.target_connection_point()
        );
    }
    assert_eq!(first.skipped_relations(), second.skipped_relations());
}

#[test]
fn test_stale_annotations_are_discarded() {
    let mut topology = Topology::new();
    let mut node = sized_node("A", 0.0, 0.0);
    // Pollute the input with a leftover point from some previous topology.
    node.add_connection_point(ConnectionPoint::new(
        odograph::topology::ConnectionPointId::new(
            Role::Source,
            Id::new("A"),
            Id::new("Gone"),
            Id::new("removed_relation"),
        ),
        Role::Source,
        Side::Left,
    ));
    topology.add_node(node);

    let layout = Engine::new().calculate(&topology).expect("layout failed");
    assert!(
        layout
            .topology()
            .node(Id::new("A"))
            .unwrap()
            .connection_points()
            .is_empty()
    );
}

#[test]
fn test_input_topology_is_untouched() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_relation(relation("a_to_b", "A", "B"));

    let _layout = Engine::new().calculate(&topology).expect("layout failed");

    assert!(
        topology
            .node(Id::new("A"))
            .unwrap()
            .connection_points()
            .is_empty()
    );
    assert_eq!(
        topology
            .relation(Id::new("a_to_b"))
            .unwrap()
            .source_connection_point(),
        None
    );
}

#[test]
fn test_duplicate_identifiers_fail_fast() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("A", 300.0, 0.0));

    let result = Engine::new().calculate(&topology);
    assert_eq!(result.unwrap_err(), OdographError::DuplicateNode(Id::new("A")));

    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_relation(relation("r", "A", "B"));
    topology.add_relation(relation("r", "B", "A"));

    let result = Engine::new().calculate(&topology);
    assert_eq!(
        result.unwrap_err(),
        OdographError::DuplicateRelation(Id::new("r"))
    );
}

#[test]
fn test_default_size_is_a_config_parameter() {
    // A reports no size. Under the stock 250x200 default its center is
    // (125, 100), to the right of B's center, so the relation runs
    // leftwards; under a 50x50 default its center moves to (25, 25) and the
    // vertical axis dominates instead.
    let mut topology = Topology::new();
    topology.add_node(Node::new(Id::new("A"), Point::new(0.0, 0.0)));
    topology.add_node(
        Node::new(Id::new("B"), Point::new(50.0, 75.0)).with_size(Size::new(50.0, 50.0)),
    );
    topology.add_relation(relation("a_to_b", "A", "B"));

    let stock = Engine::new().calculate(&topology).expect("layout failed");
    assert_eq!(
        points_on(stock.topology(), "A", Side::Left).len(),
        1,
        "stock default size should route the relation leftwards"
    );

    let config = LayoutConfig {
        default_node_width: 50.0,
        default_node_height: 50.0,
        ..LayoutConfig::default()
    };
    let shrunk = Engine::with_config(config)
        .calculate(&topology)
        .expect("layout failed");
    assert_eq!(
        points_on(shrunk.topology(), "A", Side::Bottom).len(),
        1,
        "a smaller default size should flip the dominant axis"
    );
}

#[test]
fn test_tie_break_is_a_config_parameter() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_relation(relation("loop", "A", "A"));

    let config = LayoutConfig {
        tie_break: Axis::Horizontal,
        ..LayoutConfig::default()
    };
    let layout = Engine::with_config(config)
        .calculate(&topology)
        .expect("layout failed");

    // Horizontal-wins ties route the self-loop through left/right instead.
    assert_eq!(points_on(layout.topology(), "A", Side::Left).len(), 1);
    assert_eq!(points_on(layout.topology(), "A", Side::Right).len(), 1);
}

#[test]
fn test_drag_recompute_moves_attachment_sides() {
    let mut topology = Topology::new();
    topology.add_node(sized_node("A", 0.0, 0.0));
    topology.add_node(sized_node("B", 300.0, 0.0));
    topology.add_relation(relation("a_to_b", "A", "B"));

    let engine = Engine::new();
    let before = engine.calculate(&topology).expect("layout failed");
    assert_eq!(points_on(before.topology(), "A", Side::Right).len(), 1);

    // The user drags B below A; the next recomputation re-routes the
    // relation through the vertical borders.
    let mut dragged = before.into_topology();
    for node in dragged.nodes_mut() {
        if node.id() == Id::new("B") {
            node.set_position(Point::new(0.0, 300.0));
        }
    }

    let after = engine.calculate(&dragged).expect("layout failed");
    assert!(points_on(after.topology(), "A", Side::Right).is_empty());
    assert_eq!(points_on(after.topology(), "A", Side::Bottom).len(), 1);
    assert_eq!(points_on(after.topology(), "B", Side::Top).len(), 1);
}

#[test]
fn test_empty_topology() {
    let layout = Engine::new()
        .calculate(&Topology::new())
        .expect("layout failed");
    assert!(layout.topology().is_empty());
    assert!(layout.skipped_relations().is_empty());
}
