use crate::primitive::{Entry, Line, Node, PointId};
use geo::Point;
use rstar::{PointDistance, RTree};

#[test]
fn point_id_identifier() {
    assert_eq!(PointId::new(42).identifier(), 42);
    assert_eq!(PointId::from(-7).identifier(), -7);
    assert_eq!(13u32.identifier(), 13);
    assert_eq!(PointId::new(5).to_string(), "5");
}

#[test]
fn point_id_serializes_transparently() {
    let json = serde_json::to_string(&vec![PointId::new(1), PointId::new(9)]).unwrap();
    assert_eq!(json, "[1,9]");

    let back: Vec<PointId> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![PointId::new(1), PointId::new(9)]);
}

#[test]
fn line_endpoints() {
    let line = Line::from((PointId::new(3), PointId::new(4)));
    assert_eq!(line.endpoints(), (PointId::new(3), PointId::new(4)));
}

#[test]
fn node_nearest_in_tree() {
    let nodes = vec![
        Node::new(Point::new(0.0, 0.0), PointId::new(1)).with_score(3),
        Node::new(Point::new(1.0, 1.0), PointId::new(2)),
        Node::new(Point::new(5.0, 5.0), PointId::new(3)),
    ];

    let tree = RTree::bulk_load(nodes);
    let nearest = tree
        .nearest_neighbor(&Point::new(0.9, 1.2))
        .expect("tree is not empty");

    assert_eq!(nearest.id, PointId::new(2));
    assert_eq!(nearest.score, None);
    assert!((nearest.distance_2(&Point::new(1.0, 2.0)) - 1.0).abs() < 1e-12);
}

#[test]
fn wide_identifiers_saturate() {
    assert_eq!(u64::MAX.identifier(), i64::MAX);
    assert_eq!(usize::MAX.identifier(), i64::MAX);
    assert_eq!((i64::MAX as u64).identifier(), i64::MAX);
    assert_eq!((-4i32).identifier(), -4);
}
