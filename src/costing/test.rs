use crate::costing::aggregate::{sum_edges, sum_nodes};
use crate::costing::{CostModel, CostPolicy, DistanceCost, ScoreCost, DEFAULT_DISTANCE_SCALE};
use crate::fixture::UnitCost;
use crate::store::MemoryStore;
use crate::{Line, Node};

use approx::assert_relative_eq;
use geo::Point;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Three points on a 3-4-5 triangle, the third without a score.
fn triangle() -> MemoryStore<u32> {
    MemoryStore::from_parts(
        vec![
            Node::new(Point::new(0.0, 0.0), 1).with_score(2),
            Node::new(Point::new(3.0, 0.0), 2).with_score(5),
            Node::new(Point::new(3.0, 4.0), 3),
        ],
        vec![Line::new(1, 2), Line::new(2, 3), Line::new(1, 3)],
    )
    .expect("triangle is valid")
}

#[test]
fn distance_cost_is_scaled() {
    let store = triangle();
    let cost = DistanceCost::new(&store, 3u32, DEFAULT_DISTANCE_SCALE);

    assert_relative_eq!(cost.edge_cost(1u32, 2), 300.0);
    assert_relative_eq!(cost.edge_cost(2u32, 1), 300.0);
    assert_relative_eq!(cost.edge_cost(1u32, 3), 500.0);

    assert_relative_eq!(cost.heuristic(1u32), 500.0);
    assert_relative_eq!(cost.heuristic(2u32), 400.0);
    assert_relative_eq!(cost.heuristic(3u32), 0.0);
}

#[test]
fn distance_cost_custom_scale() {
    let store = triangle();
    let cost = DistanceCost::new(&store, 3u32, 1.0);

    assert_relative_eq!(cost.scale(), 1.0);
    assert_relative_eq!(cost.edge_cost(1u32, 3), 5.0);
}

#[test]
fn unknown_coordinate_is_unbounded() {
    let store = triangle();
    let cost = DistanceCost::new(&store, 3u32, DEFAULT_DISTANCE_SCALE);

    assert!(cost.edge_cost(1u32, 9).is_infinite());
    assert!(cost.heuristic(9u32).is_infinite());

    let lost = DistanceCost::new(&store, 9u32, DEFAULT_DISTANCE_SCALE);
    assert!(lost.heuristic(1u32).is_infinite());
}

#[test]
fn distance_aggregate_sums_edges() {
    let store = triangle();
    let cost = DistanceCost::new(&store, 3u32, DEFAULT_DISTANCE_SCALE);

    assert_relative_eq!(cost.aggregate(&[1u32, 2, 3]), 700.0);
    assert_relative_eq!(cost.aggregate(&[1u32]), 0.0);
    assert_relative_eq!(cost.aggregate(&[] as &[u32]), 0.0);
}

#[test]
fn score_cost_adds_endpoints() {
    let store = triangle();
    let cost = ScoreCost::new(&store, 3u32, DEFAULT_DISTANCE_SCALE);

    assert_relative_eq!(cost.edge_cost(1u32, 2), 7.0);
    // Point 3 has no score.
    assert_relative_eq!(cost.edge_cost(2u32, 3), 5.0);
}

#[test]
fn score_cost_reuses_distance_heuristic() {
    let store = triangle();
    let score = ScoreCost::new(&store, 3u32, DEFAULT_DISTANCE_SCALE);
    let distance = DistanceCost::new(&store, 3u32, DEFAULT_DISTANCE_SCALE);

    for position in [1u32, 2, 3] {
        assert_relative_eq!(score.heuristic(position), distance.heuristic(position));
    }
}

#[test]
fn score_aggregate_counts_each_point_once() {
    let store = triangle();
    let cost = ScoreCost::new(&store, 3u32, DEFAULT_DISTANCE_SCALE);

    assert_relative_eq!(cost.aggregate(&[1u32, 2, 3]), 7.0);
    assert_relative_eq!(cost.aggregate(&[1u32]), 2.0);

    // The search accumulates both endpoints per edge, the report does not.
    assert_relative_eq!(sum_edges(&cost, &[1u32, 2, 3]), 12.0);
}

#[test]
fn aggregate_helpers() {
    assert_relative_eq!(sum_edges(&UnitCost, &[4u32, 5, 6, 7]), 3.0);
    assert_relative_eq!(sum_nodes(&[1u32, 2, 3], |p| p as f64), 6.0);
}

#[test]
fn policy_names() {
    assert_eq!(CostPolicy::ByDistance.to_string(), "by_distance");
    assert_eq!(CostPolicy::from_str("by_score").unwrap(), CostPolicy::ByScore);
    assert!(CostPolicy::from_str("by_time").is_err());
    assert_eq!(CostPolicy::default(), CostPolicy::ByDistance);
    assert_eq!(CostPolicy::iter().count(), 2);

    let json = serde_json::to_string(&CostPolicy::ByScore).unwrap();
    assert_eq!(json, "\"by_score\"");
}
