use crate::fixture::{cycle_with_chords, CYCLE_WITH_CHORDS};
use crate::graph::GraphIndex;
use crate::Line;

#[test]
fn indexes_both_directions() {
    let graph = GraphIndex::from_edges([(1u32, 2u32), (2, 3)]);

    assert_eq!(graph.neighbors(1), &[2]);
    assert_eq!(graph.neighbors(2), &[1, 3]);
    assert_eq!(graph.neighbors(3), &[2]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.position_count(), 3);
}

#[test]
fn unknown_position_has_no_neighbors() {
    let graph = GraphIndex::from_edges([(1u32, 2u32)]);

    assert!(!graph.contains(9));
    assert!(graph.neighbors(9).is_empty());
}

#[test]
fn keeps_duplicates_and_loops() {
    let graph = GraphIndex::from_lines(&[
        Line::new(1u32, 2u32),
        Line::new(1, 2),
        Line::new(3, 3),
    ]);

    assert_eq!(graph.neighbors(1), &[2, 2]);
    assert_eq!(graph.neighbors(2), &[1, 1]);
    assert_eq!(graph.neighbors(3), &[3, 3]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn fixture_is_symmetric() {
    let graph = cycle_with_chords();

    for position in graph.positions() {
        for neighbor in graph.neighbors(*position) {
            assert!(
                graph.neighbors(*neighbor).contains(position),
                "{neighbor} lists no edge back to {position}"
            );
        }
    }
}

#[test]
fn fixture_matches_adjacency() {
    let graph = cycle_with_chords();

    for (position, expected) in CYCLE_WITH_CHORDS {
        let mut actual = graph.neighbors(*position).to_vec();
        let mut expected = expected.to_vec();
        actual.sort_unstable();
        expected.sort_unstable();

        assert_eq!(actual, expected, "neighbours of {position}");
    }
}
