//! End-to-end properties of the co-occurrence scan.

use affinity::{cooccurrence_edges, CooccurrenceParams, Edge, Entity, Occurrence};

/// Helper to build an occurrence with a bare entity.
fn occ(record: &str, id: &str, sentence: u32, word: u32) -> Occurrence {
    Occurrence::new(record, Entity::new(id), sentence, word)
}

fn params(max_distance: u32) -> CooccurrenceParams {
    CooccurrenceParams { max_distance }
}

/// Collect (source, target, distance, occurrences) rows for comparison.
fn rows(edges: &[Edge]) -> Vec<(String, String, u64, u64)> {
    edges
        .iter()
        .map(|e| {
            (
                e.source.id.clone(),
                e.target.id.clone(),
                e.link.distance,
                e.link.occurrences,
            )
        })
        .collect()
}

#[test]
fn accumulates_distances_and_occurrences_across_sentences() {
    // The a-b pair shows up three times at distances 2, 4 and 1; the
    // edge must carry the sum and the count, not the last observation.
    let occurrences = vec![
        occ("record:1", "a", 0, 0),
        occ("record:1", "b", 0, 2),
        occ("record:1", "a", 1, 10),
        occ("record:1", "b", 1, 14),
        occ("record:2", "b", 0, 3),
        occ("record:2", "a", 0, 4),
    ];
    let edges = cooccurrence_edges(&occurrences, &params(30));
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].link.occurrences, 3);
    assert_eq!(edges[0].link.distance, 7);
    assert!((edges[0].link.weight - 3.0 / 7.0).abs() < 1e-6);
}

#[test]
fn symmetric_inputs_agree_on_aggregates() {
    // Feeding the same pair in the opposite encounter order may swap
    // the displayed endpoints but must produce the same aggregates.
    let forward = vec![occ("record:1", "a", 0, 0), occ("record:1", "b", 0, 3)];
    let backward = vec![occ("record:1", "b", 0, 0), occ("record:1", "a", 0, 3)];

    let fwd = cooccurrence_edges(&forward, &params(30));
    let bwd = cooccurrence_edges(&backward, &params(30));

    assert_eq!(fwd.len(), 1);
    assert_eq!(bwd.len(), 1);
    assert_eq!(fwd[0].link, bwd[0].link);

    let fwd_pair = {
        let mut ids = [fwd[0].source.id.clone(), fwd[0].target.id.clone()];
        ids.sort();
        ids
    };
    let bwd_pair = {
        let mut ids = [bwd[0].source.id.clone(), bwd[0].target.id.clone()];
        ids.sort();
        ids
    };
    assert_eq!(fwd_pair, bwd_pair);
}

#[test]
fn no_self_edges_anywhere() {
    let occurrences = vec![
        occ("record:1", "a", 0, 0),
        occ("record:1", "a", 0, 1),
        occ("record:1", "b", 0, 2),
        occ("record:1", "b", 0, 3),
    ];
    let edges = cooccurrence_edges(&occurrences, &params(30));
    for edge in &edges {
        assert_ne!(edge.source.id, edge.target.id);
    }
    // Only the a-b pair remains, accumulated over every cross pairing.
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].link.occurrences, 4);
}

#[test]
fn window_boundary_is_inclusive() {
    let at_bound = vec![occ("record:1", "a", 0, 10), occ("record:1", "b", 0, 40)];
    let edges = cooccurrence_edges(&at_bound, &params(30));
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].link.distance, 30);

    let past_bound = vec![occ("record:1", "a", 0, 10), occ("record:1", "b", 0, 41)];
    assert!(cooccurrence_edges(&past_bound, &params(30)).is_empty());
}

#[test]
fn records_and_sentences_are_isolated() {
    // Word-index proximity across record or sentence boundaries never
    // forms an edge.
    let occurrences = vec![
        occ("record:1", "a", 0, 5),
        occ("record:2", "b", 0, 5),
        occ("record:1", "c", 1, 5),
    ];
    assert!(cooccurrence_edges(&occurrences, &params(30)).is_empty());
}

#[test]
fn unsorted_permutations_build_the_same_graph() {
    let sorted = vec![
        occ("record:1", "a", 0, 0),
        occ("record:1", "b", 0, 2),
        occ("record:1", "c", 0, 4),
        occ("record:2", "a", 0, 1),
        occ("record:2", "c", 0, 3),
    ];
    let shuffled = vec![
        sorted[3].clone(),
        sorted[1].clone(),
        sorted[4].clone(),
        sorted[0].clone(),
        sorted[2].clone(),
    ];

    let from_sorted = cooccurrence_edges(&sorted, &params(30));
    let from_shuffled = cooccurrence_edges(&shuffled, &params(30));
    assert_eq!(rows(&from_sorted), rows(&from_shuffled));
}

#[test]
fn repeat_pair_folds_into_single_edge() {
    // a@0, b@2, a@5 with window 3: a@0/a@5 is out of window, both
    // remaining pairings are a-b, so one edge with occurrences 2,
    // distance 5, weight 0.4.
    let occurrences = vec![
        occ("record:1", "a", 0, 0),
        occ("record:1", "b", 0, 2),
        occ("record:1", "a", 0, 5),
    ];
    let edges = cooccurrence_edges(&occurrences, &params(3));
    assert_eq!(rows(&edges), vec![("a".to_string(), "b".to_string(), 5, 2)]);
    assert!((edges[0].link.weight - 0.4).abs() < 1e-6);
}

#[test]
fn output_preserves_creation_order_not_weight_order() {
    // The strongest pair is created last; it must still come back last.
    let occurrences = vec![
        occ("record:1", "a", 0, 0),
        occ("record:1", "b", 0, 20),
        occ("record:2", "c", 0, 0),
        occ("record:2", "d", 0, 1),
    ];
    let edges = cooccurrence_edges(&occurrences, &params(30));
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].source.id, "a");
    assert_eq!(edges[1].source.id, "c");
    assert!(edges[1].link.weight > edges[0].link.weight);
}

#[test]
fn dense_sentence_pairs_every_entity_in_window() {
    // Five distinct entities in one sentence, all within the window:
    // every unordered pair appears exactly once.
    let occurrences: Vec<Occurrence> = (0..5)
        .map(|i| occ("record:1", &format!("entity:{}", i), 0, i))
        .collect();
    let edges = cooccurrence_edges(&occurrences, &params(30));
    assert_eq!(edges.len(), 10);
    for edge in &edges {
        assert_eq!(edge.link.occurrences, 1);
    }
}

#[test]
fn link_metadata_uses_affinity_defaults() {
    let occurrences = vec![occ("record:1", "a", 0, 0), occ("record:1", "b", 0, 1)];
    let edges = cooccurrence_edges(&occurrences, &params(30));
    let link = &edges[0].link;
    assert_eq!(link.kind, "link");
    assert_eq!(link.id, "link:affinity");
    assert_eq!(link.label.get("en").map(String::as_str), Some("Affinity"));
    assert_eq!(link.plural.get("fr").map(String::as_str), Some("Affinités"));
}
