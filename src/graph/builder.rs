//! Windowed pairwise scan and edge accumulation.
//!
//! This is the heart of the crate: occurrences are put into the
//! canonical scan order, then every forward pair inside the distance
//! window is folded into an accumulator that keeps one edge per
//! unordered entity pair.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::graph::ordering::scan_order;
use crate::graph::types::{Edge, FlatOccurrence, Link, NodeSnapshot, Occurrence};
use crate::graph::view::{EntityView, FlatView, OccurrenceView};

/// Parameters for a co-occurrence build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CooccurrenceParams {
    /// Size of the sliding window when comparing word positions.
    ///
    /// The scale runs from 1 (adjacent words) through ~20 (sentence
    /// level) up to an arbitrarily large value (whole-document scope).
    /// The bound is inclusive: a pair exactly `max_distance` apart
    /// still counts.
    pub max_distance: u32,
}

impl Default for CooccurrenceParams {
    fn default() -> Self {
        Self { max_distance: 30 }
    }
}

impl From<GraphConfig> for CooccurrenceParams {
    fn from(config: GraphConfig) -> Self {
        Self {
            max_distance: config.max_distance,
        }
    }
}

// ============================================================================
// Edge Accumulator
// ============================================================================

/// Canonical identity of an unordered entity pair.
///
/// The lexicographically smaller id always sits first, so (A, B) and
/// (B, A) resolve to the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    fn new(id1: &str, id2: &str) -> Self {
        if id1 <= id2 {
            Self {
                first: id1.to_string(),
                second: id2.to_string(),
            }
        } else {
            Self {
                first: id2.to_string(),
                second: id1.to_string(),
            }
        }
    }
}

/// Accumulates pairwise observations into unique, insertion-ordered
/// edges.
///
/// Owned by a single build; nothing survives the call that created it
/// except the returned edge list.
#[derive(Debug, Default)]
struct EdgeAccumulator {
    /// Pair key -> index into `edges`.
    slots: HashMap<PairKey, usize>,
    /// Edges in first-creation order.
    edges: Vec<Edge>,
}

impl EdgeAccumulator {
    /// Fold one observed pair into the accumulator.
    ///
    /// Self-pairs are ignored. The first observation of a pair calls
    /// `snapshots` and freezes both endpoints; repeats only grow the
    /// aggregate distance and occurrence count. The link weight is
    /// recomputed after every fold.
    fn fold(
        &mut self,
        id1: &str,
        id2: &str,
        distance: u64,
        snapshots: impl FnOnce() -> (NodeSnapshot, NodeSnapshot),
    ) {
        if id1 == id2 {
            return;
        }

        let key = PairKey::new(id1, id2);
        let slot = match self.slots.get(&key) {
            Some(&slot) => {
                let link = &mut self.edges[slot].link;
                link.distance += distance;
                link.occurrences += 1;
                slot
            }
            None => {
                let (source, target) = snapshots();
                self.edges.push(Edge {
                    source: freeze(source),
                    target: freeze(target),
                    link: Link {
                        distance,
                        occurrences: 1,
                        ..Link::default()
                    },
                });
                let slot = self.edges.len() - 1;
                self.slots.insert(key, slot);
                slot
            }
        };

        let link = &mut self.edges[slot].link;
        link.weight = link.occurrences as f32 / link.distance.max(1) as f32;
    }

    fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Apply endpoint defaults before a snapshot is frozen onto an edge.
fn freeze(mut snapshot: NodeSnapshot) -> NodeSnapshot {
    if snapshot.plural.is_none() {
        snapshot.plural = snapshot.label.clone();
    }
    snapshot
}

// ============================================================================
// Windowed Scan
// ============================================================================

/// Build co-occurrence edges from occurrences in any record shape.
///
/// Orders the occurrences into the canonical scan order, then walks
/// every forward pair inside the window and folds it into the
/// accumulator. Edges come back in first-creation order, not sorted by
/// weight or distance.
pub fn cooccurrence_edges_with<T, V: OccurrenceView<T>>(
    occurrences: &[T],
    view: &V,
    params: &CooccurrenceParams,
) -> Vec<Edge> {
    let ordered = scan_order(occurrences, view);

    let mut accumulator = EdgeAccumulator::default();

    for i in 0..ordered.len() {
        let first = ordered[i];
        let first_record = view.record_of(first);
        let first_sentence = view.sentence_of(first);
        let first_word = view.word_of(first);

        for j in (i + 1)..ordered.len() {
            let second = ordered[j];
            // The scan order keeps each record contiguous, so no later
            // occurrence can match once the record changes.
            if view.record_of(second) != first_record {
                break;
            }
            if view.sentence_of(second) != first_sentence {
                break;
            }
            // Word indices are non-decreasing within a sentence, so
            // every later occurrence is at least this far away.
            let distance = first_word.abs_diff(view.word_of(second)) as u64;
            if distance > params.max_distance as u64 {
                break;
            }
            accumulator.fold(
                view.identity_of(first),
                view.identity_of(second),
                distance,
                || (view.snapshot_of(first), view.snapshot_of(second)),
            );
        }
    }

    let edges = accumulator.into_edges();
    tracing::debug!(
        "built {} edges from {} occurrences (max distance {})",
        edges.len(),
        occurrences.len(),
        params.max_distance
    );
    edges
}

/// Build co-occurrence edges from occurrences in the conventional
/// `{entity, position}` shape.
pub fn cooccurrence_edges(occurrences: &[Occurrence], params: &CooccurrenceParams) -> Vec<Edge> {
    cooccurrence_edges_with(occurrences, &EntityView, params)
}

/// Build co-occurrence edges from occurrences in the pre-flattened
/// shape.
pub fn cooccurrence_graph(
    occurrences: &[FlatOccurrence],
    params: &CooccurrenceParams,
) -> Vec<Edge> {
    cooccurrence_edges_with(occurrences, &FlatView, params)
}
