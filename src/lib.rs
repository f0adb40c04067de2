//! Affinity: Entity Co-occurrence Graph Builder
//!
//! Computes a weighted co-occurrence graph from a flat list of entity
//! occurrences found in a corpus of records. Occurrences are ordered by
//! (record, sentence, word); a windowed forward scan then folds every
//! nearby pair into a unique, insertion-ordered edge carrying cumulative
//! distance, occurrence count, and a proximity-weighted strength score.

pub mod config;
pub mod error;
pub mod graph;

pub use config::{Config, GraphConfig};
pub use error::{AffinityError, ConfigError, Result};
pub use graph::{
    cooccurrence_edges, cooccurrence_edges_with, cooccurrence_graph, scan_order,
    CooccurrenceParams, Edge, Entity, EntityView, FlatOccurrence, FlatView, Link, NodeSnapshot,
    Occurrence, OccurrenceView, Position,
};
