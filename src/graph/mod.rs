//! Co-occurrence graph module.
//!
//! This module turns a flat list of entity occurrences into weighted
//! affinity edges:
//! - Types: occurrence record shapes and the edge/link output schema
//! - Views: accessor strategies for reading custom record shapes
//! - Ordering: the canonical (record, sentence, word) scan order
//! - Builder: the windowed pairwise scan and edge accumulation

mod builder;
mod ordering;
mod types;
mod view;

pub use builder::{
    cooccurrence_edges, cooccurrence_edges_with, cooccurrence_graph, CooccurrenceParams,
};
pub use ordering::scan_order;
pub use types::{Edge, Entity, FlatOccurrence, Link, NodeSnapshot, Occurrence, Position};
pub use view::{EntityView, FlatView, OccurrenceView};
