//! Accessor strategies for reading occurrence records.
//!
//! The ordering stage and the scan only ever see occurrences through an
//! [`OccurrenceView`], so callers with their own record shapes can plug
//! in a strategy instead of converting into the built-in ones.

use crate::graph::types::{FlatOccurrence, NodeSnapshot, Occurrence};

/// Capability interface over one occurrence record shape.
pub trait OccurrenceView<T> {
    /// Identifier of the record the occurrence belongs to.
    fn record_of<'a>(&self, occurrence: &'a T) -> &'a str;

    /// Entity identity used for pair keying and self-pair exclusion.
    fn identity_of<'a>(&self, occurrence: &'a T) -> &'a str;

    /// Sentence index within the record.
    fn sentence_of(&self, occurrence: &T) -> u32;

    /// Word index within the sentence.
    fn word_of(&self, occurrence: &T) -> u32;

    /// Entity metadata to freeze onto an edge endpoint.
    fn snapshot_of(&self, occurrence: &T) -> NodeSnapshot;
}

/// Accessor strategy for the conventional `{entity, position}` shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityView;

impl OccurrenceView<Occurrence> for EntityView {
    fn record_of<'a>(&self, occurrence: &'a Occurrence) -> &'a str {
        &occurrence.record_id
    }

    fn identity_of<'a>(&self, occurrence: &'a Occurrence) -> &'a str {
        &occurrence.entity.id
    }

    fn sentence_of(&self, occurrence: &Occurrence) -> u32 {
        occurrence.position.sentence
    }

    fn word_of(&self, occurrence: &Occurrence) -> u32 {
        occurrence.position.word
    }

    fn snapshot_of(&self, occurrence: &Occurrence) -> NodeSnapshot {
        let entity = &occurrence.entity;
        NodeSnapshot {
            kind: entity.kind.clone(),
            id: entity.id.clone(),
            label: entity.label.clone(),
            plural: entity.plural.clone(),
            rank: entity.rank,
            weight: entity.weight,
        }
    }
}

/// Accessor strategy for the pre-flattened shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatView;

impl OccurrenceView<FlatOccurrence> for FlatView {
    fn record_of<'a>(&self, occurrence: &'a FlatOccurrence) -> &'a str {
        &occurrence.record_id
    }

    fn identity_of<'a>(&self, occurrence: &'a FlatOccurrence) -> &'a str {
        &occurrence.id
    }

    fn sentence_of(&self, occurrence: &FlatOccurrence) -> u32 {
        occurrence.position.sentence
    }

    fn word_of(&self, occurrence: &FlatOccurrence) -> u32 {
        occurrence.position.word
    }

    fn snapshot_of(&self, occurrence: &FlatOccurrence) -> NodeSnapshot {
        NodeSnapshot {
            kind: occurrence.kind.clone(),
            id: occurrence.id.clone(),
            label: occurrence.label.clone(),
            plural: occurrence.plural.clone(),
            rank: occurrence.rank,
            weight: occurrence.weight,
        }
    }
}
