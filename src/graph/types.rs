//! Core types for the co-occurrence graph.
//!
//! Input records come in two shapes: the conventional one, where entity
//! metadata lives under an `entity` field, and a pre-flattened one,
//! where the metadata sits directly on the occurrence. Both feed the
//! same scan; the output schema is shared.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Input Types
// ============================================================================

/// Position of an entity mention inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Index of the sentence within the record.
    pub sentence: u32,
    /// Index of the word within the sentence.
    pub word: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(sentence: u32, word: u32) -> Self {
        Self { sentence, word }
    }
}

/// An entity as referenced by an occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for the entity.
    ///
    /// Uniqueness is a caller convention; the scan only uses ids for
    /// pair keying and never checks global uniqueness.
    pub id: String,
    /// The kind of entity (e.g. "disease", "person").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Primary display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Plural display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    /// Importance rank of the entity.
    #[serde(default)]
    pub rank: f32,
    /// Intrinsic weight of the entity.
    #[serde(default)]
    pub weight: f32,
}

impl Entity {
    /// Create a new entity with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            label: None,
            plural: None,
            rank: 0.0,
            weight: 0.0,
        }
    }

    /// Set the entity kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the plural display label.
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    /// Set the importance rank.
    pub fn with_rank(mut self, rank: f32) -> Self {
        self.rank = rank;
        self
    }

    /// Set the intrinsic weight.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

/// One observed mention of an entity (conventional shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Identifier of the source record.
    pub record_id: String,
    /// The entity that was mentioned.
    pub entity: Entity,
    /// Where in the record the mention was found.
    pub position: Position,
}

impl Occurrence {
    /// Create a new occurrence.
    pub fn new(record_id: impl Into<String>, entity: Entity, sentence: u32, word: u32) -> Self {
        Self {
            record_id: record_id.into(),
            entity,
            position: Position::new(sentence, word),
        }
    }
}

/// One observed mention with entity metadata flattened onto the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatOccurrence {
    /// Identifier of the source record.
    pub record_id: String,
    /// Unique identifier for the entity.
    pub id: String,
    /// The kind of entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Primary display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Plural display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    /// Importance rank of the entity.
    #[serde(default)]
    pub rank: f32,
    /// Intrinsic weight of the entity.
    #[serde(default)]
    pub weight: f32,
    /// Where in the record the mention was found.
    pub position: Position,
}

impl FlatOccurrence {
    /// Create a new flattened occurrence.
    pub fn new(
        record_id: impl Into<String>,
        id: impl Into<String>,
        sentence: u32,
        word: u32,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            id: id.into(),
            kind: None,
            label: None,
            plural: None,
            rank: 0.0,
            weight: 0.0,
            position: Position::new(sentence, word),
        }
    }

    /// Set the entity kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the plural display label.
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    /// Set the importance rank.
    pub fn with_rank(mut self, rank: f32) -> Self {
        self.rank = rank;
        self
    }

    /// Set the intrinsic weight.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// Entity metadata frozen onto an edge endpoint.
///
/// Captured from the first occurrence pair that created the edge; later
/// folds into the same edge do not refresh it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The kind of entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Unique identifier for the entity.
    pub id: String,
    /// Primary display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Plural display label, falling back to the label when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    /// Importance rank of the entity.
    #[serde(default)]
    pub rank: f32,
    /// Intrinsic weight of the entity.
    #[serde(default)]
    pub weight: f32,
}

/// Aggregate statistics and display metadata for one affinity link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Always `"link"`.
    pub kind: String,
    /// Shared across every affinity link; link ids are not unique.
    pub id: String,
    /// Localized display label, keyed by language code.
    pub label: HashMap<String, String>,
    /// Localized plural display label, keyed by language code.
    pub plural: HashMap<String, String>,
    /// Running sum of pairwise word distances.
    pub distance: u64,
    /// Number of pairwise observations folded into this link.
    pub occurrences: u64,
    /// Proximity-weighted strength: `occurrences / max(1, distance)`.
    pub weight: f32,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            kind: "link".to_string(),
            id: "link:affinity".to_string(),
            label: localized("Affinity", "Affinité"),
            plural: localized("Affinities", "Affinités"),
            distance: 0,
            occurrences: 0,
            weight: 0.0,
        }
    }
}

/// Build an en/fr localized text map.
fn localized(en: &str, fr: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("en".to_string(), en.to_string());
    map.insert("fr".to_string(), fr.to_string());
    map
}

/// A weighted co-occurrence edge between two distinct entities.
///
/// The (source.id, target.id) unordered pair is unique across a build's
/// output; source and target keep the order of the first encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Endpoint seen first in scan order.
    pub source: NodeSnapshot,
    /// Endpoint seen second in scan order.
    pub target: NodeSnapshot,
    /// Aggregate link statistics.
    pub link: Link,
}
