//! Canonical scan order for occurrence lists.
//!
//! The windowed scan assumes occurrences arrive grouped by record, then
//! by sentence, with word indices non-decreasing inside a sentence. That
//! grouping is what lets the inner loop break as soon as any of its
//! bounds is crossed, keeping the scan near-linear instead of quadratic.

use crate::graph::view::OccurrenceView;

/// Composite sort key: record, then sentence, then word, ascending.
fn scan_key<'a, T, V: OccurrenceView<T>>(view: &V, occurrence: &'a T) -> (&'a str, u32, u32) {
    (
        view.record_of(occurrence),
        view.sentence_of(occurrence),
        view.word_of(occurrence),
    )
}

/// Order occurrences into the canonical scan order.
///
/// Returns a sorted vector of references; the caller's slice is left
/// untouched. The sort is stable, so occurrences with equal keys keep
/// their input order.
pub fn scan_order<'a, T, V: OccurrenceView<T>>(occurrences: &'a [T], view: &V) -> Vec<&'a T> {
    let mut ordered: Vec<&T> = occurrences.iter().collect();
    ordered.sort_by(|a, b| scan_key(view, *a).cmp(&scan_key(view, *b)));
    ordered
}
