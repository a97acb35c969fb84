use std::collections::HashSet;
use std::hash::Hash;

/// Report whether any value in `values` occurs more than once.
///
/// Scans left to right and stops at the first repeat.
pub fn has_duplicate(values: &[i64]) -> bool {
    has_duplicate_by(values)
}

/// Generic form of [`has_duplicate`] for any hashable element.
pub fn has_duplicate_by<T>(values: &[T]) -> bool
where
    T: Eq + Hash,
{
    log::debug!("duplicate scan over {} values", values.len());
    let mut seen = HashSet::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        if !seen.insert(value) {
            log::trace!("repeat found at index {index}");
            return true;
        }
    }
    false
}
