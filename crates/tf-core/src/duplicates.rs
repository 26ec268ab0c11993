//! Order-insensitive duplicate detection
//!
//! Works on raw number sequences so batches that did not come from the
//! generator (hand-entered or loaded from disk) can be checked too.

use std::collections::HashMap;

/// True if any two entries hold the same numbers, in any order
pub fn has_identical_tips<T: AsRef<[u8]>>(tips: &[T]) -> bool {
    find_identical_pair(tips).is_some()
}

/// Indices (0-based) of the first two entries holding the same numbers
pub fn find_identical_pair<T: AsRef<[u8]>>(tips: &[T]) -> Option<(usize, usize)> {
    let mut seen: HashMap<Vec<u8>, usize> = HashMap::with_capacity(tips.len());

    for (i, tip) in tips.iter().enumerate() {
        let mut key = tip.as_ref().to_vec();
        key.sort_unstable();

        if let Some(&first) = seen.get(&key) {
            return Some((first, i));
        }
        seen.insert(key, i);
    }

    None
}
