use std::collections::HashSet;

/// Length of the longest run of consecutive integers present in `values`.
///
/// Runs are only walked from their smallest member, so every distinct value
/// is visited at most twice. Order and repeats in the input do not matter.
pub fn longest_consecutive(values: &[i64]) -> usize {
    log::debug!("longest consecutive run over {} values", values.len());
    let seen: HashSet<i64> = values.iter().copied().collect();

    let mut longest = 0;
    #[expect(clippy::iter_over_hash_type)]
    for &start in &seen {
        let is_run_start = start.checked_sub(1).is_none_or(|prev| !seen.contains(&prev));
        if !is_run_start {
            continue;
        }

        let mut len = 1;
        let mut current = start;
        while let Some(next) = current.checked_add(1) {
            if !seen.contains(&next) {
                break;
            }
            current = next;
            len += 1;
        }

        if len > longest {
            log::trace!("run of {len} starting at {start}");
            longest = len;
        }
    }
    longest
}
