use std::cmp::Ordering;
use std::collections::HashMap;

/// Find two distinct positions whose values add up to `target`.
///
/// The first pass records, for every value `x`, the complement `target - x`
/// together with the last index holding `x`. The second pass walks `values`
/// in order and stops at the first `j` whose value is a recorded complement
/// pointing at some other index `ix`, returning `(j, ix)`.
///
/// When several pairs exist, the one returned depends on the overwrite order
/// of the first pass; it is not necessarily the lexicographically smallest.
pub fn two_sum(values: &[i64], target: i64) -> Option<(usize, usize)> {
    log::debug!("two-sum over {} values, target {target}", values.len());

    // target - x => last index of x
    let mut complements = HashMap::with_capacity(values.len());
    for (i, &x) in values.iter().enumerate() {
        // an unrepresentable complement can never be matched by an i64
        if let Some(complement) = target.checked_sub(x) {
            complements.insert(complement, i);
        }
    }

    for (j, y) in values.iter().enumerate() {
        match complements.get(y) {
            Some(&ix) if ix != j => {
                log::trace!("values[{j}] = {y} pairs with values[{ix}]");
                return Some((j, ix));
            }
            _ => {}
        }
    }

    None
}

/// Two-pointer variant for input sorted in non-decreasing order.
///
/// Returns 1-based positions `(i, j)` with `i < j`. On unsorted input the
/// result is unspecified but the call still terminates.
pub fn two_sum_sorted(values: &[i64], target: i64) -> Option<(usize, usize)> {
    log::debug!("sorted two-sum over {} values, target {target}", values.len());
    if values.len() < 2 {
        return None;
    }

    let (mut lo, mut hi) = (0, values.len() - 1);
    while lo < hi {
        // i128 keeps the sum exact at the i64 extremes
        let sum = i128::from(values[lo]) + i128::from(values[hi]);
        match sum.cmp(&i128::from(target)) {
            Ordering::Equal => return Some((lo + 1, hi + 1)),
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
        }
    }
    None
}
