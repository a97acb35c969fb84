use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// The `k` most frequent values, most frequent first.
///
/// Equal counts are ordered by the smaller value first. When `k` exceeds the
/// number of distinct values every distinct value is returned.
pub fn top_k_frequent(values: &[i64], k: usize) -> Vec<i64> {
    log::debug!("top-{k} over {} values", values.len());
    if k == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // min-heap of the best k seen so far; the root is the weakest entry
    let mut heap = BinaryHeap::with_capacity(k + 1);
    #[expect(clippy::iter_over_hash_type)]
    for (value, count) in counts {
        heap.push(Reverse((count, Reverse(value))));
        if heap.len() > k {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((_, Reverse(value)))| value)
        .collect()
}
