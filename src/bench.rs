//! Baseline implementations without hashing.
//!
//! They trade speed for obviousness and serve two purposes: the criterion
//! benchmarks measure the hash-based routines against them, and the oracle
//! tests use them as reference answers.

/// Sort + adjacent compare (does not modify the input, copies internally)
pub fn has_duplicates_sort_copy<T>(data: &[T]) -> bool
where
    T: Ord + Clone,
{
    let mut v = data.to_vec();
    has_duplicates_sort_in_place(&mut v)
}

/// In-place version of [`has_duplicates_sort_copy`], reuses the caller's buffer
pub fn has_duplicates_sort_in_place<T>(v: &mut [T]) -> bool
where
    T: Ord,
{
    v.sort_unstable();
    v.windows(2).any(|w| w[0] == w[1])
}

/// Compare the sorted characters of both strings
pub fn is_anagram_sorted(a: &str, b: &str) -> bool {
    sorted_chars(a) == sorted_chars(b)
}

fn sorted_chars(value: &str) -> Vec<char> {
    let mut chars: Vec<char> = value.chars().collect();
    chars.sort_unstable();
    chars
}

/// Quadratic grouping: each string joins the first group whose head it is
/// an anagram of. Groups come out in first-seen order.
pub fn group_anagrams_pairwise<S: AsRef<str>>(values: &[S]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    for value in values {
        let value = value.as_ref();
        match groups
            .iter_mut()
            .find(|group| is_anagram_sorted(&group[0], value))
        {
            Some(group) => group.push(value.to_owned()),
            None => groups.push(vec![value.to_owned()]),
        }
    }
    groups
}

/// Every pair `(i, j)` with `i < j`, first match wins
pub fn two_sum_brute_force(values: &[i64], target: i64) -> Option<(usize, usize)> {
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i].checked_add(values[j]) == Some(target) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Sort, drop repeats, then measure runs of step 1
pub fn longest_consecutive_sorted(values: &[i64]) -> usize {
    let mut v = values.to_vec();
    v.sort_unstable();
    v.dedup();

    let mut longest = 0;
    let mut run = 0;
    for (i, &value) in v.iter().enumerate() {
        run = if i > 0 && v[i - 1].checked_add(1) == Some(value) {
            run + 1
        } else {
            1
        };
        longest = longest.max(run);
    }
    longest
}
