//! Randomized comparison of the hash-based routines against the baselines.

use hashdrill::bench::{
    has_duplicates_sort_copy, is_anagram_sorted, longest_consecutive_sorted, two_sum_brute_force,
};
use hashdrill_core::{
    decode, encode, group_anagrams, has_duplicate, is_anagram, longest_consecutive, two_sum,
    two_sum_sorted,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const ROUNDS: usize = 500;

fn small_numbers(rng: &mut StdRng, max_len: usize, spread: i64) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(-spread..=spread)).collect()
}

fn word(rng: &mut StdRng, alphabet: &[u8], max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

fn sorted_key(value: &str) -> Vec<char> {
    let mut chars: Vec<char> = value.chars().collect();
    chars.sort_unstable();
    chars
}

#[test]
fn duplicate_matches_sorting() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let values = small_numbers(&mut rng, 20, 15);
        assert_eq!(
            has_duplicate(&values),
            has_duplicates_sort_copy(&values),
            "{values:?}"
        );
    }
}

#[test]
fn grouping_partitions_input() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let count = rng.gen_range(0..15);
        let values: Vec<String> = (0..count).map(|_| word(&mut rng, b"abc", 4)).collect();
        let groups = group_anagrams(&values);

        // same multiset
        let mut flattened: Vec<String> = groups.iter().flatten().cloned().collect();
        let mut expected = values.clone();
        flattened.sort();
        expected.sort();
        assert_eq!(flattened, expected, "{values:?}");

        // one key per group, each group is exactly the input filtered by its key
        let mut keys = Vec::new();
        for group in &groups {
            assert!(!group.is_empty());
            let key = sorted_key(&group[0]);
            let members: Vec<&String> = values.iter().filter(|v| sorted_key(v) == key).collect();
            assert_eq!(group.iter().collect::<Vec<_>>(), members, "{values:?}");
            keys.push(key);
        }
        let distinct = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), distinct, "two groups share a key: {values:?}");
    }
}

#[test]
fn two_sum_finds_a_valid_pair_iff_one_exists() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let values = small_numbers(&mut rng, 12, 20);
        let target = rng.gen_range(-30..=30);

        let found = two_sum(&values, target);
        assert_eq!(
            found.is_some(),
            two_sum_brute_force(&values, target).is_some(),
            "{values:?} target {target}"
        );
        if let Some((i, j)) = found {
            assert_ne!(i, j);
            assert_eq!(values[i] + values[j], target, "{values:?} -> ({i}, {j})");
        }
    }
}

#[test]
fn sorted_two_sum_agrees_with_brute_force() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let mut values = small_numbers(&mut rng, 12, 20);
        values.sort_unstable();
        let target = rng.gen_range(-30..=30);

        let found = two_sum_sorted(&values, target);
        assert_eq!(
            found.is_some(),
            two_sum_brute_force(&values, target).is_some(),
            "{values:?} target {target}"
        );
        if let Some((i, j)) = found {
            assert!(1 <= i && i < j && j <= values.len());
            assert_eq!(values[i - 1] + values[j - 1], target);
        }
    }
}

#[test]
fn anagram_check_matches_sorting() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let a = word(&mut rng, b"abz", 6);
        let b = if rng.gen_bool(0.5) {
            // force equal lengths half of the time
            let mut chars: Vec<u8> = a.bytes().collect();
            let len = chars.len();
            if len > 0 {
                chars[rng.gen_range(0..len)] = b"abz"[rng.gen_range(0..3)];
            }
            String::from_utf8(chars).expect("ascii")
        } else {
            word(&mut rng, b"abz", 6)
        };
        assert_eq!(
            is_anagram(&a, &b).expect("lowercase input rejected"),
            is_anagram_sorted(&a, &b),
            "{a:?} vs {b:?}"
        );
    }
}

#[test]
fn consecutive_matches_sorting() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let values = small_numbers(&mut rng, 25, 12);
        assert_eq!(
            longest_consecutive(&values),
            longest_consecutive_sorted(&values),
            "{values:?}"
        );
    }
}

#[test]
fn codec_restores_any_list() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let count = rng.gen_range(0..8);
        let values: Vec<String> = (0..count).map(|_| word(&mut rng, b"a1:9", 5)).collect();
        let packed = encode(&values);
        assert_eq!(decode(&packed), Ok(values), "{packed:?}");
    }
}
