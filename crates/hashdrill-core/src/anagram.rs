use std::collections::HashMap;
use std::fmt::Display;

const ALPHABET_LEN: usize = 26;

/// Which argument of [`is_anagram`] carried the offending character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnagramError {
    #[error("{operand} string has {ch:?} at position {index}, only 'a'..='z' is accepted")]
    NotLowercase {
        operand: Operand,
        index: usize,
        ch: char,
    },
}

/// Partition `values` into groups whose members are permutations of one
/// another.
///
/// Group order is unspecified. Inside a group, strings keep their input
/// order.
pub fn group_anagrams<S: AsRef<str>>(values: &[S]) -> Vec<Vec<String>> {
    log::debug!("grouping {} strings by sorted-character key", values.len());
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    for value in values {
        let value = value.as_ref();
        grouped
            .entry(canonical_key(value))
            .or_default()
            .push(value.to_owned());
    }
    log::trace!("{} distinct keys", grouped.len());
    grouped.into_values().collect()
}

fn canonical_key(value: &str) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Decide whether `a` and `b` are letter permutations of each other.
///
/// Both strings must consist of `'a'..='z'` only. Strings of different
/// lengths are answered with `Ok(false)` before their contents are looked at.
///
/// # Errors
/// [`AnagramError::NotLowercase`] for the first character outside the
/// lowercase ASCII alphabet.
pub fn is_anagram(a: &str, b: &str) -> Result<bool, AnagramError> {
    if a.len() != b.len() {
        log::trace!("length mismatch: {} vs {}", a.len(), b.len());
        return Ok(false);
    }

    let mut counts = [0i32; ALPHABET_LEN];
    for (index, ch) in a.chars().enumerate() {
        counts[letter_slot(Operand::First, index, ch)?] += 1;
    }
    for (index, ch) in b.chars().enumerate() {
        counts[letter_slot(Operand::Second, index, ch)?] -= 1;
    }

    Ok(counts.iter().all(|&count| count == 0))
}

fn letter_slot(operand: Operand, index: usize, ch: char) -> Result<usize, AnagramError> {
    if ch.is_ascii_lowercase() {
        Ok(ch as usize - 'a' as usize)
    } else {
        Err(AnagramError::NotLowercase { operand, index, ch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_groups(mut groups: Vec<Vec<String>>) -> Vec<Vec<String>> {
        groups.sort();
        groups
    }

    #[test]
    fn test_group_example() {
        let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
        assert_eq!(
            sorted_groups(groups),
            vec![
                vec!["bat".to_owned()],
                vec!["eat".to_owned(), "tea".to_owned(), "ate".to_owned()],
                vec!["tan".to_owned(), "nat".to_owned()],
            ]
        );
    }

    #[test]
    fn test_group_empty_input() {
        let groups = group_anagrams::<&str>(&[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_single_and_empty_strings() {
        assert_eq!(group_anagrams(&["a"]), vec![vec!["a".to_owned()]]);

        let groups = group_anagrams(&["", "x", ""]);
        assert_eq!(
            sorted_groups(groups),
            vec![vec![String::new(), String::new()], vec!["x".to_owned()]]
        );
    }

    #[test]
    fn test_group_keeps_repeated_members() {
        let groups = group_anagrams(&[String::from("ab"), String::from("ba"), String::from("ab")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0], vec!["ab", "ba", "ab"]);
    }

    #[test]
    fn test_group_non_ascii() {
        let groups = group_anagrams(&["été", "éét", "ete"]);
        assert_eq!(
            sorted_groups(groups),
            vec![vec!["ete".to_owned()], vec!["été".to_owned(), "éét".to_owned()]]
        );
    }

    #[test]
    fn test_is_anagram_examples() {
        assert_eq!(is_anagram("anagram", "nagaram"), Ok(true));
        assert_eq!(is_anagram("rat", "car"), Ok(false));
    }

    #[test]
    fn test_is_anagram_length_mismatch() {
        assert_eq!(is_anagram("ab", "abc"), Ok(false));
        assert_eq!(is_anagram("", "a"), Ok(false));
        // length is checked before content
        assert_eq!(is_anagram("A", "bb"), Ok(false));
    }

    #[test]
    fn test_is_anagram_empty() {
        assert_eq!(is_anagram("", ""), Ok(true));
    }

    #[test]
    fn test_is_anagram_counts_matter() {
        assert_eq!(is_anagram("aab", "abb"), Ok(false));
        assert_eq!(is_anagram("zzza", "azzz"), Ok(true));
    }

    #[test]
    fn test_is_anagram_rejects_out_of_alphabet() {
        assert_eq!(
            is_anagram("abC", "cab"),
            Err(AnagramError::NotLowercase {
                operand: Operand::First,
                index: 2,
                ch: 'C',
            })
        );
        assert_eq!(
            is_anagram("ab c", "abc "),
            Err(AnagramError::NotLowercase {
                operand: Operand::First,
                index: 2,
                ch: ' ',
            })
        );
        assert_eq!(
            is_anagram("abc", "a1c"),
            Err(AnagramError::NotLowercase {
                operand: Operand::Second,
                index: 1,
                ch: '1',
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = is_anagram("a", "B").expect_err("uppercase accepted");
        assert_eq!(
            err.to_string(),
            "second string has 'B' at position 0, only 'a'..='z' is accepted"
        );
    }
}
