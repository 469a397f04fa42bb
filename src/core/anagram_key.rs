//! Anagram key derivation
//!
//! Every word maps to a canonical key: its characters lowercased and sorted by
//! code point. Two words are anagrams of each other exactly when their keys match.

/// Compute the anagram key for a word
///
/// Lowercases every character, sorts the characters by code point and joins
/// them back together. Total over all inputs: the empty string maps to the
/// empty string.
///
/// # Examples
/// ```
/// use anagram_index::core::canonicalize;
///
/// assert_eq!(canonicalize("Ruby"), "bruy");
/// assert_eq!(canonicalize("x-ray"), "-arxy");
/// assert_eq!(canonicalize(""), "");
/// ```
#[must_use]
pub fn canonicalize(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Check whether two words share an anagram key
#[inline]
#[must_use]
pub fn is_anagram_of(left: &str, right: &str) -> bool {
    canonicalize(left) == canonicalize(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    #[test]
    fn canonicalize_sorts_letters() {
        assert_eq!(canonicalize("ruby"), "bruy");
        assert_eq!(canonicalize("swift"), "fistw");
        assert_eq!(canonicalize("c"), "c");
    }

    #[test]
    fn canonicalize_lowercases_first() {
        assert_eq!(canonicalize("Ruby"), canonicalize("ruby"));
        assert_eq!(canonicalize("RUBY"), "bruy");
        assert_eq!(canonicalize("Tesla"), canonicalize("stale"));
    }

    #[test]
    fn canonicalize_keeps_hyphens_in_front() {
        // '-' sorts below every ASCII letter
        assert_eq!(canonicalize("re-act"), "-acert");
        assert_eq!(canonicalize("co-op"), "-coop");
        assert_eq!(canonicalize("x-ray"), "-arxy");
    }

    #[test]
    fn canonicalize_empty_input() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn canonicalize_keeps_repeated_letters() {
        assert_eq!(canonicalize("aaaa"), "aaaa");
        assert_eq!(canonicalize("Anna"), "aann");
        assert_eq!(canonicalize("mississippi").len(), 11);
    }

    #[test]
    fn canonicalize_is_permutation_invariant() {
        let mut rng = rand::rng();
        for word in ["ruby", "listen", "conversation", "mother-in-law", "Elvis"] {
            let expected = canonicalize(word);
            let mut chars: Vec<char> = word.chars().collect();
            for _ in 0..25 {
                chars.shuffle(&mut rng);
                let permutation: String = chars.iter().collect();
                assert_eq!(
                    canonicalize(&permutation),
                    expected,
                    "permutation '{permutation}' of '{word}' has a different key"
                );
            }
        }
    }

    #[test]
    fn anagram_pairs() {
        assert!(is_anagram_of("listen", "silent"));
        assert!(is_anagram_of("Elvis", "lives"));
        assert!(!is_anagram_of("ruby", "rust"));
        assert!(!is_anagram_of("stop", "stops"));
    }
}
