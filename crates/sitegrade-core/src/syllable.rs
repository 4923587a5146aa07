//! Heuristic syllable estimation.
//!
//! Approximates per-word syllable counts from spelling alone — no
//! pronunciation dictionary is involved. The estimate lowercases the word,
//! keeps only letters, strips a trailing silent `e` (except after a
//! consonant-`le` ending, where the `l` is syllabic), then counts vowel
//! clusters (runs of {a,e,i,o,u,y} count once, so diphthongs like "ia" in
//! "variant" are not double-counted).
//!
//! The output feeds only the readability formulas; it is an approximation,
//! not a linguistic guarantee.

const VOWELS: [u8; 6] = [b'a', b'e', b'i', b'o', b'u', b'y'];

/// Estimate the syllable count of a single word.
///
/// Returns 0 for an empty word or a word with no vowels; otherwise at
/// least 1.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<u8> = word
        .to_lowercase()
        .bytes()
        .filter(|b| b.is_ascii_lowercase())
        .collect();

    if !letters.iter().any(|b| VOWELS.contains(b)) {
        return 0;
    }

    // Trailing silent e ("improve", "whale") doesn't start a syllable.
    // Keep it for very short words like "be" where it is the only vowel,
    // and for consonant-le endings ("sample", "little") where the e marks
    // a syllabic l.
    let trimmed = if letters.len() > 2 && letters.last() == Some(&b'e') && !ends_in_consonant_le(&letters) {
        &letters[..letters.len() - 1]
    } else {
        &letters[..]
    };

    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;
    for &b in trimmed {
        let is_vowel = VOWELS.contains(&b);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // The word has a vowel; the silent-e strip must not zero it out ("the").
    syllables.max(1)
}

/// A trailing `le` preceded by a consonant, as in "sample" or "little".
fn ends_in_consonant_le(letters: &[u8]) -> bool {
    letters.len() >= 3
        && letters[letters.len() - 2] == b'l'
        && !VOWELS.contains(&letters[letters.len() - 3])
}

/// Sum estimated syllables across all whitespace-separated words.
pub fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(estimate_syllables).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_estimates() {
        assert_eq!(estimate_syllables("hello"), 2);
        assert_eq!(estimate_syllables("world"), 1);
        assert_eq!(estimate_syllables("beautiful"), 3);
        assert_eq!(estimate_syllables("cat"), 1);
    }

    #[test]
    fn silent_e_not_counted() {
        assert_eq!(estimate_syllables("improve"), 2);
        assert_eq!(estimate_syllables("whale"), 1);
        // Short words keep their only vowel
        assert_eq!(estimate_syllables("be"), 1);
        assert_eq!(estimate_syllables("the"), 1);
    }

    #[test]
    fn consonant_le_endings_keep_their_syllable() {
        assert_eq!(estimate_syllables("sample"), 2);
        assert_eq!(estimate_syllables("little"), 2);
        assert_eq!(estimate_syllables("table"), 2);
        // Vowel before the l: the e really is silent
        assert_eq!(estimate_syllables("whole"), 1);
    }

    #[test]
    fn diphthongs_collapse() {
        // "ia" counts once, "eau" counts once
        assert_eq!(estimate_syllables("variant"), 2);
        assert_eq!(estimate_syllables("beau"), 1);
    }

    #[test]
    fn no_vowels_is_zero() {
        assert_eq!(estimate_syllables(""), 0);
        assert_eq!(estimate_syllables("tsk"), 0);
        assert_eq!(estimate_syllables("123"), 0);
    }

    #[test]
    fn y_counts_as_vowel() {
        assert_eq!(estimate_syllables("sky"), 1);
        assert_eq!(estimate_syllables("rhythm"), 1);
    }

    #[test]
    fn punctuation_and_case_ignored() {
        assert_eq!(estimate_syllables("Hello!"), 2);
        assert_eq!(estimate_syllables("don't"), 1);
    }

    #[test]
    fn text_totals() {
        assert_eq!(count_syllables("the cat sat"), 3);
        assert_eq!(count_syllables(""), 0);
    }
}
