//! Readability scoring and sentence difficulty classification.
//!
//! Ease score uses the Flesch Reading Ease formula:
//! `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`,
//! clamped to 0–100. Higher = easier to read.
//!
//! Grade level uses Flesch-Kincaid:
//! `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`,
//! clamped to grades 1–12.
//!
//! Uses heuristic syllable counting (via [`syllable`]) and punctuation-run
//! sentence splitting (via [`text::split_sentences`]).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllable;
use crate::text;

/// Word count above which a sentence is hard to read.
const HARD_WORDS: usize = 20;
/// Word count above which a sentence is very hard to read.
const VERY_HARD_WORDS: usize = 30;
/// Mean syllables-per-word above which a sentence is hard.
const HARD_SYLLABLES: f64 = 2.0;
/// Mean syllables-per-word above which a sentence is very hard.
const VERY_HARD_SYLLABLES: f64 = 2.5;

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score, 0–100 (higher = easier).
    pub ease_score: u8,
    /// Flesch-Kincaid grade level, clamped to 1–12.
    pub grade: u8,
    /// Sentences classified hard, in document order.
    pub hard_sentences: Vec<String>,
    /// Sentences classified very hard, in document order.
    pub very_hard_sentences: Vec<String>,
}

/// Analyze readability of text.
///
/// Total over all inputs: empty or word-free text scores ease 100 and
/// grade 1 rather than dividing by zero.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let sentences = text::split_sentences(text);
    let total_words = text::count_words(text);

    if sentences.is_empty() || total_words == 0 {
        return ReadabilityReport {
            ease_score: 100,
            grade: 1,
            hard_sentences: Vec::new(),
            very_hard_sentences: Vec::new(),
        };
    }

    let mut hard_sentences = Vec::new();
    let mut very_hard_sentences = Vec::new();

    for sentence in &sentences {
        match classify_sentence(sentence) {
            Difficulty::VeryHard => very_hard_sentences.push(sentence.clone()),
            Difficulty::Hard => hard_sentences.push(sentence.clone()),
            Difficulty::Normal => {}
        }
    }

    let total_syllables = syllable::count_syllables(text);
    let words_per_sentence = total_words as f64 / sentences.len() as f64;
    let syllables_per_word = total_syllables as f64 / total_words as f64;

    let ease = 206.835 - 1.015f64.mul_add(words_per_sentence, 84.6 * syllables_per_word);
    let ease_score = ease.clamp(0.0, 100.0).round() as u8;

    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;
    let grade = grade.round().clamp(1.0, 12.0) as u8;

    ReadabilityReport {
        ease_score,
        grade,
        hard_sentences,
        very_hard_sentences,
    }
}

/// Sentence difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Difficulty {
    Normal,
    Hard,
    VeryHard,
}

/// Classify one sentence by word count and mean syllables per word.
///
/// Very-hard thresholds are checked first; a sentence lands in exactly
/// one bucket.
fn classify_sentence(sentence: &str) -> Difficulty {
    let words = text::split_words(sentence);
    if words.is_empty() {
        return Difficulty::Normal;
    }

    let syllables: usize = words.iter().map(|w| syllable::estimate_syllables(w)).sum();
    let avg_syllables = syllables as f64 / words.len() as f64;

    if words.len() > VERY_HARD_WORDS || avg_syllables > VERY_HARD_SYLLABLES {
        Difficulty::VeryHard
    } else if words.len() > HARD_WORDS || avg_syllables > HARD_SYLLABLES {
        Difficulty::Hard
    } else {
        Difficulty::Normal
    }
}
