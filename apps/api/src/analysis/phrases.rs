//! Stopword-delimited noun-phrase chunking.
//!
//! A chunk is a maximal run of word tokens in one sentence containing no
//! stopword, number, or punctuation break. Only multi-word chunks qualify as
//! phrases; they are emitted lower-cased.

use super::tokens::Token;

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "of", "in", "on", "at", "to", "for", "with",
    "by", "from", "as", "is", "are", "was", "were", "be", "been", "being", "am", "has", "have",
    "had", "having", "do", "does", "did", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must", "i", "me", "my", "mine", "we", "us", "our", "you", "your", "he",
    "him", "his", "she", "her", "it", "its", "they", "them", "their", "this", "that", "these",
    "those", "which", "who", "whom", "what", "when", "where", "why", "how", "not", "no", "so",
    "if", "then", "than", "too", "very", "also", "just", "about", "into", "over", "under",
    "after", "before", "between", "during", "while", "through", "against", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "only", "own", "same", "up", "down",
    "out", "off", "again", "further", "once", "here", "there", "because", "until",
];

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word.to_lowercase().as_str())
}

/// Extracts multi-word chunks, lower-cased, in document order. Duplicates
/// are kept; callers collapse them when building the skill set.
pub fn extract_phrases(tokens: &[Token]) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut chunk: Vec<&str> = Vec::new();
    let mut chunk_sentence = 0usize;

    let flush = |chunk: &mut Vec<&str>, phrases: &mut Vec<String>| {
        if chunk.len() >= 2 {
            phrases.push(chunk.join(" ").to_lowercase());
        }
        chunk.clear();
    };

    for token in tokens {
        let breaks = !token.is_word()
            || is_stopword(&token.text)
            || (!chunk.is_empty() && token.sentence != chunk_sentence);
        if breaks {
            flush(&mut chunk, &mut phrases);
            // A non-stopword word after a sentence change starts a new chunk.
            if token.is_word() && !is_stopword(&token.text) {
                chunk_sentence = token.sentence;
                chunk.push(&token.text);
            }
            continue;
        }
        if chunk.is_empty() {
            chunk_sentence = token.sentence;
        }
        chunk.push(&token.text);
    }
    flush(&mut chunk, &mut phrases);

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokens::tokenize;

    fn phrases_of(text: &str) -> Vec<String> {
        extract_phrases(&tokenize(text))
    }

    #[test]
    fn test_chunks_between_stopwords() {
        assert_eq!(
            phrases_of("experience in Data Science and Machine Learning"),
            vec!["data science", "machine learning"]
        );
    }

    #[test]
    fn test_single_word_chunks_are_dropped() {
        assert!(phrases_of("experience of years in python").is_empty());
    }

    #[test]
    fn test_numbers_break_chunks() {
        assert_eq!(phrases_of("shipped 3 mobile applications"), vec![
            "mobile applications"
        ]);
    }

    #[test]
    fn test_punctuation_breaks_chunks() {
        assert_eq!(
            phrases_of("backend development, frontend development"),
            vec!["backend development", "frontend development"]
        );
    }

    #[test]
    fn test_chunks_do_not_cross_sentences() {
        assert_eq!(
            phrases_of("distributed systems. cloud computing"),
            vec!["distributed systems", "cloud computing"]
        );
    }

    #[test]
    fn test_output_is_lower_cased() {
        assert_eq!(phrases_of("Jane Doe writes code"), vec!["jane doe writes code"]);
    }

    #[test]
    fn test_empty_text_yields_no_phrases() {
        assert!(phrases_of("").is_empty());
    }
}
