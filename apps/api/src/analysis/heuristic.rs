//! Default analysis backend: tokenization, entity and phrase detection, and
//! the years-of-experience scan, composed into one `Analysis`.

use std::collections::BTreeSet;

use async_trait::async_trait;

use super::entities::{extract_entities, EntityKind};
use super::phrases::extract_phrases;
use super::tokens::{tokenize, Token};
use super::{Analysis, ResumeAnalyzer};
use crate::models::record::Level;

pub struct HeuristicAnalyzer;

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, text: &str) -> Analysis {
        analyze_text(text)
    }
}

fn analyze_text(text: &str) -> Analysis {
    let tokens = tokenize(text);
    let entities = extract_entities(&tokens);
    let phrases = extract_phrases(&tokens);

    let name = entities
        .iter()
        .find(|e| e.kind == EntityKind::Person)
        .map(|e| e.text.clone())
        .unwrap_or_default();

    let experience_years = detect_experience_years(&tokens);

    // Skills = lower-cased multi-word phrases ∪ entities (original casing),
    // collapsed as a set. BTreeSet gives the deterministic order the store
    // contract asks for.
    let mut skills: BTreeSet<String> = phrases.into_iter().collect();
    skills.extend(entities.into_iter().map(|e| e.text));

    Analysis {
        skills: skills.into_iter().collect(),
        name,
        experience_years,
        level: Level::from_years(experience_years),
    }
}

/// First numeral whose head word mentions "year", parsed as an integer.
///
/// The head is approximated as the nearest following word token in the same
/// sentence. Deliberately shallow: no cross-sentence reasoning, and a range
/// like "3-5 years" yields whatever the first qualifying numeral does.
fn detect_experience_years(tokens: &[Token]) -> u32 {
    for (i, token) in tokens.iter().enumerate() {
        let Some(value) = token.leading_number() else {
            continue;
        };
        let head = tokens[i + 1..]
            .iter()
            .take_while(|t| t.sentence == token.sentence)
            .find(|t| t.is_word());
        if let Some(head) = head {
            if head.text.to_lowercase().contains("year") {
                return value;
            }
        }
    }
    0
}
