//! Heuristic named-entity detection over capitalized token runs.
//!
//! A shallow stand-in for a statistical NER model: maximal runs of
//! capitalized words are classified as Person / Organization / Location by
//! suffix cues, a small location gazetteer, and a name-shape check. Runs that
//! match no cue are dropped rather than guessed.

use super::tokens::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Organization,
    Location,
}

/// A recognized entity with its original casing preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

const ORG_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "corporation",
    "company",
    "technologies",
    "solutions",
    "systems",
    "labs",
    "software",
    "consulting",
    "university",
    "institute",
    "college",
    "academy",
    "gmbh",
];

const LOCATIONS: &[&str] = &[
    "india",
    "bangalore",
    "bengaluru",
    "mumbai",
    "delhi",
    "hyderabad",
    "pune",
    "chennai",
    "london",
    "new york",
    "san francisco",
    "seattle",
    "austin",
    "boston",
    "california",
    "texas",
    "singapore",
    "berlin",
    "amsterdam",
    "toronto",
    "sydney",
    "tokyo",
    "dubai",
    "remote",
];

/// Capitalized words that start sentences or headings far more often than
/// they start names. A run beginning with one of these is never a Person.
const NON_NAME_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "summary",
    "objective",
    "profile",
    "skills",
    "education",
    "experience",
    "projects",
    "certifications",
    "achievements",
    "references",
    "contact",
    "developed",
    "designed",
    "built",
    "created",
    "led",
    "managed",
    "implemented",
    "improved",
    "delivered",
    "worked",
    "responsible",
    "proficient",
    "data",
    "machine",
    "deep",
    "web",
    "mobile",
    "software",
    "senior",
    "junior",
    "full",
    "front",
    "back",
];

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_uppercase()) && word.chars().any(|c| c.is_alphabetic())
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_uppercase())
        && chars.all(|c| c.is_lowercase() || c == '\'')
}

fn is_acronym(word: &str) -> bool {
    word.len() >= 2 && word.len() <= 6 && word.chars().all(|c| c.is_ascii_uppercase())
}

/// Scans for maximal same-sentence runs of capitalized word tokens and
/// classifies each run, keeping original casing.
pub fn extract_entities(tokens: &[Token]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !tokens[i].is_word() || !is_capitalized(&tokens[i].text) {
            i += 1;
            continue;
        }
        let sentence = tokens[i].sentence;
        let mut j = i;
        while j < tokens.len()
            && tokens[j].is_word()
            && tokens[j].sentence == sentence
            && is_capitalized(&tokens[j].text)
        {
            j += 1;
        }
        let run: Vec<&str> = tokens[i..j].iter().map(|t| t.text.as_str()).collect();
        if let Some(entity) = classify_run(&run) {
            entities.push(entity);
        }
        i = j;
    }

    entities
}

fn classify_run(run: &[&str]) -> Option<Entity> {
    let text = run.join(" ");
    let lowered = text.to_lowercase();

    if run
        .iter()
        .any(|w| ORG_SUFFIXES.contains(&w.to_lowercase().as_str()))
    {
        return Some(Entity {
            text,
            kind: EntityKind::Organization,
        });
    }

    if LOCATIONS.contains(&lowered.as_str()) {
        return Some(Entity {
            text,
            kind: EntityKind::Location,
        });
    }

    if looks_like_person(run) {
        return Some(Entity {
            text,
            kind: EntityKind::Person,
        });
    }

    if run.len() == 1 && is_acronym(run[0]) {
        return Some(Entity {
            text,
            kind: EntityKind::Organization,
        });
    }

    None
}

/// Name shape: two or three title-cased alphabetic words, none of which is a
/// common heading or tech word.
fn looks_like_person(run: &[&str]) -> bool {
    if run.len() < 2 || run.len() > 3 {
        return false;
    }
    run.iter().all(|w| {
        w.len() >= 2
            && is_title_case(w)
            && !NON_NAME_WORDS.contains(&w.to_lowercase().as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokens::tokenize;

    fn entities_of(text: &str) -> Vec<Entity> {
        extract_entities(&tokenize(text))
    }

    #[test]
    fn test_two_word_name_is_person() {
        let found = entities_of("Jane Doe has 5 years of experience");
        assert_eq!(
            found,
            vec![Entity {
                text: "Jane Doe".to_string(),
                kind: EntityKind::Person,
            }]
        );
    }

    #[test]
    fn test_org_suffix_beats_name_shape() {
        let found = entities_of("Worked at Acme Corp on billing");
        assert!(found.contains(&Entity {
            text: "Acme Corp".to_string(),
            kind: EntityKind::Organization,
        }));
    }

    #[test]
    fn test_university_is_organization() {
        let found = entities_of("Graduated from Stanford University with honors");
        assert!(found.iter().any(|e| e.kind == EntityKind::Organization
            && e.text == "Stanford University"));
    }

    #[test]
    fn test_known_city_is_location() {
        let found = entities_of("Based in Bangalore since 2019");
        assert!(found.contains(&Entity {
            text: "Bangalore".to_string(),
            kind: EntityKind::Location,
        }));
    }

    #[test]
    fn test_multiword_location_keeps_casing() {
        let found = entities_of("Relocated to New York last spring");
        assert!(found.contains(&Entity {
            text: "New York".to_string(),
            kind: EntityKind::Location,
        }));
    }

    #[test]
    fn test_acronym_is_organization() {
        let found = entities_of("Previously employed at IBM as an engineer");
        assert!(found.contains(&Entity {
            text: "IBM".to_string(),
            kind: EntityKind::Organization,
        }));
    }

    #[test]
    fn test_heading_words_are_not_people() {
        let found = entities_of("Data Science and Machine Learning");
        assert!(found.iter().all(|e| e.kind != EntityKind::Person));
    }

    #[test]
    fn test_capitalized_verb_run_is_not_a_person() {
        assert!(entities_of("Developed Python services").is_empty());
    }

    #[test]
    fn test_run_does_not_cross_sentences() {
        // "Experienced engineer. Jane" must not merge across the period.
        let found = entities_of("Met Anil. Kumar joined later");
        assert!(found.iter().all(|e| e.text != "Anil Kumar"));
    }

    #[test]
    fn test_single_capitalized_word_without_cue_is_dropped() {
        assert!(entities_of("Python is my main language").is_empty());
    }

    #[test]
    fn test_empty_text_has_no_entities() {
        assert!(entities_of("").is_empty());
    }
}
