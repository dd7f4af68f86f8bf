//! Shallow tokenizer feeding the entity, phrase, and experience heuristics.

/// Token classification. Numbers are tokens that start with an ASCII digit
/// ("5", "2019", "5+"); punctuation runs collapse into a single break token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Zero-based sentence index. Sentences break on `.`, `!`, `?`, and
    /// newlines, which is as much structure as resume text reliably has.
    pub sentence: usize,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Leading digits of a number token, if any ("5+" → 5, "3-5" → 3).
    pub fn leading_number(&self) -> Option<u32> {
        if self.kind != TokenKind::Number {
            return None;
        }
        let digits: String = self.text.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '+' || c == '#'
}

fn is_sentence_break(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\n')
}

/// Splits text into word, number, and punctuation tokens with sentence
/// indices. Apostrophes stay inside words ("don't"); `+` and `#` stay inside
/// tokens so "5+" and "C#" survive as single units.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut sentence = 0usize;
    let mut current = String::new();
    let mut pending_punct = false;

    let push_current = |current: &mut String, tokens: &mut Vec<Token>, sentence: usize| {
        if current.is_empty() {
            return;
        }
        let kind = if current.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            TokenKind::Number
        } else {
            TokenKind::Word
        };
        tokens.push(Token {
            text: std::mem::take(current),
            kind,
            sentence,
        });
    };

    for c in text.chars() {
        if is_token_char(c) {
            if pending_punct {
                tokens.push(Token {
                    text: String::new(),
                    kind: TokenKind::Punct,
                    sentence,
                });
                pending_punct = false;
            }
            current.push(c);
            continue;
        }

        push_current(&mut current, &mut tokens, sentence);
        if is_sentence_break(c) {
            sentence += 1;
            pending_punct = false;
        } else if !c.is_whitespace() {
            // Collapse punctuation runs into one break marker.
            pending_punct = true;
        }
    }
    push_current(&mut current, &mut tokens, sentence);

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Punct)
            .map(|t| t.text.as_str())
            .collect()
    }

    #[test]
    fn test_basic_word_split() {
        let tokens = tokenize("Jane Doe has experience");
        assert_eq!(texts(&tokens), vec!["Jane", "Doe", "has", "experience"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Word));
    }

    #[test]
    fn test_numbers_are_classified() {
        let tokens = tokenize("5 years since 2019");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].leading_number(), Some(5));
        assert_eq!(tokens[3].leading_number(), Some(2019));
    }

    #[test]
    fn test_plus_suffix_stays_in_number_token() {
        let tokens = tokenize("5+ years");
        assert_eq!(tokens[0].text, "5+");
        assert_eq!(tokens[0].leading_number(), Some(5));
    }

    #[test]
    fn test_sentence_indices_advance_on_period() {
        let tokens = tokenize("First sentence. Second one");
        assert_eq!(tokens[0].sentence, 0);
        assert_eq!(tokens[1].sentence, 0);
        assert_eq!(tokens[2].sentence, 1);
    }

    #[test]
    fn test_newline_breaks_sentence() {
        let tokens = tokenize("Skills\nPython");
        assert_eq!(tokens[0].sentence, 0);
        assert_eq!(tokens[1].sentence, 1);
    }

    #[test]
    fn test_punctuation_run_collapses_to_one_break() {
        let tokens = tokenize("skills: , python");
        let puncts = tokens.iter().filter(|t| t.kind == TokenKind::Punct).count();
        assert_eq!(puncts, 1);
    }

    #[test]
    fn test_apostrophe_and_hash_stay_in_words() {
        let tokens = tokenize("don't use C#");
        assert_eq!(texts(&tokens), vec!["don't", "use", "C#"]);
    }

    #[test]
    fn test_hyphen_splits_ranges() {
        let tokens = tokenize("3-5 years");
        assert_eq!(tokens[0].text, "3");
        assert_eq!(tokens[1].kind, TokenKind::Punct);
        assert_eq!(tokens[2].text, "5");
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_word_leading_number_is_none() {
        let tokens = tokenize("years");
        assert_eq!(tokens[0].leading_number(), None);
    }
}
