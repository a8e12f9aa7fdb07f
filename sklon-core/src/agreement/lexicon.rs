//! Embedded noun lexicon.
//!
//! A fixed set of noun paradigms compiled into the binary and parsed once
//! on first access. The lexicon is deliberately closed: an unlisted noun
//! is an `UnknownNoun` failure at the record boundary, not a guess.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use super::NounParadigm;
use crate::grammar::{Animacy, Gender};

static LEXICON: OnceLock<HashMap<String, NounParadigm>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct LexiconFile {
    nouns: Vec<NounEntry>,
}

#[derive(Debug, Deserialize)]
struct NounEntry {
    word: String,
    gender: Gender,
    #[serde(default)]
    animate: bool,
    singular: [String; 6],
    plural: [String; 6],
}

fn lexicon() -> &'static HashMap<String, NounParadigm> {
    LEXICON.get_or_init(|| {
        match toml::from_str::<LexiconFile>(include_str!("../../configs/nouns.toml")) {
            Ok(file) => file
                .nouns
                .into_iter()
                .map(|entry| {
                    let animacy = if entry.animate {
                        Animacy::Animate
                    } else {
                        Animacy::Inanimate
                    };
                    (
                        entry.word,
                        NounParadigm::new(entry.gender, animacy, entry.singular, entry.plural),
                    )
                })
                .collect(),
            Err(e) => {
                eprintln!("Warning: failed to parse embedded noun lexicon: {e}");
                HashMap::new()
            }
        }
    })
}

/// Look up a noun paradigm by its nominative singular surface form.
pub fn lookup(word: &str) -> Option<&'static NounParadigm> {
    lexicon().get(word)
}

/// All lexicon head words, sorted.
pub fn lexicon_words() -> Vec<&'static str> {
    let mut words: Vec<&str> = lexicon().keys().map(String::as_str).collect();
    words.sort_unstable();
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Case;

    #[test]
    fn test_lexicon_loads() {
        assert!(!lexicon_words().is_empty());
        assert!(lookup("дом").is_some());
        assert!(lookup("несуществующееслово").is_none());
    }

    #[test]
    fn test_animate_paradigm() {
        let person = lookup("человек").unwrap();
        assert_eq!(person.animacy(), Animacy::Animate);
        // Counting form is the bare genitive plural: "пять человек"
        assert_eq!(person.agree_form(Case::Nominative, 5), "человек");
    }

    #[test]
    fn test_suppletive_counting_form() {
        // "год" counts with "лет": пять лет
        let year = lookup("год").unwrap();
        assert_eq!(year.agree_form(Case::Nominative, 5), "лет");
        assert_eq!(year.agree_form(Case::Nominative, 2), "года");
    }
}
