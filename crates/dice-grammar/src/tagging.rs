//! Part-of-speech tagging with number features

use crate::lexicon::Lexicon;
use crate::tree::{Category, Number, Word};

/// One reading of an input token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub category: Category,
    /// `None` where the category carries no number
    pub number: Option<Number>,
    pub word: Word,
}

impl Tag {
    fn new(category: Category, number: Option<Number>, word: Word) -> Self {
        Self {
            category,
            number,
            word,
        }
    }
}

const FUNCTION_WORDS: [(&str, Category, Option<Number>); 10] = [
    ("who", Category::Who, None),
    ("which", Category::Which, None),
    ("does", Category::Do, Some(Number::Singular)),
    ("do", Category::Do, Some(Number::Plural)),
    ("is", Category::Be, Some(Number::Singular)),
    ("are", Category::Be, Some(Number::Plural)),
    ("a", Category::Ar, None),
    ("an", Category::Ar, None),
    ("and", Category::And, None),
    ("?", Category::Qm, None),
];

fn function_word(word: &str) -> Option<(Category, Option<Number>)> {
    let lower = word.to_lowercase();
    FUNCTION_WORDS
        .iter()
        .find(|(w, _, _)| *w == lower)
        .map(|(_, category, number)| (*category, *number))
}

/// Is `word` one of the fixed function words?
pub fn is_function_word(word: &str) -> bool {
    function_word(word).is_some()
}

/// Strip a third-person or plural `-s` ending
///
/// Returns `None` if the word does not end in a recognised suffix.
pub fn s_stem(word: &str) -> Option<String> {
    let w = word.to_lowercase();
    if w == "has" {
        return Some("have".to_string());
    }
    if w.ends_with("ss") {
        return None;
    }

    if let Some(base) = w.strip_suffix("ies") {
        // flies -> fly, but dies -> die
        if base.len() > 1 && !base.ends_with(is_vowel) {
            return Some(format!("{}y", base));
        }
    } else if let Some(base) = w.strip_suffix("es") {
        // boxes -> box, but likes -> like
        if ["x", "ch", "sh", "o", "ss", "zz"]
            .iter()
            .any(|ending| base.ends_with(ending))
        {
            return Some(base.to_string());
        }
    }

    w.strip_suffix('s')
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Every reading of `word` under `lexicon`
pub fn tag_word(word: &str, lexicon: &Lexicon) -> Vec<Tag> {
    if let Some((category, number)) = function_word(word) {
        return vec![Tag::new(category, number, Word::bare(word.to_lowercase()))];
    }

    let mut tags = Vec::new();
    let lower = word.to_lowercase();
    let stem = s_stem(word);
    let inflected = |category| {
        stem.as_deref()
            .filter(|stem| lexicon.contains(stem, category))
            .map(|stem| Word::new(stem, word))
    };

    if let Some(name) = lexicon.name(word) {
        tags.push(Tag::new(Category::P, Some(Number::Singular), Word::new(name, word)));
    }

    // nouns: stem is singular, -s form plural
    if lexicon.contains(&lower, Category::N) {
        tags.push(Tag::new(Category::N, Some(Number::Singular), Word::new(lower.as_str(), word)));
    }
    if let Some(w) = inflected(Category::N) {
        tags.push(Tag::new(Category::N, Some(Number::Plural), w));
    }

    if lexicon.contains(&lower, Category::A) {
        tags.push(Tag::new(Category::A, None, Word::new(lower.as_str(), word)));
    }

    // verbs: stem is plural, -s form third person singular
    for category in [Category::I, Category::T] {
        if lexicon.contains(&lower, category) {
            tags.push(Tag::new(category, Some(Number::Plural), Word::new(lower.as_str(), word)));
        }
        if let Some(w) = inflected(category) {
            tags.push(Tag::new(category, Some(Number::Singular), w));
        }
    }

    tags
}

/// Readings for each word of a sentence
pub fn tag_words(words: &[&str], lexicon: &Lexicon) -> Vec<Vec<Tag>> {
    words.iter().map(|w| tag_word(w, lexicon)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        let mut lx = Lexicon::new();
        for (w, c) in [
            ("John", Category::P),
            ("duck", Category::N),
            ("box", Category::N),
            ("blue", Category::A),
            ("fly", Category::I),
            ("like", Category::T),
            ("like", Category::I),
        ] {
            lx.add(w, c).unwrap();
        }
        lx
    }

    #[test]
    fn test_s_stem() {
        for (word, stem) in [
            ("ducks", "duck"),
            ("likes", "like"),
            ("flies", "fly"),
            ("dies", "die"),
            ("plays", "play"),
            ("boxes", "box"),
            ("watches", "watch"),
            ("wishes", "wish"),
            ("goes", "go"),
            ("buzzes", "buzz"),
            ("loses", "lose"),
            ("has", "have"),
        ] {
            assert_eq!(s_stem(word).as_deref(), Some(stem), "{word}");
        }
        for word in ["duck", "kiss", "s"] {
            assert_eq!(s_stem(word), None, "{word}");
        }
    }

    #[test]
    fn test_function_words() {
        let lx = lexicon();
        let tags = tag_word("Does", &lx);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].category, Category::Do);
        assert_eq!(tags[0].number, Some(Number::Singular));
        assert!(is_function_word("are"));
        assert!(!is_function_word("exit"));
    }

    #[test]
    fn test_noun_and_verb_number() {
        let lx = lexicon();

        let ducks = tag_word("ducks", &lx);
        assert_eq!(ducks.len(), 1);
        assert_eq!(ducks[0].category, Category::N);
        assert_eq!(ducks[0].number, Some(Number::Plural));
        assert_eq!(ducks[0].word, Word::new("duck", "ducks"));

        let flies = tag_word("flies", &lx);
        assert_eq!(flies[0].category, Category::I);
        assert_eq!(flies[0].number, Some(Number::Singular));
        assert_eq!(flies[0].word.symbol, "fly");

        let boxes = tag_word("boxes", &lx);
        assert_eq!(boxes[0].word.symbol, "box");
    }

    #[test]
    fn test_ambiguous_word_gets_every_reading() {
        let lx = lexicon();
        let categories: Vec<_> = tag_word("likes", &lx).iter().map(|t| t.category).collect();
        assert_eq!(categories, vec![Category::I, Category::T]);
    }

    #[test]
    fn test_names_use_stored_form() {
        let lx = lexicon();
        let tags = tag_word("JOHN", &lx);
        assert_eq!(tags[0].category, Category::P);
        assert_eq!(tags[0].word, Word::new("John", "JOHN"));
        assert!(tag_word("Bill", &lx).is_empty());
    }
}
