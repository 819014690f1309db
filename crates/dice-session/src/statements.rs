//! Declarative statements that extend the lexicon and fact base.

use dice_check::FactBase;
use dice_grammar::{is_function_word, s_stem, Category, GrammarError, Lexicon};
use dice_logic::is_variable_name;
use thiserror::Error;

/// Why a statement was not accepted; displays as the user-facing reason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Unrecognised statement")]
    Unrecognised,

    #[error("\"{0}\" is a function word, not a name")]
    FunctionWord(String),

    #[error("\"{0}\" reads as a variable, not a name")]
    VariableName(String),

    #[error("Verb must be in third person singular form")]
    NotThirdPersonSingular,

    #[error(transparent)]
    Lexicon(#[from] GrammarError),
}

/// A recognised statement, before anything is recorded
#[derive(Debug, Clone, PartialEq, Eq)]
enum Assertion<'a> {
    /// `Name is Adj`, `Name is a Noun`, `Name Verbs`
    Property {
        subject: &'a str,
        category: Category,
        predicate: String,
    },
    /// `Name Verbs Name`
    Relation {
        subject: &'a str,
        predicate: String,
        object: &'a str,
    },
}

/// Record the statement in `words`, or say why it was rejected
///
/// Nothing is recorded unless the whole statement is accepted.
pub fn process_statement(
    words: &[&str],
    lexicon: &mut Lexicon,
    facts: &mut FactBase,
) -> Result<(), Rejection> {
    let outcome = classify(words).and_then(|assertion| record(assertion, lexicon, facts));
    if let Err(reason) = &outcome {
        tracing::warn!(statement = %words.join(" "), %reason, "statement rejected");
    }
    outcome
}

fn classify<'a>(words: &[&'a str]) -> Result<Assertion<'a>, Rejection> {
    let is = |word: &str| word.eq_ignore_ascii_case("is");
    let article = |word: &str| word.eq_ignore_ascii_case("a") || word.eq_ignore_ascii_case("an");

    match *words {
        [subject, be, det, noun] if is(be) && article(det) => Ok(Assertion::Property {
            subject: name(subject)?,
            category: Category::N,
            predicate: content(noun)?,
        }),
        [subject, be, adjective] if is(be) => Ok(Assertion::Property {
            subject: name(subject)?,
            category: Category::A,
            predicate: content(adjective)?,
        }),
        [subject, verb] => Ok(Assertion::Property {
            subject: name(subject)?,
            category: Category::I,
            predicate: third_person(verb)?,
        }),
        [subject, verb, object] => Ok(Assertion::Relation {
            subject: name(subject)?,
            predicate: third_person(verb)?,
            object: name(object)?,
        }),
        _ => Err(Rejection::Unrecognised),
    }
}

fn name(word: &str) -> Result<&str, Rejection> {
    if is_function_word(word) {
        return Err(Rejection::FunctionWord(word.to_string()));
    }
    if is_variable_name(word) {
        return Err(Rejection::VariableName(word.to_string()));
    }
    Ok(word)
}

fn content(word: &str) -> Result<String, Rejection> {
    if is_function_word(word) {
        return Err(Rejection::Unrecognised);
    }
    Ok(word.to_lowercase())
}

fn third_person(verb: &str) -> Result<String, Rejection> {
    content(verb)?;
    s_stem(verb).ok_or(Rejection::NotThirdPersonSingular)
}

/// Add `word` as a proper name and return its stored form
fn entity(word: &str, lexicon: &mut Lexicon) -> Result<String, Rejection> {
    lexicon.add(word, Category::P)?;
    Ok(lexicon.name(word).unwrap_or(word).to_string())
}

fn record(
    assertion: Assertion<'_>,
    lexicon: &mut Lexicon,
    facts: &mut FactBase,
) -> Result<(), Rejection> {
    match assertion {
        Assertion::Property {
            subject,
            category,
            predicate,
        } => {
            let subject = entity(subject, lexicon)?;
            lexicon.add(&predicate, category)?;
            let new = facts.add_unary(&predicate, &subject);
            tracing::debug!(fact = %format!("{}({})", predicate, subject), new, "asserted");
        }
        Assertion::Relation {
            subject,
            predicate,
            object,
        } => {
            let subject = entity(subject, lexicon)?;
            let object = entity(object, lexicon)?;
            lexicon.add(&predicate, Category::T)?;
            // object first, matching `\y.\x.pred(x,y)`
            let new = facts.add_binary(&predicate, &object, &subject);
            tracing::debug!(
                fact = %format!("{}({},{})", predicate, object, subject),
                new,
                "asserted"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_check::RelationStore;

    fn tell(sentence: &str, lexicon: &mut Lexicon, facts: &mut FactBase) -> Result<(), Rejection> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        process_statement(&words, lexicon, facts)
    }

    #[test]
    fn test_each_statement_form() {
        let mut lx = Lexicon::new();
        let mut fb = FactBase::new();

        tell("John is a duck", &mut lx, &mut fb).unwrap();
        tell("John is brown", &mut lx, &mut fb).unwrap();
        tell("Mary swims", &mut lx, &mut fb).unwrap();
        tell("John likes Mary", &mut lx, &mut fb).unwrap();

        assert!(fb.query_unary("duck", "John"));
        assert!(fb.query_unary("brown", "John"));
        assert!(fb.query_unary("swim", "Mary"));
        assert!(fb.query_binary("like", "Mary", "John"));

        assert_eq!(lx.all(Category::P), ["John", "Mary"]);
        assert_eq!(lx.all(Category::N), ["duck"]);
        assert_eq!(lx.all(Category::A), ["brown"]);
        assert_eq!(lx.all(Category::I), ["swim"]);
        assert_eq!(lx.all(Category::T), ["like"]);
    }

    #[test]
    fn test_names_keep_first_spelling() {
        let mut lx = Lexicon::new();
        let mut fb = FactBase::new();

        tell("Mary is an owl", &mut lx, &mut fb).unwrap();
        tell("MARY flies", &mut lx, &mut fb).unwrap();

        assert_eq!(lx.all(Category::P), ["Mary"]);
        assert!(fb.query_unary("fly", "Mary"));
    }

    #[test]
    fn test_rejections() {
        let mut lx = Lexicon::new();
        let mut fb = FactBase::new();

        assert_eq!(
            tell("John fly", &mut lx, &mut fb),
            Err(Rejection::NotThirdPersonSingular)
        );
        assert_eq!(
            tell("who likes Mary", &mut lx, &mut fb),
            Err(Rejection::FunctionWord("who".to_string()))
        );
        assert_eq!(
            tell("John likes a", &mut lx, &mut fb),
            Err(Rejection::FunctionWord("a".to_string()))
        );
        assert_eq!(tell("John", &mut lx, &mut fb), Err(Rejection::Unrecognised));
        assert_eq!(
            tell("John is a big duck", &mut lx, &mut fb),
            Err(Rejection::Unrecognised)
        );

        assert!(fb.is_empty());
        assert!(lx.is_empty());
    }

    #[test]
    fn test_variable_spellings_are_not_names() {
        let mut lx = Lexicon::new();
        let mut fb = FactBase::new();

        assert_eq!(
            tell("x is a duck", &mut lx, &mut fb),
            Err(Rejection::VariableName("x".to_string()))
        );
        assert_eq!(
            tell("y loves Mary", &mut lx, &mut fb),
            Err(Rejection::VariableName("y".to_string()))
        );
        assert_eq!(
            tell("John likes y1", &mut lx, &mut fb),
            Err(Rejection::VariableName("y1".to_string()))
        );
        assert!(fb.is_empty());
        assert!(lx.is_empty());

        tell("X is a duck", &mut lx, &mut fb).unwrap();
        tell("xy swims", &mut lx, &mut fb).unwrap();
        assert_eq!(lx.all(Category::P), ["X", "xy"]);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::Unrecognised.to_string(), "Unrecognised statement");
        assert_eq!(
            Rejection::FunctionWord("and".to_string()).to_string(),
            "\"and\" is a function word, not a name"
        );
        assert_eq!(
            Rejection::VariableName("x".to_string()).to_string(),
            "\"x\" reads as a variable, not a name"
        );
        assert_eq!(
            Rejection::NotThirdPersonSingular.to_string(),
            "Verb must be in third person singular form"
        );
    }
}
