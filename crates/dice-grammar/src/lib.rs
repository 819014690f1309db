//! # dice-grammar
//!
//! The language front end for DICE questions: a content-word lexicon, a
//! tagger that assigns categories and number to each word, and a parser
//! that returns every syntax tree of a question.
//!
//! ## Example
//!
//! ```rust
//! use dice_grammar::{parse_sentence, Category, Lexicon};
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add("Mary", Category::P).unwrap();
//! lexicon.add("love", Category::T).unwrap();
//!
//! let trees = parse_sentence(&["who", "loves", "Mary", "?"], &lexicon);
//! assert_eq!(trees.len(), 1);
//! assert_eq!(trees[0].to_string(), "(S WHO (QP (VP (T loves) (NP (P Mary)))) QM)");
//! ```

pub mod lexicon;
pub mod parser;
pub mod tagging;
pub mod tree;

pub use lexicon::Lexicon;
pub use parser::parse_sentence;
pub use tagging::{is_function_word, s_stem, tag_word, tag_words, Tag};
pub use tree::{An, Category, Node, Nom, Np, Number, Qp, Rel, Vp, Word, S};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("{0} is a function-word category and has no lexicon entries")]
    FunctionCategory(Category),
}

pub type Result<T> = std::result::Result<T, GrammarError>;
