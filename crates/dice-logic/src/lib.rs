//! # dice-logic
//!
//! Logical forms for the DICE question answerer.
//!
//! Sentences are translated into a small lambda calculus: predicate
//! application, equality, conjunction, existential quantification and
//! one-parameter abstraction. This crate owns the expression type, its
//! printed notation, a reader for that notation, and beta-reduction.
//!
//! ## Example
//!
//! ```rust
//! use dice_logic::*;
//!
//! // (\x.duck(x))(John)  ==>  duck(John)
//! let redex = Expr::apply_to(Expr::unary_predicate("duck", "x"), Expr::constant("John"));
//! assert_eq!(redex.simplify().to_string(), "duck(John)");
//!
//! let parsed = parse("\\x.exists y.((y = Mary) & love(y,x))").unwrap();
//! assert_eq!(parsed.free_variables().len(), 0);
//! ```

pub mod expr;
pub mod parse;
pub mod reduce;

pub use expr::*;
pub use parse::{is_variable_name, parse};

use thiserror::Error;

/// Errors raised while reading lambda notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error("syntax error at {position}: {message}")]
    Syntax { position: usize, message: String },
}

pub type Result<T> = std::result::Result<T, LogicError>;
