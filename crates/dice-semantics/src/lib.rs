//! # dice-semantics
//!
//! Rule-by-rule translation of syntax trees into logical forms.
//!
//! Every production has exactly one composition rule. Content words become
//! predicates over the variable `x`; transitive verbs take their object
//! first, as `\y.\x.pred(x,y)`. Results are built directly as [`Expr`]
//! values and are left unreduced; call [`Expr::simplify`] before checking.
//!
//! ```rust
//! use dice_grammar::{Np, Qp, Vp, Word, S};
//! use dice_semantics::compose;
//!
//! let tree = S::Who(Qp::Vp(Vp::Transitive(
//!     Word::new("love", "loves"),
//!     Np::Name(Word::bare("Mary")),
//! )));
//! let formula = compose(&tree).unwrap().simplify();
//! assert_eq!(formula.to_string(), "\\x.exists y.((y = Mary) & love(y,x))");
//! ```

pub mod rules;

pub use rules::{compose, Compose};

use dice_grammar::Category;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("no composition rule for {category} node `{rule}`")]
    UnhandledConstruction {
        category: Category,
        rule: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ComposeError>;
