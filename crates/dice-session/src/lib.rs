//! DICE session - the dialogue controller.
//!
//! This crate ties the front end to the logic: each question is parsed,
//! checked for ambiguity, composed into a logical form, simplified and
//! model-checked against what the session has been told. Statements extend
//! the lexicon and fact base.

pub mod config;
pub mod dialogue;
pub mod repl;
pub mod statements;

pub use config::SessionConfig;
pub use dialogue::{Interpretation, Response, Session, Turn};
pub use repl::converse;
pub use statements::{process_statement, Rejection};

use thiserror::Error;

/// Defects that abort a single turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Logic(#[from] dice_logic::LogicError),

    #[error(transparent)]
    Compose(#[from] dice_semantics::ComposeError),

    #[error(transparent)]
    Check(#[from] dice_check::CheckError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
