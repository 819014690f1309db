//! Turn handling: questions, statements and exit.

use std::fmt;

use dice_check::FactBase;
use dice_grammar::{parse_sentence, Category, Lexicon};
use dice_logic::Expr;
use dice_semantics::compose;

use crate::config::SessionConfig;
use crate::statements::{process_statement, Rejection};
use crate::Result;

/// What the user is told at the end of a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The question is not in the grammar
    NoParse,
    /// The question has more than one parse
    Ambiguous,
    /// Entities satisfying the question, in domain order
    Answer { who: bool, entities: Vec<String> },
    /// The statement was recorded
    Accepted,
    Rejected(Rejection),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParse => f.write_str("Eh??"),
            Self::Ambiguous => f.write_str("Ambiguous!"),
            Self::Answer { who, entities } if entities.is_empty() => {
                f.write_str(if *who { "No one" } else { "None" })
            }
            Self::Answer { entities, .. } => f.write_str(&entities.join(" ")),
            Self::Accepted => f.write_str("OK."),
            Self::Rejected(reason) => write!(f, "Sorry - {}", reason),
        }
    }
}

/// Outcome of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Blank input; prompt again
    Skip,
    /// `exit`; end the session
    Exit,
    Respond(Response),
}

/// Logical forms behind the last answered question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub composed: Expr,
    pub simplified: Expr,
}

/// Dialogue state: what has been said so far
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
    lexicon: Lexicon,
    facts: FactBase,
    last_interpretation: Option<Interpretation>,
}

impl Session {
    /// Start a session, asserting the configured preload statements
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            config,
            ..Self::default()
        };
        for statement in session.config.preload.clone() {
            if let Response::Rejected(reason) = session.tell(&statement) {
                tracing::warn!(%statement, %reason, "preload statement skipped");
            }
        }
        tracing::info!(
            entities = session.entities().len(),
            facts = session.facts.len(),
            "session started"
        );
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn facts(&self) -> &FactBase {
        &self.facts
    }

    /// The quantification domain: every known proper name
    pub fn entities(&self) -> &[String] {
        self.lexicon.all(Category::P)
    }

    pub fn last_interpretation(&self) -> Option<&Interpretation> {
        self.last_interpretation.as_ref()
    }

    /// Handle one line of input
    ///
    /// Errors are defects in answering a question. They abort this turn
    /// only; the session stays usable.
    pub fn handle(&mut self, line: &str) -> Result<Turn> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(Turn::Skip);
        }
        if input == "exit" {
            return Ok(Turn::Exit);
        }

        let response = match input.strip_suffix('?') {
            Some(question) => self.ask(question)?,
            None => self.tell(input),
        };
        Ok(Turn::Respond(response))
    }

    /// Answer a question, given without its final `?`
    pub fn ask(&mut self, question: &str) -> Result<Response> {
        self.last_interpretation = None;
        let sentence = format!("{} ?", question);
        let words: Vec<&str> = sentence.split_whitespace().collect();

        let mut trees = parse_sentence(&words, &self.lexicon);
        if trees.len() > 1 {
            return Ok(Response::Ambiguous);
        }
        let Some(tree) = trees.pop() else {
            return Ok(Response::NoParse);
        };

        let composed = compose(&tree)?;
        let simplified = composed.simplify();
        tracing::debug!(formula = %simplified, "simplified");

        let entities =
            dice_check::find_all_solutions(&simplified, self.entities(), &self.facts)?;
        tracing::debug!(answers = ?entities, "model checked");

        self.last_interpretation = Some(Interpretation {
            composed,
            simplified,
        });
        let who = words
            .first()
            .is_some_and(|w| w.eq_ignore_ascii_case("who"));
        Ok(Response::Answer { who, entities })
    }

    /// Record a statement, with or without its final `.`
    pub fn tell(&mut self, statement: &str) -> Response {
        let statement = statement.trim();
        let statement = statement.strip_suffix('.').unwrap_or(statement);
        let words: Vec<&str> = statement.split_whitespace().collect();

        match process_statement(&words, &mut self.lexicon, &mut self.facts) {
            Ok(()) => Response::Accepted,
            Err(reason) => Response::Rejected(reason),
        }
    }

    /// Solve a formula written in lambda notation against the current model
    pub fn solve(&self, formula: &str) -> Result<Vec<String>> {
        let formula = dice_logic::parse(formula)?.simplify();
        Ok(dice_check::find_all_solutions(
            &formula,
            self.entities(),
            &self.facts,
        )?)
    }
}
