//! # dice-check
//!
//! Finite-model checking for DICE logical forms.
//!
//! A formula is evaluated against a finite list of entities and a
//! [`RelationStore`] that answers ground queries. Existentials are decided by
//! witness search in entity order, stopping at the first witness; open
//! formulas are answered by trying every entity.
//!
//! ## Architecture
//!
//! ```text
//! Expr ──► evaluate ──► resolve terms ──► RelationStore query
//!   │         └─► Exists: bind v to each entity until the body holds
//!   └─► find_all_solutions: bind v to every entity, collect successes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dice_check::{FactBase, ModelChecker};
//! use dice_logic::parse;
//!
//! let entities = vec!["John".to_string(), "Mary".to_string()];
//! let facts = FactBase::new().with_binary("love", "Mary", "John");
//! let checker = ModelChecker::new(&entities, &facts);
//!
//! let who_loves_mary = parse("\\x.exists y.((y = Mary) & love(y,x))").unwrap();
//! assert_eq!(checker.find_all_solutions(&who_loves_mary).unwrap(), vec!["John"]);
//! ```

pub mod bindings;
pub mod store;

pub use bindings::Bindings;
pub use store::{FactBase, RelationStore};

use dice_logic::Expr;
use thiserror::Error;

/// Errors that abort a model-checking query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("free variable `{0}` has no enclosing quantifier")]
    FreeVariable(String),

    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;

/// Evaluates formulas over a fixed domain and relation store
pub struct ModelChecker<'a, S: RelationStore + ?Sized> {
    entities: &'a [String],
    store: &'a S,
}

impl<'a, S: RelationStore + ?Sized> ModelChecker<'a, S> {
    /// Create a checker over `entities`, consulting `store`
    pub fn new(entities: &'a [String], store: &'a S) -> Self {
        Self { entities, store }
    }

    /// Decide `expr` under `bindings`
    pub fn evaluate(&self, expr: &Expr, bindings: &mut Bindings) -> Result<bool> {
        match expr {
            Expr::Application { .. } => self.evaluate_atom(expr, bindings),
            Expr::Equality(l, r) => {
                let left = self.resolve_term(l, bindings)?;
                let right = self.resolve_term(r, bindings)?;
                Ok(left == right)
            }
            Expr::And(l, r) => {
                let left = self.evaluate(l, bindings)?;
                let right = self.evaluate(r, bindings)?;
                Ok(left && right)
            }
            Expr::Exists(v, body) => {
                for entity in self.entities {
                    bindings.push(v.as_str(), entity.as_str());
                    let holds = self.evaluate(body, bindings);
                    bindings.pop();
                    if holds? {
                        tracing::trace!(variable = %v, witness = %entity, "found witness");
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Expr::Lambda(_, _) => Err(CheckError::MalformedExpression(format!(
                "unreduced abstraction `{}` in formula position",
                expr
            ))),
            Expr::Constant(_) | Expr::Variable(_) => Err(CheckError::MalformedExpression(
                format!("term `{}` in formula position", expr),
            )),
        }
    }

    fn evaluate_atom(&self, expr: &Expr, bindings: &Bindings) -> Result<bool> {
        let (predicate, args) = expr.uncurry().ok_or_else(|| {
            CheckError::MalformedExpression(format!("`{}` is not headed by a predicate", expr))
        })?;

        match args.as_slice() {
            [arg] => {
                let entity = self.resolve_term(arg, bindings)?;
                Ok(self.store.query_unary(predicate, entity))
            }
            [first, second] => {
                let first = self.resolve_term(first, bindings)?;
                let second = self.resolve_term(second, bindings)?;
                Ok(self.store.query_binary(predicate, first, second))
            }
            _ => Err(CheckError::MalformedExpression(format!(
                "`{}` applies `{}` to {} arguments",
                expr,
                predicate,
                args.len()
            ))),
        }
    }

    fn resolve_term<'b>(&'b self, term: &Expr, bindings: &'b Bindings) -> Result<&'b str> {
        let name = term.name().ok_or_else(|| {
            CheckError::MalformedExpression(format!("`{}` in argument position", term))
        })?;
        self.resolve(name, bindings)
    }

    /// Interpret `name` as a constant or as a bound variable
    ///
    /// Members of the domain denote themselves and never consult the
    /// bindings. Anything else must be bound.
    pub fn resolve<'b>(&'b self, name: &str, bindings: &'b Bindings) -> Result<&'b str> {
        if let Some(entity) = self.entities.iter().find(|e| *e == name) {
            return Ok(entity);
        }
        bindings
            .lookup(name)
            .ok_or_else(|| CheckError::FreeVariable(name.to_string()))
    }

    /// Every entity satisfying an open formula, in domain order
    ///
    /// `expr` must abstract exactly one variable, as `\v.body` or
    /// `exists v.body`. Unlike `Exists`, every entity is tried.
    pub fn find_all_solutions(&self, expr: &Expr) -> Result<Vec<String>> {
        let (variable, body) = match expr {
            Expr::Lambda(v, body) | Expr::Exists(v, body) => (v, body),
            other => {
                return Err(CheckError::MalformedExpression(format!(
                    "`{}` has no variable to solve for",
                    other
                )))
            }
        };

        let mut solutions = Vec::new();
        for entity in self.entities {
            let mut bindings = Bindings::with(variable.as_str(), entity.as_str());
            if self.evaluate(body, &mut bindings)? {
                solutions.push(entity.clone());
            }
        }

        tracing::debug!(
            formula = %expr,
            candidates = self.entities.len(),
            solutions = solutions.len(),
            "solved open formula"
        );
        Ok(solutions)
    }
}

/// Decide `expr` under `bindings` over `entities`
pub fn evaluate<S: RelationStore + ?Sized>(
    expr: &Expr,
    bindings: &mut Bindings,
    entities: &[String],
    store: &S,
) -> Result<bool> {
    ModelChecker::new(entities, store).evaluate(expr, bindings)
}

/// Every entity satisfying the open formula `expr`
pub fn find_all_solutions<S: RelationStore + ?Sized>(
    expr: &Expr,
    entities: &[String],
    store: &S,
) -> Result<Vec<String>> {
    ModelChecker::new(entities, store).find_all_solutions(expr)
}
