//! Expression types for logical forms
//!
//! This module defines the AST shared by composition and model checking:
//! - Atomic terms: `Constant`, `Variable`
//! - Predication: `Application`, `Equality`
//! - Connectives and binders: `And`, `Exists`, `Lambda`

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A lambda-calculus formula over individuals and predicate symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// Named individual or predicate symbol
    Constant(String),

    /// Variable reference
    Variable(String),

    /// Function applied to an ordered, non-empty argument list: f(a) or f(a,b)
    Application {
        function: Box<Expr>,
        args: Vec<Expr>,
    },

    /// Term identity (a = b)
    Equality(Box<Expr>, Box<Expr>),

    /// Conjunction (φ ∧ ψ)
    And(Box<Expr>, Box<Expr>),

    /// Existential quantification (∃v. φ)
    Exists(String, Box<Expr>),

    /// One-parameter abstraction (λv. φ)
    Lambda(String, Box<Expr>),
}

impl Expr {
    /// Create a constant
    pub fn constant(name: impl Into<String>) -> Self {
        Self::Constant(name.into())
    }

    /// Create a variable reference
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Apply `function` to `args`
    ///
    /// An empty argument list is not an application; the function is
    /// returned unchanged.
    pub fn apply(function: Expr, args: Vec<Expr>) -> Self {
        if args.is_empty() {
            return function;
        }
        Self::Application {
            function: Box::new(function),
            args,
        }
    }

    /// Apply `function` to a single argument
    pub fn apply_to(function: Expr, arg: Expr) -> Self {
        Self::apply(function, vec![arg])
    }

    /// Equality
    pub fn equality(left: Expr, right: Expr) -> Self {
        Self::Equality(Box::new(left), Box::new(right))
    }

    /// Conjunction
    pub fn and(left: Expr, right: Expr) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Existential quantifier
    pub fn exists(variable: impl Into<String>, body: Expr) -> Self {
        Self::Exists(variable.into(), Box::new(body))
    }

    /// Lambda abstraction
    pub fn lambda(parameter: impl Into<String>, body: Expr) -> Self {
        Self::Lambda(parameter.into(), Box::new(body))
    }

    /// `λx. pred(x)`
    pub fn unary_predicate(predicate: impl Into<String>, parameter: &str) -> Self {
        Self::lambda(
            parameter,
            Self::apply_to(Self::constant(predicate), Self::variable(parameter)),
        )
    }

    /// Name of an atomic term
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Constant(name) | Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Split an application into its head symbol and its arguments
    ///
    /// Curried spines are walked to the bottom, so `f(a)(b)` and `f(a,b)`
    /// both give `("f", [a, b])`. Returns `None` for non-applications and
    /// for applications headed by anything but a constant.
    pub fn uncurry(&self) -> Option<(&str, Vec<&Expr>)> {
        match self {
            Self::Application { function, args } => {
                let (head, mut collected) = match function.as_ref() {
                    Self::Constant(name) => (name.as_str(), Vec::new()),
                    inner @ Self::Application { .. } => inner.uncurry()?,
                    _ => return None,
                };
                collected.extend(args.iter());
                Some((head, collected))
            }
            _ => None,
        }
    }

    /// Head predicate symbol of an application
    pub fn predicate(&self) -> Option<&str> {
        self.uncurry().map(|(head, _)| head)
    }

    /// Variables occurring free in this expression
    pub fn free_variables(&self) -> BTreeSet<String> {
        let mut free = BTreeSet::new();
        self.collect_free(&mut Vec::new(), &mut free);
        free
    }

    fn collect_free<'a>(&'a self, bound: &mut Vec<&'a str>, free: &mut BTreeSet<String>) {
        match self {
            Self::Constant(_) => {}
            Self::Variable(name) => {
                if !bound.contains(&name.as_str()) {
                    free.insert(name.clone());
                }
            }
            Self::Application { function, args } => {
                function.collect_free(bound, free);
                for arg in args {
                    arg.collect_free(bound, free);
                }
            }
            Self::Equality(l, r) | Self::And(l, r) => {
                l.collect_free(bound, free);
                r.collect_free(bound, free);
            }
            Self::Exists(v, body) | Self::Lambda(v, body) => {
                bound.push(v);
                body.collect_free(bound, free);
                bound.pop();
            }
        }
    }

    /// Check if the expression has no free variables
    pub fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    fn is_binder(&self) -> bool {
        matches!(self, Self::Exists(_, _) | Self::Lambda(_, _))
    }
}

/// Binders extend as far right as possible, so they are parenthesised
/// wherever something could follow them.
struct Operand<'a>(&'a Expr);

impl std::fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_binder() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Print in lambda notation: `\x.exists y.((y = Mary) & love(y,x))`
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(name) | Self::Variable(name) => write!(f, "{}", name),
            Self::Application { function, args } => {
                match function.as_ref() {
                    head @ (Self::Constant(_) | Self::Variable(_) | Self::Application { .. }) => {
                        write!(f, "{}", head)?
                    }
                    other => write!(f, "({})", other)?,
                }
                write!(f, "(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Self::Equality(l, r) => write!(f, "({} = {})", Operand(l), Operand(r)),
            Self::And(l, r) => write!(f, "({} & {})", Operand(l), Operand(r)),
            Self::Exists(v, body) => write!(f, "exists {}.{}", v, body),
            Self::Lambda(v, body) => write!(f, "\\{}.{}", v, body),
        }
    }
}
