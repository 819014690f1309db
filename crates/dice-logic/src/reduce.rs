//! Beta-reduction and capture-avoiding substitution
//!
//! Composition builds formulas out of applied lambdas; `simplify` brings them
//! to normal form before model checking. Substitution renames a binder
//! whenever it would capture a free variable of the substituted term, so the
//! fixed `x`/`y` names used by composition never collide.

use std::collections::BTreeSet;

use crate::expr::Expr;

impl Expr {
    /// Reduce to beta-normal form, flattening curried applications
    pub fn simplify(&self) -> Expr {
        match self {
            Self::Constant(_) | Self::Variable(_) => self.clone(),
            Self::Application { function, args } => {
                let function = function.simplify();
                let args = args.iter().map(Expr::simplify).collect();
                reduce_application(function, args)
            }
            Self::Equality(l, r) => Expr::equality(l.simplify(), r.simplify()),
            Self::And(l, r) => Expr::and(l.simplify(), r.simplify()),
            Self::Exists(v, body) => Expr::exists(v.clone(), body.simplify()),
            Self::Lambda(v, body) => Expr::lambda(v.clone(), body.simplify()),
        }
    }

    /// Replace free occurrences of `var` by `value`
    pub fn substitute(&self, var: &str, value: &Expr) -> Expr {
        match self {
            Self::Variable(name) if name == var => value.clone(),
            Self::Constant(_) | Self::Variable(_) => self.clone(),
            Self::Application { function, args } => Self::Application {
                function: Box::new(function.substitute(var, value)),
                args: args.iter().map(|a| a.substitute(var, value)).collect(),
            },
            Self::Equality(l, r) => {
                Expr::equality(l.substitute(var, value), r.substitute(var, value))
            }
            Self::And(l, r) => Expr::and(l.substitute(var, value), r.substitute(var, value)),
            Self::Exists(bound, body) => {
                let (bound, body) = substitute_under_binder(bound, body, var, value);
                Expr::exists(bound, body)
            }
            Self::Lambda(bound, body) => {
                let (bound, body) = substitute_under_binder(bound, body, var, value);
                Expr::lambda(bound, body)
            }
        }
    }
}

/// Apply an already-normalised function to normalised arguments
fn reduce_application(function: Expr, args: Vec<Expr>) -> Expr {
    let mut function = function;
    let mut pending = args.into_iter();

    loop {
        match function {
            Expr::Lambda(param, body) => match pending.next() {
                Some(arg) => function = body.substitute(&param, &arg).simplify(),
                None => return Expr::Lambda(param, body),
            },
            Expr::Application { function: head, mut args } => {
                args.extend(pending);
                return Expr::Application { function: head, args };
            }
            other => return Expr::apply(other, pending.collect()),
        }
    }
}

fn substitute_under_binder(bound: &str, body: &Expr, var: &str, value: &Expr) -> (String, Expr) {
    if bound == var {
        return (bound.to_string(), body.clone());
    }

    let value_free = value.free_variables();
    let body_free = body.free_variables();
    if value_free.contains(bound) && body_free.contains(var) {
        let mut avoid = value_free;
        avoid.extend(body_free);
        avoid.insert(var.to_string());
        let fresh = fresh_name(bound, &avoid);
        let renamed = body.substitute(bound, &Expr::variable(fresh.as_str()));
        let substituted = renamed.substitute(var, value);
        (fresh, substituted)
    } else {
        (bound.to_string(), body.substitute(var, value))
    }
}

/// `y` → `y1`, `y2`, ... skipping anything in `avoid`
fn fresh_name(base: &str, avoid: &BTreeSet<String>) -> String {
    let stem = base.trim_end_matches(|c: char| c.is_ascii_digit());
    let stem = if stem.is_empty() { "v" } else { stem };
    (1..)
        .map(|n| format!("{}{}", stem, n))
        .find(|candidate| !avoid.contains(candidate))
        .unwrap_or_else(|| format!("{}_", stem))
}
