//! Relation stores consulted by the model checker

use std::collections::HashSet;

/// Ground-fact oracle for unary and binary relations
pub trait RelationStore {
    /// Does `predicate(entity)` hold?
    fn query_unary(&self, predicate: &str, entity: &str) -> bool;

    /// Does `predicate(first, second)` hold?
    fn query_binary(&self, predicate: &str, first: &str, second: &str) -> bool;
}

impl<S: RelationStore + ?Sized> RelationStore for &S {
    fn query_unary(&self, predicate: &str, entity: &str) -> bool {
        (**self).query_unary(predicate, entity)
    }

    fn query_binary(&self, predicate: &str, first: &str, second: &str) -> bool {
        (**self).query_binary(predicate, first, second)
    }
}

/// Asserted unary and binary facts
///
/// Binary facts about transitive verbs are stored object first:
/// "John likes Mary" is `like(Mary, John)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactBase {
    unary: HashSet<(String, String)>,
    binary: HashSet<(String, String, String)>,
}

impl FactBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert `predicate(entity)`; returns false if already known
    pub fn add_unary(&mut self, predicate: &str, entity: &str) -> bool {
        self.unary
            .insert((predicate.to_string(), entity.to_string()))
    }

    /// Assert `predicate(first, second)`; returns false if already known
    pub fn add_binary(&mut self, predicate: &str, first: &str, second: &str) -> bool {
        self.binary.insert((
            predicate.to_string(),
            first.to_string(),
            second.to_string(),
        ))
    }

    /// Builder form of [`FactBase::add_unary`]
    pub fn with_unary(mut self, predicate: &str, entity: &str) -> Self {
        self.add_unary(predicate, entity);
        self
    }

    /// Builder form of [`FactBase::add_binary`]
    pub fn with_binary(mut self, predicate: &str, first: &str, second: &str) -> Self {
        self.add_binary(predicate, first, second);
        self
    }

    /// Total number of facts
    pub fn len(&self) -> usize {
        self.unary.len() + self.binary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unary.is_empty() && self.binary.is_empty()
    }
}

impl RelationStore for FactBase {
    fn query_unary(&self, predicate: &str, entity: &str) -> bool {
        self.unary
            .contains(&(predicate.to_string(), entity.to_string()))
    }

    fn query_binary(&self, predicate: &str, first: &str, second: &str) -> bool {
        self.binary.contains(&(
            predicate.to_string(),
            first.to_string(),
            second.to_string(),
        ))
    }
}
