//! Variable bindings built up during witness search

/// Stack of (variable, entity) pairs; lookups see the most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    frames: Vec<(String, String)>,
}

impl Bindings {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment holding a single binding
    pub fn with(variable: impl Into<String>, entity: impl Into<String>) -> Self {
        let mut bindings = Self::new();
        bindings.push(variable, entity);
        bindings
    }

    /// Bind `variable` to `entity`, shadowing any earlier binding
    pub fn push(&mut self, variable: impl Into<String>, entity: impl Into<String>) {
        self.frames.push((variable.into(), entity.into()));
    }

    /// Drop the most recent binding
    pub fn pop(&mut self) -> Option<(String, String)> {
        self.frames.pop()
    }

    /// Entity bound to `variable` by its innermost binding
    pub fn lookup(&self, variable: &str) -> Option<&str> {
        self.iter()
            .find(|(v, _)| *v == variable)
            .map(|(_, entity)| entity)
    }

    /// Bindings, most recent first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.frames
            .iter()
            .rev()
            .map(|(v, e)| (v.as_str(), e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_innermost_binding_wins() {
        let mut b = Bindings::with("x", "John");
        b.push("y", "Mary");
        b.push("x", "Fido");

        assert_eq!(b.lookup("x"), Some("Fido"));
        assert_eq!(b.lookup("y"), Some("Mary"));

        b.pop();
        assert_eq!(b.lookup("x"), Some("John"));
        assert_eq!(b.lookup("z"), None);
    }

    #[test]
    fn test_iter_is_most_recent_first() {
        let mut b = Bindings::new();
        b.push("x", "a");
        b.push("y", "b");
        let order: Vec<_> = b.iter().collect();
        assert_eq!(order, vec![("y", "b"), ("x", "a")]);
        assert_eq!(b.len(), 2);
    }
}
