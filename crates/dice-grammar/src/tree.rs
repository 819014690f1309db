//! Syntax trees
//!
//! Each phrase category is its own enum and each variant is one production,
//! carrying exactly the children that production has. Function words are
//! implied by the variant and are not stored.

use std::fmt;

/// Grammatical number used for agreement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

/// Grammar categories: phrases, content words and function words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    S,
    Qp,
    Vp,
    Np,
    Nom,
    An,
    Rel,
    /// Proper name
    P,
    /// Common noun
    N,
    /// Adjective
    A,
    /// Intransitive verb
    I,
    /// Transitive verb
    T,
    Who,
    Which,
    Do,
    Be,
    Ar,
    And,
    Qm,
}

impl Category {
    /// Categories the lexicon stores
    pub const CONTENT: [Category; 5] = [
        Category::P,
        Category::N,
        Category::A,
        Category::I,
        Category::T,
    ];

    pub fn is_content(self) -> bool {
        Self::CONTENT.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::Qp => "QP",
            Self::Vp => "VP",
            Self::Np => "NP",
            Self::Nom => "Nom",
            Self::An => "AN",
            Self::Rel => "Rel",
            Self::P => "P",
            Self::N => "N",
            Self::A => "A",
            Self::I => "I",
            Self::T => "T",
            Self::Who => "WHO",
            Self::Which => "WHICH",
            Self::Do => "DO",
            Self::Be => "BE",
            Self::Ar => "AR",
            Self::And => "AND",
            Self::Qm => "QM",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content word at a leaf
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    /// Predicate symbol, or the lexicon's stored form of a proper name
    pub symbol: String,
    /// The word as it appeared in the input
    pub surface: String,
}

impl Word {
    pub fn new(symbol: impl Into<String>, surface: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            surface: surface.into(),
        }
    }

    /// A word whose surface form is its symbol
    pub fn bare(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            surface: symbol.clone(),
            symbol,
        }
    }
}

/// Category and production of a tree node, for diagnostics
pub trait Node {
    fn category(&self) -> Category;
    fn rule(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum S {
    /// S -> WHO QP QM
    Who(Qp),
    /// S -> WHICH Nom QP QM
    Which(Nom, Qp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qp {
    /// QP -> VP
    Vp(Vp),
    /// QP -> DO NP T
    Do(Np, Word),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vp {
    /// VP -> I
    Intransitive(Word),
    /// VP -> T NP
    Transitive(Word, Np),
    /// VP -> BE A
    BeAdjective(Word),
    /// VP -> BE NP
    BeNp(Np),
    /// VP -> VP AND VP
    Coordination(Box<Vp>, Box<Vp>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Np {
    /// NP -> P
    Name(Word),
    /// NP -> AR Nom
    Article(Nom),
    /// NP -> Nom
    Bare(Nom),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nom {
    /// Nom -> AN
    Head(An),
    /// Nom -> AN Rel
    Relative(An, Box<Rel>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum An {
    /// AN -> N
    Noun(Word),
    /// AN -> A AN
    Adjective(Word, Box<An>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rel {
    /// Rel -> WHO VP
    Subject(Vp),
    /// Rel -> NP T
    Object(Np, Word),
}

impl Node for S {
    fn category(&self) -> Category {
        Category::S
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::Who(_) => "S -> WHO QP QM",
            Self::Which(_, _) => "S -> WHICH Nom QP QM",
        }
    }
}

impl Node for Qp {
    fn category(&self) -> Category {
        Category::Qp
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::Vp(_) => "QP -> VP",
            Self::Do(_, _) => "QP -> DO NP T",
        }
    }
}

impl Node for Vp {
    fn category(&self) -> Category {
        Category::Vp
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::Intransitive(_) => "VP -> I",
            Self::Transitive(_, _) => "VP -> T NP",
            Self::BeAdjective(_) => "VP -> BE A",
            Self::BeNp(_) => "VP -> BE NP",
            Self::Coordination(_, _) => "VP -> VP AND VP",
        }
    }
}

impl Node for Np {
    fn category(&self) -> Category {
        Category::Np
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::Name(_) => "NP -> P",
            Self::Article(_) => "NP -> AR Nom",
            Self::Bare(_) => "NP -> Nom",
        }
    }
}

impl Node for Nom {
    fn category(&self) -> Category {
        Category::Nom
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::Head(_) => "Nom -> AN",
            Self::Relative(_, _) => "Nom -> AN Rel",
        }
    }
}

impl Node for An {
    fn category(&self) -> Category {
        Category::An
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::Noun(_) => "AN -> N",
            Self::Adjective(_, _) => "AN -> A AN",
        }
    }
}

impl Node for Rel {
    fn category(&self) -> Category {
        Category::Rel
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::Subject(_) => "Rel -> WHO VP",
            Self::Object(_, _) => "Rel -> NP T",
        }
    }
}

// Bracketed rendering: (S WHO (QP (VP (T loves) (NP (P Mary)))) QM)

struct Leaf<'a>(Category, &'a Word);

impl fmt::Display for Leaf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.0, self.1.surface)
    }
}

impl fmt::Display for S {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Who(qp) => write!(f, "(S WHO {} QM)", qp),
            Self::Which(nom, qp) => write!(f, "(S WHICH {} {} QM)", nom, qp),
        }
    }
}

impl fmt::Display for Qp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vp(vp) => write!(f, "(QP {})", vp),
            Self::Do(np, t) => write!(f, "(QP DO {} {})", np, Leaf(Category::T, t)),
        }
    }
}

impl fmt::Display for Vp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intransitive(i) => write!(f, "(VP {})", Leaf(Category::I, i)),
            Self::Transitive(t, np) => write!(f, "(VP {} {})", Leaf(Category::T, t), np),
            Self::BeAdjective(a) => write!(f, "(VP BE {})", Leaf(Category::A, a)),
            Self::BeNp(np) => write!(f, "(VP BE {})", np),
            Self::Coordination(l, r) => write!(f, "(VP {} AND {})", l, r),
        }
    }
}

impl fmt::Display for Np {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(p) => write!(f, "(NP {})", Leaf(Category::P, p)),
            Self::Article(nom) => write!(f, "(NP AR {})", nom),
            Self::Bare(nom) => write!(f, "(NP {})", nom),
        }
    }
}

impl fmt::Display for Nom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head(an) => write!(f, "(Nom {})", an),
            Self::Relative(an, rel) => write!(f, "(Nom {} {})", an, rel),
        }
    }
}

impl fmt::Display for An {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noun(n) => write!(f, "(AN {})", Leaf(Category::N, n)),
            Self::Adjective(a, an) => write!(f, "(AN {} {})", Leaf(Category::A, a), an),
        }
    }
}

impl fmt::Display for Rel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subject(vp) => write!(f, "(Rel WHO {})", vp),
            Self::Object(np, t) => write!(f, "(Rel {} {})", np, Leaf(Category::T, t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn who_loves_mary() -> S {
        S::Who(Qp::Vp(Vp::Transitive(
            Word::new("love", "loves"),
            Np::Name(Word::bare("Mary")),
        )))
    }

    #[test]
    fn test_rules_name_their_children() {
        let tree = who_loves_mary();
        assert_eq!(tree.category(), Category::S);
        assert_eq!(tree.rule(), "S -> WHO QP QM");

        let S::Who(Qp::Vp(vp)) = &tree else {
            panic!("unexpected shape");
        };
        assert_eq!(vp.rule(), "VP -> T NP");
        assert_eq!(Rel::Object(Np::Name(Word::bare("John")), Word::bare("like")).rule(), "Rel -> NP T");
    }

    #[test]
    fn test_bracketed_display() {
        assert_eq!(
            who_loves_mary().to_string(),
            "(S WHO (QP (VP (T loves) (NP (P Mary)))) QM)"
        );
    }

    #[test]
    fn test_content_categories() {
        assert!(Category::T.is_content());
        assert!(!Category::Be.is_content());
        assert!(!Category::Vp.is_content());
        assert_eq!(Category::Nom.to_string(), "Nom");
        assert_eq!(Category::Qp.to_string(), "QP");
    }
}
