//! Composition rules, one per production

use dice_grammar::{An, Node, Nom, Np, Qp, Rel, Vp, Word, S};
use dice_logic::Expr;

use crate::{ComposeError, Result};

/// Translate a syntax node into its logical form
pub trait Compose: Node {
    fn compose(&self) -> Result<Expr>;
}

/// Logical form of a whole question, unreduced
pub fn compose(tree: &S) -> Result<Expr> {
    let formula = tree.compose()?;
    tracing::debug!(tree = %tree, formula = %formula, "composed");
    Ok(formula)
}

// Leaves

/// `P`: the name itself
fn name(word: &Word) -> Expr {
    Expr::constant(word.symbol.as_str())
}

/// `N`, `A`, `I`: `\x.pred(x)`
fn property(word: &Word) -> Expr {
    Expr::unary_predicate(word.symbol.as_str(), "x")
}

/// `T`: `\y.\x.pred(x,y)`
fn relation(word: &Word) -> Expr {
    Expr::lambda(
        "y",
        Expr::lambda(
            "x",
            Expr::apply(
                Expr::constant(word.symbol.as_str()),
                vec![Expr::variable("x"), Expr::variable("y")],
            ),
        ),
    )
}

// Combinators

/// `f(v)`
fn holds_of(f: Expr, variable: &str) -> Expr {
    Expr::apply_to(f, Expr::variable(variable))
}

/// Saturate a transitive meaning so the atom reads `pred(a,b)`
fn relate(verb: Expr, a: &str, b: &str) -> Expr {
    Expr::apply(verb, vec![Expr::variable(b), Expr::variable(a)])
}

/// `\x.f(x)`
fn abstract_x(f: Expr) -> Expr {
    Expr::lambda("x", holds_of(f, "x"))
}

/// `\x.(f(x) & g(x))`
fn intersect(f: Expr, g: Expr) -> Expr {
    Expr::lambda("x", Expr::and(holds_of(f, "x"), holds_of(g, "x")))
}

/// `\x.exists y.(np(y) & atom)`
fn some_y(np: Expr, atom: Expr) -> Expr {
    Expr::lambda("x", Expr::exists("y", Expr::and(holds_of(np, "y"), atom)))
}

fn unhandled(node: &impl Node) -> ComposeError {
    ComposeError::UnhandledConstruction {
        category: node.category(),
        rule: node.rule(),
    }
}

impl Compose for S {
    fn compose(&self) -> Result<Expr> {
        match self {
            Self::Who(qp) => qp.compose(),
            Self::Which(nom, qp) => Ok(intersect(nom.compose()?, qp.compose()?)),
        }
    }
}

impl Compose for Qp {
    fn compose(&self) -> Result<Expr> {
        match self {
            Self::Vp(vp) => vp.compose(),
            Self::Do(np, t) => Ok(some_y(np.compose()?, relate(relation(t), "x", "y"))),
        }
    }
}

impl Compose for Vp {
    fn compose(&self) -> Result<Expr> {
        match self {
            Self::Transitive(t, np) => Ok(some_y(np.compose()?, relate(relation(t), "y", "x"))),
            Self::BeNp(np) => Ok(abstract_x(np.compose()?)),
            Self::BeAdjective(a) => Ok(abstract_x(property(a))),
            Self::Coordination(left, right) => Ok(intersect(left.compose()?, right.compose()?)),
            Self::Intransitive(i) => Ok(abstract_x(property(i))),
        }
    }
}

impl Compose for Np {
    fn compose(&self) -> Result<Expr> {
        match self {
            Self::Name(p) => Ok(Expr::lambda(
                "x",
                Expr::equality(Expr::variable("x"), name(p)),
            )),
            Self::Article(nom) | Self::Bare(nom) => nom.compose(),
        }
    }
}

impl Compose for Nom {
    fn compose(&self) -> Result<Expr> {
        match self {
            Self::Head(an) => an.compose(),
            Self::Relative(an, rel) => Ok(intersect(an.compose()?, rel.compose()?)),
        }
    }
}

impl Compose for An {
    fn compose(&self) -> Result<Expr> {
        match self {
            Self::Adjective(a, an) => Ok(intersect(property(a), an.compose()?)),
            Self::Noun(n) => Ok(property(n)),
        }
    }
}

impl Compose for Rel {
    fn compose(&self) -> Result<Expr> {
        match self {
            Self::Subject(vp) => Ok(abstract_x(vp.compose()?)),
            Self::Object(_, _) => Err(unhandled(self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_grammar::Category;
    use dice_logic::parse;

    fn w(symbol: &str) -> Word {
        Word::bare(symbol)
    }

    fn mary() -> Np {
        Np::Name(w("Mary"))
    }

    fn duck() -> An {
        An::Noun(w("duck"))
    }

    fn fly() -> Vp {
        Vp::Intransitive(w("fly"))
    }

    fn normal(node: &impl Compose) -> String {
        node.compose().unwrap().simplify().to_string()
    }

    #[test]
    fn test_leaves() {
        assert_eq!(name(&w("Mary")), Expr::constant("Mary"));
        assert_eq!(property(&w("duck")), parse("\\x.duck(x)").unwrap());
        assert_eq!(relation(&w("love")), parse("\\y.\\x.love(x,y)").unwrap());
    }

    #[test]
    fn test_relate_orders_arguments() {
        let atom = relate(relation(&w("love")), "y", "x").simplify();
        assert_eq!(atom, parse("love(y,x)").unwrap());
    }

    #[test]
    fn test_sentence_rules() {
        let who = S::Who(Qp::Vp(fly()));
        assert_eq!(normal(&who), "\\x.fly(x)");

        let which = S::Which(Nom::Head(duck()), Qp::Vp(fly()));
        assert_eq!(normal(&which), "\\x.(duck(x) & fly(x))");
    }

    #[test]
    fn test_question_phrase_rules() {
        assert_eq!(normal(&Qp::Vp(fly())), "\\x.fly(x)");
        assert_eq!(
            normal(&Qp::Do(mary(), w("love"))),
            "\\x.exists y.((y = Mary) & love(x,y))"
        );
    }

    #[test]
    fn test_verb_phrase_rules() {
        assert_eq!(
            normal(&Vp::Transitive(w("love"), mary())),
            "\\x.exists y.((y = Mary) & love(y,x))"
        );
        assert_eq!(normal(&Vp::BeAdjective(w("blue"))), "\\x.blue(x)");
        assert_eq!(
            normal(&Vp::BeNp(Np::Article(Nom::Head(duck())))),
            "\\x.duck(x)"
        );
        assert_eq!(normal(&Vp::BeNp(mary())), "\\x.(x = Mary)");
        assert_eq!(
            normal(&Vp::Coordination(Box::new(fly()), Box::new(Vp::Intransitive(w("swim"))))),
            "\\x.(fly(x) & swim(x))"
        );
        assert_eq!(normal(&fly()), "\\x.fly(x)");
    }

    #[test]
    fn test_noun_phrase_rules() {
        assert_eq!(normal(&mary()), "\\x.(x = Mary)");
        assert_eq!(normal(&Np::Article(Nom::Head(duck()))), "\\x.duck(x)");
        assert_eq!(normal(&Np::Bare(Nom::Head(duck()))), "\\x.duck(x)");
    }

    #[test]
    fn test_nominal_rules() {
        assert_eq!(normal(&Nom::Head(duck())), "\\x.duck(x)");
        assert_eq!(
            normal(&Nom::Relative(duck(), Box::new(Rel::Subject(fly())))),
            "\\x.(duck(x) & fly(x))"
        );
        assert_eq!(
            normal(&An::Adjective(w("blue"), Box::new(duck()))),
            "\\x.(blue(x) & duck(x))"
        );
        assert_eq!(normal(&Rel::Subject(fly())), "\\x.fly(x)");
    }

    #[test]
    fn test_unreduced_shape_follows_rule() {
        // NP -> P is \x.(x = P), with no redex left to reduce
        let np = mary().compose().unwrap();
        assert_eq!(np, parse("\\x.(x = Mary)").unwrap());

        // VP -> I wraps the leaf: \x.(\x.fly(x))(x)
        let vp = fly().compose().unwrap();
        assert_eq!(vp.to_string(), "\\x.(\\x.fly(x))(x)");
    }

    #[test]
    fn test_object_relative_is_unhandled() {
        let rel = Rel::Object(Np::Name(w("John")), w("like"));
        let nom = Nom::Relative(duck(), Box::new(rel));
        assert_eq!(
            nom.compose().unwrap_err(),
            ComposeError::UnhandledConstruction {
                category: Category::Rel,
                rule: "Rel -> NP T",
            }
        );
    }
}
