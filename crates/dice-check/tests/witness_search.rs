use std::cell::RefCell;

use dice_check::{find_all_solutions, Bindings, CheckError, FactBase, ModelChecker, RelationStore};
use dice_logic::{parse, Expr};
use proptest::prelude::*;

/// Relation store that records every entity it is asked about
struct CountingStore {
    facts: FactBase,
    asked: RefCell<Vec<String>>,
}

impl CountingStore {
    fn new(facts: FactBase) -> Self {
        Self {
            facts,
            asked: RefCell::new(Vec::new()),
        }
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl RelationStore for CountingStore {
    fn query_unary(&self, predicate: &str, entity: &str) -> bool {
        self.asked.borrow_mut().push(entity.to_string());
        self.facts.query_unary(predicate, entity)
    }

    fn query_binary(&self, predicate: &str, first: &str, second: &str) -> bool {
        self.asked.borrow_mut().push(format!("{first},{second}"));
        self.facts.query_binary(predicate, first, second)
    }
}

fn abc() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

#[test]
fn exists_stops_at_first_witness() {
    let entities = abc();
    let store = CountingStore::new(FactBase::new().with_unary("duck", "b"));

    let holds = ModelChecker::new(&entities, &store)
        .evaluate(&parse("exists x.duck(x)").unwrap(), &mut Bindings::new())
        .unwrap();

    assert!(holds);
    assert_eq!(store.asked(), vec!["a", "b"]);
}

#[test]
fn find_all_solutions_visits_every_entity() {
    let entities = abc();
    let store = CountingStore::new(FactBase::new().with_unary("duck", "b"));

    let solutions = find_all_solutions(&parse("\\x.duck(x)").unwrap(), &entities, &store).unwrap();

    assert_eq!(solutions, vec!["b"]);
    assert_eq!(store.asked(), vec!["a", "b", "c"]);
}

#[test]
fn conjunction_evaluates_both_sides_left_to_right() {
    let entities = abc();
    let store = CountingStore::new(FactBase::new());

    let holds = ModelChecker::new(&entities, &store)
        .evaluate(&parse("duck(a) & duck(c)").unwrap(), &mut Bindings::new())
        .unwrap();

    assert!(!holds);
    assert_eq!(store.asked(), vec!["a", "c"]);
}

#[test]
fn nested_quantifiers_resolve_to_their_own_binding() {
    let entities = abc();
    let store = CountingStore::new(FactBase::new().with_binary("near", "c", "a"));

    let holds = ModelChecker::new(&entities, &store)
        .evaluate(&parse("exists x.(exists y.near(y,x))").unwrap(), &mut Bindings::new())
        .unwrap();

    assert!(holds);
    // x = a; y ranges a, b, c and the pair is (y, x)
    assert_eq!(store.asked(), vec!["a,a", "b,a", "c,a"]);
}

#[test]
fn shadowed_variable_uses_innermost_binding() {
    let entities = abc();
    let store = FactBase::new().with_binary("near", "a", "c");
    let checker = ModelChecker::new(&entities, &store);

    // inner x shadows outer x; near(x,y) sees the inner one
    let mut bindings = Bindings::with("y", "c");
    bindings.push("x", "b");
    bindings.push("x", "a");
    assert!(checker
        .evaluate(&parse("near(x,y)").unwrap(), &mut bindings)
        .unwrap());
}

#[test]
fn constant_in_domain_ignores_bindings() {
    let entities = abc();
    let store = FactBase::new();
    let checker = ModelChecker::new(&entities, &store);

    // a binding named like a constant must not redirect it
    let bindings = Bindings::with("a", "c");
    assert_eq!(checker.resolve("a", &bindings).unwrap(), "a");
    assert_eq!(checker.resolve("b", &Bindings::new()).unwrap(), "b");
    assert_eq!(
        checker.resolve("w", &Bindings::new()).unwrap_err(),
        CheckError::FreeVariable("w".to_string())
    );
}

#[test]
fn free_variable_aborts_the_query() {
    let entities = abc();
    let store = FactBase::new().with_unary("duck", "a");

    let open_inside = parse("\\x.(duck(x) & goose(z))").unwrap();
    assert_eq!(
        find_all_solutions(&open_inside, &entities, &store).unwrap_err(),
        CheckError::FreeVariable("z".to_string())
    );
}

fn facts_from(members: &[bool]) -> (Vec<String>, FactBase) {
    let entities: Vec<String> = (0..members.len()).map(|i| format!("e{i}")).collect();
    let mut facts = FactBase::new();
    for (entity, member) in entities.iter().zip(members) {
        if *member {
            facts.add_unary("duck", entity);
        }
    }
    (entities, facts)
}

proptest! {
    #[test]
    fn solutions_are_the_members_in_domain_order(members in prop::collection::vec(any::<bool>(), 0..12)) {
        let (entities, facts) = facts_from(&members);
        let solutions = find_all_solutions(&parse("\\x.duck(x)").unwrap(), &entities, &facts).unwrap();

        let expected: Vec<String> = entities
            .iter()
            .zip(&members)
            .filter(|(_, m)| **m)
            .map(|(e, _)| e.clone())
            .collect();
        prop_assert_eq!(solutions, expected);
    }

    #[test]
    fn exists_agrees_with_solutions(members in prop::collection::vec(any::<bool>(), 0..12)) {
        let (entities, facts) = facts_from(&members);
        let checker = ModelChecker::new(&entities, &facts);

        let witness = checker
            .evaluate(&Expr::exists("x", parse("duck(x)").unwrap()), &mut Bindings::new())
            .unwrap();
        let solutions = checker.find_all_solutions(&parse("\\x.duck(x)").unwrap()).unwrap();
        prop_assert_eq!(witness, !solutions.is_empty());
    }
}
