use super::*;
use tsutils_oracle::{ProgramOracle, TypeId};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn qualifier(pattern: &str) -> TypeQualifier {
    TypeQualifier::from_pattern(pattern).expect("valid pattern")
}

#[test]
fn matches_a_specific_type() {
    init_tracing();
    // class A {}; let a: A;
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);

    assert!(could_be_type(&oracle, a, "A", None).unwrap());
}

#[test]
fn does_not_match_different_types() {
    // class A {}; class B {}; let b: B;
    let oracle = ProgramOracle::new();
    let _a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[]);

    assert!(!could_be_type(&oracle, b, "A", None).unwrap());
    assert!(could_be_type(&oracle, b, "B", None).unwrap());
}

#[test]
fn matches_a_base_type() {
    // class A {}; class B extends A {}; let b: B;
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[a]);

    assert!(could_be_type(&oracle, b, "A", None).unwrap());
    assert!(could_be_type(&oracle, b, "B", None).unwrap());
}

#[test]
fn matches_a_transitive_base_type() {
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[a]);
    let c = oracle.declare_class("C", &[b]);

    assert!(could_be_type(&oracle, c, "A", None).unwrap());
}

#[test]
fn matches_an_implemented_interface() {
    let oracle = ProgramOracle::new();
    let observer = oracle.declare_interface("Observer", &[]);
    let subject = oracle.declare_class("Subject", &[observer]);

    assert!(could_be_type(&oracle, subject, "Observer", None).unwrap());
}

#[test]
fn matches_an_intersection_type() {
    // class A {}; class B {}; let ab: A & B;
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[]);
    let ab = oracle.intersection_of(&[a, b]);

    assert!(could_be_type(&oracle, ab, "A", None).unwrap());
    assert!(could_be_type(&oracle, ab, "B", None).unwrap());
    assert!(!could_be_type(&oracle, ab, "C", None).unwrap());
}

#[test]
fn matches_a_union_type() {
    // class A {}; class B {}; let ab: A | B;
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[]);
    let ab = oracle.union_of(&[a, b]);

    assert!(could_be_type(&oracle, ab, "A", None).unwrap());
    assert!(could_be_type(&oracle, ab, "B", None).unwrap());
    assert!(!could_be_type(&oracle, ab, "C", None).unwrap());
}

#[test]
fn matches_a_union_member_through_its_base() {
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[a]);
    let c = oracle.declare_class("C", &[]);
    let bc = oracle.union_of(&[b, c]);

    assert!(could_be_type(&oracle, bc, "A", None).unwrap());
}

#[test]
fn matches_nested_compound_types() {
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[]);
    let c = oracle.declare_class("C", &[]);
    let nested = oracle.union_of(&[c, oracle.intersection_of(&[a, b])]);

    assert!(could_be_type(&oracle, nested, "B", None).unwrap());
    assert!(!could_be_type(&oracle, nested, "D", None).unwrap());
}

#[test]
fn empty_compounds_never_match() {
    let oracle = ProgramOracle::new();
    let empty_union = oracle.union_of(&[]);
    let empty_intersection = oracle.intersection_of(&[]);

    assert!(!could_be_type(&oracle, empty_union, "A", None).unwrap());
    assert!(!could_be_type(&oracle, empty_intersection, "A", None).unwrap());
}

#[test]
fn intrinsics_do_not_match_by_name() {
    let oracle = ProgramOracle::new();

    assert!(!could_be_type(&oracle, TypeId::STRING, "String", None).unwrap());
    assert!(!could_be_type(&oracle, TypeId::ANY, "A", None).unwrap());
}

#[test]
fn supports_fully_qualified_types() {
    // import { A } from "a"; class B {}; let a: A; let b: B;
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class_in("A", "\"a\"", &[]);
    let b = oracle.declare_class("B", &[]);

    assert!(could_be_type(&oracle, a, "A", Some(&qualifier("\"a\""))).unwrap());
    assert!(!could_be_type(&oracle, b, "B", Some(&qualifier("\"b\""))).unwrap());
}

#[test]
fn qualifier_separates_same_named_declarations() {
    let oracle = ProgramOracle::new();
    let from_a = oracle.declare_class_in("A", "\"a\"", &[]);
    let from_b = oracle.declare_class_in("A", "\"b\"", &[]);

    let wants_a = qualifier("\"a\"");
    assert!(could_be_type(&oracle, from_a, "A", Some(&wants_a)).unwrap());
    assert!(!could_be_type(&oracle, from_b, "A", Some(&wants_a)).unwrap());

    // Without a qualifier, either declaration counts.
    assert!(could_be_type(&oracle, from_a, "A", None).unwrap());
    assert!(could_be_type(&oracle, from_b, "A", None).unwrap());
}

#[test]
fn rejected_candidate_continues_base_search() {
    // A local shadow named like the target extends the real target from
    // another module; the shadow is rejected, the base still matches.
    let oracle = ProgramOracle::new();
    let real = oracle.declare_class_in("Observable", "\"rxjs\"", &[]);
    let shadow = oracle.declare_class_in("Observable", "\"local\"", &[real]);

    let wants_rxjs = qualifier("\"rxjs\"");
    assert!(could_be_type(&oracle, shadow, "Observable", Some(&wants_rxjs)).unwrap());
}

#[test]
fn qualifier_on_unresolved_declaration_propagates_oracle_error() {
    let oracle = ProgramOracle::new();
    let orphan = oracle.declare_unresolved("A");

    assert!(could_be_type(&oracle, orphan, "A", None).unwrap());
    assert!(could_be_type(&oracle, orphan, "A", Some(&qualifier("\"a\""))).is_err());
}

#[test]
fn repeated_queries_are_idempotent() {
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[a]);
    let ab = oracle.union_of(&[a, b]);

    for _ in 0..3 {
        assert!(could_be_type(&oracle, ab, "A", None).unwrap());
        assert!(!could_be_type(&oracle, ab, "C", None).unwrap());
    }
}

#[test]
fn cyclic_base_chain_terminates() {
    // A malformed program can hand the matcher a cyclic hierarchy; the
    // visited set turns that into a plain negative result.
    let oracle = ProgramOracle::new();
    let a = oracle.declare_class("A", &[]);
    let b = oracle.declare_class("B", &[a]);
    oracle.add_base(a, b);

    assert!(!could_be_type(&oracle, b, "Missing", None).unwrap());
    assert!(could_be_type(&oracle, b, "A", None).unwrap());
    assert!(could_be_type(&oracle, a, "B", None).unwrap());
}
