use proptest::prelude::*;
use lfl_algebra::{negate, residuum, tconorm, tnorm, Family, NegationKind};
use lfl_math::TruthValue;

fn family() -> impl Strategy<Value = Family> {
    prop_oneof![Just(Family::Goedel), Just(Family::Lukasiewicz), Just(Family::Goguen)]
}

fn known() -> impl Strategy<Value = TruthValue> {
    prop_oneof![
        8 => (0.0f64..=1.0f64).prop_map(TruthValue::Value),
        1 => Just(TruthValue::FALSE),
        1 => Just(TruthValue::TRUE),
    ]
}

fn maybe_missing() -> impl Strategy<Value = TruthValue> {
    prop_oneof![
        4 => known(),
        1 => Just(TruthValue::Missing),
    ]
}

fn close(a: TruthValue, b: TruthValue) -> bool {
    match (a, b) {
        (TruthValue::Value(x), TruthValue::Value(y)) => (x - y).abs() < 1e-9,
        (TruthValue::Missing, TruthValue::Missing) => true,
        _ => false,
    }
}

// Property 1: results of the aggregators stay in [0, 1]
proptest! {
    #[test]
    fn prop_aggregates_in_unit_interval(
        f in family(),
        values in prop::collection::vec(known(), 1..50),
        removable in any::<bool>()
    ) {
        for r in [tnorm(f, &values, removable).unwrap(), tconorm(f, &values, removable).unwrap()] {
            let v = r.value().expect("no missing input, no missing output");
            prop_assert!(
                (-1e-12..=1.0 + 1e-12).contains(&v),
                "{} produced {} outside [0, 1]", f, v
            );
        }
    }
}

// Property 2: two-element t-norms and t-conorms are commutative
proptest! {
    #[test]
    fn prop_commutative(
        f in family(),
        a in maybe_missing(),
        b in maybe_missing(),
        removable in any::<bool>()
    ) {
        let ab = tnorm(f, &[a, b], removable).unwrap();
        let ba = tnorm(f, &[b, a], removable).unwrap();
        prop_assert!(close(ab, ba), "{} t-norm: {:?} vs {:?}", f, ab, ba);

        let ab = tconorm(f, &[a, b], removable).unwrap();
        let ba = tconorm(f, &[b, a], removable).unwrap();
        prop_assert!(close(ab, ba), "{} t-conorm: {:?} vs {:?}", f, ab, ba);
    }
}

// Property 3: De Morgan duality under the involutive negation
proptest! {
    #[test]
    fn prop_de_morgan(
        f in family(),
        values in prop::collection::vec(known(), 1..20),
        removable in any::<bool>()
    ) {
        let negated = negate(NegationKind::Involutive, &values).unwrap();
        let dual = tnorm(f, &negated, removable).unwrap().value().unwrap();
        let direct = tconorm(f, &values, removable).unwrap().value().unwrap();
        prop_assert!(
            (direct - (1.0 - dual)).abs() < 1e-9,
            "{}: tconorm {} vs 1 - tnorm(neg) {}", f, direct, 1.0 - dual
        );
    }
}

// Property 4: the removable flag behaves as if missing elements were dropped
proptest! {
    #[test]
    fn prop_removable_drops_missing(
        f in family(),
        values in prop::collection::vec(maybe_missing(), 1..30)
    ) {
        let known: Vec<TruthValue> = values.iter().copied().filter(|v| !v.is_missing()).collect();

        let with = tnorm(f, &values, true).unwrap();
        let without = tnorm(f, &known, true).unwrap();
        prop_assert!(close(with, without), "{} t-norm: {:?} vs {:?}", f, with, without);

        let with = tconorm(f, &values, true).unwrap();
        let without = tconorm(f, &known, true).unwrap();
        prop_assert!(close(with, without), "{} t-conorm: {:?} vs {:?}", f, with, without);
    }
}

// Property 5: a missing result only ever comes from a missing input that was not removable
proptest! {
    #[test]
    fn prop_missing_needs_missing_input(
        f in family(),
        values in prop::collection::vec(maybe_missing(), 1..30),
        removable in any::<bool>()
    ) {
        let any_missing = values.iter().any(|v| v.is_missing());
        for r in [tnorm(f, &values, removable).unwrap(), tconorm(f, &values, removable).unwrap()] {
            if r.is_missing() {
                prop_assert!(any_missing && !removable);
            }
        }
    }
}

// Property 6: implication from 0 and reflexive implication are always true
proptest! {
    #[test]
    fn prop_residuum_boundaries(f in family(), x in known(), y in maybe_missing()) {
        prop_assert_eq!(residuum(f, &[TruthValue::FALSE], &[y]).unwrap(), vec![TruthValue::TRUE]);
        prop_assert_eq!(residuum(f, &[x], &[x]).unwrap(), vec![TruthValue::TRUE]);
    }
}

// Property 7: a one-element operand is recycled against the longer one
proptest! {
    #[test]
    fn prop_residuum_recycling(
        f in family(),
        a in maybe_missing(),
        ys in prop::collection::vec(maybe_missing(), 1..20)
    ) {
        let expanded = vec![a; ys.len()];
        let recycled = residuum(f, &[a], &ys).unwrap();
        prop_assert_eq!(recycled.len(), ys.len());
        prop_assert_eq!(recycled, residuum(f, &expanded, &ys).unwrap());
    }
}

// Property 8: the residuum is 1 when x <= y and stays in [0, 1]
proptest! {
    #[test]
    fn prop_residuum_order(f in family(), x in known(), y in known()) {
        let r = residuum(f, &[x], &[y]).unwrap()[0].value().unwrap();
        if x.value().unwrap() <= y.value().unwrap() {
            prop_assert_eq!(r, 1.0);
        }
        prop_assert!((0.0..=1.0).contains(&r), "{} residuum {} outside [0, 1]", f, r);
    }
}

// Property 9: the involutive negation is its own inverse
proptest! {
    #[test]
    fn prop_involutive_twice(values in prop::collection::vec(maybe_missing(), 0..50)) {
        let once = negate(NegationKind::Involutive, &values).unwrap();
        let twice = negate(NegationKind::Involutive, &once).unwrap();
        for (i, (&a, &b)) in values.iter().zip(twice.iter()).enumerate() {
            prop_assert!(close(a, b), "Mismatch at index {}: {:?} vs {:?}", i, a, b);
        }
    }
}

// Property 10: the strict negation only ever yields 0, 1 or missing
proptest! {
    #[test]
    fn prop_strict_is_crisp(values in prop::collection::vec(maybe_missing(), 0..50)) {
        let out = negate(NegationKind::Strict, &values).unwrap();
        for (&x, &n) in values.iter().zip(out.iter()) {
            match x {
                TruthValue::Missing => prop_assert_eq!(n, TruthValue::Missing),
                TruthValue::Value(v) if v == 0.0 => prop_assert_eq!(n, TruthValue::TRUE),
                TruthValue::Value(_) => prop_assert_eq!(n, TruthValue::FALSE),
            }
        }
    }
}
