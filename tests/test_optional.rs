use optional_value::{absent, from_nullable, lift, lift_tuple, present, Optional, OptionalError};
use pretty_assertions::assert_eq;
use std::cell::Cell;

#[test]
fn test_present_and_absent_predicates() {
    for v in [0, 1, -5, i32::MAX] {
        assert!(present(v).is_present());
        assert!(!present(v).is_absent());
    }
    assert!(!absent::<i32>().is_present());
    assert!(absent::<i32>().is_absent());
}

#[test]
fn test_from_nullable() {
    assert_eq!(from_nullable::<&str>(None), absent());
    assert_eq!(from_nullable(Some("value")), present("value"));
    assert_eq!(from_nullable(Some(0)), present(0));
    assert_eq!(from_nullable(Some(String::new())), present(String::new()));
}

#[test]
fn test_get() {
    assert_eq!(present("v").get(), Ok("v"));
    assert_eq!(absent::<&str>().get(), Err(OptionalError::EmptyValue));
}

#[test]
fn test_get_or_else() {
    let invoked = Cell::new(false);
    let value = present(10).get_or_else(|| {
        invoked.set(true);
        0
    });
    assert_eq!(value, 10);
    assert!(!invoked.get());

    let value = absent().get_or_else(|| {
        invoked.set(true);
        0
    });
    assert_eq!(value, 0);
    assert!(invoked.get());
}

#[test]
#[should_panic(expected = "supplier failed")]
fn test_get_or_else_propagates_supplier_panic() {
    absent::<i32>().get_or_else(|| panic!("supplier failed"));
}

#[test]
#[should_panic(expected = "transform failed")]
fn test_map_propagates_panic() {
    let _ = present(1).map(|_: i32| -> i32 { panic!("transform failed") });
}

#[test]
#[should_panic(expected = "chain failed")]
fn test_flat_map_propagates_panic() {
    let _ = present(1).flat_map(|_: i32| -> Optional<i32> { panic!("chain failed") });
}

#[test]
#[should_panic(expected = "wrapped function failed")]
fn test_ap_propagates_panic() {
    let failing = |_: i32| -> i32 { panic!("wrapped function failed") };
    let _ = present(1).ap(present(failing));
}

#[test]
#[should_panic(expected = "lifted function failed")]
fn test_lift_propagates_panic() {
    let failing = |_: i32, _: i32| -> i32 { panic!("lifted function failed") };
    let _ = lift(failing, [present(1), present(2)]);
}

#[test]
#[should_panic(expected = "lifted tuple function failed")]
fn test_lift_tuple_propagates_panic() {
    let failing = |_: i32, _: &str| -> i32 { panic!("lifted tuple function failed") };
    let _ = lift_tuple(failing, (present(1), present("x")));
}

#[test]
fn test_functor_laws() {
    let f = |x: i32| x * 3;
    let g = |x: i32| x - 7;
    for m in [present(4), absent()] {
        assert_eq!(m.map(|x| x), m);
        assert_eq!(m.map(g).map(f), m.map(|x| f(g(x))));
    }
}

#[test]
fn test_monad_laws() {
    let f = |x: i32| if x > 0 { present(x * 2) } else { absent() };
    let g = |x: i32| if x % 4 == 0 { present(x + 1) } else { absent() };
    for m in [present(2), present(3), present(-1), absent()] {
        assert_eq!(m.flat_map(present), m);
        assert_eq!(
            m.flat_map(f).flat_map(g),
            m.flat_map(|v| f(v).flat_map(g))
        );
    }
}

#[test]
fn test_applicative_identity() {
    assert_eq!(present(1).ap(present(|x: i32| x)), present(1));
}

#[test]
fn test_ap_with_absent_function() {
    let missing: Optional<fn(i32) -> i32> = absent();
    assert_eq!(present(1).ap(missing), absent());
}

#[test]
fn test_equality() {
    assert_eq!(absent::<i32>() == absent(), true);
    assert_eq!(absent() == present(1), false);
    assert_eq!(present(1) == absent(), false);
    assert_eq!(present(1) == present(1), true);
    assert_eq!(present(1) == present(2), false);
}

#[test]
fn test_usable_as_map_key() {
    use std::collections::HashMap;

    let mut counts: HashMap<Optional<&str>, usize> = HashMap::new();
    for key in [present("a"), absent(), present("a"), absent(), absent()] {
        *counts.entry(key).or_default() += 1;
    }
    assert_eq!(counts[&present("a")], 2);
    assert_eq!(counts[&absent()], 3);
}

#[test]
fn test_display() {
    assert_eq!(absent::<i32>().to_string(), "Nothing");
    assert_eq!(present(1).to_string(), "Just(1)");
    assert_eq!(present(present(2)).to_string(), "Just(Just(2))");
    assert_eq!(format!("{}", present(1.5)), "Just(1.5)");
}

#[test]
fn test_canonical_absent() {
    const NOTHING: Optional<u8> = Optional::ABSENT;
    assert_eq!(NOTHING, absent());
    assert_eq!(std::mem::size_of::<Optional<()>>(), std::mem::size_of::<Option<()>>());
}
