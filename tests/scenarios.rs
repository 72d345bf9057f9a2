//! Concrete generation scenarios

use ruler_ticks::{generate_all, generate_lazy, Interval, RulerError, Tick};
use test_case::test_case;

fn ticks(pairs: &[(f64, u32)]) -> Vec<Tick> {
    pairs.iter().copied().map(Tick::from).collect()
}

#[test_case(0.0, 16.0, 2, &[(8.0, 2), (4.0, 1), (12.0, 1)] ; "two levels")]
#[test_case(0.0, 16.0, 1, &[(8.0, 1)] ; "single tick")]
#[test_case(0.0, 16.0, 0, &[] ; "zero height")]
#[test_case(0.0, 16.0, -4, &[] ; "negative height")]
#[test_case(
    0.0, 8.0, 3,
    &[(4.0, 3), (2.0, 2), (1.0, 1), (3.0, 1), (6.0, 2), (5.0, 1), (7.0, 1)]
    ; "three levels pre-order"
)]
#[test_case(1.0, 2.0, 2, &[(1.5, 2), (1.25, 1), (1.75, 1)] ; "fractional positions")]
fn eager_and_lazy_produce_expected_ticks(left: f64, right: f64, height: i32, expected: &[(f64, u32)]) {
    let expected = ticks(expected);

    let eager = generate_all(left, right, height).expect("valid interval");
    assert_eq!(eager, expected);

    let lazy: Vec<_> = generate_lazy(left, right, height)
        .expect("valid interval")
        .collect();
    assert_eq!(lazy, expected);
}

#[test_case(16.0, 0.0 ; "reversed")]
#[test_case(3.0, 3.0 ; "zero width")]
#[test_case(f64::NAN, 3.0 ; "nan bound")]
#[test_case(f64::NEG_INFINITY, 3.0 ; "infinite bound")]
fn invalid_intervals_are_rejected(left: f64, right: f64) {
    assert!(matches!(
        generate_all(left, right, 3),
        Err(RulerError::InvalidInterval { .. })
    ));
    assert!(matches!(
        generate_lazy(left, right, 3),
        Err(RulerError::InvalidInterval { .. })
    ));
}

#[test_case(1e16, 1e16 + 2.0, 1 ; "no room for a midpoint")]
#[test_case(1e15, 1e15 + 1.0, 5 ; "large magnitude narrow width")]
#[test_case(1000.0, 1001.0, 60 ; "too many levels")]
#[test_case(0.0, 16.0, 1_000_000 ; "absurd height")]
fn unresolvable_depths_are_rejected(left: f64, right: f64, height: i32) {
    let expected = RulerError::UnresolvableInterval { left, right, height };
    assert_eq!(generate_all(left, right, height), Err(expected.clone()));
    assert!(matches!(generate_lazy(left, right, height), Err(err) if err == expected));
}

#[test_case(1e15, 1e15 + 1.0, 2 ; "large magnitude shallow")]
#[test_case(1e-300, 2e-300, 10 ; "tiny magnitude")]
#[test_case(1000.0, 1001.0, 40 ; "deep but resolvable")]
fn resolvable_extremes_keep_ticks_inside(left: f64, right: f64, height: i32) {
    let root = Interval::new(left, right).expect("valid interval");
    let mut stream = generate_lazy(left, right, height).expect("resolvable depth");
    for tick in stream.by_ref().take(10_000) {
        assert!(root.contains(tick.position), "{} escaped {}", tick, root);
    }
}

#[test]
fn abandoning_the_stream_after_a_prefix() {
    let mut stream = generate_lazy(0.0, 16.0, 2).expect("valid interval");
    let prefix: Vec<_> = stream.by_ref().take(2).collect();
    assert_eq!(prefix, ticks(&[(8.0, 2), (4.0, 1)]));
    assert_eq!(stream.size_hint(), (1, Some(1)));
    drop(stream);
}

#[test]
fn restarting_reproduces_the_sequence() {
    let first: Vec<_> = generate_lazy(0.0, 128.0, 4).expect("valid").take(5).collect();
    let second: Vec<_> = generate_lazy(0.0, 128.0, 4).expect("valid").take(5).collect();
    assert_eq!(first, second);
}
