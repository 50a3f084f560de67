// tests/alert_scenarios.rs
use call_volume_alerts::{count_alerts, trailing_averages, AlertInput, Violation};
use rand::{rngs::StdRng, Rng, SeedableRng};

const CALLS: [i64; 8] = [2, 2, 2, 2, 5, 5, 5, 8];

#[test]
fn worked_example_threshold_four() {
    assert_eq!(count_alerts(3, 4, &CALLS).unwrap(), 2);
}

#[test]
fn low_threshold_alerts_on_every_evaluated_window() {
    let avgs = trailing_averages(3, &CALLS).unwrap();
    assert_eq!(avgs, vec![2.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(count_alerts(3, 2, &CALLS).unwrap(), avgs.len());
}

#[test]
fn window_equal_to_length_has_nothing_to_evaluate() {
    assert!(trailing_averages(8, &CALLS).unwrap().is_empty());
    assert_eq!(count_alerts(8, 1, &CALLS).unwrap(), 0);
    // One sample longer than the window gives exactly one window.
    assert_eq!(trailing_averages(7, &CALLS).unwrap(), vec![23.0 / 7.0]);
}

#[test]
fn scalar_bounds_fail_regardless_of_other_inputs() {
    let cases = [
        (0, 4, AlertInput::WindowLength, Violation::TooSmall),
        (-7, 4, AlertInput::WindowLength, Violation::TooSmall),
        (106, 4, AlertInput::WindowLength, Violation::TooLarge),
        (3, 0, AlertInput::Threshold, Violation::TooSmall),
        (3, 106, AlertInput::Threshold, Violation::TooLarge),
    ];
    for (w, t, input, violation) in cases {
        for samples in [&CALLS[..], &[][..], &[500, -1][..]] {
            let e = count_alerts(w, t, samples).unwrap_err();
            assert_eq!(e.input(), input, "w={w} t={t}");
            assert_eq!(e.violation(), violation, "w={w} t={t}");
        }
    }
}

#[test]
fn bounds_themselves_are_accepted() {
    assert!(count_alerts(1, 1, &[0, 105]).is_ok());
    assert!(count_alerts(105, 105, &[105; 105]).is_ok());
}

#[test]
fn per_sample_bounds() {
    let e = count_alerts(3, 4, &[2, 2, 106, 2]).unwrap_err();
    assert_eq!(e.input(), AlertInput::Sample(2));
    assert_eq!(e.violation(), Violation::TooLarge);
    assert_eq!(e.code(), -6);

    let e = count_alerts(3, 4, &[2, -1, 2, 2]).unwrap_err();
    assert_eq!(e.input(), AlertInput::Sample(1));
    assert_eq!(e.code(), -5);
}

#[test]
fn random_inputs_stay_within_window_count_and_repeat() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let n = rng.random_range(0..=105usize);
        let samples: Vec<i64> = (0..n).map(|_| rng.random_range(0..=105)).collect();
        let w = rng.random_range(1..=105i64);
        let t = rng.random_range(1..=105i64);

        let first = count_alerts(w, t, &samples).unwrap();
        let second = count_alerts(w, t, &samples).unwrap();
        assert_eq!(first, second);
        assert!(first <= n.saturating_sub(w as usize), "n={n} w={w} got {first}");
    }
}
