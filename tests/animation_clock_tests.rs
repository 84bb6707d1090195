use approx::assert_relative_eq;
use flow_map::core::{AnimationClock, ClockConfig};
use proptest::prelude::*;

const PERIOD: f64 = 2000.0;

/// Distance on the wrapped time axis, so values straddling the wrap compare close.
fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % PERIOD;
    diff.min(PERIOD - diff)
}

#[test]
fn first_ticks_step_by_point_eight() {
    let mut clock = AnimationClock::default();
    assert_eq!(clock.time(), 0.0);
    clock.tick();
    assert_eq!(clock.time(), 0.8);
    clock.tick();
    assert_relative_eq!(clock.time(), 1.6, epsilon = 1e-12);
}

#[test]
fn clock_wraps_after_one_full_cycle() {
    let clock = AnimationClock::default().advanced_by(2_499);
    assert!(clock.time() > 1_998.0);

    let wrapped = clock.advanced().advanced();
    assert!(wrapped.time() < 1.0, "time {} should have wrapped", wrapped.time());
}

#[test]
fn reset_returns_to_zero_and_keeps_config() {
    let config = ClockConfig {
        step: 2.5,
        period: 10.0,
    };
    let clock = AnimationClock::new(config)
        .expect("valid clock")
        .advanced_by(3)
        .reset();
    assert_eq!(clock.time(), 0.0);
    assert_eq!(clock.config(), config);
}

#[test]
fn invalid_clock_configs_are_rejected() {
    for config in [
        ClockConfig {
            step: -0.8,
            period: 2000.0,
        },
        ClockConfig {
            step: 0.8,
            period: 0.0,
        },
        ClockConfig {
            step: f64::NAN,
            period: 2000.0,
        },
    ] {
        assert!(AnimationClock::new(config).is_err());
    }
}

proptest! {
    #[test]
    fn time_after_n_ticks_matches_closed_form(n in 0u64..20_000) {
        let clock = AnimationClock::default().advanced_by(n);
        let expected = (0.8 * n as f64) % PERIOD;

        prop_assert!((0.0..PERIOD).contains(&clock.time()));
        prop_assert!(circular_distance(clock.time(), expected) <= 1e-6);
    }

    #[test]
    fn custom_clock_time_stays_in_range(
        step in 0.001f64..500.0,
        period in 1.0f64..5_000.0,
        n in 0u64..2_000
    ) {
        let clock = AnimationClock::new(ClockConfig { step, period })
            .expect("valid clock")
            .advanced_by(n);
        prop_assert!(clock.time() >= 0.0);
        prop_assert!(clock.time() < period);
    }
}
