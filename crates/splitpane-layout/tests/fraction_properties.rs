//! Property suite for split-fraction clamping.
//!
//! Exercises the clamp against arbitrary reals (including NaN and infinities),
//! widths, and minimum extents, then drives random drag/resize streams through
//! a `SplitPane` and checks the committed fraction after every step.

use proptest::prelude::*;
use splitpane_layout::{
    Bounds, ClampReason, FeasibleWindow, Point, PointerButton, PointerId, SplitConstraints,
    SplitInputEvent, SplitInputEventKind, SplitPane, SplitPaneConfig, clamp_fraction,
};

#[derive(Debug, Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

fn any_real() -> impl Strategy<Value = f64> {
    prop::num::f64::ANY
}

fn any_width() -> impl Strategy<Value = f64> {
    prop_oneof![0.001f64..10.0, 10.0f64..100_000.0]
}

fn any_extent() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..2_000.0]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn clamp_is_total_and_stays_in_unit_interval(
        desired in any_real(),
        width in any_width(),
        min_left in any_extent(),
        min_right in any_extent(),
    ) {
        let fraction = clamp_fraction(desired, width, min_left, min_right, 0.5);
        prop_assert!(fraction.is_finite());
        prop_assert!((0.0..=1.0).contains(&fraction), "fraction {fraction} outside [0, 1]");
    }

    #[test]
    fn clamp_is_idempotent(
        desired in -1.0e9f64..1.0e9,
        width in any_width(),
        min_left in any_extent(),
        min_right in any_extent(),
    ) {
        let once = clamp_fraction(desired, width, min_left, min_right, 0.5);
        let twice = clamp_fraction(once, width, min_left, min_right, 0.5);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clamp_leaves_feasible_values_untouched(
        t in 0.0f64..=1.0,
        width in any_width(),
        min_left in any_extent(),
        min_right in any_extent(),
    ) {
        let window = FeasibleWindow::new(width, SplitConstraints::new(min_left, min_right));
        prop_assume!(!window.collapsed);
        let desired = window.lower + t * (window.upper - window.lower);
        prop_assume!(window.contains(desired));
        prop_assert_eq!(clamp_fraction(desired, width, min_left, min_right, 0.5), desired);
    }

    #[test]
    fn result_lies_in_window_or_collapse_point(
        desired in -10.0f64..10.0,
        width in any_width(),
        min_left in any_extent(),
        min_right in any_extent(),
    ) {
        let constraints = SplitConstraints::new(min_left, min_right);
        let decision = constraints.decide(desired, width, 0.5);
        let window = decision.window;
        if window.collapsed {
            prop_assert_eq!(decision.fraction, window.lower);
            prop_assert_eq!(decision.reason, ClampReason::Collapsed);
        } else {
            prop_assert!(window.contains(decision.fraction));
        }
    }

    #[test]
    fn random_event_streams_keep_fraction_valid(
        seed in any::<u64>(),
        steps in 20usize..160,
    ) {
        run_stream(seed, steps);
    }
}

#[test]
fn infeasible_constraints_never_oscillate() {
    let first = clamp_fraction(0.1, 100.0, 80.0, 80.0, 0.5);
    for desired in [0.0, 0.2, 0.5, 0.79, 0.81, 1.0, first] {
        assert_eq!(clamp_fraction(desired, 100.0, 80.0, 80.0, 0.5), first);
    }
    assert_eq!(first, 0.8);
}

fn run_stream(seed: u64, steps: usize) {
    let mut rng = Lcg::new(seed);
    let mut pane = SplitPane::new(
        SplitPaneConfig::default()
            .with_min_left(rng.next_range(0.0, 400.0))
            .with_min_right(rng.next_range(0.0, 400.0))
            .with_initial_fraction(rng.next_unit()),
    )
    .expect("generated config is valid");
    let mut sequence = 0u64;

    for _ in 0..steps {
        sequence += 1;
        let pointer_id = PointerId::new((rng.next_u64() % 3) as u32);
        let width = rng.next_range(0.0, 2_000.0);
        let container = Bounds::new(rng.next_range(-50.0, 50.0), 0.0, width, 200.0);
        let position = Point::new(rng.next_range(-500.0, 2_500.0), 10.0);

        let kind = match rng.choose_index(6) {
            0 => SplitInputEventKind::PointerDown {
                pointer_id,
                button: PointerButton::Primary,
                position,
            },
            1 | 2 => SplitInputEventKind::PointerMove {
                pointer_id,
                position,
                container,
            },
            3 => SplitInputEventKind::PointerUp {
                pointer_id,
                button: PointerButton::Primary,
                position,
            },
            4 => {
                let commit = pane.container_resized(width);
                assert_committed_within_window(&pane, commit.reason, width);
                continue;
            }
            _ => {
                let commit = pane.set_constraints(SplitConstraints::new(
                    rng.next_range(0.0, 600.0),
                    rng.next_range(0.0, 600.0),
                ));
                if let (Some(commit), Some(last_width)) = (commit, pane.container_width()) {
                    assert_committed_within_window(&pane, commit.reason, last_width);
                }
                continue;
            }
        };

        let outcome = pane
            .apply_event(&SplitInputEvent::new(sequence, kind))
            .expect("sequence is strictly increasing");
        if let Some(commit) = outcome.commit {
            assert_committed_within_window(&pane, commit.reason, width);
        }
        let fraction = pane.fraction();
        assert!(fraction.is_finite() && (0.0..=1.0).contains(&fraction));
    }
}

fn assert_committed_within_window(pane: &SplitPane, reason: ClampReason, width: f64) {
    let fraction = pane.fraction();
    assert!(fraction.is_finite() && (0.0..=1.0).contains(&fraction));
    if reason != ClampReason::RejectedNonFinite {
        let window = pane.constraints().window(width);
        assert!(
            window.contains(fraction),
            "fraction {fraction} outside window {window:?} (reason {reason:?})"
        );
    }
}
