#![no_main]

use libfuzzer_sys::fuzz_target;
use splitpane_layout::{ClampReason, SplitConstraints, clamp_fraction};

fuzz_target!(|input: (f64, f64, f64, f64, f64)| {
    let (desired, width, min_left, min_right, previous) = input;
    // Committed state is always a valid fraction.
    let previous = if previous.is_finite() {
        previous.clamp(0.0, 1.0)
    } else {
        0.5
    };

    let constraints = SplitConstraints::new(min_left, min_right);
    let decision = constraints.decide(desired, width, previous);
    let fraction = clamp_fraction(desired, width, min_left, min_right, previous);

    assert_eq!(fraction.to_bits(), decision.fraction.to_bits());
    assert!(fraction.is_finite(), "non-finite fraction {fraction}");
    assert!((0.0..=1.0).contains(&fraction), "fraction {fraction} outside [0, 1]");

    if decision.reason == ClampReason::RejectedNonFinite {
        assert_eq!(fraction, previous);
        return;
    }

    if decision.window.collapsed {
        assert_eq!(fraction, decision.window.lower);
    } else {
        assert!(decision.window.contains(fraction));
    }

    // Reapplying the clamp is a no-op.
    let again = clamp_fraction(fraction, width, min_left, min_right, previous);
    assert_eq!(again, fraction);
});
