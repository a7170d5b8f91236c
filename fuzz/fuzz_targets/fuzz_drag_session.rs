#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitpane_core::{Bounds, Point, PointerButton, PointerId};
use splitpane_layout::{ClampReason, SplitConstraints, SplitPaneConfig};
use splitpane_web::{SplitPointerCaptureAdapter, SplitPointerCaptureConfig};

#[derive(Debug, Arbitrary)]
enum Op {
    Down { pointer: u8, secondary: bool, x: f32 },
    Ack { pointer: u8 },
    Move { pointer: u8, x: f32, left: f32, width: f32 },
    Up { pointer: u8, x: f32 },
    Cancel { pointer: Option<u8> },
    LostCapture { pointer: u8 },
    Resize { width: f32 },
    Constraints { min_left: f32, min_right: f32 },
    Teardown,
}

#[derive(Debug, Arbitrary)]
struct Session {
    min_left: u16,
    min_right: u16,
    ops: Vec<Op>,
}

fn pointer(raw: u8) -> PointerId {
    PointerId::new(u32::from(raw % 4))
}

fuzz_target!(|session: Session| {
    if session.ops.len() > 512 {
        return;
    }
    let config = SplitPaneConfig::default()
        .with_min_left(f64::from(session.min_left))
        .with_min_right(f64::from(session.min_right));
    let Ok(mut adapter) =
        SplitPointerCaptureAdapter::new(config, SplitPointerCaptureConfig::default())
    else {
        return;
    };

    for op in session.ops {
        match op {
            Op::Down {
                pointer: raw,
                secondary,
                x,
            } => {
                let button = if secondary {
                    PointerButton::Secondary
                } else {
                    PointerButton::Primary
                };
                adapter.pointer_down(pointer(raw), button, Point::new(f64::from(x), 0.0));
            }
            Op::Ack { pointer: raw } => {
                adapter.capture_acquired(pointer(raw));
            }
            Op::Move {
                pointer: raw,
                x,
                left,
                width,
            } => {
                let container = Bounds::new(f64::from(left), 0.0, f64::from(width), 100.0);
                let dispatch =
                    adapter.pointer_move(pointer(raw), Point::new(f64::from(x), 0.0), container);
                if let Some(commit) = dispatch.commit {
                    assert!(commit.fraction.is_finite());
                }
            }
            Op::Up { pointer: raw, x } => {
                let dispatch = adapter.pointer_up(
                    pointer(raw),
                    PointerButton::Primary,
                    Point::new(f64::from(x), 0.0),
                );
                if dispatch.is_forwarded() {
                    assert_eq!(adapter.active_pointer_id(), None);
                }
            }
            Op::Cancel { pointer: raw } => {
                adapter.pointer_cancel(raw.map(pointer));
            }
            Op::LostCapture { pointer: raw } => {
                let dispatch = adapter.lost_pointer_capture(pointer(raw));
                assert_eq!(dispatch.capture_command, None);
            }
            Op::Resize { width } => {
                adapter.container_resized(f64::from(width));
            }
            Op::Constraints {
                min_left,
                min_right,
            } => {
                let constraints =
                    SplitConstraints::new(f64::from(min_left), f64::from(min_right));
                if let (Some(commit), Some(width)) =
                    (adapter.set_constraints(constraints), adapter.pane().container_width())
                {
                    if commit.reason != ClampReason::RejectedNonFinite {
                        assert!(constraints.window(width).contains(adapter.fraction()));
                    }
                }
            }
            Op::Teardown => {
                adapter.teardown();
                assert_eq!(adapter.active_pointer_id(), None);
            }
        }

        let fraction = adapter.fraction();
        assert!(
            fraction.is_finite() && (0.0..=1.0).contains(&fraction),
            "fraction {fraction} escaped [0, 1]"
        );
        assert_eq!(
            adapter.active_pointer_id().is_some(),
            adapter.pane().is_dragging(),
            "adapter and drag machine disagree"
        );
    }
});
