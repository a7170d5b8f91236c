#![forbid(unsafe_code)]

//! Container-resize reclamping.

use crate::fraction::{FractionCommit, SplitConstraints, SplitState};

/// Re-validate the committed fraction against a new container width.
///
/// Idempotent: calling it again with the same width and constraints commits
/// the same fraction, so hosts may invoke it on every observed layout pass.
pub fn reclamp(
    state: &mut SplitState,
    width: f64,
    constraints: SplitConstraints,
) -> FractionCommit {
    let current = state.fraction();
    state.commit(constraints.decide(current, width, current))
}
