//! Temporal coexistence: which detections are visible during a cue.

use crate::geometry::TimedDetection;
use capshift_models::cue::Cue;

/// Tolerance around cue boundaries in seconds.
///
/// Absorbs detector sampling jitter relative to cue boundaries: a detection
/// sampled just outside the cue window still counts as coexisting.
pub const COEXISTENCE_MARGIN_SECS: f64 = 0.075;

/// Select the detections whose sample time falls within the cue's active
/// interval widened by [`COEXISTENCE_MARGIN_SECS`].
///
/// The test is open at both ends: a detection at time `t` coexists iff
/// `t + MARGIN > cue.start` and `t - MARGIN < cue.end`. Input order is
/// preserved and nothing is deduplicated.
pub fn coexisting<'a>(cue: &Cue, detections: &'a [TimedDetection]) -> Vec<&'a TimedDetection> {
    detections
        .iter()
        .filter(|d| {
            d.t + COEXISTENCE_MARGIN_SECS > cue.start && d.t - COEXISTENCE_MARGIN_SECS < cue.end
        })
        .collect()
}
