//! Cohen-Sutherland line clipping
//!
//! Both endpoints are classified by their [`OutCode`].
//! As long as the segment is neither trivially accepted (both codes inside)
//! nor trivially rejected (both points outside the same side),
//! an outside endpoint is moved onto the edge it violates.
use log::trace;

use crate::clip::{check_inputs, ClipResult, Clipper, Trace};
use crate::error::ClipError;
use crate::geometry::{OutCode, Point, Segment, Window};

/// Upper bound for the clipping loop
///
/// A finite segment needs at most four corrections (two per endpoint)
/// plus one final pass to be accepted or rejected.
pub const MAX_ITERATIONS: u32 = 16;

/// The Cohen-Sutherland clipper as [`Clipper`]
#[derive(Copy, Clone, Debug, Default)]
pub struct CohenSutherland;

impl Clipper for CohenSutherland {
    fn clip_traced(&self, segment: Segment, window: &Window) -> Result<Trace, ClipError> {
        check_inputs(&segment, window)?;

        let Segment { mut p1, mut p2 } = segment;
        let mut code1 = OutCode::compute(p1, window);
        let mut code2 = OutCode::compute(p2, window);

        for iteration in 1..=MAX_ITERATIONS {
            if code1.is_inside() && code2.is_inside() {
                return Ok(Trace {
                    result: ClipResult::Visible(Segment::new(p1, p2)),
                    iterations: iteration,
                });
            }
            if !(code1 & code2).is_inside() {
                return Ok(Trace {
                    result: ClipResult::NotVisible,
                    iterations: iteration,
                });
            }

            // Point 1 is preferred when both are outside
            if !code1.is_inside() {
                p1 = move_onto_edge(p1, p2, code1, window)?;
                code1 = OutCode::compute(p1, window);
                trace!("Moved p1 to {:?}, now {:?}", p1, code1);
            } else {
                p2 = move_onto_edge(p2, p1, code2, window)?;
                code2 = OutCode::compute(p2, window);
                trace!("Moved p2 to {:?}, now {:?}", p2, code2);
            }
        }

        Err(ClipError::DegenerateInput {
            reason: format!("segment {segment:?} didn't settle within {MAX_ITERATIONS} iterations"),
        })
    }
}

/// Clip a segment using [`CohenSutherland`]
pub fn cohen_sutherland_clip(segment: Segment, window: &Window) -> Result<ClipResult, ClipError> {
    CohenSutherland.clip(segment, window)
}

/// Move `moving` along the line towards `fixed` until it hits the edge named by `code`
///
/// Only a single flag is resolved, checked in the order TOP, BOTTOM, RIGHT, LEFT.
/// The caller has to recompute the point's code afterwards.
fn move_onto_edge(
    moving: Point,
    fixed: Point,
    code: OutCode,
    window: &Window,
) -> Result<Point, ClipError> {
    let (axis, value, edge) = if code.contains(OutCode::TOP) {
        (1, window.max.y, "horizontal")
    } else if code.contains(OutCode::BOTTOM) {
        (1, window.min.y, "horizontal")
    } else if code.contains(OutCode::RIGHT) {
        (0, window.max.x, "vertical")
    } else if code.contains(OutCode::LEFT) {
        (0, window.min.x, "vertical")
    } else {
        unreachable!("Only points outside the window are moved")
    };

    // Interpolate from whichever end lies closer to the edge.
    // All operands are halved, so huge finite coordinates can't overflow.
    let moving_is_closer =
        (value / 2.0 - moving[axis] / 2.0).abs() <= (value / 2.0 - fixed[axis] / 2.0).abs();
    let (from, to) = if moving_is_closer {
        (moving, fixed)
    } else {
        (fixed, moving)
    };
    let half_delta = to / 2.0 - from / 2.0;
    if half_delta[axis] == 0.0 {
        return Err(degenerate(edge, moving, fixed));
    }
    let lambda = (value / 2.0 - from[axis] / 2.0) / half_delta[axis];
    let step = half_delta * lambda;

    let mut point = from + step + step;
    point[axis] = value;

    if !point.iter().all(|c| c.is_finite()) {
        return Err(ClipError::DegenerateInput {
            reason: format!(
                "moving ({}, {}) onto the {edge} edge at {value} left the range of f64",
                moving.x, moving.y
            ),
        });
    }
    Ok(point)
}

fn degenerate(edge: &str, moving: Point, fixed: Point) -> ClipError {
    ClipError::DegenerateInput {
        reason: format!(
            "the line through ({}, {}) and ({}, {}) is parallel to the {edge} edge it should be moved onto",
            moving.x, moving.y, fixed.x, fixed.y
        ),
    }
}
