//! Midpoint subdivision clipping
//!
//! The segment is bisected repeatedly.
//! Whenever its midpoint lies outside the window,
//! the endpoint which lies outside is replaced by the midpoint.
//! Once the midpoint lies inside, the *current* endpoints are returned as they are.
//!
//! Note that this is an approximation: the returned segment is not cut at the window's edges
//! and may still stick out of the window by up to half of its length.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::clip::{check_inputs, ClipResult, Clipper, Trace};
use crate::error::ClipError;
use crate::geometry::{Segment, Window};

/// Bounds for the bisection
///
/// Bisecting towards an endpoint which lies exactly on an edge
/// only stops once the floating point midpoint happens to land on that edge,
/// so the number of steps has to be limited.
/// When a bound is hit, the segment refined so far is kept if one of its ends is inside.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MidpointConfig {
    /// Maximum number of bisection steps
    pub max_depth: usize,

    /// Stop bisecting once the segment got shorter than this
    pub tolerance: f64,
}

impl Default for MidpointConfig {
    fn default() -> Self {
        Self {
            // Halving a span from f64::MAX down to the smallest subnormal takes 2098 steps
            max_depth: 2100,
            tolerance: 0.0,
        }
    }
}

impl MidpointConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<(), ClipError> {
        if self.max_depth == 0 {
            return Err(ClipError::InvalidConfig(
                "Midpoint clipping requires a max depth of at least 1.".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClipError::InvalidConfig(format!(
                "Midpoint tolerance must be a finite, non-negative number, got {}.",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// The midpoint clipper as [`Clipper`]
#[derive(Copy, Clone, Debug, Default)]
pub struct Midpoint {
    pub config: MidpointConfig,
}

impl Midpoint {
    pub fn new(config: MidpointConfig) -> Self {
        Midpoint { config }
    }
}

impl Clipper for Midpoint {
    fn clip_traced(&self, segment: Segment, window: &Window) -> Result<Trace, ClipError> {
        self.config.validate()?;
        check_inputs(&segment, window)?;

        let mut current = segment;
        for depth in 0..self.config.max_depth {
            let iterations = depth as u32 + 1;
            let mid = current.midpoint();

            if window.contains(mid) {
                return Ok(Trace {
                    result: ClipResult::Visible(current),
                    iterations,
                });
            }

            let p1_inside = window.contains(current.p1);
            let p2_inside = window.contains(current.p2);
            if !p1_inside && !p2_inside {
                return Ok(Trace {
                    result: ClipResult::NotVisible,
                    iterations,
                });
            }

            // Drop the half which lies outside
            if !p1_inside {
                current.p1 = mid;
            } else {
                current.p2 = mid;
            }

            if current.length() < self.config.tolerance {
                debug!(
                    "Midpoint clipping of {:?} shrank below the tolerance {} after {} steps",
                    segment, self.config.tolerance, iterations
                );
                return Ok(Trace {
                    result: refined_so_far(current, window),
                    iterations,
                });
            }
        }

        debug!(
            "Midpoint clipping of {:?} didn't settle within {} steps",
            segment, self.config.max_depth
        );
        Ok(Trace {
            result: refined_so_far(current, window),
            iterations: self.config.max_depth as u32,
        })
    }
}

/// Result for a bisection which was stopped early
fn refined_so_far(current: Segment, window: &Window) -> ClipResult {
    if window.contains(current.p1) || window.contains(current.p2) {
        ClipResult::Visible(current)
    } else {
        ClipResult::NotVisible
    }
}

/// Clip a segment using [`Midpoint`] with the default [`MidpointConfig`]
pub fn midpoint_clip(segment: Segment, window: &Window) -> Result<ClipResult, ClipError> {
    Midpoint::default().clip(segment, window)
}
