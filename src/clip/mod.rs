//! Clip a single segment against a [`Window`]
//!
//! Two algorithms are available, both as free functions
//! and as implementors of [`Clipper`]:
//! - [`cohen_sutherland`] moves endpoints onto the window's edges using region codes
//! - [`midpoint`] bisects the segment until its midpoint lies inside the window

pub mod cohen_sutherland;
pub mod midpoint;

pub use cohen_sutherland::{cohen_sutherland_clip, CohenSutherland};
pub use midpoint::{midpoint_clip, Midpoint, MidpointConfig};

use serde::{Deserialize, Serialize};

use crate::error::ClipError;
use crate::geometry::{Segment, Window};

/// Outcome of clipping a segment
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum ClipResult {
    /// (Part of) the segment lies inside the window
    Visible(Segment),

    /// Nothing of the segment lies inside the window
    NotVisible,
}

impl ClipResult {
    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self, ClipResult::Visible(_))
    }

    /// Get the visible segment, if any
    #[inline]
    pub fn segment(&self) -> Option<Segment> {
        match self {
            ClipResult::Visible(segment) => Some(*segment),
            ClipResult::NotVisible => None,
        }
    }
}

/// A [`ClipResult`] together with the number of loop iterations it took
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Trace {
    pub result: ClipResult,
    pub iterations: u32,
}

pub trait Clipper {
    /// Clip a segment and report how many iterations were required
    fn clip_traced(&self, segment: Segment, window: &Window) -> Result<Trace, ClipError>;

    /// Clip a segment against a window
    fn clip(&self, segment: Segment, window: &Window) -> Result<ClipResult, ClipError> {
        self.clip_traced(segment, window).map(|trace| trace.result)
    }
}

/// Reject inputs no clipper can produce meaningful geometry for
pub(crate) fn check_inputs(segment: &Segment, window: &Window) -> Result<(), ClipError> {
    window.validate()?;
    let finite = segment.p1.iter().chain(segment.p2.iter()).all(|c| c.is_finite());
    if !finite {
        return Err(ClipError::DegenerateInput {
            reason: format!("segment {segment:?} has a non-finite coordinate"),
        });
    }
    Ok(())
}

/// Selects a clipper by name
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    CohenSutherland,
    Midpoint,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::CohenSutherland => "cohen-sutherland",
            Algorithm::Midpoint => "midpoint",
        }
    }

    /// Run the selected clipper
    ///
    /// `midpoint` is ignored by the Cohen-Sutherland clipper.
    pub fn clip_traced(
        &self,
        segment: Segment,
        window: &Window,
        midpoint: MidpointConfig,
    ) -> Result<Trace, ClipError> {
        match self {
            Algorithm::CohenSutherland => CohenSutherland.clip_traced(segment, window),
            Algorithm::Midpoint => Midpoint::new(midpoint).clip_traced(segment, window),
        }
    }

    pub fn clip(
        &self,
        segment: Segment,
        window: &Window,
        midpoint: MidpointConfig,
    ) -> Result<ClipResult, ClipError> {
        self.clip_traced(segment, window, midpoint)
            .map(|trace| trace.result)
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "cohen-sutherland" => Ok(Algorithm::CohenSutherland),
            "midpoint" => Ok(Algorithm::Midpoint),
            _ => Err(format!("Unknown algorithm: {name}")),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::clip::{Algorithm, ClipResult, MidpointConfig};
    use crate::geometry::{Segment, Window};

    fn window() -> Window {
        Window::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    /// Segments which lie completely inside or completely on one side of the window
    static TRIVIAL: [(f64, f64, f64, f64, bool); 8] = [
        (2.0, 2.0, 8.0, 8.0, true),
        (0.0, 0.0, 10.0, 10.0, true),
        (5.0, 5.0, 5.0, 5.0, true),
        (0.0, 10.0, 10.0, 10.0, true),
        (-5.0, -5.0, -1.0, -1.0, false),
        (-5.0, 2.0, -1.0, 8.0, false),
        (11.0, 0.0, 20.0, 10.0, false),
        (3.0, 12.0, 7.0, 100.0, false),
    ];

    #[test]
    fn algorithms_agree_on_trivial_segments() {
        let window = window();
        for algorithm in [Algorithm::CohenSutherland, Algorithm::Midpoint] {
            for (x1, y1, x2, y2, visible) in TRIVIAL {
                let segment = Segment::from_coords(x1, y1, x2, y2);
                let result = algorithm
                    .clip(segment, &window, MidpointConfig::default())
                    .unwrap();
                if visible {
                    assert_eq!(
                        result,
                        ClipResult::Visible(segment),
                        "{} changed {segment:?}",
                        algorithm.name()
                    );
                } else {
                    assert_eq!(
                        result,
                        ClipResult::NotVisible,
                        "{} accepted {segment:?}",
                        algorithm.name()
                    );
                }
            }
        }
    }

    #[test]
    fn algorithm_names() {
        for algorithm in [Algorithm::CohenSutherland, Algorithm::Midpoint] {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert!("liang-barsky".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::default(), Algorithm::CohenSutherland);
    }

    #[test]
    fn algorithm_serde_names() {
        let algorithm: Algorithm = serde_json::from_str("\"midpoint\"").unwrap();
        assert_eq!(algorithm, Algorithm::Midpoint);
        assert_eq!(
            serde_json::to_string(&Algorithm::CohenSutherland).unwrap(),
            "\"cohen-sutherland\""
        );
    }

    #[test]
    fn clip_result_accessors() {
        let segment = Segment::from_coords(1.0, 2.0, 3.0, 4.0);
        assert!(ClipResult::Visible(segment).is_visible());
        assert_eq!(ClipResult::Visible(segment).segment(), Some(segment));
        assert!(!ClipResult::NotVisible.is_visible());
        assert_eq!(ClipResult::NotVisible.segment(), None);
    }
}
