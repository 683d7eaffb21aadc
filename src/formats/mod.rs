//! Data written by the command line tool
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::clip::{Algorithm, ClipResult};
use crate::geometry::{Segment, Window};

/// What a presenter needs to show a clip's outcome
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Report {
    pub algorithm: Algorithm,
    pub window: Window,
    pub visible: bool,

    /// `None` if the segment is not visible
    pub segment: Option<Segment>,
}

impl Report {
    pub fn new(algorithm: Algorithm, window: Window, result: ClipResult) -> Self {
        Report {
            algorithm,
            window,
            visible: result.is_visible(),
            segment: result.segment(),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.segment {
            Some(Segment { p1, p2 }) => write!(
                f,
                "visible: ({}, {}) - ({}, {})",
                p1.x, p1.y, p2.x, p2.y
            ),
            None => f.write_str("segment not visible"),
        }
    }
}
