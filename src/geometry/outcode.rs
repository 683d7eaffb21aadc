//! Region codes used by the Cohen-Sutherland clipper
use std::fmt::{Debug, Formatter};
use std::ops::{BitAnd, BitOr};

use crate::geometry::{Point, Window};

/// Set of the window's sides a point lies outside of
///
/// A point can't be both [`LEFT`](OutCode::LEFT) and [`RIGHT`](OutCode::RIGHT)
/// (or [`BOTTOM`](OutCode::BOTTOM) and [`TOP`](OutCode::TOP)),
/// but one flag from each axis may be set for points in the corner regions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: OutCode = OutCode(0);
    pub const LEFT: OutCode = OutCode(1);
    pub const RIGHT: OutCode = OutCode(2);
    pub const BOTTOM: OutCode = OutCode(4);
    pub const TOP: OutCode = OutCode(8);

    /// Classify a point against a window
    ///
    /// Points exactly on an edge count as inside on that axis.
    pub fn compute(point: Point, window: &Window) -> OutCode {
        let mut code = OutCode::INSIDE;
        if point.x < window.min.x {
            code = code | OutCode::LEFT;
        } else if point.x > window.max.x {
            code = code | OutCode::RIGHT;
        }
        if point.y < window.min.y {
            code = code | OutCode::BOTTOM;
        } else if point.y > window.max.y {
            code = code | OutCode::TOP;
        }
        code
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Check if all flags of `other` are set in `self`
    #[inline]
    pub fn contains(self, other: OutCode) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitAnd for OutCode {
    type Output = OutCode;

    fn bitand(self, rhs: OutCode) -> OutCode {
        OutCode(self.0 & rhs.0)
    }
}

impl BitOr for OutCode {
    type Output = OutCode;

    fn bitor(self, rhs: OutCode) -> OutCode {
        OutCode(self.0 | rhs.0)
    }
}

// Print the flags' names instead of a number
impl Debug for OutCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_inside() {
            return f.write_str("INSIDE");
        }
        let names = [
            (OutCode::LEFT, "LEFT"),
            (OutCode::RIGHT, "RIGHT"),
            (OutCode::BOTTOM, "BOTTOM"),
            (OutCode::TOP, "TOP"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
