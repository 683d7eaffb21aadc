pub mod outcode;
pub mod window;

pub use outcode::OutCode;
pub use window::Window;

use serde::{Deserialize, Serialize};

pub type Point = nalgebra::Vector2<f64>;

/// An ordered pair of points
///
/// The order only matters for the intermediate steps of a clipper,
/// the visible part of a segment doesn't depend on it.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Segment {
        Segment { p1, p2 }
    }

    /// Shorthand for `Segment::new(Point::new(x1, y1), Point::new(x2, y2))`
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// The point halfway between both ends
    ///
    /// Both ends are halved before adding them, so huge coordinates don't overflow.
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p1 / 2.0 + self.p2 / 2.0
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// The same segment walked in the opposite direction
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.p2, self.p1)
    }
}

#[cfg(test)]
mod test {
    use crate::geometry::{Point, Segment};

    #[test]
    fn segment_midpoint() {
        let segment = Segment::from_coords(-5.0, 5.0, 5.0, 7.0);
        assert_eq!(segment.midpoint(), Point::new(0.0, 6.0));
        assert_eq!(segment.reversed().midpoint(), Point::new(0.0, 6.0));

        let huge = Segment::from_coords(f64::MAX, 1.0, f64::MAX, 3.0);
        assert_eq!(huge.midpoint(), Point::new(f64::MAX, 2.0));
    }

    #[test]
    fn segment_length() {
        assert_eq!(Segment::from_coords(0.0, 0.0, 3.0, 4.0).length(), 5.0);
        assert_eq!(Segment::from_coords(5.0, 5.0, 5.0, 5.0).length(), 0.0);
    }
}
