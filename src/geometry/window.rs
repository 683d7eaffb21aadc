use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::ClipError;
use crate::geometry::Point;

/// An axis aligned clip window
///
/// A valid window has `min.x <= max.x` and `min.y <= max.y`.
/// Use [`Window::new`] to get one which is checked,
/// the clippers check windows built by hand again before using them.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Window {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Window {
    /// Create a window from its bounds as `(x_min, y_min, x_max, y_max)`
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Window, ClipError> {
        let window = Window {
            min: Vector2::new(x_min, y_min),
            max: Vector2::new(x_max, y_max),
        };
        window.validate()?;
        Ok(window)
    }

    /// Check the window's bounds are ordered
    ///
    /// NaN bounds are rejected as well, since they can't be ordered.
    pub fn validate(&self) -> Result<(), ClipError> {
        // Written negated to catch NaN
        if !(self.min.x <= self.max.x) || !(self.min.y <= self.max.y) {
            return Err(ClipError::InvalidWindow {
                min: (self.min.x, self.min.y),
                max: (self.max.x, self.max.y),
            });
        }
        Ok(())
    }

    /// Check if a point is contained inside the window
    ///
    /// If the point lies exactly on the edge it is said to be contained.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod test {
    use crate::error::ClipError;
    use crate::geometry::{Point, Window};

    #[test]
    fn window_new_validates() {
        assert!(Window::new(0.0, 0.0, 10.0, 10.0).is_ok());
        assert!(Window::new(3.0, 3.0, 3.0, 3.0).is_ok(), "A single point is a valid window");

        assert!(matches!(
            Window::new(10.0, 0.0, 0.0, 10.0),
            Err(ClipError::InvalidWindow { .. })
        ));
        assert!(matches!(
            Window::new(0.0, 10.0, 10.0, 0.0),
            Err(ClipError::InvalidWindow { .. })
        ));
        assert!(matches!(
            Window::new(0.0, f64::NAN, 10.0, 10.0),
            Err(ClipError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn window_contains_edges() {
        let window = Window::new(0.0, 0.0, 10.0, 10.0).unwrap();

        assert!(window.contains(Point::new(5.0, 5.0)));
        assert!(window.contains(Point::new(0.0, 0.0)), "min corner");
        assert!(window.contains(Point::new(10.0, 10.0)), "max corner");
        assert!(window.contains(Point::new(10.0, 3.0)), "right edge");

        assert!(!window.contains(Point::new(10.000001, 3.0)));
        assert!(!window.contains(Point::new(-0.5, 3.0)));
        assert!(!window.contains(Point::new(3.0, 11.0)));
    }
}
