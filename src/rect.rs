//! Axis-aligned rectangle used for range queries and 2d-tree regions.

use std::fmt;

use crate::point::{Axis, Point};

/// Axis-aligned rectangle `[x_min, x_max] x [y_min, y_max]`.
///
/// Bounds are inclusive. `x_min <= x_max` and `y_min <= y_max` are expected
/// but not checked; zero-width or zero-height rectangles are legal.
///
/// # Examples
/// ```
/// use pointst::{Point, Rect};
///
/// let rect = Rect::new(0.0, 0.0, 2.0, 1.0);
/// assert!(rect.contains(Point::new(2.0, 1.0)));
/// assert_eq!(rect.distance_squared_to(Point::new(5.0, 5.0)), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Rect {
    /// Creates a rectangle from its bounds.
    #[inline]
    #[must_use]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The whole plane, unbounded on every side.
    #[inline]
    #[must_use]
    pub fn everything() -> Self {
        Self::new(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::INFINITY,
        )
    }

    /// Minimum x bound.
    #[inline]
    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Minimum y bound.
    #[inline]
    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Maximum x bound.
    #[inline]
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Maximum y bound.
    #[inline]
    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether no bound is NaN.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !(self.x_min.is_nan()
            || self.y_min.is_nan()
            || self.x_max.is_nan()
            || self.y_max.is_nan())
    }

    /// Whether `point` lies inside or on the boundary.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x() >= self.x_min
            && point.x() <= self.x_max
            && point.y() >= self.y_min
            && point.y() <= self.y_max
    }

    /// Whether the two rectangles share at least one point.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_max >= other.x_min
            && self.y_max >= other.y_min
            && other.x_max >= self.x_min
            && other.y_max >= self.y_min
    }

    /// Squared distance from `point` to the closest point of the rectangle.
    ///
    /// Zero when the point is inside or on the boundary.
    #[inline]
    #[must_use]
    pub fn distance_squared_to(&self, point: Point) -> f64 {
        let dx = axis_distance(point.x(), self.x_min, self.x_max);
        let dy = axis_distance(point.y(), self.y_min, self.y_max);
        dx * dx + dy * dy
    }

    /// Distance from `point` to the closest point of the rectangle.
    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// Cuts the rectangle at `at` on `axis` into its lower and upper halves.
    ///
    /// The halves share the boundary line at the cut.
    pub(crate) fn split(&self, axis: Axis, at: f64) -> (Self, Self) {
        match axis {
            Axis::X => (
                Self::new(self.x_min, self.y_min, at, self.y_max),
                Self::new(at, self.y_min, self.x_max, self.y_max),
            ),
            Axis::Y => (
                Self::new(self.x_min, self.y_min, self.x_max, at),
                Self::new(self.x_min, at, self.x_max, self.y_max),
            ),
        }
    }
}

/// Distance along an axis, zero inside `[min, max]`
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
