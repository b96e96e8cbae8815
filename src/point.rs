//! Immutable 2D point used as the table key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Splitting axis of a 2d-tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axis used by the next tree level.
    #[inline]
    pub(crate) fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// A point in the plane.
///
/// Equality is exact coordinate equality. The natural order compares `x`
/// first and `y` second; it is the key order of [`BrutePointTable`].
///
/// [`BrutePointTable`]: crate::BrutePointTable
///
/// # Examples
/// ```
/// use pointst::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance_squared_to(b), 25.0);
/// assert_eq!(a.distance_to(b), 5.0);
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        // -0.0 + 0.0 == +0.0, so Eq, Hash and Ord see a single zero
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Whether both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_squared_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// Comparator ranking points by their distance to `self`.
    ///
    /// ```
    /// use pointst::Point;
    ///
    /// let mut points = vec![Point::new(5.0, 5.0), Point::new(1.0, 0.0), Point::new(2.0, 2.0)];
    /// points.sort_by(Point::new(0.0, 0.0).distance_order());
    /// assert_eq!(points[0], Point::new(1.0, 0.0));
    /// assert_eq!(points[2], Point::new(5.0, 5.0));
    /// ```
    pub fn distance_order(self) -> impl Fn(&Self, &Self) -> Ordering {
        move |a, b| {
            self.distance_squared_to(*a)
                .total_cmp(&self.distance_squared_to(*b))
        }
    }

    #[inline]
    pub(crate) fn coord(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
