//! The capability shared by both point tables.

use crate::{Point, Rect, Result};

/// Lazy sequence of the points stored in a table.
pub type Points<'a> = Box<dyn Iterator<Item = Point> + 'a>;

/// Symbol table keyed by [`Point`].
///
/// Implemented by [`BrutePointTable`] and [`KdTreePointTable`]; callers can
/// hold either behind `dyn PointTable<V>`.
///
/// Operations that take a point reject NaN or infinite coordinates, and
/// `range` rejects a rectangle with a NaN bound, with [`PointTableError`];
/// the table is left untouched. Everything else, such as unknown keys, empty
/// tables or `k == 0`, resolves to an empty result.
///
/// [`BrutePointTable`]: crate::BrutePointTable
/// [`KdTreePointTable`]: crate::KdTreePointTable
/// [`PointTableError`]: crate::PointTableError
///
/// # Examples
/// ```
/// use pointst::{BrutePointTable, KdTreePointTable, Point, PointTable, Rect};
///
/// # fn main() -> pointst::Result<()> {
/// let tables: Vec<Box<dyn PointTable<&str>>> = vec![
///     Box::new(BrutePointTable::new()),
///     Box::new(KdTreePointTable::new()),
/// ];
/// for mut table in tables {
///     table.put(Point::new(0.0, 0.0), "A")?;
///     table.put(Point::new(1.0, 0.0), "B")?;
///     table.put(Point::new(0.0, 1.0), "C")?;
///
///     assert_eq!(table.len(), 3);
///     assert_eq!(table.get(Point::new(1.0, 0.0))?, Some(&"B"));
///     assert_eq!(
///         table.range(&Rect::new(-0.5, -0.5, 0.5, 0.5))?,
///         vec![Point::new(0.0, 0.0)]
///     );
///     assert_eq!(table.nearest(Point::new(0.1, 0.1))?, Some(Point::new(0.0, 0.0)));
/// }
/// # Ok(())
/// # }
/// ```
pub trait PointTable<V> {
    /// Whether the table holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// Associates `value` with `point`, replacing any previous value.
    ///
    /// # Errors
    /// [`PointTableError::InvalidPoint`](crate::PointTableError::InvalidPoint)
    /// if `point` has a NaN or infinite coordinate.
    fn put(&mut self, point: Point, value: V) -> Result<()>;

    /// The value stored for `point`, if any.
    ///
    /// # Errors
    /// [`PointTableError::InvalidPoint`](crate::PointTableError::InvalidPoint)
    /// if `point` has a NaN or infinite coordinate.
    fn get(&self, point: Point) -> Result<Option<&V>>;

    /// Whether `point` is a key of the table.
    ///
    /// # Errors
    /// [`PointTableError::InvalidPoint`](crate::PointTableError::InvalidPoint)
    /// if `point` has a NaN or infinite coordinate.
    fn contains(&self, point: Point) -> Result<bool> {
        Ok(self.get(point)?.is_some())
    }

    /// Every stored point, each exactly once, in an unspecified order.
    fn points(&self) -> Points<'_>;

    /// Stored points inside `rect`, boundary included.
    ///
    /// # Errors
    /// [`PointTableError::InvalidRect`](crate::PointTableError::InvalidRect)
    /// if `rect` has a NaN bound.
    fn range(&self, rect: &Rect) -> Result<Vec<Point>>;

    /// The stored point closest to `point`, other than `point` itself.
    ///
    /// Ties resolve to any of the closest points.
    ///
    /// # Errors
    /// [`PointTableError::InvalidPoint`](crate::PointTableError::InvalidPoint)
    /// if `point` has a NaN or infinite coordinate.
    fn nearest(&self, point: Point) -> Result<Option<Point>>;

    /// Up to `k` stored points closest to `point`, excluding `point` itself,
    /// closest first.
    ///
    /// # Errors
    /// [`PointTableError::InvalidPoint`](crate::PointTableError::InvalidPoint)
    /// if `point` has a NaN or infinite coordinate.
    fn nearest_k(&self, point: Point, k: usize) -> Result<Vec<Point>>;
}
