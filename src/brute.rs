//! Brute-force point table: an ordered map plus linear scans.
//!
//! Kept as the reference oracle for [`KdTreePointTable`](crate::KdTreePointTable).

use std::collections::BTreeMap;

use crate::error::{check_point, check_rect};
use crate::pq::MinPq;
use crate::table::{PointTable, Points};
use crate::{Point, Rect, Result};

/// Point table backed by a [`BTreeMap`] in the natural point order.
///
/// Lookups are `O(log n)`; `range` and `nearest` scan every point, and
/// `nearest_k` ranks every point in `O(n log n)`.
///
/// # Examples
/// ```
/// use pointst::{BrutePointTable, Point, PointTable};
///
/// # fn main() -> pointst::Result<()> {
/// let mut table = BrutePointTable::new();
/// table.put(Point::new(2.0, 1.0), 'a')?;
/// table.put(Point::new(0.0, 5.0), 'b')?;
///
/// let keys: Vec<Point> = table.points().collect();
/// assert_eq!(keys, vec![Point::new(0.0, 5.0), Point::new(2.0, 1.0)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BrutePointTable<V> {
    map: BTreeMap<Point, V>,
}

impl<V> BrutePointTable<V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Mutable access to the value stored for `point`.
    ///
    /// # Errors
    /// [`PointTableError::InvalidPoint`](crate::PointTableError::InvalidPoint)
    /// if `point` has a NaN or infinite coordinate.
    pub fn get_mut(&mut self, point: Point) -> Result<Option<&mut V>> {
        check_point("get_mut", point)?;
        Ok(self.map.get_mut(&point))
    }
}

impl<V> Default for BrutePointTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PointTable<V> for BrutePointTable<V> {
    fn len(&self) -> usize {
        self.map.len()
    }

    fn put(&mut self, point: Point, value: V) -> Result<()> {
        check_point("put", point)?;
        if self.map.insert(point, value).is_some() {
            log::trace!("put: replaced value at {point}");
        }
        Ok(())
    }

    fn get(&self, point: Point) -> Result<Option<&V>> {
        check_point("get", point)?;
        Ok(self.map.get(&point))
    }

    fn contains(&self, point: Point) -> Result<bool> {
        check_point("contains", point)?;
        Ok(self.map.contains_key(&point))
    }

    fn points(&self) -> Points<'_> {
        Box::new(self.map.keys().copied())
    }

    fn range(&self, rect: &Rect) -> Result<Vec<Point>> {
        check_rect("range", rect)?;
        Ok(self.points().filter(|&p| rect.contains(p)).collect())
    }

    fn nearest(&self, point: Point) -> Result<Option<Point>> {
        check_point("nearest", point)?;
        let mut best = None;
        let mut best_distance = f64::INFINITY;
        for candidate in self.points() {
            let distance = point.distance_squared_to(candidate);
            // squares of far-apart coordinates overflow to infinity, which
            // must still beat having no candidate at all
            if candidate != point && (best.is_none() || distance < best_distance) {
                best_distance = distance;
                best = Some(candidate);
            }
        }
        Ok(best)
    }

    fn nearest_k(&self, point: Point, k: usize) -> Result<Vec<Point>> {
        check_point("nearest_k", point)?;
        if k == 0 {
            return Ok(Vec::new());
        }
        let mut pq = MinPq::with_capacity(point, self.map.len());
        for candidate in self.points().filter(|&p| p != point) {
            pq.insert(candidate);
        }
        let mut results = Vec::with_capacity(k.min(pq.len()));
        while results.len() < k {
            match pq.pop_min() {
                Some(p) => results.push(p),
                None => break,
            }
        }
        Ok(results)
    }
}

impl<V> Extend<(Point, V)> for BrutePointTable<V> {
    fn extend<I: IntoIterator<Item = (Point, V)>>(&mut self, iter: I) {
        for (point, value) in iter {
            if let Err(err) = self.put(point, value) {
                log::debug!("extend: skipped entry, {err}");
            }
        }
    }
}

impl<V> FromIterator<(Point, V)> for BrutePointTable<V> {
    fn from_iter<I: IntoIterator<Item = (Point, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
