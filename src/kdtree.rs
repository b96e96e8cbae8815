//! 2d-tree point table.
//!
//! Each node stores one point and the rectangle its subtree covers. The
//! root splits the plane on x, its children on y, and so on, alternating by
//! depth. A node's `lower` child holds points strictly below the node's
//! coordinate on the active axis, its `upper` child the points at or above.
//!
//! Range and nearest-neighbor queries prune whole subtrees with the node
//! rectangles: a subtree whose rectangle misses the query rectangle, or lies
//! farther away than the best candidate so far, cannot contribute.
//!
//! No rebalancing is done. Height, and with it query cost, depends on
//! insertion order: `O(log n)` for well-spread input, `O(n)` for sorted
//! input. Every walk is a loop or runs off an explicit stack, so a tall tree
//! costs time but never call-stack depth.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{check_point, check_rect};
use crate::point::Axis;
use crate::pq::MaxPq;
use crate::table::{PointTable, Points};
use crate::{Point, Rect, Result};

type Link<V> = Option<Box<Node<V>>>;

#[derive(Debug)]
struct Node<V> {
    point: Point,
    value: V,
    /// Region assigned to this subtree by the ancestors' splits
    rect: Rect,
    lower: Link<V>,
    upper: Link<V>,
}

impl<V> Node<V> {
    fn leaf(point: Point, value: V, rect: Rect) -> Self {
        Self {
            point,
            value,
            rect,
            lower: None,
            upper: None,
        }
    }

    /// Child on the same side of the split as `point`, then the other one.
    #[inline]
    fn children_toward(&self, point: Point, axis: Axis) -> (Option<&Self>, Option<&Self>) {
        if point.coord(axis) < self.point.coord(axis) {
            (self.lower.as_deref(), self.upper.as_deref())
        } else {
            (self.upper.as_deref(), self.lower.as_deref())
        }
    }
}

/// Point table backed by a 2d-tree.
///
/// # Examples
/// ```
/// use pointst::{KdTreePointTable, Point, PointTable, Rect};
///
/// # fn main() -> pointst::Result<()> {
/// let mut table = KdTreePointTable::new();
/// for (i, (x, y)) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)]
///     .into_iter()
///     .enumerate()
/// {
///     table.put(Point::new(x, y), i)?;
/// }
///
/// assert_eq!(table.len(), 5);
/// assert_eq!(table.height(), 3);
/// assert_eq!(table.nearest(Point::new(0.8, 0.5))?, Some(Point::new(0.9, 0.6)));
///
/// let mut inside = table.range(&Rect::new(0.3, 0.1, 0.8, 0.5))?;
/// inside.sort();
/// assert_eq!(inside, vec![Point::new(0.5, 0.4), Point::new(0.7, 0.2)]);
/// # Ok(())
/// # }
/// ```
pub struct KdTreePointTable<V> {
    root: Link<V>,
    len: usize,
}

impl<V> KdTreePointTable<V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<V>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.lower.as_deref().map(|child| (child, depth + 1)));
            stack.extend(node.upper.as_deref().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Mutable access to the value stored for `point`.
    ///
    /// # Errors
    /// [`PointTableError::InvalidPoint`](crate::PointTableError::InvalidPoint)
    /// if `point` has a NaN or infinite coordinate.
    pub fn get_mut(&mut self, point: Point) -> Result<Option<&mut V>> {
        check_point("get_mut", point)?;
        let mut link = &mut self.root;
        let mut axis = Axis::X;
        while let Some(node) = link {
            if node.point == point {
                return Ok(Some(&mut node.value));
            }
            link = if point.coord(axis) < node.point.coord(axis) {
                &mut node.lower
            } else {
                &mut node.upper
            };
            axis = axis.flip();
        }
        Ok(None)
    }

    /// Walks down from the root, narrowing the region at every split, and
    /// either overwrites the value at `point` or hangs a new leaf.
    ///
    /// Returns whether a node was created.
    fn insert(&mut self, point: Point, value: V) -> bool {
        let mut link = &mut self.root;
        let mut rect = Rect::everything();
        let mut axis = Axis::X;
        let mut depth = 0_usize;
        while let Some(node) = link {
            if node.point == point {
                log::trace!("put: replaced value at {point}");
                node.value = value;
                return false;
            }
            let split = node.point.coord(axis);
            let (lower, upper) = rect.split(axis, split);
            if point.coord(axis) < split {
                link = &mut node.lower;
                rect = lower;
            } else {
                link = &mut node.upper;
                rect = upper;
            }
            axis = axis.flip();
            depth += 1;
        }
        log::trace!("put: new node {point} at depth {depth} in {rect}");
        *link = Some(Box::new(Node::leaf(point, value, rect)));
        true
    }

    fn nodes(&self) -> BreadthFirst<'_, V> {
        BreadthFirst {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<V> Default for KdTreePointTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for KdTreePointTable<V> {
    fn clone(&self) -> Self {
        // pre-order listing, rebuilt back to front: a node's subtrees are
        // finished and on top of `built` by the time the node itself comes up
        let mut order = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            order.push(node);
            pending.extend(node.upper.as_deref());
            pending.extend(node.lower.as_deref());
        }

        let mut built: Vec<Box<Node<V>>> = Vec::new();
        for node in order.into_iter().rev() {
            let mut copy = Box::new(Node::leaf(node.point, node.value.clone(), node.rect));
            if node.lower.is_some() {
                copy.lower = built.pop();
            }
            if node.upper.is_some() {
                copy.upper = built.pop();
            }
            built.push(copy);
        }
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<V> Drop for KdTreePointTable<V> {
    fn drop(&mut self) {
        // detach children before each box drops, or a path-shaped tree
        // would unwind through one nested drop per level
        let mut stack: Vec<Box<Node<V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.lower.take());
            stack.extend(node.upper.take());
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for KdTreePointTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes().map(|node| (node.point, &node.value)))
            .finish()
    }
}

impl<V> PointTable<V> for KdTreePointTable<V> {
    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, point: Point, value: V) -> Result<()> {
        check_point("put", point)?;
        if self.insert(point, value) {
            self.len += 1;
        }
        Ok(())
    }

    fn get(&self, point: Point) -> Result<Option<&V>> {
        check_point("get", point)?;
        let mut link = &self.root;
        let mut axis = Axis::X;
        while let Some(node) = link {
            if node.point == point {
                return Ok(Some(&node.value));
            }
            link = if point.coord(axis) < node.point.coord(axis) {
                &node.lower
            } else {
                &node.upper
            };
            axis = axis.flip();
        }
        Ok(None)
    }

    fn points(&self) -> Points<'_> {
        Box::new(self.nodes().map(|node| node.point))
    }

    fn range(&self, rect: &Rect) -> Result<Vec<Point>> {
        check_rect("range", rect)?;
        let mut results = Vec::new();
        let mut visited = 0_usize;
        let mut stack: Vec<&Node<V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if !rect.intersects(&node.rect) {
                continue;
            }
            visited += 1;
            if rect.contains(node.point) {
                results.push(node.point);
            }
            stack.extend(node.upper.as_deref());
            stack.extend(node.lower.as_deref());
        }
        log::debug!("range: {} hits, visited {visited} of {} nodes", results.len(), self.len);
        Ok(results)
    }

    fn nearest(&self, point: Point) -> Result<Option<Point>> {
        check_point("nearest", point)?;
        let mut best = None;
        let mut best_distance = f64::INFINITY;
        let mut visited = 0_usize;
        let mut stack: Vec<(&Node<V>, Axis)> =
            self.root.as_deref().map(|root| (root, Axis::X)).into_iter().collect();
        while let Some((node, axis)) = stack.pop() {
            // the bound may have tightened since this node was pushed
            if node.rect.distance_squared_to(point) > best_distance {
                continue;
            }
            visited += 1;
            if node.point != point {
                let distance = node.point.distance_squared_to(point);
                if best.is_none() || distance < best_distance {
                    best_distance = distance;
                    best = Some(node.point);
                }
            }
            // far side goes on the stack first so the near side pops first
            let (near, far) = node.children_toward(point, axis);
            stack.extend(far.map(|child| (child, axis.flip())));
            stack.extend(near.map(|child| (child, axis.flip())));
        }
        log::debug!("nearest: visited {visited} of {} nodes", self.len);
        Ok(best)
    }

    fn nearest_k(&self, point: Point, k: usize) -> Result<Vec<Point>> {
        check_point("nearest_k", point)?;
        if k == 0 {
            return Ok(Vec::new());
        }
        let mut pq = MaxPq::new(point, k);
        let mut stack: Vec<(&Node<V>, Axis)> =
            self.root.as_deref().map(|root| (root, Axis::X)).into_iter().collect();
        while let Some((node, axis)) = stack.pop() {
            if pq.is_full()
                && pq
                    .peek_max_distance()
                    .is_some_and(|max| node.rect.distance_squared_to(point) > max)
            {
                continue;
            }
            if node.point != point {
                pq.insert(node.point);
            }
            let (near, far) = node.children_toward(point, axis);
            stack.extend(far.map(|child| (child, axis.flip())));
            stack.extend(near.map(|child| (child, axis.flip())));
        }
        Ok(pq.into_sorted_vec())
    }
}

/// Level-order walk over the nodes, driven by a FIFO queue.
#[derive(Debug)]
struct BreadthFirst<'a, V> {
    queue: VecDeque<&'a Node<V>>,
}

impl<'a, V> Iterator for BreadthFirst<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<&'a Node<V>> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.lower.as_deref());
        self.queue.extend(node.upper.as_deref());
        Some(node)
    }
}

impl<V> Extend<(Point, V)> for KdTreePointTable<V> {
    fn extend<I: IntoIterator<Item = (Point, V)>>(&mut self, iter: I) {
        for (point, value) in iter {
            if let Err(err) = self.put(point, value) {
                log::debug!("extend: skipped entry, {err}");
            }
        }
    }
}

impl<V> FromIterator<(Point, V)> for KdTreePointTable<V> {
    fn from_iter<I: IntoIterator<Item = (Point, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
