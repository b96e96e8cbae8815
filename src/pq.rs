//! Priority queues of points ranked by distance to a reference point.
//!
//! [`MinPq`] serves the brute-force k-nearest scan, [`MaxPq`] the bounded
//! candidate set of the 2d-tree search. Both are thin wrappers over
//! [`BinaryHeap`] that cache each point's squared distance on insertion.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::Point;

/// Heap entry: a point with its squared distance to the reference.
#[derive(Debug, Clone, Copy)]
struct Ranked {
    distance: f64,
    point: Point,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.point.cmp(&other.point))
    }
}

/// Min-oriented queue: [`MinPq::pop_min`] yields the point closest to the
/// reference first.
///
/// # Examples
/// ```
/// use pointst::Point;
/// use pointst::pq::MinPq;
///
/// let mut pq = MinPq::with_capacity(Point::new(0.0, 0.0), 3);
/// pq.insert(Point::new(3.0, 0.0));
/// pq.insert(Point::new(1.0, 0.0));
/// pq.insert(Point::new(2.0, 0.0));
/// assert_eq!(pq.pop_min(), Some(Point::new(1.0, 0.0)));
/// assert_eq!(pq.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MinPq {
    reference: Point,
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl MinPq {
    /// Creates an empty queue ranking by distance to `reference`, sized for
    /// `capacity` points.
    #[must_use]
    pub fn with_capacity(reference: Point, capacity: usize) -> Self {
        Self {
            reference,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Adds a point.
    pub fn insert(&mut self, point: Point) {
        let distance = self.reference.distance_squared_to(point);
        self.heap.push(Reverse(Ranked { distance, point }));
    }

    /// Removes and returns the point closest to the reference.
    pub fn pop_min(&mut self) -> Option<Point> {
        self.heap.pop().map(|Reverse(ranked)| ranked.point)
    }

    /// Number of queued points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Max-oriented queue holding at most `bound` points.
///
/// Inserting into a full queue evicts whichever point is farthest from the
/// reference, so the queue always keeps the `bound` closest points seen.
///
/// # Examples
/// ```
/// use pointst::Point;
/// use pointst::pq::MaxPq;
///
/// let mut pq = MaxPq::new(Point::new(0.0, 0.0), 2);
/// for x in [4.0, 1.0, 3.0, 2.0] {
///     pq.insert(Point::new(x, 0.0));
/// }
/// assert!(pq.is_full());
/// assert_eq!(pq.peek_max_distance(), Some(4.0));
/// assert_eq!(pq.into_sorted_vec(), vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct MaxPq {
    reference: Point,
    bound: usize,
    heap: BinaryHeap<Ranked>,
}

impl MaxPq {
    /// Creates an empty queue keeping the `bound` points closest to `reference`.
    #[must_use]
    pub fn new(reference: Point, bound: usize) -> Self {
        Self {
            reference,
            bound,
            heap: BinaryHeap::new(),
        }
    }

    /// Adds a point, evicting the current maximum if the bound is exceeded.
    pub fn insert(&mut self, point: Point) {
        let distance = self.reference.distance_squared_to(point);
        self.heap.push(Ranked { distance, point });
        if self.heap.len() > self.bound {
            let _evicted = self.heap.pop();
        }
    }

    /// Squared distance of the farthest queued point.
    #[must_use]
    pub fn peek_max_distance(&self) -> Option<f64> {
        self.heap.peek().map(|ranked| ranked.distance)
    }

    /// Removes and returns the farthest queued point.
    pub fn pop_max(&mut self) -> Option<Point> {
        self.heap.pop().map(|ranked| ranked.point)
    }

    /// Whether the queue holds `bound` points.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.bound
    }

    /// Number of queued points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the queue, returning its points closest first.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<Point> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|ranked| ranked.point)
            .collect()
    }
}
