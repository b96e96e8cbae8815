//! # pointst - symbol tables keyed by 2D points
//!
//! Two interchangeable implementations of [`PointTable`]:
//!
//! - [`KdTreePointTable`]: a 2d-tree that prunes subtrees with the bounding
//!   rectangle of each node during range and nearest-neighbor searches
//! - [`BrutePointTable`]: an ordered map answering queries by full scans,
//!   kept as a reference oracle
//!
//! ## Quick Start
//!
//! ```rust
//! use pointst::prelude::*;
//!
//! # fn main() -> pointst::Result<()> {
//! let mut table = KdTreePointTable::new();
//! table.put(Point::new(0.0, 0.0), "A")?;
//! table.put(Point::new(1.0, 0.0), "B")?;
//! table.put(Point::new(0.0, 1.0), "C")?;
//!
//! // Points inside an axis-aligned rectangle (boundary included)
//! let hits = table.range(&Rect::new(-0.5, -0.5, 0.5, 0.5))?;
//! assert_eq!(hits, vec![Point::new(0.0, 0.0)]);
//!
//! // Closest stored point other than the query itself
//! assert_eq!(table.nearest(Point::new(0.1, 0.1))?, Some(Point::new(0.0, 0.0)));
//!
//! // k closest, closest first
//! let two = table.nearest_k(Point::new(0.1, 0.1), 2)?;
//! assert_eq!(two.len(), 2);
//! assert_eq!(two[0], Point::new(0.0, 0.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## How It Works
//!
//! The 2d-tree splits the plane at each stored point, on x at even depths
//! and on y at odd depths. Every node remembers the rectangle its subtree
//! covers, so a query can skip a subtree whose rectangle misses the query
//! rectangle or lies farther than the best candidate found so far.
//!
//! The tree is never rebalanced: inserting points in sorted order yields a
//! tree as deep as the number of points.
//!
//! Points with NaN or infinite coordinates, and rectangles with a NaN bound,
//! are rejected with [`PointTableError`]; the table is left unchanged.
//! Rectangles may be unbounded.

mod brute;
mod error;
mod kdtree;
mod point;
pub mod pq;
pub mod prelude;
mod rect;
mod table;

pub use brute::BrutePointTable;
pub use error::{PointTableError, Result};
pub use kdtree::KdTreePointTable;
pub use point::Point;
pub use rect::Rect;
pub use table::{PointTable, Points};

#[cfg(test)]
mod component_tests;
