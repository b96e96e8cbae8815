//! Error type shared by both point tables.

use crate::{Point, Rect};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PointTableError>;

/// Invalid-argument conditions raised by table operations.
///
/// An operation that returns one of these made no change to the table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PointTableError {
    /// A point argument had a NaN or infinite coordinate.
    #[error("{op}: invalid point ({x}, {y})")]
    InvalidPoint {
        /// Operation that rejected the point.
        op: &'static str,
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
    },
    /// A rectangle argument had a NaN bound.
    #[error("{op}: invalid rectangle {rect}")]
    InvalidRect {
        /// Operation that rejected the rectangle.
        op: &'static str,
        /// Offending rectangle.
        rect: Rect,
    },
}

/// Rejects points that cannot be ordered or measured.
pub(crate) fn check_point(op: &'static str, point: Point) -> Result<()> {
    if point.is_valid() {
        return Ok(());
    }
    log::warn!("{op}: rejecting point with non-finite coordinate {point}");
    Err(PointTableError::InvalidPoint {
        op,
        x: point.x(),
        y: point.y(),
    })
}

/// Rejects rectangles with a NaN bound.
pub(crate) fn check_rect(op: &'static str, rect: &Rect) -> Result<()> {
    if rect.is_valid() {
        return Ok(());
    }
    log::warn!("{op}: rejecting rectangle with NaN bound {rect}");
    Err(PointTableError::InvalidRect { op, rect: *rect })
}
