//! The [`AsNode`] trait shared by every record that can sit on a map.
//!
//! Routing works on [`Location`](super::location::Location)s while
//! facility lookup works on [`Facility`](super::facility::Facility)
//! records. Both only need a name and a position for the distance
//! metric, so functions take an `AsNode` parameter and stay agnostic of
//! the concrete record type.

use super::point::GeoPoint;

/// Since Rust doesn't allow for inheritance, we use a `trait` to pass
/// "node-like" records to the distance and graph helpers.
pub trait AsNode {
    /// Returns the display name of the record.
    fn name(&self) -> &str;

    /// Returns the geographic position of the record.
    fn position(&self) -> GeoPoint;
}

impl AsNode for GeoPoint {
    fn name(&self) -> &str {
        ""
    }

    fn position(&self) -> GeoPoint {
        *self
    }
}
