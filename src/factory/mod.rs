//! The [`GeometryFactory`] capability used to construct fixture geometries.
//!
//! Fixture builders never construct geometries directly. Every point, line string, polygon and
//! multi-line-string goes through a factory, so the same fixtures can be produced for any
//! geometry backend.

use std::fmt::Debug;

use geo::Coord;

mod geo_factory;
#[cfg(any(test, feature = "wkt"))]
mod wkt_factory;

pub use geo_factory::GeoFactory;
#[cfg(any(test, feature = "wkt"))]
pub use wkt_factory::{WktFactory, WktGeometry};

/// A geometry backend able to build the four fixture geometry kinds from raw coordinates.
pub trait GeometryFactory {
    /// Point geometry produced by [`create_point`](Self::create_point).
    type Point: Clone + Debug + PartialEq;

    /// Line string geometry produced by [`create_line_string`](Self::create_line_string).
    type LineString: Clone + Debug + PartialEq;

    /// Polygon geometry produced by [`create_polygon`](Self::create_polygon).
    type Polygon: Clone + Debug + PartialEq;

    /// Multi-line-string geometry produced by
    /// [`create_multi_line_string`](Self::create_multi_line_string).
    type MultiLineString: Clone + Debug + PartialEq;

    /// Create a point from a single coordinate.
    fn create_point(&self, coord: Coord) -> Self::Point;

    /// Create a line string from an ordered sequence of coordinates.
    fn create_line_string(&self, coords: &[Coord]) -> Self::LineString;

    /// Create a polygon without interiors from a closed exterior ring.
    ///
    /// The first and last coordinates of `shell` are expected to be equal.
    fn create_polygon(&self, shell: &[Coord]) -> Self::Polygon;

    /// Create a multi-line-string from line strings previously built by this factory.
    fn create_multi_line_string(
        &self,
        line_strings: Vec<Self::LineString>,
    ) -> Self::MultiLineString;
}
