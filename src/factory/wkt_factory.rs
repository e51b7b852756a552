use std::ops::Deref;

use geo::Coord;
use wkt::types::{
    Coord as WktCoord, LineString as WktLineString, MultiLineString as WktMultiLineString,
    Point as WktPoint, Polygon as WktPolygon,
};

use crate::factory::GeometryFactory;

/// Builds fixture geometries as [`wkt`] types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WktFactory;

/// A [`wkt`] geometry produced by [`WktFactory`].
///
/// Compares equal to another geometry when all coordinates, including `z` and `m`, are equal.
#[derive(Debug, Clone)]
pub struct WktGeometry<G>(pub G);

impl<G> WktGeometry<G> {
    /// Unwrap the underlying [`wkt`] value.
    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<G> Deref for WktGeometry<G> {
    type Target = G;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

type CoordKey = (f64, f64, Option<f64>, Option<f64>);

fn coord_key(coord: &WktCoord<f64>) -> CoordKey {
    (coord.x, coord.y, coord.z, coord.m)
}

fn line_string_keys(line_string: &WktLineString<f64>) -> Vec<CoordKey> {
    line_string.0.iter().map(coord_key).collect()
}

fn line_strings_eq(a: &[WktLineString<f64>], b: &[WktLineString<f64>]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(a, b)| line_string_keys(a) == line_string_keys(b))
}

impl PartialEq for WktGeometry<WktPoint<f64>> {
    fn eq(&self, other: &Self) -> bool {
        self.0 .0.as_ref().map(coord_key) == other.0 .0.as_ref().map(coord_key)
    }
}

impl PartialEq for WktGeometry<WktLineString<f64>> {
    fn eq(&self, other: &Self) -> bool {
        line_string_keys(&self.0) == line_string_keys(&other.0)
    }
}

impl PartialEq for WktGeometry<WktPolygon<f64>> {
    fn eq(&self, other: &Self) -> bool {
        line_strings_eq(&self.0 .0, &other.0 .0)
    }
}

impl PartialEq for WktGeometry<WktMultiLineString<f64>> {
    fn eq(&self, other: &Self) -> bool {
        line_strings_eq(&self.0 .0, &other.0 .0)
    }
}

fn to_wkt_coord(coord: Coord) -> WktCoord<f64> {
    WktCoord {
        x: coord.x,
        y: coord.y,
        z: None,
        m: None,
    }
}

fn to_wkt_line_string(coords: &[Coord]) -> WktLineString<f64> {
    WktLineString(coords.iter().copied().map(to_wkt_coord).collect())
}

impl GeometryFactory for WktFactory {
    type Point = WktGeometry<WktPoint<f64>>;
    type LineString = WktGeometry<WktLineString<f64>>;
    type Polygon = WktGeometry<WktPolygon<f64>>;
    type MultiLineString = WktGeometry<WktMultiLineString<f64>>;

    fn create_point(&self, coord: Coord) -> Self::Point {
        WktGeometry(WktPoint(Some(to_wkt_coord(coord))))
    }

    fn create_line_string(&self, coords: &[Coord]) -> Self::LineString {
        WktGeometry(to_wkt_line_string(coords))
    }

    fn create_polygon(&self, shell: &[Coord]) -> Self::Polygon {
        WktGeometry(WktPolygon(vec![to_wkt_line_string(shell)]))
    }

    fn create_multi_line_string(
        &self,
        line_strings: Vec<Self::LineString>,
    ) -> Self::MultiLineString {
        WktGeometry(WktMultiLineString(
            line_strings
                .into_iter()
                .map(WktGeometry::into_inner)
                .collect(),
        ))
    }
}
