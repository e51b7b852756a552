use geo::{Coord, LineString, MultiLineString, Point, Polygon};

use crate::factory::GeometryFactory;

/// Builds fixture geometries as [`geo`] types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoFactory;

impl GeometryFactory for GeoFactory {
    type Point = Point;
    type LineString = LineString;
    type Polygon = Polygon;
    type MultiLineString = MultiLineString;

    fn create_point(&self, coord: Coord) -> Self::Point {
        Point::from(coord)
    }

    fn create_line_string(&self, coords: &[Coord]) -> Self::LineString {
        LineString::new(coords.to_vec())
    }

    fn create_polygon(&self, shell: &[Coord]) -> Self::Polygon {
        Polygon::new(LineString::new(shell.to_vec()), vec![])
    }

    fn create_multi_line_string(
        &self,
        line_strings: Vec<Self::LineString>,
    ) -> Self::MultiLineString {
        MultiLineString::new(line_strings)
    }
}

#[cfg(test)]
mod test {
    use geo::{coord, line_string, point};

    use super::*;

    #[test]
    fn point_from_coord() {
        let p = GeoFactory.create_point(coord! { x: 3., y: 4. });
        assert_eq!(p, point!(x: 3., y: 4.));
    }

    #[test]
    fn polygon_keeps_closed_ring() {
        let shell = [
            coord! { x: 0., y: 0. },
            coord! { x: 0., y: 1. },
            coord! { x: 1., y: 0. },
            coord! { x: 0., y: 0. },
        ];
        let polygon = GeoFactory.create_polygon(&shell);
        assert!(polygon.exterior().is_closed());
        assert_eq!(polygon.exterior().0, shell.to_vec());
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn multi_line_string_keeps_order() {
        let ls0 = line_string![(x: 0., y: 0.), (x: 0., y: 1.)];
        let ls1 = line_string![(x: 1., y: 0.), (x: 1., y: 1.)];
        let mls = GeoFactory.create_multi_line_string(vec![ls0.clone(), ls1.clone()]);
        assert_eq!(mls.0, vec![ls0, ls1]);
    }
}
