//! Standalone builders for each fixture collection.
//!
//! These can be used directly by tests that want the fixture entities without a
//! [`SpatialData`](crate::data::SpatialData) registry. Given the same factory, each builder
//! returns the same entities the registry holds.

use geo::coord;
use uuid::{uuid, Uuid};

use crate::entity::{LineStringEntity, MultiLineStringEntity, PointEntity, PolygonEntity};
use crate::factory::GeometryFactory;

/// Identifier of the point fixture.
pub const POINT_ENTITY_ID: Uuid = uuid!("2F39AADE-4D8D-42D2-88CE-775C84AB83B1");

/// Identifier of the line string fixture.
pub const LINE_STRING_ENTITY_ID: i32 = 1;

/// Identifier of the polygon fixture. Equal to [`POINT_ENTITY_ID`], with no meaning attached.
pub const POLYGON_ENTITY_ID: Uuid = uuid!("2F39AADE-4D8D-42D2-88CE-775C84AB83B1");

/// Identifier of the multi-line-string fixture.
pub const MULTI_LINE_STRING_ENTITY_ID: i32 = 1;

/// The point fixtures: one entity at `(0, 0)`.
pub fn create_point_entities<F: GeometryFactory>(factory: &F) -> Vec<PointEntity<F::Point>> {
    vec![PointEntity {
        id: POINT_ENTITY_ID,
        point: factory.create_point(coord! { x: 0., y: 0. }),
    }]
}

/// The line string fixtures: one entity from `(0, 0)` to `(1, 0)`.
pub fn create_line_string_entities<F: GeometryFactory>(
    factory: &F,
) -> Vec<LineStringEntity<F::LineString>> {
    vec![LineStringEntity {
        id: LINE_STRING_ENTITY_ID,
        line_string: factory
            .create_line_string(&[coord! { x: 0., y: 0. }, coord! { x: 1., y: 0. }]),
    }]
}

/// The polygon fixtures: one triangle with the closed ring `(0, 0), (0, 1), (1, 0), (0, 0)`.
pub fn create_polygon_entities<F: GeometryFactory>(
    factory: &F,
) -> Vec<PolygonEntity<F::Polygon>> {
    vec![PolygonEntity {
        id: POLYGON_ENTITY_ID,
        polygon: factory.create_polygon(&[
            coord! { x: 0., y: 0. },
            coord! { x: 0., y: 1. },
            coord! { x: 1., y: 0. },
            coord! { x: 0., y: 0. },
        ]),
    }]
}

/// The multi-line-string fixtures: one entity made of two vertical unit line strings.
pub fn create_multi_line_string_entities<F: GeometryFactory>(
    factory: &F,
) -> Vec<MultiLineStringEntity<F::MultiLineString>> {
    vec![MultiLineStringEntity {
        id: MULTI_LINE_STRING_ENTITY_ID,
        multi_line_string: factory.create_multi_line_string(vec![
            factory.create_line_string(&[coord! { x: 0., y: 0. }, coord! { x: 0., y: 1. }]),
            factory.create_line_string(&[coord! { x: 1., y: 0. }, coord! { x: 1., y: 1. }]),
        ]),
    }]
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use geo::{line_string, point, Coord};

    use super::*;
    use crate::factory::GeoFactory;
    use crate::test::factory::RecordingFactory;

    #[test]
    fn point_entities() {
        let entities = create_point_entities(&GeoFactory);
        assert_eq!(entities.len(), 1);
        assert_eq!(
            entities[0].id.to_string(),
            "2f39aade-4d8d-42d2-88ce-775c84ab83b1"
        );
        assert_relative_eq!(entities[0].point.x(), 0.);
        assert_relative_eq!(entities[0].point.y(), 0.);
        assert_eq!(entities[0].point, point!(x: 0., y: 0.));
    }

    #[test]
    fn line_string_entities() {
        let entities = create_line_string_entities(&GeoFactory);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id, 1);
        assert_eq!(
            entities[0].line_string,
            line_string![(x: 0., y: 0.), (x: 1., y: 0.)]
        );
        assert!(entities[0].line_string.0.len() >= 2);
    }

    #[test]
    fn polygon_entities() {
        let entities = create_polygon_entities(&GeoFactory);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id, POLYGON_ENTITY_ID);

        let ring = entities[0].polygon.exterior();
        assert!(ring.is_closed());
        assert_eq!(ring.0.first(), ring.0.last());
        let coords: Vec<(f64, f64)> = ring.coords().map(|c| c.x_y()).collect();
        assert_eq!(coords, vec![(0., 0.), (0., 1.), (1., 0.), (0., 0.)]);
    }

    #[test]
    fn multi_line_string_entities() {
        let entities = create_multi_line_string_entities(&GeoFactory);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id, 1);

        let lines = &entities[0].multi_line_string.0;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], line_string![(x: 0., y: 0.), (x: 0., y: 1.)]);
        assert_eq!(lines[1], line_string![(x: 1., y: 0.), (x: 1., y: 1.)]);
    }

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(
            create_point_entities(&GeoFactory),
            create_point_entities(&GeoFactory)
        );
        assert_eq!(
            create_multi_line_string_entities(&GeoFactory),
            create_multi_line_string_entities(&GeoFactory)
        );
    }

    #[test]
    fn geometry_comes_from_factory() {
        let factory = RecordingFactory::default();
        let entities = create_multi_line_string_entities(&factory);

        assert_eq!(factory.line_string_calls(), 2);
        assert_eq!(factory.multi_line_string_calls(), 1);
        let expected: Vec<Vec<Coord>> = vec![
            vec![coord! { x: 0., y: 0. }, coord! { x: 0., y: 1. }],
            vec![coord! { x: 1., y: 0. }, coord! { x: 1., y: 1. }],
        ];
        assert_eq!(entities[0].multi_line_string, expected);
    }
}
