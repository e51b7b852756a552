//! Entity types stored in the fixture collections.
//!
//! Each entity is generic over its geometry so that any [`GeometryFactory`] backend can supply
//! it. The type parameters default to the [`geo`] geometries produced by
//! [`GeoFactory`](crate::factory::GeoFactory).

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::SpatialData;
use crate::error::{FixtureError, FixtureResult};
use crate::factory::GeometryFactory;

/// An entity with a single point geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEntity<P = geo::Point> {
    pub id: Uuid,
    pub point: P,
}

/// An entity with a line string geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStringEntity<L = geo::LineString> {
    pub id: i32,
    pub line_string: L,
}

/// An entity with a polygon geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonEntity<Y = geo::Polygon> {
    pub id: Uuid,
    pub polygon: Y,
}

/// An entity with a multi-line-string geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineStringEntity<M = geo::MultiLineString> {
    pub id: i32,
    pub multi_line_string: M,
}

/// The closed set of entity kinds held by [`SpatialData`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// [`PointEntity`]
    Point,

    /// [`LineStringEntity`]
    LineString,

    /// [`PolygonEntity`]
    Polygon,

    /// [`MultiLineStringEntity`]
    MultiLineString,
}

impl EntityKind {
    /// All entity kinds, in declaration order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Point,
        EntityKind::LineString,
        EntityKind::Polygon,
        EntityKind::MultiLineString,
    ];

    /// The name of the entity type of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Point => "PointEntity",
            EntityKind::LineString => "LineStringEntity",
            EntityKind::Polygon => "PolygonEntity",
            EntityKind::MultiLineString => "MultiLineStringEntity",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = FixtureError;

    /// Parses either the entity type name (`"PointEntity"`) or the snake-case kind name
    /// (`"point"`).
    fn from_str(s: &str) -> FixtureResult<Self> {
        let kind = match s {
            "PointEntity" | "point" => EntityKind::Point,
            "LineStringEntity" | "line_string" => EntityKind::LineString,
            "PolygonEntity" | "polygon" => EntityKind::Polygon,
            "MultiLineStringEntity" | "multi_line_string" => EntityKind::MultiLineString,
            _ => return Err(FixtureError::UnrecognizedEntityKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// An entity type that [`SpatialData`] holds a collection of.
///
/// Implemented only for the four fixture entities, so requesting any other type from
/// [`SpatialData::set`] does not compile.
pub trait Entity<F: GeometryFactory>: Sized {
    /// Identifier type of this entity.
    type Key: Copy + Eq + Debug;

    /// Kind tag of this entity.
    const KIND: EntityKind;

    /// The identifier of this entity.
    fn key(&self) -> Self::Key;

    /// The collection of this entity held by `data`.
    fn set(data: &SpatialData<F>) -> &[Self];
}

impl<F: GeometryFactory> Entity<F> for PointEntity<F::Point> {
    type Key = Uuid;
    const KIND: EntityKind = EntityKind::Point;

    fn key(&self) -> Self::Key {
        self.id
    }

    fn set(data: &SpatialData<F>) -> &[Self] {
        &data.point_entities
    }
}

impl<F: GeometryFactory> Entity<F> for LineStringEntity<F::LineString> {
    type Key = i32;
    const KIND: EntityKind = EntityKind::LineString;

    fn key(&self) -> Self::Key {
        self.id
    }

    fn set(data: &SpatialData<F>) -> &[Self] {
        &data.line_string_entities
    }
}

impl<F: GeometryFactory> Entity<F> for PolygonEntity<F::Polygon> {
    type Key = Uuid;
    const KIND: EntityKind = EntityKind::Polygon;

    fn key(&self) -> Self::Key {
        self.id
    }

    fn set(data: &SpatialData<F>) -> &[Self] {
        &data.polygon_entities
    }
}

impl<F: GeometryFactory> Entity<F> for MultiLineStringEntity<F::MultiLineString> {
    type Key = i32;
    const KIND: EntityKind = EntityKind::MultiLineString;

    fn key(&self) -> Self::Key {
        self.id
    }

    fn set(data: &SpatialData<F>) -> &[Self] {
        &data.multi_line_string_entities
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_type_names() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.name().parse::<EntityKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn parse_snake_case_names() {
        assert_eq!("point".parse::<EntityKind>().unwrap(), EntityKind::Point);
        assert_eq!(
            "line_string".parse::<EntityKind>().unwrap(),
            EntityKind::LineString
        );
        assert_eq!("polygon".parse::<EntityKind>().unwrap(), EntityKind::Polygon);
        assert_eq!(
            "multi_line_string".parse::<EntityKind>().unwrap(),
            EntityKind::MultiLineString
        );
    }

    #[test]
    fn parse_unknown_kind() {
        let err = "GeometryCollectionEntity".parse::<EntityKind>().unwrap_err();
        assert_eq!(
            err,
            FixtureError::UnrecognizedEntityKind("GeometryCollectionEntity".to_string())
        );
        assert_eq!(err.to_string(), "Unknown entity type: GeometryCollectionEntity");

        // Names are matched exactly.
        assert!("pointentity".parse::<EntityKind>().is_err());
        assert!("".parse::<EntityKind>().is_err());
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&EntityKind::MultiLineString).unwrap(),
            "\"multi_line_string\""
        );
        let kind: EntityKind = serde_json::from_str("\"line_string\"").unwrap();
        assert_eq!(kind, EntityKind::LineString);
        assert!(serde_json::from_str::<EntityKind>("\"circle\"").is_err());
    }
}
