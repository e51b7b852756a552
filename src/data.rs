//! The [`SpatialData`] fixture registry.

use std::fmt::Debug;

use crate::entity::{
    Entity, EntityKind, LineStringEntity, MultiLineStringEntity, PointEntity, PolygonEntity,
};
use crate::error::FixtureResult;
use crate::factory::{GeoFactory, GeometryFactory};
use crate::fixtures::{
    create_line_string_entities, create_multi_line_string_entities, create_point_entities,
    create_polygon_entities,
};

/// Expected spatial data, holding one immutable collection per [`EntityKind`].
///
/// All collections are built once, when the registry is constructed, through the supplied
/// [`GeometryFactory`].
///
/// ```
/// use spatial_fixtures::data::SpatialData;
/// use spatial_fixtures::entity::PointEntity;
/// use spatial_fixtures::factory::GeoFactory;
///
/// let data = SpatialData::new(&GeoFactory);
/// let points = data.set::<PointEntity>();
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].point, geo::point!(x: 0., y: 0.));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialData<F: GeometryFactory = GeoFactory> {
    pub(crate) point_entities: Vec<PointEntity<F::Point>>,
    pub(crate) line_string_entities: Vec<LineStringEntity<F::LineString>>,
    pub(crate) polygon_entities: Vec<PolygonEntity<F::Polygon>>,
    pub(crate) multi_line_string_entities: Vec<MultiLineStringEntity<F::MultiLineString>>,
}

impl<F: GeometryFactory> SpatialData<F> {
    /// Build all fixture collections with `factory`.
    pub fn new(factory: &F) -> Self {
        let data = Self {
            point_entities: create_point_entities(factory),
            line_string_entities: create_line_string_entities(factory),
            polygon_entities: create_polygon_entities(factory),
            multi_line_string_entities: create_multi_line_string_entities(factory),
        };
        log::debug!(
            "Built spatial data: {} point, {} line string, {} polygon, {} multi line string entities",
            data.point_entities.len(),
            data.line_string_entities.len(),
            data.polygon_entities.len(),
            data.multi_line_string_entities.len(),
        );
        data
    }

    /// The collection of entity type `E`.
    pub fn set<E: Entity<F>>(&self) -> &[E] {
        E::set(self)
    }

    /// The collection of entities of `kind`.
    pub fn set_of(&self, kind: EntityKind) -> EntitySet<'_, F> {
        match kind {
            EntityKind::Point => EntitySet::Point(&self.point_entities),
            EntityKind::LineString => EntitySet::LineString(&self.line_string_entities),
            EntityKind::Polygon => EntitySet::Polygon(&self.polygon_entities),
            EntityKind::MultiLineString => {
                EntitySet::MultiLineString(&self.multi_line_string_entities)
            }
        }
    }

    /// The collection of entities whose kind is named `name`.
    ///
    /// Accepts the names understood by [`EntityKind`]'s `FromStr` implementation and returns
    /// [`FixtureError::UnrecognizedEntityKind`](crate::error::FixtureError::UnrecognizedEntityKind)
    /// for anything else.
    pub fn set_by_name(&self, name: &str) -> FixtureResult<EntitySet<'_, F>> {
        let kind = name.parse::<EntityKind>().map_err(|err| {
            log::debug!("Rejected entity set lookup: {err}");
            err
        })?;
        Ok(self.set_of(kind))
    }

    /// The entity of type `E` with identifier `key`, if any.
    pub fn find<E: Entity<F>>(&self, key: E::Key) -> Option<&E> {
        self.set::<E>().iter().find(|entity| entity.key() == key)
    }
}

impl Default for SpatialData<GeoFactory> {
    fn default() -> Self {
        Self::new(&GeoFactory)
    }
}

/// A borrowed fixture collection of a kind chosen at run time.
pub enum EntitySet<'a, F: GeometryFactory> {
    /// Collection of [`PointEntity`].
    Point(&'a [PointEntity<F::Point>]),

    /// Collection of [`LineStringEntity`].
    LineString(&'a [LineStringEntity<F::LineString>]),

    /// Collection of [`PolygonEntity`].
    Polygon(&'a [PolygonEntity<F::Polygon>]),

    /// Collection of [`MultiLineStringEntity`].
    MultiLineString(&'a [MultiLineStringEntity<F::MultiLineString>]),
}

impl<'a, F: GeometryFactory> EntitySet<'a, F> {
    /// The [`EntityKind`] of this collection.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntitySet::Point(_) => EntityKind::Point,
            EntitySet::LineString(_) => EntityKind::LineString,
            EntitySet::Polygon(_) => EntityKind::Polygon,
            EntitySet::MultiLineString(_) => EntityKind::MultiLineString,
        }
    }

    /// The number of entities in this collection.
    pub fn len(&self) -> usize {
        match self {
            EntitySet::Point(s) => s.len(),
            EntitySet::LineString(s) => s.len(),
            EntitySet::Polygon(s) => s.len(),
            EntitySet::MultiLineString(s) => s.len(),
        }
    }

    /// Whether this collection holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Downcast this to a [`PointEntity`] collection, returning `None` if not possible
    pub fn as_points(&self) -> Option<&'a [PointEntity<F::Point>]> {
        match *self {
            EntitySet::Point(s) => Some(s),
            _ => None,
        }
    }

    /// Downcast this to a [`LineStringEntity`] collection, returning `None` if not possible
    pub fn as_line_strings(&self) -> Option<&'a [LineStringEntity<F::LineString>]> {
        match *self {
            EntitySet::LineString(s) => Some(s),
            _ => None,
        }
    }

    /// Downcast this to a [`PolygonEntity`] collection, returning `None` if not possible
    pub fn as_polygons(&self) -> Option<&'a [PolygonEntity<F::Polygon>]> {
        match *self {
            EntitySet::Polygon(s) => Some(s),
            _ => None,
        }
    }

    /// Downcast this to a [`MultiLineStringEntity`] collection, returning `None` if not
    /// possible
    pub fn as_multi_line_strings(
        &self,
    ) -> Option<&'a [MultiLineStringEntity<F::MultiLineString>]> {
        match *self {
            EntitySet::MultiLineString(s) => Some(s),
            _ => None,
        }
    }
}

impl<F: GeometryFactory> Clone for EntitySet<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: GeometryFactory> Copy for EntitySet<'_, F> {}

impl<F: GeometryFactory> Debug for EntitySet<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntitySet::Point(s) => f.debug_tuple("Point").field(s).finish(),
            EntitySet::LineString(s) => f.debug_tuple("LineString").field(s).finish(),
            EntitySet::Polygon(s) => f.debug_tuple("Polygon").field(s).finish(),
            EntitySet::MultiLineString(s) => f.debug_tuple("MultiLineString").field(s).finish(),
        }
    }
}

impl<F: GeometryFactory> PartialEq for EntitySet<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EntitySet::Point(a), EntitySet::Point(b)) => a == b,
            (EntitySet::LineString(a), EntitySet::LineString(b)) => a == b,
            (EntitySet::Polygon(a), EntitySet::Polygon(b)) => a == b,
            (EntitySet::MultiLineString(a), EntitySet::MultiLineString(b)) => a == b,
            _ => false,
        }
    }
}
