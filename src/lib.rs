//! Static spatial sample data for testing spatial support in data access layers.
//!
//! [`SpatialData`] holds one fixture collection per entity kind (points, line strings,
//! polygons and multi-line-strings). Geometries are built through a [`GeometryFactory`], so
//! the same fixtures can be produced for any geometry backend. The builders in [`fixtures`]
//! can also be called on their own.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use data::{EntitySet, SpatialData};
pub use entity::{
    Entity, EntityKind, LineStringEntity, MultiLineStringEntity, PointEntity, PolygonEntity,
};
pub use factory::{GeoFactory, GeometryFactory};

pub mod data;
pub mod entity;
pub mod error;
pub mod factory;
pub mod fixtures;
