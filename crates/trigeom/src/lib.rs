//! Tolerance-aware 3D triangle geometry with a kd-tree broad phase.
//!
//! - Primitives: [`Vec3`], [`Vec2`], [`Line`], [`Plane`], [`Segment`],
//!   [`Triangle`], [`BoundBox`]
//! - [`intersection`]: plane/plane, line/line and triangle/triangle tests
//! - [`kdtree`]: static spatial index over triangles
//! - [`broad_phase`]: all intersecting triangles of a set, brute force or
//!   through the tree
//!
//! All comparisons go through [`Tolerance`], a per-thread threshold for each
//! scalar type.

pub mod broad_phase;
mod boundbox;
mod error;
pub mod intersection;
pub mod kdtree;
mod line;
mod plane;
mod segment;
pub mod tolerance;
mod triangle;
mod vec2;
mod vec3;

pub use boundbox::{Axis, BoundBox};
pub use error::{ArgumentError, ConstructionError, GeomError, Result};
pub use intersection::{LineIntersection, PlaneIntersection, intersect_lines, intersect_planes, is_intersect};
pub use kdtree::{Index, KdTree, KdTreeConfig};
pub use line::{Line, LineRelation};
pub use plane::{Classification, Plane, PlaneSide};
pub use segment::Segment;
pub use tolerance::{Scalar, Tolerance, ToleranceGuard};
pub use triangle::{Triangle, TriangleKind};
pub use vec2::Vec2;
pub use vec3::Vec3;
