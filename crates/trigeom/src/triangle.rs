//! Triangle representation and degeneracy classification.

use std::fmt;
use std::ops::Index;

use crate::boundbox::BoundBox;
use crate::error::Result;
use crate::plane::{Classification, Plane, PlaneSide};
use crate::segment::Segment;
use crate::tolerance::Scalar;
use crate::vec3::Vec3;

/// What a triangle collapses to once tolerance is taken into account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleKind<T: Scalar> {
    /// All three vertices coincide.
    Point(Vec3<T>),
    /// Vertices are collinear; the segment spans all three.
    Segment(Segment<T>),
    /// Non-zero area, with its supporting plane.
    Proper(Plane<T>),
}

/// A triangle in 3D space, defined by three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Scalar> {
    vertices: [Vec3<T>; 3],
}

impl<T: Scalar> Triangle<T> {
    /// Creates a triangle. The winding order fixes the normal:
    /// `(b - a) × (c - a)`.
    pub fn new(a: Vec3<T>, b: Vec3<T>, c: Vec3<T>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// The three corners, in construction order.
    #[inline]
    pub fn vertices(&self) -> &[Vec3<T>; 3] {
        &self.vertices
    }

    /// Unnormalized normal; zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3<T> {
        let [a, b, c] = &self.vertices;
        (*b - *a).cross(&(*c - *a))
    }

    /// Non-zero area: the edges leaving the first vertex are not parallel.
    pub fn is_valid(&self) -> bool {
        let [a, b, c] = &self.vertices;
        !(*b - *a).is_par(&(*c - *a))
    }

    /// Supporting plane. Fails for a degenerate triangle.
    pub fn plane(&self) -> Result<Plane<T>> {
        let [a, b, c] = self.vertices;
        Plane::from_three_points(a, b, c)
    }

    /// Average of the three vertices.
    pub fn centroid(&self) -> Vec3<T> {
        let [a, b, c] = self.vertices;
        (a + b + c) / nalgebra::convert::<f64, T>(3.0)
    }

    /// Bounding box of the vertices, grown by the current threshold on
    /// every side.
    pub fn bound_box(&self) -> BoundBox<T> {
        BoundBox::around_triangle(&self.vertices)
    }

    /// The three edges `v0v1`, `v1v2`, `v2v0`.
    pub fn edges(&self) -> [Segment<T>; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// Edge of greatest length; the first one on ties.
    pub fn longest_edge(&self) -> Segment<T> {
        let [e0, e1, e2] = self.edges();
        let mut longest = e0;
        for edge in [e1, e2] {
            if edge.length() > longest.length() {
                longest = edge;
            }
        }
        longest
    }

    /// Classifies this triangle relative to a plane.
    ///
    /// `Front` and `Back` require every vertex to be strictly off the plane;
    /// a vertex within tolerance of it makes the triangle `Spanning` unless
    /// all three are on the plane.
    pub fn classify(&self, plane: &Plane<T>) -> Classification {
        let mut front = 0;
        let mut back = 0;
        let mut on_plane = 0;

        for vertex in &self.vertices {
            match plane.classify_point(vertex) {
                PlaneSide::Front => front += 1,
                PlaneSide::Back => back += 1,
                PlaneSide::OnPlane => on_plane += 1,
            }
        }

        match (front, back, on_plane) {
            (3, _, _) => Classification::Front,
            (_, 3, _) => Classification::Back,
            (_, _, 3) => Classification::Coplanar,
            _ => Classification::Spanning,
        }
    }

    /// Point, segment or proper triangle.
    pub fn kind(&self) -> TriangleKind<T> {
        if let Ok(plane) = self.plane() {
            return TriangleKind::Proper(plane);
        }
        let edge = self.longest_edge();
        if edge.is_point() {
            TriangleKind::Point(self.vertices[0])
        } else {
            TriangleKind::Segment(edge)
        }
    }
}

/// Vertex access; the index wraps around, so `t[3] == t[0]`.
impl<T: Scalar> Index<usize> for Triangle<T> {
    type Output = Vec3<T>;

    #[inline]
    fn index(&self, index: usize) -> &Vec3<T> {
        &self.vertices[index % 3]
    }
}

impl<T: Scalar> From<[Vec3<T>; 3]> for Triangle<T> {
    fn from(vertices: [Vec3<T>; 3]) -> Self {
        Self { vertices }
    }
}

impl<T: Scalar> fmt::Display for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.vertices;
        write!(f, "{{{a}, {b}, {c}}}")
    }
}
