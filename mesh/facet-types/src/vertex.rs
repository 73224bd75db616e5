//! Single-precision vertex type.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point or direction in 3D space with `f32` components.
///
/// STL stores every coordinate as an IEEE-754 single, so this type keeps
/// the same precision. No validation is performed: non-finite components
/// are carried through unchanged.
///
/// # Example
///
/// ```
/// use facet_types::Vertex3;
///
/// let v = Vertex3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// assert_eq!(Vertex3::default(), Vertex3::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vertex3 {
    /// The origin / zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vertex from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a vertex from a `[x, y, z]` array.
    #[inline]
    #[must_use]
    pub const fn from_array([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }

    /// Components as a `[x, y, z]` array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Interpret the vertex as a position.
    #[inline]
    #[must_use]
    pub fn to_point(self) -> Point3<f32> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Interpret the vertex as a direction (e.g. a facet normal).
    #[inline]
    #[must_use]
    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Check that every component is finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vertex3 {
    fn from(coords: [f32; 3]) -> Self {
        Self::from_array(coords)
    }
}

impl From<(f32, f32, f32)> for Vertex3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3<f32>> for Vertex3 {
    fn from(p: Point3<f32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f32>> for Vertex3 {
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vertex3> for [f32; 3] {
    fn from(v: Vertex3) -> Self {
        v.to_array()
    }
}

impl From<Vertex3> for Point3<f32> {
    fn from(v: Vertex3) -> Self {
        v.to_point()
    }
}

impl From<Vertex3> for Vector3<f32> {
    fn from(v: Vertex3) -> Self {
        v.to_vector()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Vertex3::default(), Vertex3::ZERO);
        assert_eq!(Vertex3::ZERO.to_array(), [0.0; 3]);
    }

    #[test]
    fn from_tuple_and_array_agree() {
        let a: Vertex3 = (1.5, -2.0, 3.25).into();
        let b: Vertex3 = [1.5, -2.0, 3.25].into();
        assert_eq!(a, b);
    }

    #[test]
    fn nalgebra_conversions() {
        let v = Vertex3::new(1.0, 2.0, 3.0);
        let p: Point3<f32> = v.into();
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(Vertex3::from(p), v);

        let n = Vertex3::from(Vector3::z());
        assert_eq!(n.to_vector().norm(), 1.0);
    }

    #[test]
    fn finite_check() {
        assert!(Vertex3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vertex3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vertex3::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}
