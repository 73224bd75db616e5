//! Immutable triangle record.

use crate::Vertex3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One triangle of a mesh: a normal plus three vertex positions.
///
/// The normal is stored exactly as the source provided it. It is never
/// recomputed from the winding, so a zero or inconsistent normal in the
/// input survives unchanged.
///
/// Fields are private; a facet cannot be modified once built.
///
/// # Example
///
/// ```
/// use facet_types::{Facet, Vertex3};
///
/// let facet = Facet::new(
///     Vertex3::new(0.0, 0.0, 1.0),
///     Vertex3::new(0.0, 0.0, 0.0),
///     Vertex3::new(1.0, 0.0, 0.0),
///     Vertex3::new(0.0, 1.0, 0.0),
/// );
///
/// assert_eq!(facet.normal(), Vertex3::new(0.0, 0.0, 1.0));
/// assert_eq!(facet.vertices()[1], Vertex3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facet {
    normal: Vertex3,
    v0: Vertex3,
    v1: Vertex3,
    v2: Vertex3,
}

impl Facet {
    /// Create a facet from its normal and three vertices.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vertex3, v0: Vertex3, v1: Vertex3, v2: Vertex3) -> Self {
        Self { normal, v0, v1, v2 }
    }

    /// Create a facet from coordinate arrays in `normal, v0, v1, v2` order.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::Facet;
    ///
    /// let facet = Facet::from_arrays(
    ///     [0.0, 0.0, 1.0],
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// assert_eq!(facet.v2().y, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_arrays(normal: [f32; 3], v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        Self::new(
            Vertex3::from_array(normal),
            Vertex3::from_array(v0),
            Vertex3::from_array(v1),
            Vertex3::from_array(v2),
        )
    }

    /// The normal as given by the source.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Vertex3 {
        self.normal
    }

    /// First vertex.
    #[inline]
    #[must_use]
    pub const fn v0(&self) -> Vertex3 {
        self.v0
    }

    /// Second vertex.
    #[inline]
    #[must_use]
    pub const fn v1(&self) -> Vertex3 {
        self.v1
    }

    /// Third vertex.
    #[inline]
    #[must_use]
    pub const fn v2(&self) -> Vertex3 {
        self.v2
    }

    /// The three vertices in source order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Vertex3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Normal followed by the three vertices, the layout of one binary STL
    /// record and of one structured facet entry.
    #[inline]
    #[must_use]
    pub const fn to_records(&self) -> [Vertex3; 4] {
        [self.normal, self.v0, self.v1, self.v2]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn sample() -> Facet {
        Facet::from_arrays(
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        )
    }

    #[test]
    fn accessors_follow_construction_order() {
        let f = sample();
        assert_eq!(f.normal(), Vertex3::new(0.0, 0.0, 1.0));
        assert_eq!(f.v0(), Vertex3::ZERO);
        assert_eq!(f.v1(), Vertex3::new(1.0, 0.0, 0.0));
        assert_eq!(f.v2(), Vertex3::new(0.0, 1.0, 0.0));
        assert_eq!(f.vertices(), [f.v0(), f.v1(), f.v2()]);
    }

    #[test]
    fn records_put_normal_first() {
        let f = sample();
        let records = f.to_records();
        assert_eq!(records[0], f.normal());
        assert_eq!(&records[1..], &f.vertices());
    }

    #[test]
    fn normal_is_not_recomputed() {
        // Clockwise winding with a +Z normal is kept as given.
        let f = Facet::from_arrays(
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        );
        assert_eq!(f.normal().z, 1.0);
    }
}
