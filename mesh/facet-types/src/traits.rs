//! Traits for vertex-like inputs.

use crate::Vertex3;
use nalgebra::{Point3, Vector3};

/// Positional access to the three numeric components of a vertex-like value.
///
/// This is the seam for structured mesh input: any host representation of a
/// triple (arrays, tuples, nalgebra points) can feed a facet list without a
/// dependency on where the data came from.
///
/// # Example
///
/// ```
/// use facet_types::{Vertex3, VertexComponents};
///
/// assert_eq!([1.0_f32, 2.0, 3.0].to_vertex(), Vertex3::new(1.0, 2.0, 3.0));
/// assert_eq!((4.0_f32, 5.0, 6.0).component(2), 6.0);
/// ```
pub trait VertexComponents {
    /// The components in `x, y, z` order.
    fn components(&self) -> [f32; 3];

    /// Component by position (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    fn component(&self, index: usize) -> f32 {
        self.components()[index]
    }

    /// Convert to a [`Vertex3`].
    fn to_vertex(&self) -> Vertex3 {
        Vertex3::from_array(self.components())
    }
}

impl VertexComponents for Vertex3 {
    fn components(&self) -> [f32; 3] {
        self.to_array()
    }
}

impl VertexComponents for [f32; 3] {
    fn components(&self) -> [f32; 3] {
        *self
    }
}

impl VertexComponents for [f64; 3] {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: facets are single precision, like STL
    fn components(&self) -> [f32; 3] {
        [self[0] as f32, self[1] as f32, self[2] as f32]
    }
}

impl VertexComponents for (f32, f32, f32) {
    fn components(&self) -> [f32; 3] {
        [self.0, self.1, self.2]
    }
}

impl VertexComponents for Point3<f32> {
    fn components(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl VertexComponents for Vector3<f32> {
    fn components(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: VertexComponents + ?Sized> VertexComponents for &T {
    fn components(&self) -> [f32; 3] {
        (**self).components()
    }
}
