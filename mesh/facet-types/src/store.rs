//! Ordered facet collection produced by a load.

use crate::Facet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owns the facets produced by one or more loads, in input order.
///
/// A store only grows. There is no removal or element mutation; to start
/// over, drop the store and create a new one. Each load call takes the
/// store it writes into explicitly, so independent loads never share
/// hidden state.
///
/// # Example
///
/// ```
/// use facet_types::{Facet, MeshStore};
///
/// let mut store = MeshStore::new();
/// store.append(Facet::from_arrays(
///     [0.0, 0.0, 1.0],
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ));
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MeshStore {
    facets: Vec<Facet>,
}

impl MeshStore {
    /// Create an empty store.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Create an empty store with room for `capacity` facets.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            facets: Vec::with_capacity(capacity),
        }
    }

    /// Append a facet at the end.
    #[inline]
    pub fn append(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Reserve room for at least `additional` more facets.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.facets.reserve(additional);
    }

    /// Read-only view of the facets in insertion order.
    #[inline]
    #[must_use]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Number of facets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Check if the store holds no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Number of vertex positions held (three per facet, not deduplicated).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.facets.len() * 3
    }

    /// Iterate over the facets in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    /// Consume the store, handing the facets to the caller.
    #[inline]
    #[must_use]
    pub fn into_facets(self) -> Vec<Facet> {
        self.facets
    }
}

impl From<Vec<Facet>> for MeshStore {
    fn from(facets: Vec<Facet>) -> Self {
        Self { facets }
    }
}

impl Extend<Facet> for MeshStore {
    fn extend<I: IntoIterator<Item = Facet>>(&mut self, iter: I) {
        self.facets.extend(iter);
    }
}

impl FromIterator<Facet> for MeshStore {
    fn from_iter<I: IntoIterator<Item = Facet>>(iter: I) -> Self {
        Self {
            facets: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MeshStore {
    type Item = Facet;
    type IntoIter = std::vec::IntoIter<Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.into_iter()
    }
}

impl<'a> IntoIterator for &'a MeshStore {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.iter()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Vertex3;

    fn facet_at(x: f32) -> Facet {
        Facet::new(
            Vertex3::new(0.0, 0.0, 1.0),
            Vertex3::new(x, 0.0, 0.0),
            Vertex3::new(x + 1.0, 0.0, 0.0),
            Vertex3::new(x, 1.0, 0.0),
        )
    }

    #[test]
    fn new_store_is_empty() {
        let store = MeshStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.vertex_count(), 0);
        assert!(store.facets().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = MeshStore::with_capacity(3);
        for i in 0..3u8 {
            store.append(facet_at(f32::from(i)));
        }

        let xs: Vec<f32> = store.iter().map(|f| f.v0().x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(store.vertex_count(), 9);
    }

    #[test]
    fn extend_and_collect() {
        let mut store: MeshStore = (0..2u8).map(|i| facet_at(f32::from(i))).collect();
        store.extend([facet_at(5.0)]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.facets()[2].v0().x, 5.0);

        let owned = store.into_facets();
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn borrowed_iteration() {
        let store = MeshStore::from(vec![facet_at(0.0), facet_at(1.0)]);
        let mut count = 0;
        for facet in &store {
            assert_eq!(facet.normal().z, 1.0);
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_facet_list() {
        let store = MeshStore::from(vec![facet_at(0.0)]);
        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with('['));

        let back: MeshStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
