//! Loading from an in-memory facet list.
//!
//! Hosts that already hold parsed geometry pass a sequence of facet
//! records, each an ordered sequence of four vertex-like triples:
//! `[normal, v0, v1, v2]`. No text or binary decoding is involved.

use facet_types::{Facet, MeshStore, VertexComponents};
use tracing::info;

use crate::error::{IoError, IoResult};
use crate::result::{LoadSummary, SourceFormat};

/// Entries per structured facet record (normal plus three vertices).
pub const FACET_RECORD_LEN: usize = 4;

/// Append facets from a nested `[[normal, v0, v1, v2], ...]` list.
///
/// Records without exactly four entries are skipped without a diagnostic;
/// the count of skipped records is reported in
/// [`LoadSummary::skipped_records`].
///
/// # Errors
///
/// Returns [`IoError::EmptyMesh`] if `records` is empty. Nothing is
/// appended in that case.
///
/// # Example
///
/// ```
/// use facet_io::load_structured;
/// use facet_types::MeshStore;
///
/// let records = vec![
///     vec![[0.0_f32, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     vec![[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
/// ];
///
/// let mut store = MeshStore::new();
/// let summary = load_structured(&records, &mut store).unwrap();
/// assert_eq!(store.len(), 1);
/// assert_eq!(summary.skipped_records, 1);
/// ```
pub fn load_structured<F, V>(records: &[F], store: &mut MeshStore) -> IoResult<LoadSummary>
where
    F: AsRef<[V]>,
    V: VertexComponents,
{
    if records.is_empty() {
        return Err(IoError::EmptyMesh);
    }

    info!(records = records.len(), "Loading structured mesh");

    let mut summary = LoadSummary::new(SourceFormat::Structured);
    store.reserve(records.len());

    for record in records {
        let [normal, v0, v1, v2] = record.as_ref() else {
            summary.skipped_records += 1;
            continue;
        };

        store.append(Facet::new(
            normal.to_vertex(),
            v0.to_vertex(),
            v1.to_vertex(),
            v2.to_vertex(),
        ));
        summary.facets += 1;
        summary.vertices += FACET_RECORD_LEN - 1;
    }

    info!(
        facets = summary.facets,
        skipped = summary.skipped_records,
        "Structured mesh import complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use facet_types::{Point3, Vertex3};

    #[test]
    fn short_record_is_skipped_silently() {
        let records: Vec<Vec<[f32; 3]>> = vec![
            vec![[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            vec![[0.0, 0.0, -1.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0], [2.0, 1.0, 0.0]],
        ];
        let mut store = MeshStore::new();
        let summary = load_structured(&records, &mut store).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(summary.facets, 1);
        assert_eq!(summary.skipped_records, 1);
        assert!(summary.skipped_facets.is_empty());

        let facet = store.facets()[0];
        assert_eq!(facet.normal(), Vertex3::new(0.0, 0.0, -1.0));
        assert_eq!(facet.v2(), Vertex3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn long_record_is_skipped() {
        let records = vec![vec![(1.0_f32, 1.0, 1.0); 5]];
        let mut store = MeshStore::new();
        let summary = load_structured(&records, &mut store).unwrap();
        assert!(store.is_empty());
        assert_eq!(summary.skipped_records, 1);
    }

    #[test]
    fn empty_input_is_empty_mesh() {
        let records: Vec<Vec<[f32; 3]>> = Vec::new();
        let mut store = MeshStore::new();
        let result = load_structured(&records, &mut store);
        assert!(matches!(result, Err(IoError::EmptyMesh)));
        assert!(store.is_empty());
    }

    #[test]
    fn fixed_size_records_and_points() {
        let p = |x: f32| Point3::new(x, 0.0, 0.0);
        let records = [[p(0.0), p(1.0), p(2.0), p(3.0)], [p(4.0), p(5.0), p(6.0), p(7.0)]];
        let mut store = MeshStore::new();
        load_structured(&records, &mut store).unwrap();

        let xs: Vec<f32> = store
            .iter()
            .flat_map(|f| f.to_records())
            .map(|v| v.x)
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn double_precision_input() {
        let records = vec![vec![[0.5_f64, 0.25, 0.125]; 4]];
        let mut store = MeshStore::new();
        load_structured(&records, &mut store).unwrap();
        assert_eq!(store.facets()[0].v1(), Vertex3::new(0.5, 0.25, 0.125));
    }

    #[test]
    fn appends_after_existing_facets() {
        let records = vec![vec![Vertex3::ZERO; 4]];
        let mut store = MeshStore::new();
        load_structured(&records, &mut store).unwrap();
        load_structured(&records, &mut store).unwrap();
        assert_eq!(store.len(), 2);
    }
}
