//! Binary STL decoding and encoding.
//!
//! ```text
//! UINT8[80]    – Header (display only, not validated)
//! UINT32       – Number of triangles, little-endian
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (skipped, may encode color)
//! end
//! ```

use std::io::{ErrorKind, Read, Write};

use facet_types::{Facet, MeshStore, Vertex3};
use tracing::{debug, info, warn};

use crate::error::{IoError, IoResult};
use crate::params::LoadParams;
use crate::result::{LoadSummary, SourceFormat};

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of the triangle count that follows the header.
pub const COUNT_SIZE: usize = 4;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

const HEADER_TEXT: &[u8] = b"binary STL written by facet-io";

/// Fill `buf` from `reader`, stopping early only at end of stream.
///
/// Returns the number of bytes read.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Header bytes as display text, without trailing NUL padding.
fn header_text(header: &[u8]) -> String {
    String::from_utf8_lossy(header)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

/// Triangle count from the 4 bytes following the header.
pub(crate) fn triangle_count(prefix: &[u8; HEADER_SIZE + COUNT_SIZE]) -> u32 {
    u32::from_le_bytes([
        prefix[HEADER_SIZE],
        prefix[HEADER_SIZE + 1],
        prefix[HEADER_SIZE + 2],
        prefix[HEADER_SIZE + 3],
    ])
}

/// Read a vertex from 12 bytes (3 f32s).
fn read_vertex(buf: &[u8]) -> Vertex3 {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vertex3::new(x, y, z)
}

fn decode_triangle(record: &[u8; TRIANGLE_SIZE]) -> Facet {
    Facet::new(
        read_vertex(&record[0..12]),
        read_vertex(&record[12..24]),
        read_vertex(&record[24..36]),
        read_vertex(&record[36..48]),
    )
}

/// Decode binary STL from offset 0 of `reader`.
///
/// The triangle count is the full 4-byte little-endian field. Capacity
/// reserved up front is capped by [`LoadParams::max_preallocated_facets`].
///
/// # Errors
///
/// - [`IoError::InvalidHeader`] if fewer than 84 bytes are available
/// - [`IoError::EmptyMesh`] if the declared count is zero
/// - [`IoError::TruncatedStream`] if the stream ends before the declared
///   count; complete records already read stay in `store`
/// - [`IoError::Io`] if the stream cannot be read
pub fn read_stl_binary<R: Read>(
    mut reader: R,
    store: &mut MeshStore,
    params: &LoadParams,
) -> IoResult<LoadSummary> {
    let mut prefix = [0u8; HEADER_SIZE + COUNT_SIZE];
    let got = read_full(&mut reader, &mut prefix)?;
    if got < prefix.len() {
        return Err(IoError::InvalidHeader {
            expected: prefix.len(),
            got,
        });
    }

    let header = header_text(&prefix[..HEADER_SIZE]);
    let count = triangle_count(&prefix);
    debug!(header = %header, triangles = count, "Read binary STL header");

    if count == 0 {
        warn!("Binary STL declares zero triangles");
        return Err(IoError::EmptyMesh);
    }

    let mut summary = LoadSummary::new(SourceFormat::BinaryStl);
    summary.header = (!header.is_empty()).then_some(header);

    let declared = usize::try_from(count).unwrap_or(usize::MAX);
    store.reserve(declared.min(params.max_preallocated_facets));

    let mut record = [0u8; TRIANGLE_SIZE];
    for i in 0..count {
        if read_full(&mut reader, &mut record)? < TRIANGLE_SIZE {
            warn!(declared = count, read = i, "Binary STL truncated");
            return Err(IoError::TruncatedStream {
                expected: count,
                got: i,
            });
        }

        store.append(decode_triangle(&record));
        summary.facets += 1;
        summary.vertices += 3;
    }

    info!(facets = summary.facets, "Binary STL import complete");
    Ok(summary)
}

/// Encode a store as binary STL.
///
/// Stored normals are written as-is and every attribute field is zero.
///
/// # Errors
///
/// - [`IoError::TooManyFacets`] if the store exceeds `u32::MAX` facets
/// - [`IoError::Io`] if writing fails
pub fn write_stl_binary<W: Write>(store: &MeshStore, mut writer: W) -> IoResult<()> {
    let count = u32::try_from(store.len()).map_err(|_| IoError::TooManyFacets {
        count: store.len(),
    })?;

    // Padded with spaces; must never contain the ASCII marker
    let mut header = [b' '; HEADER_SIZE];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;
    writer.write_all(&count.to_le_bytes())?;

    for facet in store {
        for v in facet.to_records() {
            write_vertex(&mut writer, v)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a vertex as 3 f32s in little-endian.
fn write_vertex<W: Write>(writer: &mut W, v: Vertex3) -> IoResult<()> {
    writer.write_all(&v.x.to_le_bytes())?;
    writer.write_all(&v.y.to_le_bytes())?;
    writer.write_all(&v.z.to_le_bytes())?;
    Ok(())
}
