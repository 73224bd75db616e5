//! STL entry points: format dispatch and file handling.
//!
//! Files are opened inside each call and closed when the call returns,
//! on success and on every error path.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom};
use std::path::Path;

use facet_types::MeshStore;
use tracing::{debug, info};

use crate::ascii::{read_stl_ascii, read_stl_ascii_after_first_line, write_stl_ascii};
use crate::binary::{
    read_full, read_stl_binary, triangle_count, write_stl_binary, COUNT_SIZE, HEADER_SIZE,
    TRIANGLE_SIZE,
};
use crate::error::{IoError, IoResult};
use crate::params::LoadParams;
use crate::result::LoadSummary;
use crate::sniff::{sniff_format, StlFormat};

/// Load an STL file into `store`, detecting ASCII vs binary.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The content is not valid STL (see [`IoError`])
///
/// Facets decoded before a failure remain in `store`.
///
/// # Example
///
/// ```no_run
/// use facet_io::load_stl;
/// use facet_types::MeshStore;
///
/// let mut store = MeshStore::new();
/// let summary = load_stl("model.stl", &mut store).unwrap();
/// println!("{summary}");
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P, store: &mut MeshStore) -> IoResult<LoadSummary> {
    load_stl_with(path, store, &LoadParams::default())
}

/// Load an STL file into `store` with explicit parameters.
///
/// # Errors
///
/// Same as [`load_stl`].
pub fn load_stl_with<P: AsRef<Path>>(
    path: P,
    store: &mut MeshStore,
    params: &LoadParams,
) -> IoResult<LoadSummary> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading STL file");

    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let size_says_binary =
        params.format.is_none() && params.binary_size_check && has_binary_size(&mut file)?;

    let sized;
    let params = if size_says_binary {
        debug!("File size matches binary STL layout");
        sized = LoadParams {
            format: Some(StlFormat::Binary),
            ..params.clone()
        };
        &sized
    } else {
        params
    };

    read_stl(BufReader::new(file), store, params)
}

/// Check whether the file length equals `84 + 50 * count` for the count in
/// its header. Leaves the file positioned at offset 0.
fn has_binary_size(file: &mut File) -> IoResult<bool> {
    let len = file.metadata()?.len();

    let mut prefix = [0u8; HEADER_SIZE + COUNT_SIZE];
    let got = read_full(file, &mut prefix)?;
    file.seek(SeekFrom::Start(0))?;

    if got < prefix.len() {
        return Ok(false);
    }

    let expected = (HEADER_SIZE + COUNT_SIZE) as u64
        + u64::from(triangle_count(&prefix)) * TRIANGLE_SIZE as u64;
    Ok(expected == len)
}

/// Decode STL from any buffered reader into `store`.
///
/// Unless [`LoadParams::format`] forces a format, the first line is
/// sniffed: a line containing `solid` means ASCII, anything else binary.
///
/// # Errors
///
/// Same as [`load_stl`].
///
/// # Example
///
/// ```
/// use facet_io::{read_stl, LoadParams};
/// use facet_types::MeshStore;
///
/// let text = "solid t\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\n\
///             vertex 0 1 0\nendfacet\nendsolid t\n";
///
/// let mut store = MeshStore::new();
/// read_stl(text.as_bytes(), &mut store, &LoadParams::default()).unwrap();
/// assert_eq!(store.len(), 1);
/// ```
pub fn read_stl<R: BufRead>(
    mut reader: R,
    store: &mut MeshStore,
    params: &LoadParams,
) -> IoResult<LoadSummary> {
    match params.format {
        Some(StlFormat::Ascii) => read_stl_ascii(reader, store),
        Some(StlFormat::Binary) => read_stl_binary(reader, store, params),
        None => {
            let sniffed = sniff_format(&mut reader)?;
            let format = sniffed.format;
            debug!(?format, "Sniffed STL format");

            match format {
                StlFormat::Ascii => {
                    let header = sniffed.solid_name();
                    read_stl_ascii_after_first_line(reader, store, header)
                }
                StlFormat::Binary => read_stl_binary(sniffed.replay(reader), store, params),
            }
        }
    }
}

/// Save a store to an STL file.
///
/// ASCII output is named after the file stem.
///
/// # Arguments
///
/// * `store` - The facets to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary STL; if false, save as ASCII
///
/// # Errors
///
/// Returns an error if the file cannot be written, or if a binary store
/// exceeds `u32::MAX` facets.
pub fn save_stl<P: AsRef<Path>>(store: &MeshStore, path: P, binary: bool) -> IoResult<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);

    info!(path = %path.display(), facets = store.len(), binary, "Saving STL file");

    if binary {
        write_stl_binary(store, writer)
    } else {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("mesh");
        write_stl_ascii(store, writer, name)
    }
}
