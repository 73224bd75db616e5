//! ASCII STL decoding and encoding.
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Each line is matched by case-sensitive substring against `facet normal`,
//! `vertex`, `endfacet` and `endsolid`, in that order and independently.
//! `solid`, `outer loop` and `endloop` carry no data and are ignored.
//!
//! The parser is lenient in two documented ways:
//! - a `facet normal` or `vertex` line without exactly three numbers yields
//!   a zero triple instead of an error;
//! - a block closed with other than three vertices is dropped with a
//!   warning and parsing continues.

use std::io::{BufRead, Write};

use facet_types::{Facet, MeshStore, Vertex3};
use tracing::{debug, info, warn};

use crate::error::{IoError, IoResult};
use crate::result::{LoadSummary, SkippedFacet, SourceFormat};
use crate::sniff::solid_name;

const FACET_NORMAL: &str = "facet normal";
const VERTEX: &str = "vertex";
const END_FACET: &str = "endfacet";
const END_SOLID: &str = "endsolid";

/// Accumulator for one ASCII parse.
struct ParseState {
    /// Normal from the most recent `facet normal` line. Persists until the
    /// next one, so a block without its own normal line inherits it.
    normal: Vertex3,
    pending: Vec<Vertex3>,
    line: usize,
    summary: LoadSummary,
}

impl ParseState {
    fn new(lines_consumed: usize) -> Self {
        Self {
            normal: Vertex3::ZERO,
            pending: Vec::with_capacity(3),
            line: lines_consumed,
            summary: LoadSummary::new(SourceFormat::AsciiStl),
        }
    }

    /// Feed one line. Returns `true` once `endsolid` is reached.
    fn feed(&mut self, line: &str, store: &mut MeshStore) -> IoResult<bool> {
        if line.contains(FACET_NORMAL) {
            self.normal = parse_triple(line, FACET_NORMAL, self.line)?;
        }

        if line.contains(VERTEX) {
            let vertex = parse_triple(line, VERTEX, self.line)?;
            self.pending.push(vertex);
            self.summary.vertices += 1;
        }

        if line.contains(END_FACET) {
            self.close_facet(store);
        }

        Ok(line.contains(END_SOLID))
    }

    fn close_facet(&mut self, store: &mut MeshStore) {
        if let [v0, v1, v2] = self.pending[..] {
            store.append(Facet::new(self.normal, v0, v1, v2));
            self.summary.facets += 1;
        } else {
            let skipped = SkippedFacet {
                line: self.line,
                vertices: self.pending.len(),
            };
            let diagnostic = IoError::MalformedFacet {
                line: skipped.line,
                vertices: skipped.vertices,
            };
            warn!(%diagnostic, "Skipping malformed facet");
            self.summary.skipped_facets.push(skipped);
        }
        self.pending.clear();
    }
}

/// Parse the three numbers following `keyword` on `line`.
///
/// Every occurrence of the keyword is removed and the rest is split on
/// whitespace. Anything other than exactly three tokens gives a zero triple.
fn parse_triple(line: &str, keyword: &str, line_no: usize) -> IoResult<Vertex3> {
    let stripped = line.replace(keyword, "");
    let tokens: Vec<&str> = stripped.split_whitespace().collect();

    let [x, y, z] = tokens[..] else {
        debug!(line = line_no, tokens = tokens.len(), "Expected 3 numbers, using zero");
        return Ok(Vertex3::ZERO);
    };

    Ok(Vertex3::new(
        parse_float(x, line_no)?,
        parse_float(y, line_no)?,
        parse_float(z, line_no)?,
    ))
}

fn parse_float(token: &str, line: usize) -> IoResult<f32> {
    token.parse().map_err(|source| IoError::NumericParse {
        line,
        token: token.to_string(),
        source,
    })
}

/// Decode ASCII STL from the start of `reader`.
///
/// The opening `solid` line is read like any other line; its name, if any,
/// is reported in [`LoadSummary::header`].
///
/// # Errors
///
/// - [`IoError::Io`] if the stream cannot be read
/// - [`IoError::NumericParse`] if a three-token line holds a non-number
/// - [`IoError::UnterminatedSolid`] if the stream ends before `endsolid`
///
/// Facets completed before an error stay in `store`.
///
/// # Example
///
/// ```
/// use facet_io::read_stl_ascii;
/// use facet_types::MeshStore;
///
/// let text = "solid x\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\n\
///             vertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid x\n";
///
/// let mut store = MeshStore::new();
/// let summary = read_stl_ascii(text.as_bytes(), &mut store).unwrap();
/// assert_eq!(summary.facets, 1);
/// assert_eq!(store.facets()[0].normal().z, 1.0);
/// ```
pub fn read_stl_ascii<R: BufRead>(reader: R, store: &mut MeshStore) -> IoResult<LoadSummary> {
    parse_ascii(reader, store, ParseState::new(0))
}

/// Continue decoding after a sniffer consumed the first line.
pub(crate) fn read_stl_ascii_after_first_line<R: BufRead>(
    reader: R,
    store: &mut MeshStore,
    header: Option<String>,
) -> IoResult<LoadSummary> {
    let mut state = ParseState::new(1);
    state.summary.header = header;
    parse_ascii(reader, store, state)
}

fn parse_ascii<R: BufRead>(
    mut reader: R,
    store: &mut MeshStore,
    mut state: ParseState,
) -> IoResult<LoadSummary> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        state.line += 1;

        // Stray non-UTF-8 bytes are replaced rather than aborting the load
        let line = String::from_utf8_lossy(&buf);

        if state.line == 1 && !line.contains(END_SOLID) {
            state.summary.header = solid_name(&line);
        }

        if state.feed(&line, store)? {
            let summary = state.summary;
            info!(
                facets = summary.facets,
                vertices = summary.vertices,
                skipped = summary.skipped_facets.len(),
                "ASCII STL import complete"
            );
            return Ok(summary);
        }
    }

    warn!(
        facets = state.summary.facets,
        lines = state.line,
        "ASCII STL ended without endsolid"
    );
    Err(IoError::UnterminatedSolid {
        facets: state.summary.facets,
        vertices: state.summary.vertices,
    })
}

/// Encode a store as ASCII STL.
///
/// Stored normals are written as-is. Numbers use `{:.6e}` formatting, which
/// round-trips through the decoder to within `f32` precision of 7 digits.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_stl_ascii<W: Write>(store: &MeshStore, mut writer: W, name: &str) -> IoResult<()> {
    writeln!(writer, "solid {name}")?;

    for facet in store {
        let n = facet.normal();
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in facet.vertices() {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::unnecessary_raw_string_hashes
)]
mod tests {
    use super::*;

    const SINGLE: &str = "solid x\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid x\n";

    fn load(text: &str) -> (IoResult<LoadSummary>, MeshStore) {
        let mut store = MeshStore::new();
        let result = read_stl_ascii(text.as_bytes(), &mut store);
        (result, store)
    }

    #[test]
    fn single_facet() {
        let (result, store) = load(SINGLE);
        let summary = result.unwrap();

        assert_eq!(summary.facets, 1);
        assert_eq!(summary.vertices, 3);
        assert_eq!(summary.header.as_deref(), Some("x"));
        assert!(summary.is_clean());

        let facet = store.facets()[0];
        assert_eq!(facet.normal(), Vertex3::new(0.0, 0.0, 1.0));
        assert_eq!(
            facet.vertices(),
            [
                Vertex3::new(0.0, 0.0, 0.0),
                Vertex3::new(1.0, 0.0, 0.0),
                Vertex3::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn indented_crlf_and_exponents() {
        let text = "solid cube\r\n  facet normal -0.000000e+00 -1.000000e+00 0\r\n    outer loop\r\n      vertex 1.0e2 0 10\r\n      vertex 0 0 1E1\r\n      vertex 100 0 -0\r\n    endloop\r\n  endfacet\r\nendsolid cube\r\n";
        let (result, store) = load(text);
        result.unwrap();

        let facet = store.facets()[0];
        assert_eq!(facet.normal().y, -1.0);
        assert_eq!(facet.v0(), Vertex3::new(100.0, 0.0, 10.0));
        assert_eq!(facet.v1().z, 10.0);
    }

    #[test]
    fn two_vertex_block_is_skipped() {
        let text = r#"solid s
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
endloop
endfacet
facet normal 0 0 -1
outer loop
vertex 0 0 0
vertex 0 1 0
vertex 1 0 0
endloop
endfacet
endsolid s
"#;
        let (result, store) = load(text);
        let summary = result.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.facets()[0].normal().z, -1.0);
        assert_eq!(summary.vertices, 5);
        assert_eq!(summary.skipped_facets, vec![SkippedFacet { line: 7, vertices: 2 }]);
    }

    #[test]
    fn four_vertex_block_is_skipped() {
        let text = "solid s\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nvertex 1 1 0\nendfacet\nendsolid s\n";
        let (result, store) = load(text);
        let summary = result.unwrap();

        assert!(store.is_empty());
        assert_eq!(summary.skipped_facets[0].vertices, 4);
    }

    #[test]
    fn pending_vertices_reset_after_skip() {
        // Four vertices, then a clean block; the extra vertex must not leak.
        let text = "solid\nvertex 1 1 1\nvertex 1 1 1\nvertex 1 1 1\nvertex 1 1 1\nendfacet\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet\nendsolid\n";
        let (result, store) = load(text);
        result.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.facets()[0].v0(), Vertex3::ZERO);
    }

    #[test]
    fn short_normal_defaults_to_zero() {
        let text = "solid\nfacet normal 0 1\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet\nendsolid\n";
        let (result, store) = load(text);
        result.unwrap();
        assert_eq!(store.facets()[0].normal(), Vertex3::ZERO);
    }

    #[test]
    fn long_vertex_line_defaults_to_zero() {
        let text = "solid\nfacet normal 0 0 1\nvertex 5 5 5 5\nvertex 1 0 0\nvertex 0 1 0\nendfacet\nendsolid\n";
        let (result, store) = load(text);
        result.unwrap();
        assert_eq!(store.facets()[0].v0(), Vertex3::ZERO);
    }

    #[test]
    fn normal_carries_over_to_block_without_one() {
        let text = "solid\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet\nendsolid\n";
        let (result, store) = load(text);
        result.unwrap();
        assert_eq!(store.facets()[1].normal().z, 1.0);
    }

    #[test]
    fn non_numeric_token_aborts() {
        let text = "solid\nfacet normal 0 0 1\nvertex 0 0 0\nendfacet\nfacet normal 0 0 1\nvertex 0 abc 0\n";
        let (result, _) = load(text);

        match result {
            Err(IoError::NumericParse { line, token, .. }) => {
                assert_eq!(line, 6);
                assert_eq!(token, "abc");
            }
            other => panic!("expected NumericParse, got {other:?}"),
        }
    }

    #[test]
    fn missing_endsolid_is_unterminated() {
        let text = SINGLE.replace("endsolid x\n", "");
        let (result, store) = load(&text);

        assert!(matches!(
            result,
            Err(IoError::UnterminatedSolid {
                facets: 1,
                vertices: 3
            })
        ));
        // Partial result stays with the caller
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lines_after_endsolid_are_ignored() {
        let text = format!("{SINGLE}vertex garbage here\nsolid again\n");
        let (result, store) = load(&text);
        result.unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let text = "solid\nFACET NORMAL 0 0 1\nVERTEX 0 0 0\nENDSOLID\n";
        let (result, store) = load(text);
        assert!(matches!(result, Err(IoError::UnterminatedSolid { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn invalid_utf8_does_not_abort() {
        let mut bytes = b"solid \xff\xfe\n".to_vec();
        bytes.extend_from_slice(&SINGLE.as_bytes()[8..]);
        let mut store = MeshStore::new();
        read_stl_ascii(&bytes[..], &mut store).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn after_first_line_keeps_line_numbers() {
        let body = "vertex 0 0 0\nendfacet\nendsolid\n";
        let mut store = MeshStore::new();
        let summary =
            read_stl_ascii_after_first_line(body.as_bytes(), &mut store, Some("part".into()))
                .unwrap();

        assert_eq!(summary.header.as_deref(), Some("part"));
        assert_eq!(summary.skipped_facets[0].line, 3);
    }

    #[test]
    fn writer_output_decodes() {
        let (_, store) = load(SINGLE);
        let mut out = Vec::new();
        write_stl_ascii(&store, &mut out, "roundtrip").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("solid roundtrip\n"));
        assert!(text.trim_end().ends_with("endsolid roundtrip"));

        let (result, reloaded) = load(&text);
        assert_eq!(result.unwrap().header.as_deref(), Some("roundtrip"));
        assert_eq!(reloaded, store);
    }
}
