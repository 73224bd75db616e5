//! Summary of a completed load.

use std::fmt;

/// Where a load's facets came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// ASCII STL text.
    AsciiStl,
    /// Binary STL records.
    BinaryStl,
    /// A host-supplied facet list.
    Structured,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AsciiStl => "ASCII STL",
            Self::BinaryStl => "binary STL",
            Self::Structured => "structured",
        })
    }
}

/// An ASCII facet block that was dropped because it did not hold exactly
/// three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedFacet {
    /// 1-based line number of the closing `endfacet`.
    pub line: usize,
    /// Vertex lines found in the block.
    pub vertices: usize,
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Input format.
    pub format: SourceFormat,

    /// Facets appended to the store by this load.
    pub facets: usize,

    /// Vertex lines or vertex records seen, including those in skipped blocks.
    pub vertices: usize,

    /// Structured records ignored for not having exactly four entries.
    pub skipped_records: usize,

    /// ASCII facet blocks dropped for a wrong vertex count.
    pub skipped_facets: Vec<SkippedFacet>,

    /// Binary header text, or the name after `solid` for ASCII input.
    pub header: Option<String>,
}

impl LoadSummary {
    pub(crate) const fn new(format: SourceFormat) -> Self {
        Self {
            format,
            facets: 0,
            vertices: 0,
            skipped_records: 0,
            skipped_facets: Vec::new(),
            header: None,
        }
    }

    /// Check if every block or record in the input became a facet.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_records == 0 && self.skipped_facets.is_empty()
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} import: {} facets, {} vertices",
            self.format, self.facets, self.vertices
        )?;
        let skipped = self.skipped_records + self.skipped_facets.len();
        if skipped > 0 {
            write!(f, ", {skipped} skipped")?;
        }
        Ok(())
    }
}
