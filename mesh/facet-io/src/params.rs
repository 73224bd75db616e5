//! Parameters for STL loading.

use crate::sniff::StlFormat;

/// Default cap on facets reserved up front from a binary triangle count.
pub const DEFAULT_MAX_PREALLOCATED_FACETS: usize = 1 << 20;

/// Parameters for STL loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadParams {
    /// Force a format instead of sniffing the first line. Default: `None`
    pub format: Option<StlFormat>,

    /// Upper bound on the capacity reserved from a binary file's declared
    /// triangle count. The store still grows past this if the records are
    /// really there. Default: 1 048 576
    pub max_preallocated_facets: usize,

    /// For path loads, classify a file as binary when its size equals
    /// `84 + 50 * count`, even if the first line contains `solid`.
    /// Many exporters write `solid` into binary headers. Default: false
    pub binary_size_check: bool,
}

impl Default for LoadParams {
    fn default() -> Self {
        Self {
            format: None,
            max_preallocated_facets: DEFAULT_MAX_PREALLOCATED_FACETS,
            binary_size_check: false,
        }
    }
}

impl LoadParams {
    /// Create params that skip sniffing and decode as `format`.
    #[must_use]
    pub fn with_format(format: StlFormat) -> Self {
        Self {
            format: Some(format),
            ..Default::default()
        }
    }

    /// Create params that also trust the binary file-size signature.
    #[must_use]
    pub fn robust() -> Self {
        Self {
            binary_size_check: true,
            ..Default::default()
        }
    }

    /// Set the pre-allocation cap.
    #[must_use]
    pub const fn with_max_preallocated_facets(mut self, max: usize) -> Self {
        self.max_preallocated_facets = max;
        self
    }

    /// Set the binary file-size check.
    #[must_use]
    pub const fn with_binary_size_check(mut self, enabled: bool) -> Self {
        self.binary_size_check = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sniffs_first_line_only() {
        let params = LoadParams::default();
        assert_eq!(params.format, None);
        assert!(!params.binary_size_check);
        assert_eq!(params.max_preallocated_facets, DEFAULT_MAX_PREALLOCATED_FACETS);
    }

    #[test]
    fn forced_format() {
        let params = LoadParams::with_format(StlFormat::Binary);
        assert_eq!(params.format, Some(StlFormat::Binary));
    }

    #[test]
    fn robust_enables_size_check() {
        assert!(LoadParams::robust().binary_size_check);
        assert!(!LoadParams::robust().with_binary_size_check(false).binary_size_check);
    }

    #[test]
    fn builder_sets_cap() {
        let params = LoadParams::default().with_max_preallocated_facets(16);
        assert_eq!(params.max_preallocated_facets, 16);
    }
}
