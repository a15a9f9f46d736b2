//! Configuration shared by the builder and the formatter

/// What ends up in the tree and on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// List plain files (with sizes) next to directories.
    pub include_files: bool,
}

impl TreeConfig {
    pub fn with_files(include_files: bool) -> Self {
        Self { include_files }
    }
}
