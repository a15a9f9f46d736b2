//! dirtree - print a directory hierarchy as a box-drawn tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

use std::io::Write;
use std::path::Path;

pub use error::TreeError;
pub use output::TreeFormatter;
pub use tree::{TreeBuilder, TreeConfig, TreeNode};

/// Print the tree under `path` to `out`.
///
/// The whole tree is built before anything is written, so a filesystem
/// error leaves `out` untouched.
pub fn dir_tree<W: Write>(out: &mut W, path: &Path, include_files: bool) -> Result<(), TreeError> {
    let config = TreeConfig::with_files(include_files);
    let mut tree = TreeBuilder::new(config).build_root(path)?;
    TreeFormatter::new(config).write(&mut tree, out)?;
    Ok(())
}
