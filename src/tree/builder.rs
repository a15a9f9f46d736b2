//! TreeBuilder - reads a directory into an in-memory tree

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::error::TreeError;

use super::config::TreeConfig;
use super::node::TreeNode;
use super::path::{resolve_root, root_name};

/// Recursively reads directories into `TreeNode`s.
///
/// Subdirectories are always included. Plain files are included, with their
/// size, only when `include_files` is set. The first failing read or stat
/// aborts the whole build.
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Resolve `path` and build the tree under it, named after its last component.
    pub fn build_root(&self, path: &Path) -> Result<TreeNode, TreeError> {
        let root = resolve_root(path).map_err(|source| TreeError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("resolved root {} -> {}", path.display(), root.display());
        self.build(&root, root_name(&root))
    }

    /// Build the tree for `path`, giving the root node `name`.
    ///
    /// Children keep filesystem enumeration order.
    pub fn build(&self, path: &Path, name: impl Into<String>) -> Result<TreeNode, TreeError> {
        let mut node = TreeNode::dir(name);

        debug!("reading directory {}", path.display());
        let entries = fs::read_dir(path).map_err(|source| TreeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| TreeError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let entry_path = entry.path();
            let entry_name = entry.file_name().to_string_lossy().to_string();
            let file_type = entry.file_type().map_err(|source| TreeError::Metadata {
                path: entry_path.clone(),
                source,
            })?;

            if file_type.is_dir() {
                trace!("dir  {}", entry_path.display());
                node.push_child(self.build(&entry_path, entry_name)?);
            } else if self.config.include_files {
                // Follows symlinks, so a dangling link fails here.
                let size = fs::metadata(&entry_path)
                    .map_err(|source| TreeError::Metadata {
                        path: entry_path.clone(),
                        source,
                    })?
                    .len();
                trace!("file {} ({} bytes)", entry_path.display(), size);
                node.push_child(TreeNode::file(entry_name, size));
            }
        }

        Ok(node)
    }
}
