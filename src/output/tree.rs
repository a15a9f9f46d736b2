//! Tree formatter for box-drawn output
//!
//! `TreeFormatter` prints every descendant of a built `TreeNode` on its own
//! line. The root itself is never printed.

use std::io::{self, Write};

use crate::tree::{TreeConfig, TreeNode};

use super::utils::{child_prefix, connector, size_suffix};

/// Formatter for a fully built tree.
pub struct TreeFormatter {
    config: TreeConfig,
}

impl TreeFormatter {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Render into a string.
    pub fn format(&self, node: &mut TreeNode) -> String {
        let mut buf = Vec::new();
        self.write(node, &mut buf).expect("writing to Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Render to `out`, one newline-terminated line per entry.
    ///
    /// Children are sorted in place, level by level, as they are reached.
    pub fn write<W: Write>(&self, node: &mut TreeNode, out: &mut W) -> io::Result<()> {
        self.write_children(node, out, "")
    }

    fn is_rendered(&self, node: &TreeNode) -> bool {
        node.is_dir() || self.config.include_files
    }

    fn write_children<W: Write>(
        &self,
        node: &mut TreeNode,
        out: &mut W,
        prefix: &str,
    ) -> io::Result<()> {
        node.sort_children();

        let TreeNode::Dir { children, .. } = node else {
            return Ok(());
        };

        // "Last" is decided among the siblings that will actually be printed.
        let last = children.iter().rposition(|c| self.is_rendered(c));

        for (i, child) in children.iter_mut().enumerate() {
            if !self.is_rendered(child) {
                continue;
            }
            let is_last = last == Some(i);
            self.write_line(child, out, prefix, is_last)?;
            if child.is_dir() {
                self.write_children(child, out, &child_prefix(prefix, is_last))?;
            }
        }

        Ok(())
    }

    fn write_line<W: Write>(
        &self,
        node: &TreeNode,
        out: &mut W,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        match node {
            TreeNode::File { name, size } => writeln!(
                out,
                "{}{}{}{}",
                prefix,
                connector(is_last),
                name,
                size_suffix(*size)
            ),
            TreeNode::Dir { name, .. } => writeln!(out, "{}{}{}", prefix, connector(is_last), name),
        }
    }
}
