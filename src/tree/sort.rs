//! Sibling ordering

use super::node::TreeNode;

impl TreeNode {
    /// Sort the immediate children by name.
    ///
    /// Byte order, case-sensitive, directories and files mixed in one
    /// sequence. Grandchildren are left alone; the formatter calls this
    /// for each level just before printing it.
    pub fn sort_children(&mut self) {
        if let TreeNode::Dir { children, .. } = self {
            children.sort_by(|a, b| a.name().cmp(b.name()));
        }
    }
}
