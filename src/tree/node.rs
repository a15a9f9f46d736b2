//! In-memory tree nodes

/// A directory or file found while walking.
///
/// Files carry their byte size; directories carry their children in
/// filesystem enumeration order until `sort_children` is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File { name: String, size: u64 },
    Dir { name: String, children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        TreeNode::File {
            name: name.into(),
            size,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        TreeNode::Dir {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper, mostly for tests.
    pub fn with_children(mut self, nodes: impl IntoIterator<Item = TreeNode>) -> Self {
        if let TreeNode::Dir { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Byte size, only meaningful for files.
    pub fn size(&self) -> Option<u64> {
        match self {
            TreeNode::File { size, .. } => Some(*size),
            TreeNode::Dir { .. } => None,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Append a child. Files never gain children, so this is ignored on them.
    pub(crate) fn push_child(&mut self, child: TreeNode) {
        if let TreeNode::Dir { children, .. } = self {
            children.push(child);
        }
    }
}
