//! Directory tree model
//!
//! - `TreeBuilder` reads a directory recursively into `TreeNode`s
//! - `TreeNode::sort_children` orders one level of siblings by name
//! - `resolve_root` turns the command-line path into the absolute root

mod builder;
mod config;
mod node;
mod path;
mod sort;

pub use builder::TreeBuilder;
pub use config::TreeConfig;
pub use node::TreeNode;
pub use path::{resolve_root, root_name};
