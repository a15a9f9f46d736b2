//! Output formatting for built trees

mod tree;
mod utils;

pub use tree::TreeFormatter;
