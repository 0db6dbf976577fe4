//! Pare - a tree command that skips well-known noise directories

pub mod filter;
pub mod output;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use filter::{DEFAULT_EXCLUDES, ExcludeFilter};
pub use output::TreeFormatter;
pub use walker::TreeWalker;
