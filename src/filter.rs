//! Directory-name filtering for tree walking

use std::collections::HashSet;

/// Directory names that are skipped by default: never listed, never
/// descended into. Matching is by exact name at any depth.
pub const DEFAULT_EXCLUDES: [&str; 7] = [
    "modules",
    "node_modules",
    ".git",
    "__pycache__",
    ".vscode",
    "dist",
    "build",
];

/// Filter that matches directory entries by exact name.
///
/// Name matching is case-sensitive and ignores the entry's path: a
/// nested directory sharing an excluded name is excluded regardless of
/// depth. Files are never filtered.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    names: HashSet<String>,
}

impl ExcludeFilter {
    /// Create a filter from an explicit list of names, without the
    /// built-in defaults.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Add further names on top of whatever the filter already holds.
    pub fn with_extra<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.names.extend(names);
        self
    }

    /// Check whether a directory name should be excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for ExcludeFilter {
    /// The built-in seven-name exclusion set.
    fn default() -> Self {
        Self::from_names(DEFAULT_EXCLUDES.iter().map(|s| s.to_string()))
    }
}
