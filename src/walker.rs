//! Recursive directory walker with filtered descent

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::filter::ExcludeFilter;
use crate::output::TreeFormatter;

/// Depth-first, top-down tree walker.
///
/// Excluded directory names are dropped from each listing before any
/// recursion, so excluded subtrees are never enumerated at all.
/// Siblings are sorted by name for deterministic output. Any listing
/// error aborts the walk and propagates unmodified.
pub struct TreeWalker {
    excludes: ExcludeFilter,
}

impl TreeWalker {
    pub fn new(excludes: ExcludeFilter) -> Self {
        Self { excludes }
    }

    /// Walk `root` and stream the rendering through `fmt`.
    ///
    /// Output already written stays put if a later listing fails.
    pub fn walk<W: WriteColor>(
        &self,
        root: &Path,
        fmt: &mut TreeFormatter<W>,
    ) -> io::Result<()> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        fmt.header(&name)?;
        self.walk_dir(root, 0, fmt)
    }

    fn walk_dir<W: WriteColor>(
        &self,
        path: &Path,
        depth: usize,
        fmt: &mut TreeFormatter<W>,
    ) -> io::Result<()> {
        // Drain the listing into owned lists so the read_dir handle is
        // released before any recursion.
        let mut subdirs: Vec<(String, PathBuf)> = Vec::new();
        let mut files: Vec<String> = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // Symlinks are not followed: a symlink to a directory
            // renders as a file and is never descended.
            if entry.file_type()?.is_dir() {
                if !self.excludes.is_excluded(&name) {
                    subdirs.push((name, entry.path()));
                }
            } else {
                files.push(name);
            }
        }

        subdirs.sort_by(|a, b| a.0.cmp(&b.0));
        files.sort();

        // The root prints no directory line of its own, only the header.
        if depth > 0 {
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            fmt.dir_entry(&name, depth - 1)?;
        }

        let total = files.len();
        for (i, file) in files.iter().enumerate() {
            fmt.file_entry(file, depth, i == total - 1)?;
        }

        for (_, subdir) in subdirs {
            self.walk_dir(&subdir, depth + 1, fmt)?;
        }

        Ok(())
    }
}
