//! Recursive template file discovery.
//!
//! Walks one or more root directories for files with the `twig` extension,
//! optionally restricted to an allow-list of filenames and to subdirectories
//! under each root. Traversal order is directory-entry order, never sorted,
//! and results keep that order so reports are stable for a given tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TwigLintError};

/// File extension accepted by discovery, compared case-sensitively.
pub const TEMPLATE_EXTENSION: &str = "twig";

/// Discovery settings for one lint run.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Exact base filenames to keep; empty means no filtering.
    pub files: Vec<String>,
    /// Subpaths under each root to restrict the search to; empty means the
    /// whole root is searched.
    pub directories: Vec<String>,
}

impl Discovery {
    /// Create a discovery with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to these exact filenames.
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    /// Restrict the search to these subpaths under each root.
    pub fn with_directories(mut self, directories: Vec<String>) -> Self {
        self.directories = directories;
        self
    }

    /// Walk the given roots and collect matching template paths.
    ///
    /// Each walk start (a root, or `root/filter` for every directory filter)
    /// is canonicalized before descending, so returned paths are absolute. A
    /// missing or unreadable walk start aborts discovery with
    /// [`TwigLintError::Discovery`]; no partial results are returned.
    pub fn discover(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        for root in roots {
            if self.directories.is_empty() {
                self.walk_from(root, &mut found)?;
            } else {
                for dir in &self.directories {
                    self.walk_from(&root.join(dir), &mut found)?;
                }
            }
        }

        tracing::debug!("discovered {} template file(s)", found.len());
        Ok(found)
    }

    fn walk_from(&self, start: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        let start = fs::canonicalize(start).map_err(|e| TwigLintError::Discovery {
            path: start.to_path_buf(),
            message: e.to_string(),
        })?;
        self.walk(&start, found)
    }

    fn walk(&self, dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| TwigLintError::Discovery {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TwigLintError::Discovery {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.walk(&path, found)?;
            } else if self.accepts(&path) {
                found.push(path);
            }
        }

        Ok(())
    }

    /// Whether a regular file passes the extension and filename filters.
    fn accepts(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .map(|e| e == TEMPLATE_EXTENSION)
            .unwrap_or(false);
        if !has_extension {
            return false;
        }

        if self.files.is_empty() {
            return true;
        }

        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| self.files.iter().any(|f| f == n))
            .unwrap_or(false)
    }
}
