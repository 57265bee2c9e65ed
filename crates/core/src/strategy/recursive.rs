//! Recursive directory search.
//!
//! Every registered root is walked depth-first, in registration order, until a
//! file whose name equals the target file name is found:
//! - siblings are visited in file-name order, so tie-breaks are reproducible
//! - a subdirectory is fully explored before its later siblings
//! - symbolic links are followed, except those looping back to an ancestor
//! - unreadable or missing directories contribute no entries
//! - a symbolic link whose target is missing cannot be inspected, so it is
//!   skipped even when its name matches; the search then continues

use autoloader_api::{LoadingStrategy, NamingScheme};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Strategy that searches registered roots recursively for `<StrictName>.<ext>`.
#[derive(Debug, Clone, Default)]
pub struct RecursiveStrategy {
    roots: Vec<PathBuf>,
    naming: NamingScheme,
}

impl RecursiveStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: NamingScheme) -> Self {
        Self {
            roots: Vec::new(),
            naming,
        }
    }

    /// Append a root. Existence is only checked when searching, and registering
    /// the same root twice makes it searched twice.
    pub fn register_root(&mut self, path: impl Into<PathBuf>) {
        self.roots.push(path.into());
    }

    pub fn with_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.register_root(path);
        self
    }

    /// Roots in search order
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn naming(&self) -> &NamingScheme {
        &self.naming
    }
}

impl LoadingStrategy for RecursiveStrategy {
    fn name(&self) -> &str {
        "recursive"
    }

    fn resolve(&self, symbolic_name: &str) -> Option<PathBuf> {
        let Some(file_name) = self.naming.target_file_name(symbolic_name) else {
            debug!("No strict name in {:?}, skipping recursive search", symbolic_name);
            return None;
        };

        self.roots.iter().find_map(|root| {
            debug!("Searching {} for {}", root.display(), file_name);
            find_in_tree(root, &file_name)
        })
    }
}

/// Depth-first search below `root` for a non-directory entry named exactly
/// `file_name`. Returns the first hit in traversal order.
pub fn find_in_tree(root: &Path, file_name: &str) -> Option<PathBuf> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(ancestor) = err.loop_ancestor() {
                    debug!(
                        "Not following symlink cycle back to {}",
                        ancestor.display()
                    );
                } else {
                    trace!("Skipping unreadable entry under {}: {}", root.display(), err);
                }
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if entry.file_name() == file_name {
            return Some(entry.into_path());
        }
    }

    None
}
