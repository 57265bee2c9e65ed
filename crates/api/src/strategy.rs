//! The capability shared by every search strategy.

use serde::Serialize;
use std::path::PathBuf;

/// Maps a symbolic name to a file on disk.
///
/// Implementations keep all per-lookup state on the call stack, so a single
/// instance can serve concurrent lookups through a shared reference.
pub trait LoadingStrategy: Send + Sync {
    /// Strategy name (for logging/diagnostics)
    fn name(&self) -> &str;

    /// Locate the file declaring `symbolic_name`. `None` means "not found here",
    /// which is a normal outcome, not an error.
    fn resolve(&self, symbolic_name: &str) -> Option<PathBuf>;
}

/// A successful lookup through a chain of strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub name: String,
    pub path: PathBuf,
    /// Name of the strategy that produced the match
    pub strategy: String,
}
