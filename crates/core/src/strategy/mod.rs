//! Interchangeable search strategies.
//!
//! Each strategy owns its registrations and implements
//! [`LoadingStrategy`](autoloader_api::LoadingStrategy) on its own; they share
//! no state, only the naming rules they are built with.

pub mod directory;
pub mod fixed;
pub mod recursive;

pub use directory::DirectoryStrategy;
pub use fixed::FixedStrategy;
pub use recursive::{RecursiveStrategy, find_in_tree};
