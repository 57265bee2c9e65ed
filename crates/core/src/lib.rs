pub mod autoloader;
pub mod config;
pub mod error;
pub mod logging;
pub mod strategy;

pub use autoloader::Autoloader;
pub use autoloader_api::{LoadingStrategy, NamingScheme, Resolution};
pub use config::AutoloaderConfig;
pub use error::{AutoloaderError, Result};
pub use strategy::{DirectoryStrategy, FixedStrategy, RecursiveStrategy};
