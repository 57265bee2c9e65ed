pub mod error;
pub mod naming;
pub mod strategy;

pub use error::{ApiError, ApiResult};
pub use naming::NamingScheme;
pub use strategy::{LoadingStrategy, Resolution};
