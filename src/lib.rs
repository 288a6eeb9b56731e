pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod pypi;

pub use config::{ApiConfig, Apis};
pub use error::{ApiError, ErrorKind};
