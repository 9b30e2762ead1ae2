pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::http::{router, serve, AppState};
pub use adapters::memory::MemStorage;
pub use config::AppConfig;
pub use core::service::CatalogService;
pub use utils::error::{AppError, Result};
