pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpFetcher;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::SyncEngine, pipeline::NavPipeline};
pub use domain::model::{CardGroup, Menu, NavData, SubMenu, SyncReport};
pub use utils::error::{Result, SyncError};
