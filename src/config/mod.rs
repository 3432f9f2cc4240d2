pub mod cli;
pub mod toml_config;

pub const DEFAULT_MENUS_ENDPOINT: &str = "https://nav.eooce.com/api/menus";
pub const DEFAULT_CARDS_ENDPOINT: &str = "https://nav.eooce.com/api/cards";
pub const DEFAULT_OUTPUT_PATH: &str = ".";
pub const DEFAULT_MENUS_FILE: &str = "menus.json";
pub const DEFAULT_NAV_DATA_FILE: &str = "nav_data.json";

#[cfg(feature = "cli")]
mod args;

#[cfg(feature = "cli")]
pub use args::CliConfig;
