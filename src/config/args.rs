use super::{
    DEFAULT_CARDS_ENDPOINT, DEFAULT_MENUS_ENDPOINT, DEFAULT_MENUS_FILE, DEFAULT_NAV_DATA_FILE,
    DEFAULT_OUTPUT_PATH,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nav-sync")]
#[command(about = "Sync navigation menus and card groups from the nav API to local JSON files")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_MENUS_ENDPOINT)]
    pub menus_endpoint: String,

    /// Base URL; the menu id (and `subMenuId` query) are appended per request
    #[arg(long, default_value = DEFAULT_CARDS_ENDPOINT)]
    pub cards_endpoint: String,

    /// Directory the output files are written into
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_MENUS_FILE)]
    pub menus_file: String,

    #[arg(long, default_value = DEFAULT_NAV_DATA_FILE)]
    pub nav_data_file: String,

    /// TOML file to read endpoints and paths from instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn menus_endpoint(&self) -> &str {
        &self.menus_endpoint
    }

    fn cards_endpoint(&self) -> &str {
        &self.cards_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn menus_file(&self) -> &str {
        &self.menus_file
    }

    fn nav_data_file(&self) -> &str {
        &self.nav_data_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("menus_endpoint", &self.menus_endpoint)?;
        validate_url("cards_endpoint", &self.cards_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("menus_file", &self.menus_file)?;
        validate_path("nav_data_file", &self.nav_data_file)?;
        Ok(())
    }
}
