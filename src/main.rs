use clap::Parser;
use nav_sync::core::ConfigProvider;
use nav_sync::utils::{logger, validation::Validate};
use nav_sync::{CliConfig, LocalStorage, NavPipeline, SyncEngine, SyncError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => sync(config).await,
                Err(e) => Err(e),
            }
        }
        None => sync(cli).await,
    };

    if let Err(e) = result {
        tracing::error!("Synchronization failed: {} ({:?})", e, e);
        eprintln!("Synchronization failed: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn sync<C: ConfigProvider + Validate>(config: C) -> Result<(), SyncError> {
    config.validate()?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = SyncEngine::new(NavPipeline::new(storage, config));
    let report = engine.run().await?;

    tracing::info!(
        "Wrote {} card groups from {} menus to {} and {}",
        report.groups_written,
        report.menu_count,
        report.menus_path,
        report.nav_data_path
    );
    for failed in &report.failures {
        tracing::warn!("Missing from this run: {} ({})", failed.name, failed.error);
    }

    Ok(())
}
