use crate::core::{Menu, SyncPipeline};
use crate::domain::model::SyncReport;
use crate::utils::error::Result;

pub struct SyncEngine<P: SyncPipeline> {
    pipeline: P,
}

impl<P: SyncPipeline> SyncEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs one full synchronization. Any `Err` is fatal; per-group card
    /// failures are reported in the returned `SyncReport` instead.
    pub async fn run(&self) -> Result<SyncReport> {
        tracing::info!("Starting synchronization...");

        let raw_menus = self.pipeline.fetch_menus().await?;
        let menus_path = self.pipeline.save_menus(&raw_menus).await?;

        let menus = Menu::list_from_value(raw_menus)?;
        tracing::info!("Fetched {} menus", menus.len());

        let outcome = self.pipeline.fetch_cards(&menus).await?;
        tracing::info!(
            "Fetched {} card groups ({} failed)",
            outcome.groups.len(),
            outcome.failures.len()
        );

        let nav_data_path = self.pipeline.save_nav_data(&outcome).await?;
        tracing::info!("Synchronization complete!");

        Ok(SyncReport {
            menus_path,
            nav_data_path,
            menu_count: menus.len(),
            groups_written: outcome.groups.len(),
            failures: outcome.failures,
        })
    }
}
