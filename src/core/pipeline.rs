use crate::adapters::http::HttpFetcher;
use crate::core::tasks::plan_card_tasks;
use crate::core::{CardsOutcome, ConfigProvider, Menu, Storage, SyncPipeline};
use crate::domain::model::FailedGroup;
use crate::utils::error::Result;

pub struct NavPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: HttpFetcher,
}

impl<S: Storage, C: ConfigProvider> NavPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_fetcher(storage, config, HttpFetcher::new())
    }

    pub fn with_fetcher(storage: S, config: C, fetcher: HttpFetcher) -> Self {
        Self {
            storage,
            config,
            fetcher,
        }
    }

    async fn write_pretty<T: serde::Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(value)?;
        self.storage.write_file(file, json.as_bytes()).await?;
        Ok(self.storage.location(file))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> SyncPipeline for NavPipeline<S, C> {
    async fn fetch_menus(&self) -> Result<serde_json::Value> {
        tracing::info!("Fetching menus from {}...", self.config.menus_endpoint());
        self.fetcher.fetch_json(self.config.menus_endpoint()).await
    }

    async fn save_menus(&self, menus: &serde_json::Value) -> Result<String> {
        let path = self.write_pretty(self.config.menus_file(), menus).await?;
        tracing::info!("Saved {}", self.config.menus_file());
        Ok(path)
    }

    async fn fetch_cards(&self, menus: &[Menu]) -> Result<CardsOutcome> {
        let tasks = plan_card_tasks(menus, self.config.cards_endpoint())?;
        tracing::debug!("Planned {} card fetches for {} menus", tasks.len(), menus.len());

        let mut outcome = CardsOutcome::default();

        // Strictly one request at a time so output order matches task order.
        for task in tasks {
            let name = task.group_name();
            tracing::info!("Fetching cards for {} ({})...", name, task.url);

            match self.fetcher.fetch_json(&task.url).await {
                Ok(items) => outcome.groups.push(task.into_group(items)),
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", name, e);
                    outcome.failures.push(FailedGroup {
                        name,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }

    async fn save_nav_data(&self, outcome: &CardsOutcome) -> Result<String> {
        let path = self
            .write_pretty(self.config.nav_data_file(), &outcome.groups)
            .await?;
        tracing::info!("Saved {}", self.config.nav_data_file());
        Ok(path)
    }
}
