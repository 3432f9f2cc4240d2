use crate::domain::model::{CardsOutcome, Menu};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Overwrites `path` (relative to the storage root) with `data`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Display form of `path` for logs and reports.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn menus_endpoint(&self) -> &str;
    fn cards_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn menus_file(&self) -> &str;
    fn nav_data_file(&self) -> &str;
}

/// Stages of one synchronization run, driven in order by `SyncEngine`.
#[async_trait]
pub trait SyncPipeline: Send + Sync {
    /// Fetches the raw menu list.
    async fn fetch_menus(&self) -> Result<serde_json::Value>;
    /// Persists the raw menu list verbatim, returning where it was written.
    async fn save_menus(&self, menus: &serde_json::Value) -> Result<String>;
    /// Fetches every card group one after another. Individual failures are
    /// collected, never returned as `Err`.
    async fn fetch_cards(&self, menus: &[Menu]) -> Result<CardsOutcome>;
    /// Persists the assembled card groups, returning where they were written.
    async fn save_nav_data(&self, outcome: &CardsOutcome) -> Result<String>;
}
