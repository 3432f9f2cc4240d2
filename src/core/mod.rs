pub mod engine;
pub mod pipeline;
pub mod tasks;

pub use crate::domain::model::{CardGroup, CardTask, CardsOutcome, Menu, NavData, SubMenu};
pub use crate::domain::ports::{ConfigProvider, Storage, SyncPipeline};
pub use crate::utils::error::Result;
