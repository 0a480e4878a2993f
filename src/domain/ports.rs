use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value settings backend. The schedule settings only ever store plain
/// strings (the reference Monday as an ISO date), so the port stays
/// string-typed and backend-agnostic.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
