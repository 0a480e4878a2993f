use crate::domain::ports::SettingsStore;
use crate::utils::error::Result;
use crate::utils::validation::ensure_monday;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store key for the reference Monday (first double-rest week), kept as an
/// ISO `YYYY-MM-DD` string.
pub const REFERENCE_KEY: &str = "first_double_rest_week";

const ISO_FORMAT: &str = "%Y-%m-%d";

fn default_reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 16).expect("valid default reference")
}

/// The persisted schedule configuration: just the reference Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSettings {
    pub reference_monday: NaiveDate,
}

impl ScheduleSettings {
    /// Load the reference Monday from the store. A missing key, an
    /// unreadable store, or an unparseable value all fall back to the
    /// default reference; loading never fails.
    pub async fn load(store: &impl SettingsStore) -> Self {
        let stored = match store.get(REFERENCE_KEY).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read settings, using default reference: {}", e);
                None
            }
        };

        let reference_monday = stored
            .and_then(|s| match NaiveDate::parse_from_str(&s, ISO_FORMAT) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!("Stored reference '{}' is not a valid date: {}", s, e);
                    None
                }
            })
            .unwrap_or_else(default_reference);

        Self { reference_monday }
    }

    /// Validate and persist a new reference Monday. Rejects non-Mondays
    /// before anything is written.
    pub async fn save(store: &impl SettingsStore, reference_monday: NaiveDate) -> Result<()> {
        ensure_monday(reference_monday)?;
        store
            .set(REFERENCE_KEY, &reference_monday.format(ISO_FORMAT).to_string())
            .await
    }
}

/// File-backed settings store: a flat TOML table of string keys in a single
/// file under the configured directory.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join("settings.toml"),
        }
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&table)?)?;
        Ok(())
    }
}
