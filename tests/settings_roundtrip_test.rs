use chrono::NaiveDate;
use rest_week::config::settings::REFERENCE_KEY;
use rest_week::{classify, FileSettingsStore, RestDay, ScheduleSettings, SettingsStore};
use tempfile::TempDir;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn save_reload_and_classify_through_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(temp_dir.path());

    // Fresh store: default reference applies.
    let settings = ScheduleSettings::load(&store).await;
    assert_eq!(settings.reference_monday, date(2024, 12, 16));

    // Shift the schedule by one week: 2024-12-23 becomes the double-rest
    // reference, flipping every week's parity.
    ScheduleSettings::save(&store, date(2024, 12, 23)).await.unwrap();
    let settings = ScheduleSettings::load(&store).await;
    assert_eq!(settings.reference_monday, date(2024, 12, 23));

    // 2024-12-22 was a double-rest Sunday under the default reference; with
    // the shifted reference its week is now a single-rest week.
    assert_eq!(
        classify(date(2024, 12, 22), settings.reference_monday),
        RestDay::SingleRest
    );
    assert_eq!(
        classify(date(2024, 12, 28), settings.reference_monday),
        RestDay::DoubleRest
    );
}

#[tokio::test]
async fn store_persists_iso_string_under_the_settings_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(temp_dir.path());

    ScheduleSettings::save(&store, date(2025, 3, 3)).await.unwrap();

    assert_eq!(
        store.get(REFERENCE_KEY).await.unwrap().as_deref(),
        Some("2025-03-03")
    );

    let settings_file = temp_dir.path().join("settings.toml");
    assert!(settings_file.exists());
    let raw = std::fs::read_to_string(settings_file).unwrap();
    assert!(raw.contains(REFERENCE_KEY));
    assert!(raw.contains("2025-03-03"));
}

#[tokio::test]
async fn rejected_save_leaves_existing_settings_intact() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(temp_dir.path());

    ScheduleSettings::save(&store, date(2024, 12, 16)).await.unwrap();

    // 2024-12-20 is a Friday; save must refuse it.
    assert!(ScheduleSettings::save(&store, date(2024, 12, 20)).await.is_err());

    let settings = ScheduleSettings::load(&store).await;
    assert_eq!(settings.reference_monday, date(2024, 12, 16));
}

#[tokio::test]
async fn store_keeps_unrelated_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(temp_dir.path());

    store.set("theme", "dark").await.unwrap();
    ScheduleSettings::save(&store, date(2024, 12, 16)).await.unwrap();

    assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
}
