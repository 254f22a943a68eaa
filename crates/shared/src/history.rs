use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Slugs published on one day, in category order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub slugs: Vec<String>,
}

/// On-disk record of past selections.
///
/// `history` is trimmed to a fixed length; `used_slugs` is never trimmed, so
/// an article stays blocked after the entry that picked it has been dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStore {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub used_slugs: BTreeSet<String>,
}

impl HistoryStore {
    /// Load the history file. A missing, unreadable or malformed file yields an
    /// empty history; the reason is logged.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no history file yet, starting empty");
            return Self::default();
        }

        let mut store = match Self::read(path) {
            Ok(store) => store,
            Err(e) => {
                let reason = format!("{:#}", e);
                tracing::warn!(
                    path = %path.display(),
                    error = %reason,
                    "ignoring unusable history file, starting empty"
                );
                Self::default()
            }
        };
        store.reconcile();
        store
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read history file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse history JSON from {}", path.display()))
    }

    /// Write the whole store to `path` via a sibling temp file and rename, so a
    /// crash never leaves a half-written history behind.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.reconcile();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize history")?;

        let tmp_path = temp_path_for(path);
        fs::write(&tmp_path, json + "\n")
            .with_context(|| format!("Failed to write history file: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to replace history file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            entries = self.history.len(),
            used = self.used_slugs.len(),
            "history saved"
        );
        Ok(())
    }

    /// Fold every slug mentioned in `history` into `used_slugs`
    pub fn reconcile(&mut self) {
        for entry in &self.history {
            self.used_slugs.extend(entry.slugs.iter().cloned());
        }
    }

    /// Entry recorded for `date`; the newest wins in files written before
    /// dates were deduplicated
    pub fn entry_for(&self, date: NaiveDate) -> Option<&HistoryEntry> {
        self.history.iter().rev().find(|e| e.date == date)
    }

    pub fn is_used(&self, slug: &str) -> bool {
        self.used_slugs.contains(slug)
    }

    /// Record the slugs chosen for `date`. Replaces the entry already held for
    /// that date wherever it sits, appends otherwise, then trims to
    /// `max_entries`. Each date appears at most once.
    pub fn record(&mut self, date: NaiveDate, slugs: Vec<String>, max_entries: usize) {
        self.used_slugs.extend(slugs.iter().cloned());

        match self.history.iter_mut().find(|e| e.date == date) {
            Some(existing) => existing.slugs = slugs,
            None => self.history.push(HistoryEntry { date, slugs }),
        }

        self.trim(max_entries);
    }

    /// Drop the oldest entries beyond `max_entries`
    pub fn trim(&mut self, max_entries: usize) {
        if self.history.len() > max_entries {
            let excess = self.history.len() - max_entries;
            self.history.drain(..excess);
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "history.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slugs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    // ==================== Record / Trim Tests ====================

    #[test]
    fn test_record_appends_new_date() {
        let mut store = HistoryStore::default();
        store.record(date(2026, 1, 1), slugs(&["a"]), 10);
        store.record(date(2026, 1, 2), slugs(&["b"]), 10);

        assert_eq!(store.history.len(), 2);
        assert_eq!(store.history[1].date, date(2026, 1, 2));
        assert!(store.is_used("a"));
        assert!(store.is_used("b"));
    }

    #[test]
    fn test_record_replaces_same_day() {
        let mut store = HistoryStore::default();
        store.record(date(2026, 1, 1), slugs(&["a"]), 10);
        store.record(date(2026, 1, 1), slugs(&["b"]), 10);

        assert_eq!(store.history.len(), 1);
        assert_eq!(store.history[0].slugs, slugs(&["b"]));
        // The replaced pick stays blocked
        assert!(store.is_used("a"));
    }

    #[test]
    fn test_record_replaces_backfilled_date() {
        let mut store = HistoryStore::default();
        store.record(date(2026, 10, 20), slugs(&["a"]), 10);
        store.record(date(2026, 10, 19), slugs(&["b"]), 10);
        store.record(date(2026, 10, 20), slugs(&["c"]), 10);

        let dates: Vec<NaiveDate> = store.history.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2026, 10, 20), date(2026, 10, 19)]);
        assert_eq!(store.entry_for(date(2026, 10, 20)).unwrap().slugs, slugs(&["c"]));
        assert_eq!(store.entry_for(date(2026, 10, 19)).unwrap().slugs, slugs(&["b"]));
        assert!(store.is_used("a"));
    }

    #[test]
    fn test_record_trims_oldest() {
        let mut store = HistoryStore::default();
        for day in 1..=5 {
            store.record(date(2026, 1, day), slugs(&[&format!("s{}", day)]), 3);
            assert!(store.history.len() <= 3);
        }

        let dates: Vec<NaiveDate> = store.history.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2026, 1, 3), date(2026, 1, 4), date(2026, 1, 5)]);
        // Trimmed entries are still remembered
        assert!(store.is_used("s1"));
        assert_eq!(store.used_slugs.len(), 5);
    }

    #[test]
    fn test_entry_for_finds_date() {
        let mut store = HistoryStore::default();
        store.record(date(2026, 1, 1), slugs(&["a"]), 10);
        store.record(date(2026, 1, 2), slugs(&["b"]), 10);

        assert_eq!(store.entry_for(date(2026, 1, 1)).unwrap().slugs, slugs(&["a"]));
        assert!(store.entry_for(date(2026, 1, 3)).is_none());
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let mut store = HistoryStore::default();
        store.record(date(2026, 2, 1), slugs(&["x", "y"]), 10);
        store.save(&path).unwrap();

        let loaded = HistoryStore::load(&path);
        assert_eq!(loaded, store);
        assert!(!dir.path().join("nested").join("history.json.tmp").exists());
    }

    #[test]
    fn test_saved_json_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::default();
        store.record(date(2026, 2, 1), slugs(&["b", "a"]), 10);
        store.save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["history"][0]["date"], "2026-02-01");
        assert_eq!(value["history"][0]["slugs"], serde_json::json!(["b", "a"]));
        assert_eq!(value["used_slugs"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::load(&dir.path().join("missing.json"));
        assert_eq!(store, HistoryStore::default());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ this is not json").unwrap();

        assert_eq!(HistoryStore::load(&path), HistoryStore::default());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"{"history": [{"date": "yesterday", "slugs": []}]}"#).unwrap();

        assert_eq!(HistoryStore::load(&path), HistoryStore::default());
    }

    #[test]
    fn test_load_reconciles_used_slugs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"{"history": [{"date": "2026-01-01", "slugs": ["a", "b"]}], "used_slugs": ["old"]}"#,
        )
        .unwrap();

        let store = HistoryStore::load(&path);
        let used: Vec<&str> = store.used_slugs.iter().map(String::as_str).collect();
        assert_eq!(used, vec!["a", "b", "old"]);
    }

    #[test]
    fn test_load_accepts_missing_used_slugs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"{"history": [{"date": "2026-01-01", "slugs": ["a"]}]}"#).unwrap();

        let store = HistoryStore::load(&path);
        assert!(store.is_used("a"));
    }
}
