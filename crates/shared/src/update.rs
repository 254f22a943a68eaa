use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::dates::{german_long_date, german_short_date};
use crate::history::HistoryStore;
use crate::page::{PageGenerator, HTML_FILES, SITE_TITLE};
use crate::pdf::PdfDocument;
use crate::selection::{ArticleSelector, DailySelection};

/// Outcome of one daily run
#[derive(Debug)]
pub struct UpdateReport {
    pub selection: DailySelection,
    pub history_file: PathBuf,
    pub history_len: usize,
    /// Page files followed by the PDF
    pub files: Vec<PathBuf>,
}

pub struct DailyUpdate<'a> {
    config: &'a Config,
    catalog: &'a Catalog,
}

impl<'a> DailyUpdate<'a> {
    pub fn new(config: &'a Config, catalog: &'a Catalog) -> Self {
        Self { config, catalog }
    }

    /// Select, record and render the articles for `date`.
    ///
    /// Selection failures abort before anything is written.
    pub fn run(&self, date: NaiveDate) -> Result<UpdateReport> {
        let config = self.config;

        let mut store = HistoryStore::load(&config.history_file);
        let selection = ArticleSelector::new(self.catalog)
            .select(date, &store, config.replay)
            .with_context(|| format!("Failed to select articles for {}", date))?;

        store.record(date, selection.slugs(), config.max_history);
        store.save(&config.history_file)?;

        let html = PageGenerator::generate(&selection);
        let pdf = Self::summary_pdf(&selection, &config.update_time);

        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                config.output_dir.display()
            )
        })?;
        let mut files = PageGenerator::save(&html, &config.output_dir)?;
        files.push(pdf.save(&config.output_dir)?);

        tracing::info!(
            %date,
            fresh = selection.fresh,
            files = files.len(),
            "daily content written"
        );

        Ok(UpdateReport {
            selection,
            history_file: config.history_file.clone(),
            history_len: store.history.len(),
            files,
        })
    }

    /// Status page describing what the HTML files contain
    pub fn summary_pdf(selection: &DailySelection, update_time: &str) -> PdfDocument {
        let date_long = german_long_date(selection.date);
        let date_short = german_short_date(selection.date);
        let labels: Vec<&str> = selection
            .articles
            .iter()
            .map(|s| s.category.label())
            .collect();

        let mut doc = PdfDocument::new()
            .line(format!("Dokumentation {}", SITE_TITLE))
            .line(format!("update: {}", date_short))
            .block("Automatisierung:")
            .line(format!(
                "1. {} dient als Einstieg fuer GitHub Pages und stimmt",
                HTML_FILES[0]
            ))
            .line(format!("   inhaltlich mit {} ueberein.", HTML_FILES[1]))
            .line(format!(
                "2. Beide HTML-Dateien enthalten {} Ressorts:",
                labels.len()
            ))
            .line(format!("   {}.", labels.join(", ")))
            .line(format!(
                "3. GitHub Action aktualisiert Inhalte taeglich um {} Uhr.",
                update_time
            ))
            .line(format!("4. Titel aktualisiert auf {}.", date_long))
            .line("5. Quellen werden weiterhin als Fussnoten gepflegt.")
            .block(if selection.fresh {
                "Heutige Auswahl (neu ausgewaehlt):"
            } else {
                "Heutige Auswahl (vom selben Tag wiederverwendet):"
            });

        for selected in &selection.articles {
            doc = doc.line(format!(
                "- {}: {}",
                selected.category.label(),
                selected.article.title
            ));
        }

        doc.block("Status:")
            .line("Dieses PDF dokumentiert den Stand der HTML-Dateien am")
            .line(format!("{}.", date_long))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::error::SelectionError;
    use crate::pdf::PDF_FILE;
    use crate::selection::ReplayPolicy;
    use std::path::Path;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> Config {
        Config {
            output_dir: dir.join("site"),
            history_file: dir.join("state").join("history.json"),
            max_history: 3,
            ..Config::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== Pipeline Tests ====================

    #[test]
    fn test_fresh_run_writes_all_files() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let catalog = Catalog::builtin();

        let report = DailyUpdate::new(&config, &catalog)
            .run(date(2026, 10, 19))
            .unwrap();

        assert!(report.selection.fresh);
        assert_eq!(report.selection.articles.len(), Category::ALL.len());
        assert_eq!(report.files.len(), 3);

        let site = dir.path().join("site");
        let index = fs::read(site.join("index.html")).unwrap();
        let chronik = fs::read(site.join("tageschronik.html")).unwrap();
        assert_eq!(index, chronik);

        let pdf = fs::read(site.join(PDF_FILE)).unwrap();
        assert!(pdf.starts_with(b"%PDF-1.4\n"));

        let store = HistoryStore::load(&config.history_file);
        assert_eq!(store.history.len(), 1);
        assert_eq!(store.history[0].slugs, report.selection.slugs());
    }

    #[test]
    fn test_same_day_rerun_replays() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let catalog = Catalog::builtin();
        let update = DailyUpdate::new(&config, &catalog);

        let first = update.run(date(2026, 10, 19)).unwrap();
        let page = fs::read_to_string(dir.path().join("site").join("index.html")).unwrap();

        let second = update.run(date(2026, 10, 19)).unwrap();
        assert!(!second.selection.fresh);
        assert_eq!(second.selection.slugs(), first.selection.slugs());
        assert_eq!(second.history_len, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("site").join("index.html")).unwrap(),
            page
        );
    }

    #[test]
    fn test_force_new_replaces_todays_entry() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        let catalog = Catalog::builtin();

        let first = DailyUpdate::new(&config, &catalog)
            .run(date(2026, 10, 19))
            .unwrap();

        config.replay = ReplayPolicy::ForceNew;
        let forced = DailyUpdate::new(&config, &catalog)
            .run(date(2026, 10, 19))
            .unwrap();

        assert!(forced.selection.fresh);
        assert_eq!(forced.history_len, 1);
        for slug in forced.selection.slugs() {
            assert!(!first.selection.slugs().contains(&slug));
        }

        let store = HistoryStore::load(&config.history_file);
        assert_eq!(store.used_slugs.len(), 2 * Category::ALL.len());
    }

    #[test]
    fn test_history_is_capped_across_days() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let catalog = Catalog::builtin();
        let update = DailyUpdate::new(&config, &catalog);

        let mut day = date(2026, 1, 1);
        for _ in 0..4 {
            let report = update.run(day).unwrap();
            assert!(report.history_len <= config.max_history);
            day = day.succ_opt().unwrap();
        }

        let store = HistoryStore::load(&config.history_file);
        assert_eq!(store.history.len(), 3);
        assert_eq!(store.used_slugs.len(), 4 * Category::ALL.len());
    }

    #[test]
    fn test_exhaustion_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let catalog = Catalog::builtin();

        let mut store = HistoryStore::default();
        for pool in catalog.pools() {
            for article in pool.articles {
                store.used_slugs.insert(article.slug.to_string());
            }
        }
        store.save(&config.history_file).unwrap();
        let before = fs::read(&config.history_file).unwrap();

        let err = DailyUpdate::new(&config, &catalog)
            .run(date(2026, 10, 19))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SelectionError>(),
            Some(SelectionError::PoolExhausted {
                category: Category::Politics,
                ..
            })
        ));
        assert!(!dir.path().join("site").exists());
        assert_eq!(fs::read(&config.history_file).unwrap(), before);
    }

    #[test]
    fn test_malformed_history_starts_over() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let catalog = Catalog::builtin();
        fs::create_dir_all(config.history_file.parent().unwrap()).unwrap();
        fs::write(&config.history_file, "[1, 2, 3").unwrap();

        let report = DailyUpdate::new(&config, &catalog)
            .run(date(2026, 10, 19))
            .unwrap();

        assert!(report.selection.fresh);
        assert_eq!(HistoryStore::load(&config.history_file).history.len(), 1);
    }

    // ==================== Summary PDF Tests ====================

    #[test]
    fn test_summary_pdf_lists_selection() {
        let catalog = Catalog::builtin();
        let selection = ArticleSelector::new(&catalog)
            .select(date(2026, 3, 9), &HistoryStore::default(), ReplayPolicy::Reuse)
            .unwrap();

        let bytes = DailyUpdate::summary_pdf(&selection, "07:30").to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("(Dokumentation neuere geschichte) Tj"));
        assert!(text.contains("(update: 9.03.26) Tj"));
        assert!(text.contains("(3. GitHub Action aktualisiert Inhalte taeglich um 07:30 Uhr.) Tj"));
        assert!(text.contains("(4. Titel aktualisiert auf 9. Maerz 2026.) Tj"));
        assert!(text.contains(
            "(   Politik, Wirtschaft, Zeitgeschichte, Gesellschaft, Antike.) Tj"
        ));
        assert!(text.contains("(Heutige Auswahl \\(neu ausgewaehlt\\):) Tj"));
        assert!(text.contains("(9. Maerz 2026.) Tj\nET\n"));
        assert_eq!(text.matches("(- ").count(), Category::ALL.len());
    }
}
