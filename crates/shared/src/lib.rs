// Public modules
pub mod articles;
pub mod catalog;
pub mod config;
pub mod dates;
pub mod error;
pub mod history;
pub mod page;
pub mod pdf;
pub mod selection;
pub mod update;

// Re-export commonly used types
pub use catalog::{Article, Catalog, Category, Pool, Source};
pub use config::Config;
pub use error::SelectionError;
pub use history::{HistoryEntry, HistoryStore};
pub use page::PageGenerator;
pub use pdf::PdfDocument;
pub use selection::{ArticleSelector, DailySelection, ReplayPolicy, SelectedArticle};
pub use update::{DailyUpdate, UpdateReport};
