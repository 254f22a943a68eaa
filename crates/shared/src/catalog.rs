use std::fmt;

use crate::articles;

/// Section of the daily page. Declaration order is the fixed page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Politics,
    Economy,
    ContemporaryHistory,
    Society,
    Antiquity,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Politics,
        Category::Economy,
        Category::ContemporaryHistory,
        Category::Society,
        Category::Antiquity,
    ];

    /// German heading prefix, e.g. "Politik" in "Politik: Deutsche Wiedervereinigung 1990"
    pub fn label(&self) -> &'static str {
        match self {
            Category::Politics => "Politik",
            Category::Economy => "Wirtschaft",
            Category::ContemporaryHistory => "Zeitgeschichte",
            Category::Society => "Gesellschaft",
            Category::Antiquity => "Antike",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where an article's facts come from, rendered as a footnote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub label: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    /// Edition or report name printed after the quoted title
    pub detail: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub source: Source,
}

/// All articles for one category
#[derive(Debug, Clone, Copy)]
pub struct Pool {
    pub category: Category,
    pub articles: &'static [Article],
}

/// Read-only registry of article pools in page order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pools: Vec<Pool>,
}

impl Catalog {
    pub fn new(pools: Vec<Pool>) -> Self {
        Self { pools }
    }

    /// The articles compiled into the binary
    pub fn builtin() -> Self {
        Self::new(
            Category::ALL
                .iter()
                .map(|&category| Pool {
                    category,
                    articles: articles::pool_for(category),
                })
                .collect(),
        )
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn pool(&self, category: Category) -> Option<&Pool> {
        self.pools.iter().find(|p| p.category == category)
    }

    /// Resolve a slug to its article and the category it belongs to
    pub fn find(&self, slug: &str) -> Option<(Category, &'static Article)> {
        self.pools.iter().find_map(|pool| {
            let articles: &'static [Article] = pool.articles;
            articles
                .iter()
                .find(|a| a.slug == slug)
                .map(|a| (pool.category, a))
        })
    }

    pub fn len(&self) -> usize {
        self.pools.iter().map(|p| p.articles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_follows_category_order() {
        let catalog = Catalog::builtin();
        let order: Vec<Category> = catalog.pools().iter().map(|p| p.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_builtin_pools_are_not_empty() {
        let catalog = Catalog::builtin();
        for pool in catalog.pools() {
            assert!(!pool.articles.is_empty(), "{} has no articles", pool.category);
        }
    }

    #[test]
    fn test_slugs_are_unique_across_catalog() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for pool in catalog.pools() {
            for article in pool.articles {
                assert!(seen.insert(article.slug), "duplicate slug {}", article.slug);
            }
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_articles_are_complete() {
        let catalog = Catalog::builtin();
        for pool in catalog.pools() {
            for article in pool.articles {
                assert!(!article.title.is_empty());
                assert!(!article.paragraphs.is_empty(), "{} has no text", article.slug);
                assert!(article.source.url.starts_with("https://"));
                assert!(!article.source.label.is_empty());
            }
        }
    }

    #[test]
    fn test_find_returns_category() {
        let catalog = Catalog::builtin();
        let first = catalog.pools()[1].articles[0];
        let (category, article) = catalog.find(first.slug).unwrap();
        assert_eq!(category, Category::Economy);
        assert_eq!(article.slug, first.slug);
        assert!(catalog.find("does-not-exist").is_none());
    }

    #[test]
    fn test_article_text_is_complete() {
        let catalog = Catalog::builtin();

        let (_, reunification) = catalog.find("politik-wiedervereinigung-1990").unwrap();
        assert!(reunification.paragraphs[0]
            .ends_with("die den äußeren Rahmen für die Einheit schufen."));

        let (_, pax) = catalog.find("antike-pax-romana-27-vchr").unwrap();
        assert!(pax.paragraphs[2].ends_with(
            "Die Pax Romana illustriert, wie Infrastruktur und Rechtssicherheit zur Stabilisierung großer politischer Einheiten beitragen."
        ));

        let (_, recession) = catalog.find("wirtschaft-finanzkrise-2008").unwrap();
        assert_eq!(recession.source.title, "The Great Recession");
        assert_eq!(recession.source.detail, Some("World Economic Outlook 2009"));
    }

    #[test]
    fn test_category_display_uses_label() {
        assert_eq!(Category::ContemporaryHistory.to_string(), "Zeitgeschichte");
        assert_eq!(format!("{}", Category::Antiquity), "Antike");
    }
}
