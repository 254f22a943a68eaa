use chrono::NaiveDate;
use std::collections::HashSet;

use crate::catalog::{Article, Catalog, Category};
use crate::dates::day_ordinal;
use crate::error::SelectionError;
use crate::history::HistoryStore;

/// What to do when the date already has a recorded selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayPolicy {
    /// Reproduce the recorded selection verbatim
    #[default]
    Reuse,
    /// Pick fresh, unused articles anyway
    ForceNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedArticle {
    pub category: Category,
    pub article: &'static Article,
}

/// One article per category, in page order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySelection {
    pub date: NaiveDate,
    pub articles: Vec<SelectedArticle>,
    /// false when the selection was replayed from history
    pub fresh: bool,
}

impl DailySelection {
    pub fn slugs(&self) -> Vec<String> {
        self.articles
            .iter()
            .map(|s| s.article.slug.to_string())
            .collect()
    }
}

pub struct ArticleSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> ArticleSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Choose the articles for `date`.
    ///
    /// Does not modify `store`; the caller records the result.
    pub fn select(
        &self,
        date: NaiveDate,
        store: &HistoryStore,
        policy: ReplayPolicy,
    ) -> Result<DailySelection, SelectionError> {
        if policy == ReplayPolicy::Reuse {
            if let Some(entry) = store.entry_for(date) {
                match self.replay(&entry.slugs) {
                    Some(articles) => {
                        tracing::debug!(%date, "replaying recorded selection");
                        return Ok(DailySelection {
                            date,
                            articles,
                            fresh: false,
                        });
                    }
                    None => tracing::warn!(
                        %date,
                        slugs = ?entry.slugs,
                        "recorded selection no longer matches the catalog, picking fresh"
                    ),
                }
            }
        }

        self.pick_fresh(date, store)
    }

    fn pick_fresh(
        &self,
        date: NaiveDate,
        store: &HistoryStore,
    ) -> Result<DailySelection, SelectionError> {
        let ordinal = day_ordinal(date);
        let mut taken: HashSet<&str> = HashSet::new();
        let mut articles = Vec::with_capacity(self.catalog.pools().len());

        for (position, pool) in self.catalog.pools().iter().enumerate() {
            let pool_articles: &'static [Article] = pool.articles;
            let size = pool_articles.len();
            let exhausted = SelectionError::PoolExhausted {
                category: pool.category,
                pool_size: size,
            };
            if size == 0 {
                return Err(exhausted);
            }

            let start = (ordinal + position as i64).rem_euclid(size as i64) as usize;
            let article = (0..size)
                .map(|offset| &pool_articles[(start + offset) % size])
                .find(|a| !store.is_used(a.slug) && !taken.contains(a.slug))
                .ok_or(exhausted)?;

            tracing::debug!(
                category = %pool.category,
                start,
                slug = article.slug,
                "picked article"
            );
            taken.insert(article.slug);
            articles.push(SelectedArticle {
                category: pool.category,
                article,
            });
        }

        Ok(DailySelection {
            date,
            articles,
            fresh: true,
        })
    }

    /// Resolve recorded slugs back to articles. Only succeeds if they cover
    /// every pool exactly once, in page order.
    fn replay(&self, slugs: &[String]) -> Option<Vec<SelectedArticle>> {
        let pools = self.catalog.pools();
        if slugs.len() != pools.len() {
            return None;
        }

        pools
            .iter()
            .zip(slugs)
            .map(|(pool, slug)| match self.catalog.find(slug) {
                Some((category, article)) if category == pool.category => {
                    Some(SelectedArticle { category, article })
                }
                _ => None,
            })
            .collect()
    }

    /// Unused articles left per category
    pub fn remaining(&self, store: &HistoryStore) -> Vec<(Category, usize)> {
        self.catalog
            .pools()
            .iter()
            .map(|pool| {
                let left = pool
                    .articles
                    .iter()
                    .filter(|a| !store.is_used(a.slug))
                    .count();
                (pool.category, left)
            })
            .collect()
    }
}
