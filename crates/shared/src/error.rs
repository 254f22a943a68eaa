use thiserror::Error;

use crate::catalog::Category;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error(
        "No unused article left in category {category}: all {pool_size} articles have already been published. Add new articles to the pool before the next run."
    )]
    PoolExhausted { category: Category, pool_size: usize },
}
