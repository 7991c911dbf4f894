use super::{CategoryOutput, UseCase};
use crate::CategoryRepository;
use async_trait::async_trait;
use catalog_repository::{RepositoryResult, SearchDefaults, SearchInput, SearchParams, SearchResult};
use std::sync::Arc;
use tracing::debug;

pub type ListCategoriesOutput = SearchResult<CategoryOutput>;

/// Searches categories from loose input and pages the outputs.
pub struct ListCategories {
    repository: Arc<dyn CategoryRepository>,
    defaults: SearchDefaults,
}

impl ListCategories {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self::with_defaults(repository, SearchDefaults::default())
    }

    pub fn with_defaults(repository: Arc<dyn CategoryRepository>, defaults: SearchDefaults) -> Self {
        Self {
            repository,
            defaults,
        }
    }
}

#[async_trait]
impl UseCase<SearchInput> for ListCategories {
    type Output = ListCategoriesOutput;

    async fn execute(&self, input: SearchInput) -> RepositoryResult<ListCategoriesOutput> {
        let params = SearchParams::from_input_with(input, &self.defaults);
        debug!(?params, "listing categories");

        let result = self.repository.search(&params).await?;
        Ok(result.map(|category| CategoryOutput::from(&category)))
    }
}
