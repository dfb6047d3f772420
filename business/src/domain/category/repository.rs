use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Resolves a category by name, creating it first if it does not exist
    /// yet. Concurrent callers racing on the same name both get the same row.
    async fn get_or_create(&self, name: &str) -> Result<Category, RepositoryError>;
}
