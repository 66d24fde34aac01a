use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Slug;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name.
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
    async fn get_by_slug(&self, slug: &Slug) -> Result<Category, RepositoryError>;
    async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
}
