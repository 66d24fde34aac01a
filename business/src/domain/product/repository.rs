use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Slug;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_id_and_slug(&self, id: Uuid, slug: &Slug) -> Result<Product, RepositoryError>;
    /// Batched lookup. Ids with no matching row are left out of the result.
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
    /// Available products ordered by name, optionally restricted to one category.
    async fn get_available(&self, category_id: Option<Uuid>)
    -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
