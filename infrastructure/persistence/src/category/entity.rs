use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Slug;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Result<Category, RepositoryError> {
        let slug = Slug::parse(self.slug).ok_or_else(|| {
            tracing::error!("Category {} has a malformed slug", self.id);
            RepositoryError::DatabaseError
        })?;

        Ok(Category::from_repository(self.id, self.name, slug))
    }
}
