use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Slug;

use super::entity::CategoryEntity;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, slug FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(CategoryEntity::into_domain).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, slug FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_slug(&self, slug: &Slug) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, slug FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, category: &Category) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO categories (id, name, slug)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                slug = EXCLUDED.slug"#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.slug.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save category {}: {}", category.id, e);
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }
}
