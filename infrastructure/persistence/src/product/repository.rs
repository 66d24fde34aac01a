use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::Slug;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, category_id, name, slug, description, image, price, available, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_products(entities: Vec<ProductEntity>) -> Result<Vec<Product>, RepositoryError> {
    entities.into_iter().map(ProductEntity::into_domain).collect()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_id_and_slug(&self, id: Uuid, slug: &Slug) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND slug = $2"
        ))
        .bind(id)
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        into_products(entities)
    }

    async fn get_available(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE available AND category_id = $1 ORDER BY name"
                ))
                .bind(category_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE available ORDER BY name"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|_| RepositoryError::DatabaseError)?;

        into_products(entities)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, category_id, name, slug, description, image, price, available, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                category_id = EXCLUDED.category_id,
                name = EXCLUDED.name,
                slug = EXCLUDED.slug,
                description = EXCLUDED.description,
                image = EXCLUDED.image,
                price = EXCLUDED.price,
                available = EXCLUDED.available,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(product.category_id)
        .bind(&product.name)
        .bind(product.slug.as_str())
        .bind(&product.description)
        .bind(&product.image)
        .bind(&product.price)
        .bind(product.available)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save product {}: {}", product.id, e);
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
