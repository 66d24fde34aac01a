use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::Slug;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let slug = Slug::parse(self.slug).ok_or_else(|| {
            tracing::error!("Product {} has a malformed slug", self.id);
            RepositoryError::DatabaseError
        })?;

        Ok(Product::from_repository(
            self.id,
            self.category_id,
            self.name,
            slug,
            self.description,
            self.image,
            self.price,
            self.available,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity(slug: &str) -> ProductEntity {
        let now = Utc::now();
        ProductEntity {
            id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            name: "Genmaicha".to_string(),
            slug: slug.to_string(),
            description: "Green tea with roasted rice".to_string(),
            image: Some("products/2025/01/genmaicha.png".to_string()),
            price: BigDecimal::from_str("11.40").unwrap(),
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_map_row_to_product() {
        let row = entity("genmaicha");
        let id = row.id;
        let product = row.into_domain().unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.slug.as_str(), "genmaicha");
        assert_eq!(product.price, BigDecimal::from_str("11.40").unwrap());
        assert!(product.image.is_some());
    }

    #[test]
    fn should_reject_row_with_malformed_slug() {
        let result = entity("").into_domain();
        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }
}
