use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::is_valid_price;
use crate::domain::shared::value_objects::Slug;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub category_id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub available: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if !is_valid_price(&props.price) {
            return Err(ProductError::InvalidPrice);
        }

        let slug = Slug::resolve(props.slug, &props.name).ok_or(ProductError::InvalidSlug)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            category_id: props.category_id,
            name: props.name,
            slug,
            description: props.description,
            image: props.image,
            price: props.price,
            available: props.available,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        category_id: Uuid,
        name: String,
        slug: Slug,
        description: String,
        image: Option<String>,
        price: BigDecimal,
        available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            category_id,
            name,
            slug,
            description,
            image,
            price,
            available,
            created_at,
            updated_at,
        }
    }
}
