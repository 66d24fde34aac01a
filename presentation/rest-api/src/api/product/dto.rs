use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::ProductCatalog;
use business::domain::product::value_objects::PRICE_SCALE;

use crate::api::category::dto::CategoryResponse;

/// Renders a price with exactly two fraction digits.
pub fn format_price(price: &BigDecimal) -> String {
    format!("{:.*}", PRICE_SCALE as usize, price)
}

/// Parses a decimal string sent by a client. Scale and range checks happen
/// in the domain.
pub fn parse_price(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim()).ok()
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Owning category
    pub category_id: String,
    /// Product name (cannot be empty)
    pub name: String,
    /// URL slug, derived from the name when omitted
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    #[oai(default)]
    pub description: String,
    /// Image path or URL
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Decimal string, at most two fraction digits (e.g. "12.50")
    pub price: String,
    #[oai(default = "default_available")]
    pub available: bool,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    pub category_id: String,
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    #[oai(default)]
    pub description: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub price: String,
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Decimal string with two fraction digits
    pub price: String,
    pub available: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            category_id: product.category_id.to_string(),
            name: product.name,
            slug: product.slug.to_string(),
            description: product.description,
            image: product.image,
            price: format_price(&product.price),
            available: product.available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Product listing with category navigation
#[derive(Debug, Clone, Object)]
pub struct ProductCatalogResponse {
    /// Category the listing is filtered by, if any
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryResponse>,
    pub categories: Vec<CategoryResponse>,
    pub products: Vec<ProductResponse>,
}

impl From<ProductCatalog> for ProductCatalogResponse {
    fn from(catalog: ProductCatalog) -> Self {
        Self {
            category: catalog.category.map(CategoryResponse::from),
            categories: catalog
                .categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect(),
            products: catalog
                .products
                .into_iter()
                .map(ProductResponse::from)
                .collect(),
        }
    }
}
