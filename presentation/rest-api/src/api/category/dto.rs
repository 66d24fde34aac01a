use poem_openapi::Object;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CreateCategoryRequest {
    /// Category name (cannot be empty)
    pub name: String,
    /// URL slug, derived from the name when omitted
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category unique identifier
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            slug: category.slug.to_string(),
        }
    }
}
