use uuid::Uuid;

use super::errors::CategoryError;
use crate::domain::shared::value_objects::Slug;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: Slug,
}

pub struct NewCategoryProps {
    pub name: String,
    pub slug: Option<String>,
}

impl Category {
    pub fn new(props: NewCategoryProps) -> Result<Self, CategoryError> {
        if props.name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        let slug = Slug::resolve(props.slug, &props.name).ok_or(CategoryError::InvalidSlug)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            slug,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, slug: Slug) -> Self {
        Self { id, name, slug }
    }
}
