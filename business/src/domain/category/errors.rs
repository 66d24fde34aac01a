#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.invalid_slug")]
    InvalidSlug,
    #[error("category.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
