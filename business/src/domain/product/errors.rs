#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_slug")]
    InvalidSlug,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("category.not_found")]
    CategoryNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
