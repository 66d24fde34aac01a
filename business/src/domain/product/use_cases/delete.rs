use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: Uuid,
}

/// Removes a product from the catalog. Cart lines that still reference it
/// are skipped when the cart is listed.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
