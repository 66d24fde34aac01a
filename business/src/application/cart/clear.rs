use std::sync::Arc;

use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCase for ClearCartUseCaseImpl {
    fn execute(&self, params: ClearCartParams<'_>) {
        self.logger.info("Clearing cart");
        params.session.purge();
    }
}
