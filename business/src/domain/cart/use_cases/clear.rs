use crate::domain::cart::session::CartSession;

pub struct ClearCartParams<'a> {
    pub session: &'a dyn CartSession,
}

pub trait ClearCartUseCase: Send + Sync {
    fn execute(&self, params: ClearCartParams<'_>);
}
