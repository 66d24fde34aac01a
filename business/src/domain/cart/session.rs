use super::model::Cart;

/// Storage for the cart of one visitor session.
///
/// Implementations live at the session boundary and own the serialized
/// format. Writes must be visible to the next `load` on the same session.
pub trait CartSession: Send + Sync {
    /// Returns the stored cart, or `None` when the session holds none.
    fn load(&self) -> Option<Cart>;
    fn store(&self, cart: &Cart);
    /// Deletes the cart key from the session.
    fn purge(&self);
}

/// Loads the session cart, starting from an empty one when absent.
pub fn load_or_default(session: &dyn CartSession) -> Cart {
    session.load().unwrap_or_default()
}
