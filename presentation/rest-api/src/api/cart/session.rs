//! Cart storage inside the visitor's poem session.
//!
//! The cart is kept under a single session key as a JSON object:
//!
//! ```json
//! { "<product uuid>": { "quantity": 2, "price": "10.00" } }
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem::session::Session;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartLine};
use business::domain::cart::session::CartSession;

use crate::api::product::dto::format_price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLine {
    pub quantity: u32,
    pub price: String,
}

pub type StoredCart = BTreeMap<String, StoredLine>;

pub fn encode_cart(cart: &Cart) -> StoredCart {
    cart.lines()
        .map(|(id, line)| {
            (
                id.to_string(),
                StoredLine {
                    quantity: line.quantity,
                    price: format_price(&line.unit_price),
                },
            )
        })
        .collect()
}

/// Rebuilds a cart from session JSON. Entries that do not decode are dropped.
pub fn decode_cart(stored: Map<String, Value>) -> Cart {
    stored
        .into_iter()
        .filter_map(|(key, value)| match decode_line(&key, value) {
            Some(entry) => Some(entry),
            None => {
                tracing::warn!("Dropping malformed cart entry for key {}", key);
                None
            }
        })
        .collect()
}

fn decode_line(key: &str, value: Value) -> Option<(Uuid, CartLine)> {
    let id = Uuid::parse_str(key).ok()?;
    let stored: StoredLine = serde_json::from_value(value).ok()?;
    let unit_price = BigDecimal::from_str(&stored.price).ok()?;

    Some((
        id,
        CartLine {
            quantity: stored.quantity,
            unit_price,
        },
    ))
}

/// `CartSession` over a poem server-side session.
pub struct PoemCartSession<'a> {
    session: &'a Session,
    key: &'a str,
}

impl<'a> PoemCartSession<'a> {
    pub fn new(session: &'a Session, key: &'a str) -> Self {
        Self { session, key }
    }
}

impl CartSession for PoemCartSession<'_> {
    fn load(&self) -> Option<Cart> {
        self.session
            .get::<Map<String, Value>>(self.key)
            .map(decode_cart)
    }

    fn store(&self, cart: &Cart) {
        self.session.set(self.key, encode_cart(cart));
    }

    fn purge(&self) {
        self.session.remove(self.key);
    }
}
