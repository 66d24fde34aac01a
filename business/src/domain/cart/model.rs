use std::collections::{BTreeMap, HashMap};

use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::product::model::Product;

/// Quantities a visitor may pick for a single add.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 20;

/// One product's entry in the cart. The price is a snapshot taken when the
/// line was created and does not follow later catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

impl CartLine {
    pub fn total_price(&self) -> BigDecimal {
        &self.unit_price * &BigDecimal::from(self.quantity)
    }
}

/// Session-scoped mapping of product id to line.
///
/// Every line held here has a quantity of at least one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: BTreeMap<Uuid, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`, or sets the quantity outright when
    /// `override_quantity` is set. A new line snapshots the current price.
    pub fn add(&mut self, product: &Product, quantity: u32, override_quantity: bool) {
        let line = self.lines.entry(product.id).or_insert_with(|| CartLine {
            quantity: 0,
            unit_price: product.price.clone(),
        });

        if override_quantity {
            line.quantity = quantity;
        } else {
            line.quantity = line.quantity.saturating_add(quantity);
        }

        if line.quantity == 0 {
            self.lines.remove(&product.id);
        }
    }

    /// Drops the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: Uuid) -> bool {
        self.lines.remove(&product_id).is_some()
    }

    pub fn line(&self, product_id: Uuid) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Uuid, &CartLine)> {
        self.lines.iter()
    }

    pub fn product_ids(&self) -> Vec<Uuid> {
        self.lines.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units, not the number of lines.
    pub fn count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total_price(&self) -> BigDecimal {
        self.lines
            .values()
            .fold(BigDecimal::zero(), |total, line| total + line.total_price())
    }

    /// Lines joined with their live product. Lines whose product is missing
    /// from `products` are skipped.
    pub fn items<'a>(
        &'a self,
        products: &'a HashMap<Uuid, Product>,
    ) -> impl Iterator<Item = CartItem<'a>> + 'a {
        self.lines.iter().filter_map(move |(id, line)| {
            products.get(id).map(|product| CartItem {
                product,
                quantity: line.quantity,
                unit_price: &line.unit_price,
                total_price: line.total_price(),
            })
        })
    }
}

impl FromIterator<(Uuid, CartLine)> for Cart {
    fn from_iter<T: IntoIterator<Item = (Uuid, CartLine)>>(iter: T) -> Self {
        Self {
            lines: iter
                .into_iter()
                .filter(|(_, line)| line.quantity > 0)
                .collect(),
        }
    }
}

/// A cart line enriched with the product it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub unit_price: &'a BigDecimal,
    pub total_price: BigDecimal,
}

/// A cart together with the catalog rows of the products it holds.
#[derive(Debug, Clone, Default)]
pub struct CartDetail {
    pub cart: Cart,
    pub products: HashMap<Uuid, Product>,
}

impl CartDetail {
    pub fn new(cart: Cart, products: Vec<Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id, p)).collect();
        Self { cart, products }
    }

    pub fn items(&self) -> impl Iterator<Item = CartItem<'_>> {
        self.cart.items(&self.products)
    }

    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    pub fn total_price(&self) -> BigDecimal {
        self.cart.total_price()
    }
}
