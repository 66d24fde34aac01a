use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartDetail, CartItem};
use business::domain::cart::use_cases::get_summary::CartSummary;

use crate::api::product::dto::{ProductResponse, format_price};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Units to add, from 1 to 20
    pub quantity: u32,
    /// Replace the current quantity instead of adding to it
    #[oai(rename = "override", default)]
    pub override_quantity: bool,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    /// Unit price captured when the product was added
    pub price: String,
    pub total_price: String,
}

impl From<CartItem<'_>> for CartItemResponse {
    fn from(item: CartItem<'_>) -> Self {
        Self {
            product: item.product.clone().into(),
            quantity: item.quantity,
            price: format_price(item.unit_price),
            total_price: format_price(&item.total_price),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Total number of units
    pub count: u64,
    pub total_price: String,
}

impl From<CartDetail> for CartResponse {
    fn from(detail: CartDetail) -> Self {
        Self {
            items: detail.items().map(CartItemResponse::from).collect(),
            count: detail.count(),
            total_price: format_price(&detail.total_price()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct CartSummaryResponse {
    /// Total number of units
    pub count: u64,
    pub total_price: String,
}

impl From<&Cart> for CartSummaryResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            count: cart.count(),
            total_price: format_price(&cart.total_price()),
        }
    }
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            count: summary.count,
            total_price: format_price(&summary.total_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::product::model::Product;
    use business::domain::shared::value_objects::Slug;
    use chrono::Utc;
    use std::str::FromStr;
    use uuid::Uuid;

    fn product(name: &str, price: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            name.to_string(),
            Slug::from_name(name).unwrap(),
            String::new(),
            None,
            BigDecimal::from_str(price).unwrap(),
            true,
            now,
            now,
        )
    }

    #[test]
    fn should_render_cart_detail_with_string_prices() {
        let tea = product("Tea", "10.00");
        let cup = product("Cup", "5");
        let mut cart = Cart::new();
        cart.add(&tea, 2, false);
        cart.add(&cup, 1, false);

        let response = CartResponse::from(CartDetail::new(cart, vec![tea, cup]));

        assert_eq!(response.count, 3);
        assert_eq!(response.total_price, "25.00");
        assert_eq!(response.items.len(), 2);
        assert!(
            response
                .items
                .iter()
                .any(|item| item.product.name == "Cup" && item.price == "5.00")
        );
    }

    #[test]
    fn should_summarize_empty_cart() {
        let summary = CartSummaryResponse::from(&Cart::new());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_price, "0.00");
    }
}
