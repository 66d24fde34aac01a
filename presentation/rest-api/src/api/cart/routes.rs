use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::model::{MAX_QUANTITY, MIN_QUANTITY};
use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_detail::{GetCartDetailParams, GetCartDetailUseCase};
use business::domain::cart::use_cases::get_summary::{
    GetCartSummaryParams, GetCartSummaryUseCase,
};
use business::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};

use crate::api::cart::dto::{AddToCartRequest, CartResponse, CartSummaryResponse};
use crate::api::cart::session::PoemCartSession;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    get_detail_use_case: Arc<dyn GetCartDetailUseCase>,
    get_summary_use_case: Arc<dyn GetCartSummaryUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    session_key: String,
}

impl CartApi {
    pub fn new(
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        get_detail_use_case: Arc<dyn GetCartDetailUseCase>,
        get_summary_use_case: Arc<dyn GetCartSummaryUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        session_key: String,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            get_detail_use_case,
            get_summary_use_case,
            clear_use_case,
            session_key,
        }
    }

    fn cart_session<'a>(&'a self, session: &'a Session) -> PoemCartSession<'a> {
        PoemCartSession::new(session, &self.session_key)
    }
}

fn is_valid_quantity(quantity: u32) -> bool {
    (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity)
}

/// Session shopping cart
///
/// The cart lives in the visitor's server-side session; no login is involved.
#[OpenApi]
impl CartApi {
    /// Get cart detail
    ///
    /// Lines joined with the current catalog rows. Lines whose product was
    /// deleted are left out of `items` but still counted in `count` and
    /// `total_price`.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, session: &Session) -> GetCartResponse {
        let cart_session = self.cart_session(session);

        match self
            .get_detail_use_case
            .execute(GetCartDetailParams {
                session: &cart_session,
            })
            .await
        {
            Ok(detail) => GetCartResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Get cart summary
    ///
    /// Item count and total from session state only.
    #[oai(path = "/cart/summary", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart_summary(&self, session: &Session) -> Json<CartSummaryResponse> {
        let cart_session = self.cart_session(session);
        let summary = self.get_summary_use_case.execute(GetCartSummaryParams {
            session: &cart_session,
        });

        Json(summary.into())
    }

    /// Add a product to the cart
    ///
    /// Adds `quantity` units, or replaces the line quantity when `override`
    /// is true. A new line captures the product's current price.
    #[oai(path = "/cart/:product_id", method = "post", tag = "ApiTags::Cart")]
    async fn add_to_cart(
        &self,
        session: &Session,
        product_id: Path<String>,
        body: Json<AddToCartRequest>,
    ) -> UpdateCartResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return UpdateCartResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_id",
            ));
        };

        if !is_valid_quantity(body.0.quantity) {
            return UpdateCartResponse::BadRequest(ErrorResponse::validation(
                "cart.invalid_quantity",
            ));
        }

        let cart_session = self.cart_session(session);

        match self
            .add_use_case
            .execute(AddToCartParams {
                session: &cart_session,
                product_id,
                quantity: body.0.quantity,
                override_quantity: body.0.override_quantity,
            })
            .await
        {
            Ok(cart) => UpdateCartResponse::Ok(Json((&cart).into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateCartResponse::NotFound(json),
                    _ => UpdateCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the cart
    ///
    /// Removing a product that is not in the cart leaves it unchanged.
    #[oai(path = "/cart/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_from_cart(
        &self,
        session: &Session,
        product_id: Path<String>,
    ) -> UpdateCartResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return UpdateCartResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_id",
            ));
        };

        let cart_session = self.cart_session(session);

        match self
            .remove_use_case
            .execute(RemoveFromCartParams {
                session: &cart_session,
                product_id,
            })
            .await
        {
            Ok(cart) => UpdateCartResponse::Ok(Json((&cart).into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateCartResponse::NotFound(json),
                    _ => UpdateCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, session: &Session) -> ClearCartResponse {
        let cart_session = self.cart_session(session);
        self.clear_use_case.execute(ClearCartParams {
            session: &cart_session,
        });
        ClearCartResponse::NoContent
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
}
