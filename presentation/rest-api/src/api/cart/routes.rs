use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};

use crate::api::cart::dto::{AddToCartRequest, CartResponse, UpdateQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionKey;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
            update_quantity_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// Every endpoint works on the cart of the session named by `x-session-id`
/// and answers with the resulting cart.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self, session: SessionKey) -> CartOperationResponse {
        let result = self
            .get_use_case
            .execute(GetCartParams {
                session_id: session.0,
            })
            .await;

        match result {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => CartOperationResponse::from_error(err.into_error_response()),
        }
    }

    /// Add a product
    ///
    /// Adds one unit of the product. Out-of-stock products are refused.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, session: SessionKey, body: Json<AddToCartRequest>) -> CartOperationResponse {
        let params = AddToCartParams {
            session_id: session.0,
            product_id: body.0.product_id,
        };

        match self.add_use_case.execute(params).await {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => CartOperationResponse::from_error(err.into_error_response()),
        }
    }

    /// Set a line item's quantity
    ///
    /// A quantity below 1 removes the line item. Unknown products are ignored.
    #[oai(
        path = "/cart/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_quantity(
        &self,
        session: SessionKey,
        product_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> CartOperationResponse {
        let params = UpdateQuantityParams {
            session_id: session.0,
            product_id: product_id.0,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => CartOperationResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove a line item
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove(&self, session: SessionKey, product_id: Path<String>) -> CartOperationResponse {
        let params = RemoveFromCartParams {
            session_id: session.0,
            product_id: product_id.0,
        };

        match self.remove_use_case.execute(params).await {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => CartOperationResponse::from_error(err.into_error_response()),
        }
    }

    /// Clear the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, session: SessionKey) -> ClearCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                session_id: session.0,
            })
            .await
        {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartOperationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartOperationResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
