use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::checkout::payment_method::PaymentCategory;
use business::domain::checkout::use_cases::confirm_payment::{
    ConfirmPaymentParams, ConfirmPaymentUseCase,
};
use business::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::checkout::dto::{
    CheckoutRequest, OrderConfirmationResponse, PaymentCategoryResponse, PaymentReceiptResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionKey;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    confirm_payment_use_case: Arc<dyn ConfirmPaymentUseCase>,
}

impl CheckoutApi {
    pub fn new(
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
        confirm_payment_use_case: Arc<dyn ConfirmPaymentUseCase>,
    ) -> Self {
        Self {
            place_order_use_case,
            confirm_payment_use_case,
        }
    }
}

/// Checkout API
#[OpenApi]
impl CheckoutApi {
    /// List payment methods
    ///
    /// Every accepted payment method, grouped by category.
    #[oai(path = "/payment-methods", method = "get", tag = "ApiTags::Checkout")]
    async fn payment_methods(&self) -> Json<Vec<PaymentCategoryResponse>> {
        Json(
            PaymentCategory::ALL
                .into_iter()
                .map(PaymentCategoryResponse::from)
                .collect(),
        )
    }

    /// Place an order
    ///
    /// Validates the form, acknowledges the order and empties the cart.
    /// Nothing is charged or persisted.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn place_order(
        &self,
        session: SessionKey,
        body: Json<CheckoutRequest>,
    ) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            session_id: session.0,
            form: body.0.into(),
        };

        match self.place_order_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Payment gateway return
    ///
    /// Landing endpoint after an external payment. The reference is read from
    /// `tx_ref`, `txRef` or `reference`. A missing status or one of
    /// success/paid/completed clears the cart.
    #[oai(path = "/payment/success", method = "get", tag = "ApiTags::Checkout")]
    async fn confirm_payment(
        &self,
        session: SessionKey,
        tx_ref: Query<Option<String>>,
        #[oai(name = "txRef")] tx_ref_camel: Query<Option<String>>,
        reference: Query<Option<String>>,
        status: Query<Option<String>>,
    ) -> ConfirmPaymentResponse {
        let params = ConfirmPaymentParams {
            session_id: session.0,
            reference: first_reference([tx_ref.0, tx_ref_camel.0, reference.0]),
            status: status.0,
        };

        match self.confirm_payment_use_case.execute(params).await {
            Ok(receipt) => ConfirmPaymentResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    402 => ConfirmPaymentResponse::PaymentFailed(json),
                    _ => ConfirmPaymentResponse::InternalError(json),
                }
            }
        }
    }
}

/// First non-blank value among the reference parameters, in priority order.
fn first_reference(candidates: [Option<String>; 3]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderConfirmationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConfirmPaymentResponse {
    #[oai(status = 200)]
    Ok(Json<PaymentReceiptResponse>),
    #[oai(status = 402)]
    PaymentFailed(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
