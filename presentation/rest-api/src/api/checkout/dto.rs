use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::checkout::model::{
    CheckoutForm, CustomerDetails, OrderConfirmation, PaymentReceipt,
};
use business::domain::checkout::payment_method::{PaymentCategory, PaymentMethod};

use crate::api::cart::dto::LineItemResponse;
use crate::api::money::format_price;

#[derive(Debug, Clone, Object)]
pub struct PaymentMethodResponse {
    /// Value to send as `payment_method` at checkout
    pub tag: String,
    pub display_name: String,
    /// Short badge shown next to the name
    pub icon: String,
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(method: PaymentMethod) -> Self {
        Self {
            tag: method.tag().to_string(),
            display_name: method.display_name().to_string(),
            icon: method.icon().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaymentCategoryResponse {
    pub tag: String,
    pub title: String,
    pub caption: String,
    pub methods: Vec<PaymentMethodResponse>,
}

impl From<PaymentCategory> for PaymentCategoryResponse {
    fn from(category: PaymentCategory) -> Self {
        Self {
            tag: category.tag().to_string(),
            title: category.title().to_string(),
            caption: category.caption().to_string(),
            methods: category.methods().map(PaymentMethodResponse::from).collect(),
        }
    }
}

/// Checkout form. Missing fields are reported by the server, not by the parser.
#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    #[oai(default)]
    pub full_name: String,
    #[oai(default)]
    pub phone: String,
    #[oai(default)]
    pub address: String,
    /// Optional
    #[oai(default)]
    pub house_number: String,
    /// Payment method tag, e.g. "tele-birr"
    #[oai(default)]
    pub payment_method: String,
}

impl From<CheckoutRequest> for CheckoutForm {
    fn from(request: CheckoutRequest) -> Self {
        Self {
            full_name: request.full_name,
            phone: request.phone,
            address: request.address,
            house_number: request.house_number,
            payment_method: request.payment_method,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CustomerResponse {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub house_number: Option<String>,
}

impl From<CustomerDetails> for CustomerResponse {
    fn from(customer: CustomerDetails) -> Self {
        Self {
            full_name: customer.full_name,
            phone: customer.phone,
            address: customer.address,
            house_number: customer.house_number,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderConfirmationResponse {
    /// Locally generated order reference
    pub reference: String,
    /// Snapshot of the cart at the moment of ordering
    pub items: Vec<LineItemResponse>,
    pub total_items: u64,
    pub total_price: String,
    pub payment_method: PaymentMethodResponse,
    pub customer: CustomerResponse,
    pub placed_at: DateTime<Utc>,
    pub message: String,
}

impl From<OrderConfirmation> for OrderConfirmationResponse {
    fn from(order: OrderConfirmation) -> Self {
        Self {
            reference: order.reference.to_string(),
            items: order.items.iter().map(LineItemResponse::from).collect(),
            total_items: order.total_items,
            total_price: format_price(&order.total_price),
            payment_method: order.payment_method.into(),
            customer: order.customer.into(),
            placed_at: order.placed_at,
            message: order.message,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaymentReceiptResponse {
    /// Gateway transaction reference
    #[oai(skip_serializing_if_is_none)]
    pub reference: Option<String>,
    pub message: String,
}

impl From<PaymentReceipt> for PaymentReceiptResponse {
    fn from(receipt: PaymentReceipt) -> Self {
        Self {
            reference: receipt.reference,
            message: receipt.message,
        }
    }
}
