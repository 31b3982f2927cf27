use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::cart::model::{Cart, LineItem};

use super::errors::CheckoutError;
use super::payment_method::PaymentMethod;

pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully! Thank you for your purchase.";
pub const PAYMENT_CONFIRMED_MESSAGE: &str = "Thank you! Your payment was processed successfully.";

/// Gateway statuses that count as a completed payment (compared lowercase).
pub const SUCCESSFUL_PAYMENT_STATUSES: [&str; 3] = ["success", "paid", "completed"];

/// Raw checkout form input.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub house_number: String,
    /// Payment method tag, e.g. `tele-birr`. Empty when nothing was picked.
    pub payment_method: String,
}

/// Contact and delivery details of a validated form.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub house_number: Option<String>,
}

impl CheckoutForm {
    /// Checks the payment method first, then the required contact fields.
    pub fn validate(&self) -> Result<(CustomerDetails, PaymentMethod), CheckoutError> {
        let payment_method = self.payment_method.trim();
        if payment_method.is_empty() {
            return Err(CheckoutError::PaymentMethodMissing);
        }

        let required = [&self.full_name, &self.phone, &self.address];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(CheckoutError::RequiredFieldMissing);
        }

        let payment_method = payment_method
            .parse::<PaymentMethod>()
            .map_err(|_| CheckoutError::UnknownPaymentMethod)?;

        let house_number = self.house_number.trim();
        let customer = CustomerDetails {
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            house_number: (!house_number.is_empty()).then(|| house_number.to_string()),
        };

        Ok((customer, payment_method))
    }
}

/// Local acknowledgement of a placed order. Nothing is submitted anywhere.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub reference: Uuid,
    pub items: Vec<LineItem>,
    pub total_price: BigDecimal,
    pub total_items: u64,
    pub payment_method: PaymentMethod,
    pub customer: CustomerDetails,
    pub placed_at: DateTime<Utc>,
    pub message: String,
}

impl OrderConfirmation {
    pub fn new(cart: &Cart, customer: CustomerDetails, payment_method: PaymentMethod) -> Self {
        Self {
            reference: Uuid::new_v4(),
            items: cart.items().to_vec(),
            total_price: cart.total_price(),
            total_items: cart.total_items(),
            payment_method,
            customer,
            placed_at: Utc::now(),
            message: ORDER_PLACED_MESSAGE.to_string(),
        }
    }
}

/// Result of a payment gateway return.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub reference: Option<String>,
    pub message: String,
}

/// Whether a gateway status means the payment went through.
/// A missing or empty status is treated as success.
pub fn is_successful_payment_status(status: Option<&str>) -> bool {
    match status.map(str::trim) {
        None | Some("") => true,
        Some(status) => {
            let status = status.to_lowercase();
            SUCCESSFUL_PAYMENT_STATUSES.contains(&status.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::catalog::model::fixtures::product;

    fn form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Abebe Kebede".to_string(),
            phone: "911234567".to_string(),
            address: "Bole Road".to_string(),
            house_number: "".to_string(),
            payment_method: "tele-birr".to_string(),
        }
    }

    #[test]
    fn should_accept_complete_form() {
        let (customer, method) = form().validate().unwrap();

        assert_eq!(method, PaymentMethod::TeleBirr);
        assert_eq!(customer.full_name, "Abebe Kebede");
        assert!(customer.house_number.is_none());
    }

    #[test]
    fn should_keep_house_number_when_given() {
        let (customer, _) = CheckoutForm {
            house_number: " 12B ".to_string(),
            ..form()
        }
        .validate()
        .unwrap();

        assert_eq!(customer.house_number.as_deref(), Some("12B"));
    }

    #[test]
    fn should_report_missing_payment_method_before_missing_fields() {
        let result = CheckoutForm {
            payment_method: String::new(),
            full_name: String::new(),
            ..form()
        }
        .validate();

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::PaymentMethodMissing
        ));
    }

    #[test]
    fn should_report_each_missing_required_field() {
        for blank in ["full_name", "phone", "address"] {
            let mut input = form();
            match blank {
                "full_name" => input.full_name = "  ".to_string(),
                "phone" => input.phone = String::new(),
                _ => input.address = String::new(),
            }

            assert!(matches!(
                input.validate().unwrap_err(),
                CheckoutError::RequiredFieldMissing
            ));
        }
    }

    #[test]
    fn should_reject_unknown_payment_method() {
        let result = CheckoutForm {
            payment_method: "paypal".to_string(),
            ..form()
        }
        .validate();

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::UnknownPaymentMethod
        ));
    }

    #[test]
    fn should_snapshot_cart_into_confirmation() {
        let mut cart = Cart::new();
        cart.add(product("3", "29.99", "Clothing"));
        cart.add(product("3", "29.99", "Clothing"));
        let (customer, method) = form().validate().unwrap();

        let confirmation = OrderConfirmation::new(&cart, customer, method);

        assert_eq!(confirmation.items.len(), 1);
        assert_eq!(confirmation.total_items, 2);
        assert_eq!(
            confirmation.total_price,
            BigDecimal::from_str("59.98").unwrap()
        );
        assert_eq!(confirmation.message, ORDER_PLACED_MESSAGE);
    }

    #[test]
    fn should_treat_success_statuses_case_insensitively() {
        assert!(is_successful_payment_status(None));
        assert!(is_successful_payment_status(Some("")));
        assert!(is_successful_payment_status(Some("SUCCESS")));
        assert!(is_successful_payment_status(Some("Paid")));
        assert!(is_successful_payment_status(Some("completed")));
        assert!(!is_successful_payment_status(Some("failed")));
        assert!(!is_successful_payment_status(Some("cancelled")));
    }
}
