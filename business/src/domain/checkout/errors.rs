#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.payment_method_missing")]
    PaymentMethodMissing,
    #[error("checkout.required_field_missing")]
    RequiredFieldMissing,
    #[error("checkout.unknown_payment_method")]
    UnknownPaymentMethod,
    #[error("checkout.payment_failed")]
    PaymentFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
