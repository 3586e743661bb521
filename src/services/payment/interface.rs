use crate::models::payment::{NewPaymentOrder, PaymentOrderHandle};

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("request to payment gateway failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("payment gateway rejected the order with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("payment gateway response had no order id")]
    MissingOrderId,
}

pub trait PaymentOrders {
    async fn create_order(&self, order: NewPaymentOrder) -> Result<PaymentOrderHandle, PaymentError>;
}
