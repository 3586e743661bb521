use serde::{Deserialize, Serialize};

/// Body of `POST /v1/orders`.
#[derive(Debug, Serialize)]
pub struct CreateOrder<'a> {
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: &'a str,
    pub payment_capture: u8,
}

/// The fields we read back from a created Razorpay order.
#[derive(Debug, Deserialize)]
pub struct RazorpayOrder {
    pub id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub receipt: Option<String>,
    pub status: Option<String>,
}
