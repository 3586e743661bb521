use std::time::Duration;

use crate::{
    config::RazorpayConfig,
    models::payment::{NewPaymentOrder, PaymentOrderHandle},
    services::payment::interface::{PaymentError, PaymentOrders},
};

use super::models::{CreateOrder, RazorpayOrder};

pub struct RazorpayProvider {
    http_client: reqwest::Client,
    config: RazorpayConfig,
}

impl RazorpayProvider {
    pub fn new(config: RazorpayConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.config.api_base.trim_end_matches('/'))
    }
}

impl PaymentOrders for RazorpayProvider {
    async fn create_order(&self, order: NewPaymentOrder) -> Result<PaymentOrderHandle, PaymentError> {
        log::info!(
            "Creating Razorpay order for {} {} (receipt {})",
            order.amount_minor_units,
            order.currency,
            order.receipt
        );

        let res = self
            .http_client
            .post(self.orders_url())
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&CreateOrder {
                amount: order.amount_minor_units,
                currency: order.currency,
                receipt: &order.receipt,
                payment_capture: 1,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let created: RazorpayOrder = res.json().await?;
        let order_id = created
            .id
            .filter(|id| !id.is_empty())
            .ok_or(PaymentError::MissingOrderId)?;
        log::debug!("Razorpay order {} status {:?}", order_id, created.status);

        Ok(PaymentOrderHandle {
            order_id,
            amount_minor_units: created.amount.unwrap_or(order.amount_minor_units),
            currency: created.currency.unwrap_or_else(|| order.currency.to_string()),
            receipt: created.receipt.unwrap_or(order.receipt),
        })
    }
}
