use std::time::Duration;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::promo::{PromoResult, PromoValidation};

use super::interface::{PromoError, PromoLookup};

#[derive(Serialize)]
struct PromoLookupRequest<'a> {
    code: &'a str,
}

/// Calls an external `/validate-promo` style endpoint.
pub struct HttpPromoClient {
    http_client: reqwest::Client,
    url: String,
}

impl HttpPromoClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }
}

impl PromoLookup for HttpPromoClient {
    async fn lookup(&self, code: &str) -> Result<PromoResult, PromoError> {
        log::debug!("Validating promo code against {}", self.url);

        let res = self
            .http_client
            .post(&self.url)
            .json(&PromoLookupRequest { code })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(PromoError::Status(status.as_u16()));
        }

        let body: PromoValidation = res.json().await?;
        if !body.valid {
            return Ok(PromoResult::invalid());
        }
        if body.discount < Decimal::ZERO || body.discount > Decimal::ONE_HUNDRED {
            return Err(PromoError::InvalidDiscount(body.discount));
        }

        Ok(PromoResult::valid(body.discount))
    }
}
