use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::promo::PromoResult;

use super::{catalog::PromoCatalog, http_client::HttpPromoClient};

#[derive(Debug, thiserror::Error)]
pub enum PromoError {
    #[error("request to promo service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("promo service returned status {0}")]
    Status(u16),

    #[error("promo service returned an out-of-range discount: {0}")]
    InvalidDiscount(Decimal),
}

pub trait PromoLookup {
    async fn lookup(&self, code: &str) -> Result<PromoResult, PromoError>;
}

/// Where promo codes are checked: a remote validation service or the local CSV catalog.
pub enum PromoSource {
    Remote(HttpPromoClient),
    Local(Arc<PromoCatalog>),
}

impl PromoLookup for PromoSource {
    async fn lookup(&self, code: &str) -> Result<PromoResult, PromoError> {
        match self {
            PromoSource::Remote(client) => client.lookup(code).await,
            PromoSource::Local(catalog) => catalog.lookup(code).await,
        }
    }
}
