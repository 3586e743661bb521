use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize, Serializer};

/// Outcome of validating a promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoResult {
    pub valid: bool,
    /// Percentage in `0..=100`.
    pub discount_percent: Decimal,
}

impl PromoResult {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            discount_percent: Decimal::ZERO,
        }
    }

    pub fn valid(discount_percent: Decimal) -> Self {
        Self {
            valid: true,
            discount_percent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromoCodeInput {
    pub code: String,
}

/// Wire shape of the promo validation exchange, shared by the client and the local endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct PromoValidation {
    pub valid: bool,
    #[serde(
        default,
        serialize_with = "serialize_percent",
        deserialize_with = "rust_decimal::serde::float::deserialize"
    )]
    pub discount: Decimal,
}

/// Whole percentages go out as integers (`10`), fractional ones as floats (`12.5`).
fn serialize_percent<S>(percent: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match percent.fract().is_zero().then(|| percent.to_i64()).flatten() {
        Some(whole) => serializer.serialize_i64(whole),
        None => rust_decimal::serde::float::serialize(percent, serializer),
    }
}

impl From<PromoResult> for PromoValidation {
    fn from(result: PromoResult) -> Self {
        Self {
            valid: result.valid,
            discount: result.discount_percent,
        }
    }
}
