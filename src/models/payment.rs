use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

pub const CURRENCY: &str = "INR";
const MINOR_UNITS_PER_RUPEE: i64 = 100;

/// An order to be created with the payment processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentOrder {
    pub amount_minor_units: i64,
    pub currency: &'static str,
    pub receipt: String,
}

impl NewPaymentOrder {
    /// Converts a rupee amount to paise and tags it with a fresh receipt id.
    pub fn for_rupees(amount: i64) -> Result<Self, ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        let amount_minor_units = amount
            .checked_mul(MINOR_UNITS_PER_RUPEE)
            .ok_or(ValidationError::AmountOverflow)?;

        Ok(Self {
            amount_minor_units,
            currency: CURRENCY,
            receipt: format!("rcpt_{}", Uuid::new_v4().simple()),
        })
    }
}

/// Identifier of an order created by the payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderHandle {
    pub order_id: String,
    pub amount_minor_units: i64,
    pub currency: String,
    pub receipt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderInput {
    /// Whole rupees. Fractions are dropped and numeric strings accepted.
    #[serde(deserialize_with = "whole_rupees")]
    pub amount: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

fn whole_rupees<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match RawAmount::deserialize(deserializer)? {
        RawAmount::Whole(amount) => return Ok(amount),
        RawAmount::Fractional(amount) => amount,
        RawAmount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid amount: {:?}", text)))?,
    };

    let truncated = amount.trunc();
    if !truncated.is_finite() || truncated.abs() >= i64::MAX as f64 {
        return Err(de::Error::custom(format!("amount out of range: {}", amount)));
    }
    Ok(truncated as i64)
}
