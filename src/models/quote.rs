use serde::{Deserialize, Serialize};

/// Price breakdown for one stay. Amounts are whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub nights: i64,
    pub rate_per_night: i64,
    pub surcharge_per_night: i64,
    pub total: i64,
    pub discount: i64,
    pub amount_due: i64,
}

impl PriceQuote {
    /// Total after the promo discount.
    pub fn final_amount(&self) -> i64 {
        self.total - self.discount
    }
}
