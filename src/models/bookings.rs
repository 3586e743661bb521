use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::error::ValidationError;

/// Body of `POST /book` as the booking form sends it.
#[serde_as]
#[derive(Debug, Deserialize, Serialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub checkin: Option<String>,
    #[serde(default)]
    pub checkout: Option<String>,
    // Forms post numbers as strings
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub guests: Option<u32>,
    #[serde(default, rename = "promoCode", alias = "promo_code")]
    pub promo_code: Option<String>,
}

/// A check-in/check-out pair where checkout is strictly after checkin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    checkin: NaiveDateTime,
    checkout: NaiveDateTime,
}

impl Stay {
    pub fn new(checkin: NaiveDateTime, checkout: NaiveDateTime) -> Result<Self, ValidationError> {
        if checkout <= checkin {
            return Err(ValidationError::CheckoutNotAfterCheckin);
        }
        Ok(Self { checkin, checkout })
    }

    pub fn from_dates(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(
            checkin.and_time(NaiveTime::MIN),
            checkout.and_time(NaiveTime::MIN),
        )
    }

    pub fn checkin(&self) -> NaiveDateTime {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDateTime {
        self.checkout
    }
}

/// A booking request that passed validation.
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_mobile: String,
    pub stay: Stay,
    pub guests: u32,
    pub promo_code: Option<String>,
}

impl BookingRequest {
    pub fn validate(self) -> Result<BookingDetails, ValidationError> {
        let guest_name = required(self.name, "name")?;
        let guest_email = required(self.email, "email")?;
        let guest_mobile = required(self.mobile, "mobile")?;
        let checkin = required(self.checkin, "checkin")?;
        let checkout = required(self.checkout, "checkout")?;
        let guests = self.guests.ok_or(ValidationError::MissingField("guests"))?;

        if !is_valid_email(&guest_email) {
            return Err(ValidationError::InvalidEmail);
        }

        let stay = Stay::new(
            parse_stay_date(&checkin, "checkin")?,
            parse_stay_date(&checkout, "checkout")?,
        )?;

        let promo_code = self
            .promo_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        Ok(BookingDetails {
            guest_name,
            guest_email,
            guest_mobile,
            stay,
            guests,
            promo_code,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

fn is_valid_email(email: &str) -> bool {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    )
    .map(|re| re.is_match(email))
    .unwrap_or(false)
}

/// Accepts a plain date (midnight), an RFC 3339 timestamp (kept in its own offset so the
/// weekday matches what the guest picked) or a `datetime-local` form value.
pub fn parse_stay_date(raw: &str, field: &'static str) -> Result<NaiveDateTime, ValidationError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Body returned by `POST /book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub order_id: String,
    /// Amount due now, in rupees.
    pub amount: i64,
    pub total: i64,
    pub discount: i64,
}
