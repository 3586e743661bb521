use chrono::{Datelike, NaiveDateTime, TimeDelta, Weekday};
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{
    error::ValidationError,
    models::{bookings::Stay, promo::PromoResult, quote::PriceQuote},
};

pub const WEEKDAY_RATE: i64 = 10_000;
pub const WEEKEND_RATE: i64 = 12_000;
/// Guests covered by the nightly rate.
pub const BASE_OCCUPANCY: u32 = 10;
pub const EXTRA_GUEST_SURCHARGE: i64 = 500;

pub struct PricingService;

impl PricingService {
    /// Whole nights between checkin and checkout, rounding any partial day up.
    /// Sub-second remainders count as a partial day.
    pub fn count_nights(stay: &Stay) -> i64 {
        let stay_length = stay.checkout() - stay.checkin();
        let whole_days = stay_length.num_days();
        match TimeDelta::try_days(whole_days) {
            Some(whole) if stay_length > whole => whole_days + 1,
            _ => whole_days,
        }
    }

    /// Friday to Sunday check-ins pay the weekend rate for the whole stay.
    pub fn rate_per_night(checkin: NaiveDateTime) -> i64 {
        match checkin.weekday() {
            Weekday::Fri | Weekday::Sat | Weekday::Sun => WEEKEND_RATE,
            _ => WEEKDAY_RATE,
        }
    }

    pub fn surcharge_per_night(guests: u32) -> i64 {
        i64::from(guests.saturating_sub(BASE_OCCUPANCY)) * EXTRA_GUEST_SURCHARGE
    }

    /// Floor of the promo percentage applied to `total`. Invalid or missing promos give 0.
    pub fn discount(total: i64, promo: Option<&PromoResult>) -> i64 {
        match promo {
            Some(promo) if promo.valid => {
                let percent = promo
                    .discount_percent
                    .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
                (percent * Decimal::from(total) / Decimal::ONE_HUNDRED)
                    .floor()
                    .to_i64()
                    .unwrap_or(0)
                    .clamp(0, total)
            }
            _ => 0,
        }
    }

    /// Half of the final amount is collected upfront.
    pub fn amount_due(final_amount: i64) -> i64 {
        final_amount.div_euclid(2)
    }

    pub fn quote(
        stay: &Stay,
        guests: u32,
        promo: Option<&PromoResult>,
    ) -> Result<PriceQuote, ValidationError> {
        let nights = Self::count_nights(stay);
        let rate_per_night = Self::rate_per_night(stay.checkin());
        let surcharge_per_night = Self::surcharge_per_night(guests);

        let total = (rate_per_night + surcharge_per_night)
            .checked_mul(nights)
            .ok_or(ValidationError::AmountOverflow)?;
        let discount = Self::discount(total, promo);
        let amount_due = Self::amount_due(total - discount);

        Ok(PriceQuote {
            nights,
            rate_per_night,
            surcharge_per_night,
            total,
            discount,
            amount_due,
        })
    }
}
