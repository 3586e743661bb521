use crate::{
    error::AppError,
    models::{
        bookings::{BookingConfirmation, BookingDetails},
        payment::{NewPaymentOrder, PaymentOrderHandle},
        quote::PriceQuote,
    },
    services::{
        payment::interface::PaymentOrders, pricing_service::PricingService,
        promo::interface::PromoLookup,
    },
};

/// Runs a booking through promo lookup, pricing and payment order creation.
pub struct BookingService<P, O> {
    promos: P,
    payments: O,
}

impl<P, O> BookingService<P, O>
where
    P: PromoLookup,
    O: PaymentOrders,
{
    pub fn new(promos: P, payments: O) -> Self {
        Self { promos, payments }
    }

    /// Prices the stay. A promo lookup failure aborts the quote instead of dropping the discount.
    pub async fn quote(&self, details: &BookingDetails) -> Result<PriceQuote, AppError> {
        let promo = match &details.promo_code {
            Some(code) => {
                let promo = self.promos.lookup(code).await?;
                log::info!(
                    "Promo code {} valid={} discount={}%",
                    code,
                    promo.valid,
                    promo.discount_percent
                );
                Some(promo)
            }
            None => None,
        };

        Ok(PricingService::quote(
            &details.stay,
            details.guests,
            promo.as_ref(),
        )?)
    }

    pub async fn book(&self, details: &BookingDetails) -> Result<BookingConfirmation, AppError> {
        let quote = self.quote(details).await?;
        log::info!(
            "Quote for {}: {} nights at {} + {} surcharge, total {}, discount {}, due {}",
            details.guest_email,
            quote.nights,
            quote.rate_per_night,
            quote.surcharge_per_night,
            quote.total,
            quote.discount,
            quote.amount_due
        );

        let order = self.create_order(quote.amount_due).await?;

        Ok(BookingConfirmation {
            order_id: order.order_id,
            amount: quote.amount_due,
            total: quote.total,
            discount: quote.discount,
        })
    }

    /// Creates a payment order for a rupee amount.
    pub async fn create_order(&self, amount: i64) -> Result<PaymentOrderHandle, AppError> {
        let order = NewPaymentOrder::for_rupees(amount)?;
        Ok(self.payments.create_order(order).await?)
    }
}
