use actix_web::web;

use crate::{
    error::{AppError, ValidationError},
    services::{payment::interface::PaymentOrders, promo::interface::PromoLookup},
};

pub mod booking;
pub mod health;
pub mod payment;
pub mod promo;

/// Registers every route. The caller provides `web::Data` for the
/// `BookingService<P, O>` and the `PromoCatalog`.
pub fn configure<P, O>(cfg: &mut web::ServiceConfig)
where
    P: PromoLookup + 'static,
    O: PaymentOrders + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(ValidationError::Malformed(err.to_string())).into()
    }))
    .route("/health", web::get().to(health::health_check))
    .route("/book", web::post().to(booking::book::<P, O>))
    .route("/validate-promo", web::post().to(promo::validate_promo))
    .route("/create-order", web::post().to(payment::create_order::<P, O>));
}
