use actix_web::{web, HttpResponse};

use crate::{
    error::AppError,
    models::bookings::BookingRequest,
    services::{
        booking_service::BookingService, payment::interface::PaymentOrders,
        promo::interface::PromoLookup,
    },
};

pub async fn book<P, O>(
    service: web::Data<BookingService<P, O>>,
    input: web::Json<BookingRequest>,
) -> Result<HttpResponse, AppError>
where
    P: PromoLookup + 'static,
    O: PaymentOrders + 'static,
{
    let details = input.into_inner().validate()?;
    let confirmation = service.book(&details).await?;

    log::info!(
        "Created order {} for {} ({} due)",
        confirmation.order_id,
        details.guest_email,
        confirmation.amount
    );

    Ok(HttpResponse::Ok().json(confirmation))
}
