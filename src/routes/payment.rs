use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::{
    error::AppError,
    models::payment::{CreateOrderInput, PaymentOrderHandle},
    services::{
        booking_service::BookingService, payment::interface::PaymentOrders,
        promo::interface::PromoLookup,
    },
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderResponse {
    #[serde(flatten)]
    order: PaymentOrderHandle,
    /// Rupees, as requested.
    amount: i64,
}

pub async fn create_order<P, O>(
    service: web::Data<BookingService<P, O>>,
    input: web::Json<CreateOrderInput>,
) -> Result<HttpResponse, AppError>
where
    P: PromoLookup + 'static,
    O: PaymentOrders + 'static,
{
    let amount = input.into_inner().amount;
    let order = service.create_order(amount).await?;

    Ok(HttpResponse::Ok().json(CreateOrderResponse { order, amount }))
}
