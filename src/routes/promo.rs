use actix_web::{web, HttpResponse, Responder};

use crate::{
    models::promo::{PromoCodeInput, PromoValidation},
    services::promo::catalog::PromoCatalog,
};

pub async fn validate_promo(
    catalog: web::Data<PromoCatalog>,
    input: web::Json<PromoCodeInput>,
) -> impl Responder {
    let result = catalog.validate(&input.code);
    HttpResponse::Ok().json(PromoValidation::from(result))
}
