use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
