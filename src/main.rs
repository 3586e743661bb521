use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use farmstay_api::{
    config::AppConfig,
    routes,
    services::{
        booking_service::BookingService,
        promo::{catalog::PromoCatalog, http_client::HttpPromoClient, interface::PromoSource},
        razorpay::provider::RazorpayProvider,
    },
};

fn startup_error(err: impl std::error::Error + Send + Sync + 'static) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(startup_error)?;

    let catalog = Arc::new(
        PromoCatalog::load(&config.promo_file)
            .await
            .map_err(startup_error)?,
    );

    let promos = match &config.promo_service_url {
        Some(url) => {
            log::info!("Validating promo codes against {}", url);
            PromoSource::Remote(
                HttpPromoClient::new(url.clone(), config.http_timeout).map_err(startup_error)?,
            )
        }
        None => {
            log::info!("Validating promo codes against {}", config.promo_file.display());
            PromoSource::Local(catalog.clone())
        }
    };
    let payments = RazorpayProvider::new(config.razorpay.clone(), config.http_timeout)
        .map_err(startup_error)?;

    let service = web::Data::new(BookingService::new(promos, payments));
    let catalog = web::Data::from(catalog);

    log::info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(service.clone())
            .app_data(catalog.clone())
            .configure(routes::configure::<PromoSource, RazorpayProvider>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
