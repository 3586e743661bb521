#![allow(dead_code)]

use actix_web::{web, App};
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::{Arc, Mutex};

use farmstay_api::{
    models::{
        payment::{NewPaymentOrder, PaymentOrderHandle},
        promo::PromoResult,
    },
    routes,
    services::{
        booking_service::BookingService,
        payment::interface::{PaymentError, PaymentOrders},
        promo::{
            catalog::PromoCatalog,
            interface::{PromoError, PromoLookup},
        },
    },
};

pub const TEST_ORDER_ID: &str = "order_test_123";

/// Shared log of the calls a mock collaborator received.
#[derive(Clone)]
pub struct Recorder<T>(Arc<Mutex<Vec<T>>>);

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T: Clone> Recorder<T> {
    fn push(&self, value: T) {
        self.0.lock().unwrap().push(value);
    }

    pub fn all(&self) -> Vec<T> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Clone, Copy)]
pub enum PromoOutcome {
    Valid(Decimal),
    Invalid,
    Unavailable,
}

pub struct MockPromos {
    outcome: PromoOutcome,
    lookups: Recorder<String>,
}

impl PromoLookup for MockPromos {
    async fn lookup(&self, code: &str) -> Result<PromoResult, PromoError> {
        self.lookups.push(code.to_string());
        match self.outcome {
            PromoOutcome::Valid(discount) => Ok(PromoResult::valid(discount)),
            PromoOutcome::Invalid => Ok(PromoResult::invalid()),
            PromoOutcome::Unavailable => Err(PromoError::Status(503)),
        }
    }
}

pub struct MockPayments {
    fail: bool,
    orders: Recorder<NewPaymentOrder>,
}

impl PaymentOrders for MockPayments {
    async fn create_order(&self, order: NewPaymentOrder) -> Result<PaymentOrderHandle, PaymentError> {
        self.orders.push(order.clone());
        if self.fail {
            return Err(PaymentError::Rejected {
                status: 401,
                body: "Authentication failed".to_string(),
            });
        }
        Ok(PaymentOrderHandle {
            order_id: TEST_ORDER_ID.to_string(),
            amount_minor_units: order.amount_minor_units,
            currency: order.currency.to_string(),
            receipt: order.receipt,
        })
    }
}

pub struct TestApp {
    pub lookups: Recorder<String>,
    pub orders: Recorder<NewPaymentOrder>,
    service: web::Data<BookingService<MockPromos, MockPayments>>,
    catalog: web::Data<PromoCatalog>,
}

impl TestApp {
    pub fn new(promo: PromoOutcome) -> Self {
        Self::build(promo, false, PromoCatalog::default())
    }

    pub fn with_failing_payments(promo: PromoOutcome) -> Self {
        Self::build(promo, true, PromoCatalog::default())
    }

    pub fn with_catalog(csv: &str) -> Self {
        let catalog = PromoCatalog::parse(csv).unwrap();
        Self::build(PromoOutcome::Invalid, false, catalog)
    }

    fn build(promo: PromoOutcome, payments_fail: bool, catalog: PromoCatalog) -> Self {
        let lookups = Recorder::default();
        let orders = Recorder::default();
        let service = BookingService::new(
            MockPromos {
                outcome: promo,
                lookups: lookups.clone(),
            },
            MockPayments {
                fail: payments_fail,
                orders: orders.clone(),
            },
        );

        Self {
            lookups,
            orders,
            service: web::Data::new(service),
            catalog: web::Data::new(catalog),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.service.clone())
            .app_data(self.catalog.clone())
            .configure(routes::configure::<MockPromos, MockPayments>)
    }
}

/// 2025-01-15 is a Wednesday, 2025-01-18 a Saturday.
pub fn booking_body(checkin: &str, checkout: &str, guests: u32) -> serde_json::Value {
    json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "mobile": "+91 98450 12345",
        "checkin": checkin,
        "checkout": checkout,
        "guests": guests
    })
}
