//! Error kinds surfaced by the booking API.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::services::{payment::interface::PaymentError, promo::interface::PromoError};

/// Problems with the caller's input. Always reported as 400 before any outbound call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid {field} date: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Checkout must be after checkin")]
    CheckoutNotAfterCheckin,

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Booking is too large to price")]
    AmountOverflow,

    #[error("Malformed request: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Promo lookup failed: {0}")]
    Promo(#[from] PromoError),

    #[error("Payment order creation failed: {0}")]
    Payment(#[from] PaymentError),

    /// Reserved for failures with neither a client nor an upstream cause. No handler
    /// produces it yet; it keeps the 500 body generic once one does.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Promo(_) => "promo_service_error",
            AppError::Payment(_) => "payment_gateway_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Promo(_) | AppError::Payment(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Promo(err) => {
                log::error!("Promo lookup failed: {}", err);
                "Could not validate the promo code, please try again".to_string()
            }
            AppError::Payment(err) => {
                log::error!("Payment order creation failed: {}", err);
                "Could not create the payment order, please try again".to_string()
            }
            AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                "Something went wrong".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind(),
            message,
        })
    }
}
