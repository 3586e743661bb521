//! Booking quotes and Razorpay deposit orders for the farmstay.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
