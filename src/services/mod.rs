pub mod booking_service;
pub mod payment;
pub mod pricing_service;
pub mod promo;
pub mod razorpay;
