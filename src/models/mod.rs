pub mod bookings;
pub mod payment;
pub mod promo;
pub mod quote;
