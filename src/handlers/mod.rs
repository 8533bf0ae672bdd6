pub mod admin;
pub mod bookings;
pub mod contact;
pub mod health;
