pub mod bookings;
pub mod contacts;
pub mod notify;
