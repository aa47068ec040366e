pub mod bookings;
pub mod customers;
pub mod rooms;
