pub mod bookings;
pub mod rooms;

pub use bookings::CreateBooking;
pub use rooms::CreateRoom;
