//! Shared domain models.

mod booking;
mod passenger;
mod train;

pub use booking::Booking;
pub use passenger::Passenger;
pub use train::{format_price, Train, TrainKind};
