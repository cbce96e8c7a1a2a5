#![allow(missing_docs)]

use std::{fmt, rc::Rc};

use super::{Passenger, Train};

/// A confirmed seat: one passenger on one of the registry's trains.
///
/// The train is shared with the registry rather than copied, so a booking
/// always renders the same details as the train listing.
#[derive(Debug, Clone)]
pub struct Booking {
    passenger: Passenger,
    train: Rc<Train>,
}

impl Booking {
    pub fn new(passenger: Passenger, train: Rc<Train>) -> Self {
        Self { passenger, train }
    }

    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    pub fn train(&self) -> &Train {
        &self.train
    }

    /// Passenger details followed by the train details; one persisted line.
    pub fn describe(&self) -> String {
        format!(
            "{}, Train: {}",
            self.passenger.describe(),
            self.train.describe()
        )
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
