#![allow(missing_docs)]

use std::fmt;

/// Traveller named on a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    name: String,
    age: i32,
    seat_type: String,
}

impl Passenger {
    pub fn new(name: impl Into<String>, age: i32, seat_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            seat_type: seat_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Free-form seat preference, e.g. `Window` or `Aisle`.
    pub fn seat_type(&self) -> &str {
        &self.seat_type
    }

    pub fn describe(&self) -> String {
        format!(
            "Name: {}, Age: {}, Seat Type: {}",
            self.name, self.age, self.seat_type
        )
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
