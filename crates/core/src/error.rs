//! Registry error types.
//!
//! Every variant is recoverable: the shell reports it and keeps running.
//! Display strings are the messages shown to the operator.

use std::{io, path::PathBuf};

/// Failures raised by [`crate::BookingRegistry`] operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No train serves the route, or its seats are exhausted.
    #[error("No seats available for this route.")]
    NoSeatsAvailable {
        /// Route as entered by the caller.
        route: String,
    },

    /// No active booking matches the passenger name and route.
    #[error("No booking found for the given details.")]
    BookingNotFound {
        /// Passenger name as entered.
        name: String,
        /// Route as entered.
        route: String,
    },

    /// No seat inventory is tracked for the route.
    #[error("No train found for this route.")]
    RouteNotFound {
        /// Route as entered.
        route: String,
    },

    /// A booking file could not be opened, read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RegistryError::NoSeatsAvailable {
            route: "A-B".into(),
        };
        assert_eq!(err.to_string(), "No seats available for this route.");

        let err = RegistryError::BookingNotFound {
            name: "Alice".into(),
            route: "A-B".into(),
        };
        assert_eq!(err.to_string(), "No booking found for the given details.");

        let err = RegistryError::RouteNotFound {
            route: "X-Y".into(),
        };
        assert_eq!(err.to_string(), "No train found for this route.");

        let err = RegistryError::io(
            "bookings.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "bookings.txt: missing");
    }
}
