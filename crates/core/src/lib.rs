#![warn(clippy::all, missing_docs)]

//! Core domain logic for the railbook train booking manager.
//!
//! This crate hosts the train, passenger and booking models, the booking
//! registry with its per-route seat inventory, booking file persistence,
//! and configuration handling used by the interactive shell.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod save;

pub use config::AppConfig;
pub use error::RegistryError;
pub use models::{Booking, Passenger, Train, TrainKind};
pub use registry::{BookingRegistry, DEFAULT_SEAT_CAPACITY};
