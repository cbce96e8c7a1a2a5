//! In-memory train and booking bookkeeping.

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, info, warn};

use crate::{
    error::RegistryError,
    models::{Booking, Passenger, Train},
};

/// Seats made available on a route whenever a train for it is added.
pub const DEFAULT_SEAT_CAPACITY: u32 = 100;

/// Owns the trains, the active bookings and the per-route seat inventory.
///
/// Routes are matched case-insensitively everywhere. Adding a second train
/// on an existing route resets that route's inventory to full capacity.
#[derive(Debug)]
pub struct BookingRegistry {
    trains: Vec<Rc<Train>>,
    bookings: Vec<Booking>,
    seats_by_route: HashMap<String, u32>,
    total_bookings: u64,
    capacity: u32,
}

impl Default for BookingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingRegistry {
    /// Create an empty registry using [`DEFAULT_SEAT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SEAT_CAPACITY)
    }

    /// Create an empty registry granting `capacity` seats per added train.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            trains: Vec::new(),
            bookings: Vec::new(),
            seats_by_route: HashMap::new(),
            total_bookings: 0,
            capacity,
        }
    }

    /// Seats granted to a route when a train for it is added.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Register a train and (re)set its route's seat count to full capacity.
    pub fn add_train(&mut self, train: Train) {
        let key = route_key(train.route());
        if self.seats_by_route.contains_key(&key) {
            warn!(route = train.route(), "resetting seat inventory for existing route");
        }
        self.seats_by_route.insert(key, self.capacity);
        info!(
            train = train.name(),
            route = train.route(),
            kind = train.kind().label(),
            "train added"
        );
        self.trains.push(Rc::new(train));
    }

    /// Trains in insertion order.
    pub fn trains(&self) -> &[Rc<Train>] {
        &self.trains
    }

    /// Descriptions of every train, in insertion order.
    pub fn list_trains(&self) -> impl Iterator<Item = String> + '_ {
        self.trains.iter().map(|train| train.describe())
    }

    /// First train whose route matches `route`, ignoring case.
    pub fn find_train_by_route(&self, route: &str) -> Option<&Rc<Train>> {
        let key = route_key(route);
        let found = self
            .trains
            .iter()
            .find(|train| route_key(train.route()) == key);
        debug!(route, found = found.is_some(), "train lookup");
        found
    }

    /// Book one seat for a new passenger on the train serving `route`.
    ///
    /// An unknown route and a sold-out route both yield
    /// [`RegistryError::NoSeatsAvailable`]. No age or seat type validation
    /// is applied.
    pub fn book_ticket(
        &mut self,
        name: &str,
        age: i32,
        seat_type: &str,
        route: &str,
    ) -> Result<&Booking, RegistryError> {
        let no_seats = || RegistryError::NoSeatsAvailable {
            route: route.to_string(),
        };

        let train = match self.find_train_by_route(route) {
            Some(train) => Rc::clone(train),
            None => {
                warn!(route, "booking rejected: no train for route");
                return Err(no_seats());
            }
        };

        let seats = self
            .seats_by_route
            .get_mut(&route_key(train.route()))
            .filter(|seats| **seats > 0)
            .ok_or_else(|| {
                warn!(route, "booking rejected: route sold out");
                no_seats()
            })?;
        *seats -= 1;
        let remaining = *seats;

        self.total_bookings += 1;
        self.bookings
            .push(Booking::new(Passenger::new(name, age, seat_type), train));
        info!(passenger = name, route, remaining, "ticket booked");

        let index = self.bookings.len() - 1;
        Ok(&self.bookings[index])
    }

    /// Cancel the first booking for `name` (case-insensitive) whose rendered
    /// details contain `route`, returning its seat to the inventory.
    ///
    /// The route is matched as a substring of the whole booking description,
    /// so text from other fields can also satisfy it.
    pub fn cancel_ticket(&mut self, name: &str, route: &str) -> Result<Booking, RegistryError> {
        let position = self
            .bookings
            .iter()
            .position(|booking| {
                eq_ignore_case(booking.passenger().name(), name)
                    && booking.describe().contains(route)
            })
            .ok_or_else(|| {
                warn!(passenger = name, route, "cancellation rejected: no matching booking");
                RegistryError::BookingNotFound {
                    name: name.to_string(),
                    route: route.to_string(),
                }
            })?;

        let booking = self.bookings.remove(position);
        let seats = self
            .seats_by_route
            .entry(route_key(booking.train().route()))
            .or_insert(0);
        *seats = seats.saturating_add(1);
        info!(passenger = name, route, remaining = *seats, "ticket cancelled");
        Ok(booking)
    }

    /// Active bookings in booking order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Descriptions of every active booking, in booking order.
    pub fn list_bookings(&self) -> impl Iterator<Item = String> + '_ {
        self.bookings.iter().map(Booking::describe)
    }

    /// Seats still bookable on `route`.
    pub fn seats_remaining(&self, route: &str) -> Result<u32, RegistryError> {
        self.seats_by_route
            .get(&route_key(route))
            .copied()
            .ok_or_else(|| RegistryError::RouteNotFound {
                route: route.to_string(),
            })
    }

    /// Successful bookings made over the registry's lifetime; cancellations
    /// do not lower it.
    pub fn total_bookings_ever(&self) -> u64 {
        self.total_bookings
    }
}

fn route_key(route: &str) -> String {
    route.to_lowercase()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_express() -> BookingRegistry {
        let mut registry = BookingRegistry::new();
        registry.add_train(Train::standard("Express", "A-B", "10:00", 50.0));
        registry
    }

    #[test]
    fn adding_trains_grants_full_capacity() -> Result<(), RegistryError> {
        let mut registry = BookingRegistry::new();
        registry.add_train(Train::standard("Express", "A-B", "10:00", 50.0));
        registry.add_train(Train::luxury("Royal", "C-D", "18:00", 100.0, 25.0));
        assert_eq!(registry.seats_remaining("A-B")?, 100);
        assert_eq!(registry.seats_remaining("C-D")?, 100);
        assert_eq!(registry.trains().len(), 2);
        Ok(())
    }

    #[test]
    fn book_and_cancel_scenario() -> Result<(), RegistryError> {
        let mut registry = registry_with_express();
        assert_eq!(registry.seats_remaining("A-B")?, 100);

        let booking = registry.book_ticket("Alice", 30, "Window", "A-B")?;
        assert_eq!(booking.passenger().name(), "Alice");
        assert_eq!(registry.seats_remaining("A-B")?, 99);
        assert_eq!(registry.total_bookings_ever(), 1);

        let cancelled = registry.cancel_ticket("Alice", "A-B")?;
        assert_eq!(cancelled.passenger().seat_type(), "Window");
        assert_eq!(registry.seats_remaining("A-B")?, 100);
        assert_eq!(registry.total_bookings_ever(), 1);
        assert!(registry.bookings().is_empty());

        assert!(matches!(
            registry.cancel_ticket("Alice", "A-B"),
            Err(RegistryError::BookingNotFound { .. })
        ));
        Ok(())
    }

    #[test]
    fn booking_unknown_route_leaves_state_untouched() -> Result<(), RegistryError> {
        let mut registry = registry_with_express();
        let err = registry
            .book_ticket("Bob", 40, "Aisle", "X-Y")
            .unwrap_err();
        assert!(matches!(err, RegistryError::NoSeatsAvailable { .. }));
        assert_eq!(registry.seats_remaining("A-B")?, 100);
        assert_eq!(registry.total_bookings_ever(), 0);
        assert!(registry.bookings().is_empty());
        Ok(())
    }

    #[test]
    fn sold_out_route_rejects_bookings() -> Result<(), RegistryError> {
        let mut registry = BookingRegistry::with_capacity(2);
        registry.add_train(Train::standard("Local", "A-B", "07:00", 10.0));
        registry.book_ticket("Alice", 30, "Window", "A-B")?;
        registry.book_ticket("Bob", 31, "Aisle", "A-B")?;
        assert_eq!(registry.seats_remaining("A-B")?, 0);

        assert!(matches!(
            registry.book_ticket("Carol", 32, "Window", "A-B"),
            Err(RegistryError::NoSeatsAvailable { .. })
        ));
        assert_eq!(registry.bookings().len(), 2);
        assert_eq!(registry.total_bookings_ever(), 2);
        Ok(())
    }

    #[test]
    fn routes_match_ignoring_case() -> Result<(), RegistryError> {
        let mut registry = registry_with_express();
        registry.book_ticket("Alice", 30, "Window", "a-b")?;
        assert_eq!(registry.seats_remaining("A-B")?, 99);
        assert_eq!(registry.seats_remaining("a-b")?, 99);
        assert_eq!(
            registry.find_train_by_route("a-B").map(|train| train.name()),
            Some("Express")
        );

        registry.cancel_ticket("ALICE", "A-B")?;
        assert_eq!(registry.seats_remaining("A-B")?, 100);
        Ok(())
    }

    #[test]
    fn cancellation_route_is_a_case_sensitive_substring() -> Result<(), RegistryError> {
        let mut registry = registry_with_express();
        registry.book_ticket("Alice", 30, "Window", "A-B")?;
        assert!(registry.cancel_ticket("Alice", "a-b").is_err());

        // "Express" appears in the train name, so it satisfies the route match.
        registry.cancel_ticket("Alice", "Express")?;
        assert_eq!(registry.seats_remaining("A-B")?, 100);
        Ok(())
    }

    #[test]
    fn cancel_removes_first_match_only() -> Result<(), RegistryError> {
        let mut registry = registry_with_express();
        registry.book_ticket("Alice", 30, "Window", "A-B")?;
        registry.book_ticket("Alice", 31, "Aisle", "A-B")?;
        let cancelled = registry.cancel_ticket("alice", "A-B")?;
        assert_eq!(cancelled.passenger().age(), 30);
        assert_eq!(registry.bookings().len(), 1);
        assert_eq!(registry.seats_remaining("A-B")?, 99);
        Ok(())
    }

    #[test]
    fn second_train_on_route_resets_inventory() -> Result<(), RegistryError> {
        let mut registry = registry_with_express();
        registry.book_ticket("Alice", 30, "Window", "A-B")?;
        registry.add_train(Train::luxury("Royal", "a-b", "12:00", 80.0, 20.0));
        assert_eq!(registry.seats_remaining("A-B")?, 100);

        // Lookups still resolve to the first train on the route.
        let booking = registry.book_ticket("Bob", 40, "Aisle", "A-B")?;
        assert_eq!(booking.train().name(), "Express");
        Ok(())
    }

    #[test]
    fn listings_follow_insertion_order() -> Result<(), RegistryError> {
        let mut registry = BookingRegistry::new();
        assert_eq!(registry.list_trains().count(), 0);

        registry.add_train(Train::standard("Express", "A-B", "10:00", 50.0));
        registry.add_train(Train::luxury("Royal", "C-D", "18:00", 100.0, 25.0));
        let trains: Vec<_> = registry.list_trains().collect();
        assert!(trains[0].starts_with("Train Name: Express"));
        assert!(trains[1].ends_with("Price: $125.0"));

        registry.book_ticket("Alice", 30, "Window", "C-D")?;
        registry.book_ticket("Bob", 40, "Aisle", "A-B")?;
        let bookings: Vec<_> = registry.list_bookings().collect();
        assert_eq!(bookings.len(), 2);
        assert!(bookings[0].starts_with("Name: Alice"));
        assert!(bookings[1].starts_with("Name: Bob"));
        Ok(())
    }

    #[test]
    fn seat_count_saturates_at_capacity_ceiling() -> Result<(), RegistryError> {
        let mut registry = BookingRegistry::with_capacity(u32::MAX);
        registry.add_train(Train::standard("Express", "A-B", "10:00", 50.0));
        registry.book_ticket("Alice", 30, "Window", "A-B")?;
        registry.add_train(Train::standard("Express", "A-B", "11:00", 50.0));
        assert_eq!(registry.seats_remaining("A-B")?, u32::MAX);

        registry.cancel_ticket("Alice", "A-B")?;
        assert_eq!(registry.seats_remaining("A-B")?, u32::MAX);
        Ok(())
    }

    #[test]
    fn unknown_route_has_no_seat_count() {
        let registry = registry_with_express();
        assert!(matches!(
            registry.seats_remaining("Z-Z"),
            Err(RegistryError::RouteNotFound { .. })
        ));
    }
}
