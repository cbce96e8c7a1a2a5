use std::fmt;

/// Fare class of a train.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainKind {
    /// Plain service charged at the base fare.
    Standard,
    /// Premium service charging a flat surcharge on top of the base fare.
    Luxury {
        /// Amount added to the base fare.
        surcharge: f64,
    },
}

impl TrainKind {
    /// Label used in rendered train details.
    pub fn label(&self) -> &'static str {
        match self {
            TrainKind::Standard => "Standard",
            TrainKind::Luxury { .. } => "Luxury",
        }
    }

    /// Surcharge for this kind; zero for standard trains.
    pub fn surcharge(&self) -> f64 {
        match self {
            TrainKind::Standard => 0.0,
            TrainKind::Luxury { surcharge } => *surcharge,
        }
    }
}

/// A scheduled train service. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    name: String,
    route: String,
    schedule: String,
    base_price: f64,
    kind: TrainKind,
}

impl Train {
    /// Build a standard train charged at `base_price`.
    pub fn standard(
        name: impl Into<String>,
        route: impl Into<String>,
        schedule: impl Into<String>,
        base_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            schedule: schedule.into(),
            base_price,
            kind: TrainKind::Standard,
        }
    }

    /// Build a luxury train charging `surcharge` on top of `base_price`.
    pub fn luxury(
        name: impl Into<String>,
        route: impl Into<String>,
        schedule: impl Into<String>,
        base_price: f64,
        surcharge: f64,
    ) -> Self {
        Self {
            kind: TrainKind::Luxury { surcharge },
            ..Self::standard(name, route, schedule, base_price)
        }
    }

    /// Display name of the service.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form route label such as `A-B`.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Free-form departure schedule, e.g. `10:00 AM`.
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// Fare before any surcharge.
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Fare class of the train.
    pub fn kind(&self) -> TrainKind {
        self.kind
    }

    /// Fare actually charged: the base price plus any luxury surcharge.
    pub fn effective_price(&self) -> f64 {
        self.base_price + self.kind.surcharge()
    }

    /// Single-line summary used in listings and persisted bookings.
    pub fn describe(&self) -> String {
        format!(
            "Train Name: {}, Route: {}, {} Train, Schedule: {}, Price: ${}",
            self.name,
            self.route,
            self.kind.label(),
            self.schedule,
            format_price(self.effective_price())
        )
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Render a price the way booking files have always shown it: whole amounts
/// keep a single decimal place at any magnitude (`50.0`, `12345678.0`),
/// anything else prints in its shortest form.
pub fn format_price(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
