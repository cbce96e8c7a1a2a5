use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use railbook_core::{save, BookingRegistry, Train};
use tracing::{debug, warn};

/// Colours used for status lines.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    enabled: bool,
    accent: Color,
    success: Color,
    danger: Color,
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Accent,
    Success,
    Danger,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            accent: Color::Cyan,
            success: Color::Green,
            danger: Color::Red,
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        let color = match tone {
            Tone::Plain => return text.to_string(),
            Tone::Accent => self.accent,
            Tone::Success => self.success,
            Tone::Danger => self.danger,
        };
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    AddTrain,
    DisplayTrains,
    BookTicket,
    CancelTicket,
    DisplayBookings,
    DisplaySeats,
    SaveBookings,
    LoadBookings,
    TotalBookings,
    Exit,
}

impl MenuOption {
    const ALL: [MenuOption; 10] = [
        MenuOption::AddTrain,
        MenuOption::DisplayTrains,
        MenuOption::BookTicket,
        MenuOption::CancelTicket,
        MenuOption::DisplayBookings,
        MenuOption::DisplaySeats,
        MenuOption::SaveBookings,
        MenuOption::LoadBookings,
        MenuOption::TotalBookings,
        MenuOption::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::AddTrain => "Add Train",
            MenuOption::DisplayTrains => "Display Trains",
            MenuOption::BookTicket => "Book Ticket",
            MenuOption::CancelTicket => "Cancel Ticket",
            MenuOption::DisplayBookings => "Display Bookings",
            MenuOption::DisplaySeats => "Display Available Seats",
            MenuOption::SaveBookings => "Save Bookings to File",
            MenuOption::LoadBookings => "Load Bookings from File",
            MenuOption::TotalBookings => "Display Total Bookings",
            MenuOption::Exit => "Exit",
        }
    }

    fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .map_or(0, |index| index + 1)
    }

    /// Parse a 1-based menu number; anything else is not an option.
    fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Reasons a menu command stops before completing.
#[derive(Debug)]
enum Interrupt {
    EndOfInput,
    InvalidNumber(String),
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

type Step<T = ()> = std::result::Result<T, Interrupt>;

/// Line-oriented menu driving a [`BookingRegistry`].
pub struct Shell<R, W> {
    registry: BookingRegistry,
    bookings_dir: PathBuf,
    theme: Theme,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        registry: BookingRegistry,
        bookings_dir: impl Into<PathBuf>,
        theme: Theme,
        input: R,
        output: W,
    ) -> Self {
        Self {
            registry,
            bookings_dir: bookings_dir.into(),
            theme,
            input,
            output,
        }
    }

    /// Run the menu until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(Interrupt::EndOfInput) => break,
                Err(Interrupt::InvalidNumber(raw)) => {
                    let message = format!("Invalid number: {}", raw.trim());
                    self.line(&message, Tone::Danger)
                        .context("failed to write to terminal")?;
                }
                Err(Interrupt::Io(err)) => {
                    return Err(err).context("terminal I/O failed");
                }
            }
        }
        self.line("Exiting system. Goodbye!", Tone::Plain)
            .context("failed to write to terminal")?;
        Ok(())
    }

    fn step(&mut self) -> Step<Flow> {
        self.print_menu()?;
        let choice = self.prompt("Choose an option: ")?;
        let Some(option) = MenuOption::parse(&choice) else {
            self.line("Invalid option. Please try again.", Tone::Danger)?;
            return Ok(Flow::Continue);
        };
        debug!(?option, "menu selection");

        match option {
            MenuOption::AddTrain => self.add_train()?,
            MenuOption::DisplayTrains => self.display_trains()?,
            MenuOption::BookTicket => self.book_ticket()?,
            MenuOption::CancelTicket => self.cancel_ticket()?,
            MenuOption::DisplayBookings => self.display_bookings()?,
            MenuOption::DisplaySeats => self.display_seats()?,
            MenuOption::SaveBookings => self.save_bookings()?,
            MenuOption::LoadBookings => self.load_bookings()?,
            MenuOption::TotalBookings => {
                let message = format!("Total Bookings: {}", self.registry.total_bookings_ever());
                self.line(&message, Tone::Plain)?;
            }
            MenuOption::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.line("Train Management System:", Tone::Accent)?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}. {}", option.number(), option.label())?;
        }
        Ok(())
    }

    fn add_train(&mut self) -> Step {
        let name = self.prompt("Enter Train Name: ")?;
        let route = self.prompt("Enter Route(e.g.,A-B): ")?;
        let schedule = self.prompt("Enter Schedule(e.g.,10:00 AM): ")?;
        let price: f64 = self.prompt_number("Enter Price: ")?;
        let luxury = self.prompt("Luxury Train? (yes/no): ")?;

        let train = if luxury.trim().eq_ignore_ascii_case("yes") {
            let surcharge: f64 = self.prompt_number("Enter Luxury Charge: ")?;
            Train::luxury(name, route, schedule, price, surcharge)
        } else {
            Train::standard(name, route, schedule, price)
        };
        self.registry.add_train(train);
        self.line("Train added successfully!", Tone::Success)?;
        Ok(())
    }

    fn display_trains(&mut self) -> Step {
        self.line("Available Trains:", Tone::Accent)?;
        for details in self.registry.list_trains() {
            writeln!(self.output, "{details}")?;
        }
        Ok(())
    }

    fn book_ticket(&mut self) -> Step {
        let name = self.prompt("Enter Passenger Name: ")?;
        let age: i32 = self.prompt_number("Enter Passenger Age: ")?;
        let seat_type = self.prompt("Enter Seat Type(e.g.,Window/Aisle): ")?;
        let route = self.prompt("Enter Route for Booking(e.g.,A-B): ")?;

        let booked = self
            .registry
            .book_ticket(&name, age, &seat_type, &route)
            .map(|_| ());
        match booked {
            Ok(()) => self.line("Ticket booked successfully!", Tone::Success)?,
            Err(err) => self.line(&err.to_string(), Tone::Danger)?,
        }
        Ok(())
    }

    fn cancel_ticket(&mut self) -> Step {
        let name = self.prompt("Enter Passenger Name: ")?;
        let route = self.prompt("Enter Route for Cancellation: ")?;

        match self.registry.cancel_ticket(&name, &route) {
            Ok(booking) => {
                debug!(booking = %booking, "cancelled");
                self.line("Ticket canceled successfully!", Tone::Success)?
            }
            Err(err) => self.line(&err.to_string(), Tone::Danger)?,
        }
        Ok(())
    }

    fn display_bookings(&mut self) -> Step {
        self.line("Current Bookings:", Tone::Accent)?;
        for details in self.registry.list_bookings() {
            writeln!(self.output, "{details}")?;
        }
        Ok(())
    }

    fn display_seats(&mut self) -> Step {
        let route = self.prompt("Enter Route to Check Seats: ")?;
        match self.registry.seats_remaining(&route) {
            Ok(seats) => {
                let message = format!("Available Seats for {route}: {seats}");
                self.line(&message, Tone::Plain)?;
            }
            Err(err) => self.line(&err.to_string(), Tone::Danger)?,
        }
        Ok(())
    }

    fn save_bookings(&mut self) -> Step {
        let file_name = self.prompt("Enter File Name to Save Bookings: ")?;
        let result = save::ensure_bookings_dir(&self.bookings_dir).and_then(|()| {
            let path = save::resolve_booking_path(&self.bookings_dir, &file_name);
            self.registry.save_bookings(path)
        });
        match result {
            Ok(_) => self.line("Bookings saved to file successfully.", Tone::Success)?,
            Err(err) => {
                warn!("failed to save bookings: {err}");
                let message = format!("Error saving to file: {err}");
                self.line(&message, Tone::Danger)?;
            }
        }
        Ok(())
    }

    fn load_bookings(&mut self) -> Step {
        let file_name = self.prompt("Enter File Name to Load Bookings: ")?;
        let path = save::resolve_booking_path(&self.bookings_dir, &file_name);
        let result = self.registry.load_bookings(path);
        match result {
            Ok(lines) => {
                for line in lines {
                    writeln!(self.output, "{line}")?;
                }
            }
            Err(err) => {
                warn!("failed to load bookings: {err}");
                let message = format!("Error loading from file: {err}");
                self.line(&message, Tone::Danger)?;
            }
        }
        Ok(())
    }

    fn line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        writeln!(self.output, "{}", self.theme.paint(text, tone))
    }

    fn prompt(&mut self, label: &str) -> Step<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupt::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_number<T: FromStr>(&mut self, label: &str) -> Step<T> {
        let raw = self.prompt(label)?;
        raw.trim().parse().map_err(|_| Interrupt::InvalidNumber(raw))
    }
}
