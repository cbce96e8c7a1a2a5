//! Booking file persistence.
//!
//! Bookings are written as their rendered descriptions, one per line. Loading
//! only replays those lines; nothing is parsed back into the registry.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{error::RegistryError, registry::BookingRegistry};

impl BookingRegistry {
    /// Overwrite `path` with one line per active booking, in booking order.
    ///
    /// Returns the number of bookings written.
    pub fn save_bookings(&self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| RegistryError::io(path, err))?;
        let mut writer = BufWriter::new(file);
        let mut written = 0;
        for line in self.list_bookings() {
            writeln!(writer, "{line}").map_err(|err| RegistryError::io(path, err))?;
            written += 1;
        }
        writer.flush().map_err(|err| RegistryError::io(path, err))?;
        info!(path = %path.display(), bookings = written, "bookings saved");
        Ok(written)
    }

    /// Read back every line of a booking file verbatim.
    ///
    /// Registry state is not modified.
    pub fn load_bookings(&self, path: impl AsRef<Path>) -> Result<Vec<String>, RegistryError> {
        read_booking_lines(path)
    }
}

/// Read every line of a booking file verbatim, in file order.
pub fn read_booking_lines(path: impl AsRef<Path>) -> Result<Vec<String>, RegistryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| RegistryError::io(path, err))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| RegistryError::io(path, err))?;
    info!(path = %path.display(), lines = lines.len(), "bookings loaded");
    Ok(lines)
}

/// Resolve a file name entered by the operator against the bookings directory.
///
/// The name is used exactly as given; absolute paths are returned unchanged.
pub fn resolve_booking_path(root: &Path, file_name: &str) -> PathBuf {
    let candidate = Path::new(file_name);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

/// Create the bookings directory if missing, so that a first save succeeds.
pub fn ensure_bookings_dir(root: &Path) -> Result<(), RegistryError> {
    if root.as_os_str().is_empty() || root.exists() {
        return Ok(());
    }
    fs::create_dir_all(root).map_err(|err| RegistryError::io(root, err))
}
