//! Error types for the OLED marker display.

use display_interface::DisplayError;

/// Errors that can occur while driving the OLED.
///
/// The `ssd1306` crate folds every I2C bus error into [`DisplayError`], so
/// this enum does not carry the bus error type.
#[derive(Debug)]
pub enum OledError {
    /// Bus-level failure during a flush or while drawing into the buffer.
    Display(DisplayError),
    /// The controller did not accept the initialisation sequence.
    InitializationFailed,
    /// A frame was requested before [`OledDriver::init()`](crate::OledDriver::init)
    /// succeeded.
    NotInitialized,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_e) => defmt::write!(f, "Display interface error"),
            OledError::InitializationFailed => defmt::write!(f, "Initialization failed"),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
        }
    }
}
