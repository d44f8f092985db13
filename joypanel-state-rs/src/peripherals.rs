//! Capability traits for the board peripherals.
//!
//! The refresh cycle only talks to these traits. The firmware implements
//! them on top of the RP2040 HAL; tests implement them with recorders.

use crate::mapping::{JoystickSample, ScreenPosition};
use crate::matrix::MatrixFrame;
use crate::panel_state::Mode;
use crate::tone::Tone;

/// Two-axis analog joystick.
#[allow(async_fn_in_trait)]
pub trait Joystick {
    /// Conversion failure.
    type Error;

    /// Take one raw reading of both axes.
    async fn sample(&mut self) -> Result<JoystickSample, Self::Error>;
}

/// Monochrome display showing the border and the position marker.
#[allow(async_fn_in_trait)]
pub trait MarkerDisplay {
    /// Bus or driver failure.
    type Error;

    /// Redraw the whole frame with the marker at `position` and transmit it.
    async fn show_marker(&mut self, position: ScreenPosition) -> Result<(), Self::Error>;
}

/// Addressable RGB LED matrix.
#[allow(async_fn_in_trait)]
pub trait LedMatrix {
    /// Transmission failure.
    type Error;

    /// Transmit every LED colour in `frame`.
    async fn write(&mut self, frame: &MatrixFrame) -> Result<(), Self::Error>;
}

/// PWM buzzer. Register writes only, never blocks.
pub trait Buzzer {
    /// Program the oscillator for `tone`. Called every cycle.
    fn apply(&mut self, tone: &Tone);
}

/// Discrete LED showing the current mode.
pub trait ModeIndicator {
    /// Light the LED for `mode`.
    fn show_mode(&mut self, mode: Mode);
}
