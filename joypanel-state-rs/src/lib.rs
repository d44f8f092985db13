//! Shared state and output derivation for the joystick panel.
//!
//! Everything here is hardware-independent and runs on the host:
//!
//! - [`panel_state`] holds [`Mode`] and [`Volume`] behind a debounced edge
//!   dispatcher, [`PanelState::handle_edge()`].
//! - [`mapping`] turns raw joystick readings into marker coordinates.
//! - [`tone`] derives the buzzer [`Tone`] and PWM register values.
//! - [`sprites`] and [`matrix`] build the 5×5 LED matrix frame.
//! - [`cycle`] runs one refresh pass over the [`peripherals`] traits.
//!
//! The firmware shares one [`PanelState`] between the input task and the
//! refresh loop behind an async mutex and hands hardware adapters to
//! [`PanelLoop`].
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`]. Off by default so the
//!   crate links on the host for tests.
//!
//! [`defmt`]: https://docs.rs/defmt

#![no_std]

pub mod config;
pub mod cycle;
pub mod mapping;
pub mod matrix;
pub mod panel_state;
pub mod peripherals;
pub mod sprites;
pub mod tone;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::PanelConfig;
pub use cycle::{CycleReport, PanelLoop, PanelPeripherals};
pub use mapping::{Calibration, JoystickSample, ScreenPosition};
pub use matrix::{MatrixFrame, MatrixStyle};
pub use panel_state::{InputSource, Mode, PanelError, PanelSnapshot, PanelState, Volume};
pub use tone::{SliceSettings, Tone};
