//! SSD1306 (128×64) marker display for the joystick panel.
//!
//! This crate provides [`OledDriver`], a wrapper around the [`ssd1306`]
//! crate in async buffered-graphics mode, [`render_frame`], which draws
//! the border and the joystick marker with `embedded-graphics`, and
//! [`OledScreen`], which ties the two together behind the
//! [`MarkerDisplay`] trait used by the refresh loop.
//!
//! # Quick Start
//!
//! ```ignore
//! use joypanel_oled_display_rs::{FrameLayout, OledDriver, OledScreen, OLED_ADDRESS};
//!
//! let mut screen = OledScreen::new(OledDriver::new(i2c, OLED_ADDRESS), FrameLayout::default());
//! screen.init().await?;
//! // Hand `screen` to `PanelLoop` as its display.
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — `defmt::Format` for [`OledError`] and logging in the
//!   shared state crate.
//!
//! [`MarkerDisplay`]: joypanel::peripherals::MarkerDisplay

#![no_std]

pub mod driver;
pub mod error;
pub mod layout;
pub mod screen;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use driver::{OledDriver, OLED_ADDRESS};
pub use error::OledError;
pub use layout::{render_frame, FrameLayout};
pub use screen::OledScreen;
