//! Shared panel state mutated by the debounced edge dispatcher.
//!
//! This module provides the [`PanelState`] data structure that holds the
//! only state carried between refresh cycles: the [`Mode`] flag, the
//! [`Volume`] level and the timestamp of the last accepted input edge. It is
//! the central shared state written by the input task and read by the
//! refresh loop.
//!
//! # Writers and readers
//!
//! ```text
//! button A ─┐
//! button B ─┼─► handle_edge() ──► PanelState ──► snapshot() ──► refresh cycle
//! switch   ─┘   (input task)                     (main loop)
//! ```
//!
//! [`PanelState::handle_edge()`] is the single writer. Readers take a
//! [`PanelSnapshot`] (two bytes, `Copy`) and release the lock immediately,
//! so the refresh cycle never observes a half-applied transition.
//!
//! # Debounce
//!
//! One window is shared by all three inputs. An edge arriving within
//! [`DEBOUNCE_WINDOW_MS`] of the last *accepted* edge, on any pin, is
//! dropped without touching the state.
//!
//! # `no_std` Compatibility
//!
//! This module uses no heap allocation. The optional `defmt` feature
//! enables structured logging for embedded targets.

mod error;
mod input;
mod mode;
mod state;
mod volume;

pub use error::PanelError;
pub use input::InputSource;
pub use mode::Mode;
pub use state::{EdgeReport, PanelSnapshot, PanelState};
pub use volume::Volume;

/// Minimum time between two accepted edges, across all monitored inputs.
pub const DEBOUNCE_WINDOW_MS: u64 = 260;

/// Number of distinct volume levels (0 through [`Volume::MAX`] inclusive).
pub const VOLUME_LEVELS: usize = Volume::MAX as usize + 1;
