//! Runtime configuration for the panel loop.

use crate::mapping::Calibration;
use crate::matrix::MatrixStyle;
use crate::panel_state::DEBOUNCE_WINDOW_MS;

/// Configuration for the input dispatcher and the refresh loop.
///
/// [`PanelConfig::default()`] reproduces the board's calibrated behaviour
/// (260 ms debounce, 60 ms cycle, 1.5 s settle delay, volume sprites).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    /// Minimum time between accepted input edges. Default: 260.
    pub debounce_ms: u64,
    /// Fixed delay at the end of every refresh cycle. Default: 60.
    pub cycle_period_ms: u64,
    /// Delay between peripheral initialisation and the first cycle. Default: 1500.
    pub startup_delay_ms: u64,
    /// Joystick calibration.
    pub calibration: Calibration,
    /// What the LED matrix shows while Active.
    pub matrix_style: MatrixStyle,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_WINDOW_MS,
            cycle_period_ms: 60,
            startup_delay_ms: 1500,
            calibration: Calibration::default(),
            matrix_style: MatrixStyle::VolumeSprite,
        }
    }
}

impl PanelConfig {
    /// Refresh rate implied by the cycle delay, ignoring time spent drawing.
    pub fn nominal_refresh_hz(&self) -> u64 {
        1000 / self.cycle_period_ms.max(1)
    }
}
