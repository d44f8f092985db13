//! One refresh cycle of the panel.
//!
//! [`PanelLoop::refresh()`] fans a [`PanelSnapshot`] out to every output in
//! fixed order:
//!
//! 1. Sample the joystick and map it to a marker position.
//! 2. Redraw border and marker, transmit the display.
//! 3. Show the mode on the indicator LED.
//! 4. Render the LED matrix for mode and volume, transmit it.
//! 5. Derive the tone and program the buzzer.
//!
//! The fixed delay between cycles belongs to the caller, which also owns
//! the shared state lock. A failing peripheral is logged and skipped; the
//! remaining outputs still update.

use crate::config::PanelConfig;
use crate::mapping::{deflection, Calibration, JoystickSample, ScreenPosition};
use crate::matrix::{MatrixFrame, MatrixStyle};
use crate::panel_state::PanelSnapshot;
use crate::peripherals::{Buzzer, Joystick, LedMatrix, MarkerDisplay, ModeIndicator};
use crate::tone::Tone;

/// The five output and input peripherals driven by the loop.
pub struct PanelPeripherals<J, D, M, B, L> {
    pub joystick: J,
    pub display: D,
    pub matrix: M,
    pub buzzer: B,
    pub indicator: L,
}

/// Distance of each axis from its calibrated centre, see [`deflection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deflection {
    pub x: u16,
    pub y: u16,
}

/// What one cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Raw joystick reading, `None` if the conversion failed and the
    /// calibration centre was used instead.
    pub sample: Option<JoystickSample>,
    /// Marker position drawn this cycle.
    pub position: ScreenPosition,
    /// Joystick deflection metric. Not consumed by any output.
    pub deflection: Deflection,
    /// Tone programmed into the buzzer.
    pub tone: Tone,
    /// `false` if the display transmission failed.
    pub display_ok: bool,
    /// `false` if the matrix transmission failed.
    pub matrix_ok: bool,
}

/// Refresh cycle over a set of peripherals.
///
/// Owns the matrix frame buffer; nothing is allocated per cycle.
pub struct PanelLoop<J, D, M, B, L> {
    peripherals: PanelPeripherals<J, D, M, B, L>,
    calibration: Calibration,
    matrix_style: MatrixStyle,
    frame: MatrixFrame,
}

impl<J, D, M, B, L> PanelLoop<J, D, M, B, L>
where
    J: Joystick,
    D: MarkerDisplay,
    M: LedMatrix,
    B: Buzzer,
    L: ModeIndicator,
{
    /// Take ownership of the peripherals. No peripheral traffic.
    pub fn new(peripherals: PanelPeripherals<J, D, M, B, L>, config: &PanelConfig) -> Self {
        Self {
            peripherals,
            calibration: config.calibration,
            matrix_style: config.matrix_style,
            frame: MatrixFrame::new(),
        }
    }

    /// Blank the matrix and silence the buzzer, used once before the first
    /// cycle.
    ///
    /// # Errors
    ///
    /// Returns the matrix driver's error if the cleared frame could not be
    /// transmitted.
    pub async fn clear_outputs(&mut self) -> Result<(), M::Error> {
        self.peripherals.buzzer.apply(&Tone::Silent);
        self.frame.clear();
        self.peripherals.matrix.write(&self.frame).await
    }

    /// Run one cycle for `snapshot`.
    pub async fn refresh(&mut self, snapshot: PanelSnapshot) -> CycleReport {
        // ── Step 1: joystick ─────────────────────────────────────────
        let sample = match self.peripherals.joystick.sample().await {
            Ok(sample) => Some(sample),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Joystick conversion failed, using centre");
                None
            }
        };
        let raw = sample.unwrap_or_else(|| self.calibration.center_sample());
        let position = self.calibration.map_to_screen(raw);
        let deflection = Deflection {
            x: deflection(self.calibration.center_x, raw.x),
            y: deflection(self.calibration.center_y, raw.y),
        };

        // ── Step 2: display ──────────────────────────────────────────
        let display_ok = match self.peripherals.display.show_marker(position).await {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Display transmission failed");
                false
            }
        };

        // ── Step 3: mode indicator ───────────────────────────────────
        self.peripherals.indicator.show_mode(snapshot.mode);

        // ── Step 4: LED matrix ───────────────────────────────────────
        self.frame.render(snapshot, self.matrix_style);
        let matrix_ok = match self.peripherals.matrix.write(&self.frame).await {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Matrix transmission failed");
                false
            }
        };

        // ── Step 5: buzzer ───────────────────────────────────────────
        let tone = Tone::for_panel(snapshot);
        self.peripherals.buzzer.apply(&tone);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "cycle: marker=({}, {}) deflection=({}, {}) tone={}Hz",
            position.x,
            position.y,
            deflection.x,
            deflection.y,
            tone.frequency_hz()
        );

        CycleReport {
            sample,
            position,
            deflection,
            tone,
            display_ok,
            matrix_ok,
        }
    }

    /// The matrix frame sent on the last cycle.
    pub fn frame(&self) -> &MatrixFrame {
        &self.frame
    }

    /// Give the peripherals back.
    pub fn release(self) -> PanelPeripherals<J, D, M, B, L> {
        self.peripherals
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
