//! Buzzer tone derivation.
//!
//! The tone is recomputed from mode and volume every cycle and written to
//! the PWM peripheral whether or not it changed.
//!
//! ```text
//! volume  0    1    2    3   ...   10
//! Hz      off  200  400  600 ...  2000
//! ```

use core::num::NonZeroU32;

use crate::panel_state::{PanelSnapshot, Volume};

/// PWM source clock (RP2040 `clk_sys` at its default setting).
pub const BASE_CLOCK_HZ: u32 = 125_000_000;
/// Frequency at volume 1.
pub const BASE_FREQUENCY_HZ: u32 = 200;
/// Frequency added per volume step above 1.
pub const FREQUENCY_STEP_HZ: u32 = 200;

/// Largest integer clock divider the RP2040 PWM slice accepts.
const MAX_SLICE_DIVIDER: u64 = 255;
/// Number of counter values a 16-bit `top` can span.
const SLICE_COUNTER_SPAN: u64 = 1 << 16;

/// Buzzer frequency for `volume`, or `None` for silence at volume 0.
///
/// The zero check comes first, so a 0 Hz tone is never formed.
pub fn frequency_for(volume: Volume) -> Option<NonZeroU32> {
    let steps = u32::from(volume.level()).checked_sub(1)?;
    NonZeroU32::new(BASE_FREQUENCY_HZ + steps * FREQUENCY_STEP_HZ)
}

/// Divider and wrap values derived from the base clock for one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Target frequency.
    pub frequency_hz: u32,
    /// `BASE_CLOCK_HZ / (frequency_hz * 1000)`, at least 1.
    pub divider: u32,
    /// `BASE_CLOCK_HZ / (divider * frequency_hz) - 1`.
    pub wrap: u32,
    /// Compare level, `wrap / 2` (50 % duty).
    pub level: u32,
}

impl PwmTiming {
    /// Compute divider, wrap and compare level for `frequency`.
    pub fn for_frequency(frequency: NonZeroU32) -> Self {
        let frequency_hz = frequency.get();
        let divider = (BASE_CLOCK_HZ / frequency_hz.saturating_mul(1000)).max(1);
        let period = u64::from(divider) * u64::from(frequency_hz);
        let wrap = (u64::from(BASE_CLOCK_HZ) / period).saturating_sub(1) as u32;

        Self {
            frequency_hz,
            divider,
            wrap,
            level: wrap / 2,
        }
    }
}

/// Buzzer configuration for one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tone {
    /// Oscillator disabled, output held low.
    Silent,
    /// Oscillator enabled with the given timing.
    Playing(PwmTiming),
}

impl Tone {
    /// Tone for the given mode and volume.
    ///
    /// Silent while Inactive, whatever the stored volume, and at volume 0.
    pub fn for_panel(snapshot: PanelSnapshot) -> Self {
        snapshot
            .effective_volume()
            .and_then(frequency_for)
            .map_or(Tone::Silent, |f| Tone::Playing(PwmTiming::for_frequency(f)))
    }

    /// Returns `true` when the oscillator should run.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Tone::Playing(_))
    }

    /// Output frequency, 0 when silent.
    pub fn frequency_hz(&self) -> u32 {
        match self {
            Tone::Silent => 0,
            Tone::Playing(timing) => timing.frequency_hz,
        }
    }
}

/// Register values for one RP2040 PWM slice.
///
/// The tone formula can ask for a divider above the slice's 8-bit integer
/// limit (625 at 200 Hz). [`SliceSettings::fit()`] keeps the period length
/// in base-clock ticks, `divider * (wrap + 1)`, and picks the smallest
/// divider whose 16-bit `top` can hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliceSettings {
    /// Integer clock divider, `1..=255`.
    pub divider: u8,
    /// Counter wrap value.
    pub top: u16,
    /// Compare level for half the period.
    pub compare: u16,
}

impl SliceSettings {
    /// Re-express `timing` within the slice's register widths.
    pub fn fit(timing: &PwmTiming) -> Self {
        let ticks = u64::from(timing.divider) * (u64::from(timing.wrap) + 1);
        let divider = ticks.div_ceil(SLICE_COUNTER_SPAN).clamp(1, MAX_SLICE_DIVIDER);
        let top = (ticks / divider).saturating_sub(1).min(u64::from(u16::MAX));
        let compare = (top + 1) / 2;

        Self {
            divider: divider as u8,
            top: top as u16,
            compare: compare as u16,
        }
    }

    /// Frequency actually produced from `BASE_CLOCK_HZ`.
    pub fn output_hz(&self) -> u32 {
        let period = u32::from(self.divider) * (u32::from(self.top) + 1);
        BASE_CLOCK_HZ / period
    }
}
