use super::input::InputSource;
use super::mode::Mode;
use super::volume::Volume;
use super::DEBOUNCE_WINDOW_MS;

/// Result of an accepted edge, used for the diagnostic trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeReport {
    /// Input that fired.
    pub source: InputSource,
    /// Volume after the transition.
    pub volume: Volume,
    /// Mode after the transition.
    pub mode: Mode,
}

/// Copy of the state the refresh cycle needs, taken under the lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelSnapshot {
    /// Current mode.
    pub mode: Mode,
    /// Current volume. Only meaningful while `mode` is Active.
    pub volume: Volume,
}

impl PanelSnapshot {
    /// Volume that outputs should follow: the stored level while Active,
    /// `None` while Inactive.
    pub fn effective_volume(&self) -> Option<Volume> {
        self.mode.is_active().then_some(self.volume)
    }
}

/// State shared between the input task and the refresh loop.
///
/// # Initialization
///
/// [`PanelState::new()`] boots Active with volume 0 and a last-input
/// timestamp of 0, so edges in the first [`DEBOUNCE_WINDOW_MS`] after boot
/// are treated as power-on bounce.
pub struct PanelState {
    mode: Mode,
    volume: Volume,
    /// Monotonic milliseconds of the last accepted edge.
    last_input_ms: u64,
    debounce_ms: u64,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    /// Create the boot state with the standard debounce window.
    pub const fn new() -> Self {
        Self::with_debounce(DEBOUNCE_WINDOW_MS)
    }

    /// Create the boot state with a custom debounce window.
    pub const fn with_debounce(debounce_ms: u64) -> Self {
        Self {
            mode: Mode::Active,
            volume: Volume::ZERO,
            last_input_ms: 0,
            debounce_ms,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current volume.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Timestamp of the last accepted edge.
    pub fn last_input_ms(&self) -> u64 {
        self.last_input_ms
    }

    /// Copy out mode and volume in one read.
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            mode: self.mode,
            volume: self.volume,
        }
    }

    // ── Edge dispatch ────────────────────────────────────────────────

    /// Apply a falling edge from `source` observed at `now_ms`.
    ///
    /// Returns `None` when the edge falls inside the debounce window of the
    /// last accepted edge; nothing is modified in that case. Otherwise the
    /// timestamp is updated and the source's transition applied:
    ///
    /// - button A: volume down by one while Active, floor 0
    /// - button B: volume up by one while Active, ceiling 10
    /// - switch: mode toggled
    ///
    /// A clock reading older than the last accepted edge counts as bounce.
    ///
    /// # Examples
    ///
    /// ```
    /// use joypanel::panel_state::{InputSource, PanelState};
    ///
    /// let mut state = PanelState::new();
    /// let report = state.handle_edge(InputSource::ButtonB, 1_000).unwrap();
    /// assert_eq!(report.volume.level(), 1);
    ///
    /// // 100 ms later: bounce, ignored.
    /// assert!(state.handle_edge(InputSource::ButtonB, 1_100).is_none());
    /// assert_eq!(state.volume().level(), 1);
    /// ```
    pub fn handle_edge(&mut self, source: InputSource, now_ms: u64) -> Option<EdgeReport> {
        if now_ms.saturating_sub(self.last_input_ms) <= self.debounce_ms {
            #[cfg(feature = "defmt")]
            defmt::trace!("edge from {} at {} ms debounced", source, now_ms);
            return None;
        }
        self.last_input_ms = now_ms;

        match source {
            InputSource::ButtonA => {
                if self.mode.is_active() {
                    self.volume = self.volume.decrement();
                }
            }
            InputSource::ButtonB => {
                if self.mode.is_active() {
                    self.volume = self.volume.increment();
                }
            }
            InputSource::JoystickSwitch => {
                self.mode = self.mode.toggle();
            }
        }

        Some(EdgeReport {
            source,
            volume: self.volume,
            mode: self.mode,
        })
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
