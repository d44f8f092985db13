/// Operating mode, toggled by the joystick push-switch.
///
/// Volume-driven outputs (LED matrix sprite, buzzer tone) are only produced
/// in [`Mode::Active`]. The board boots Active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Volume drives the matrix and buzzer.
    #[default]
    Active,
    /// Matrix cleared, buzzer silent; volume buttons are ignored.
    Inactive,
}

impl Mode {
    /// Returns `true` in [`Mode::Active`].
    pub const fn is_active(self) -> bool {
        matches!(self, Mode::Active)
    }

    /// The other mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Mode::Active => Mode::Inactive,
            Mode::Inactive => Mode::Active,
        }
    }
}
