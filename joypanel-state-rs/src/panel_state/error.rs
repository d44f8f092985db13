/// Errors that can occur when building panel values from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Volume level is outside `0..=10`.
    VolumeOutOfRange,
    /// GPIO number does not belong to a monitored input.
    UnknownInputPin,
}
