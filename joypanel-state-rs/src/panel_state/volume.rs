use super::error::PanelError;

/// Integer volume level, always within `[Volume::MIN, Volume::MAX]`.
///
/// Drives both the LED-matrix sprite selection and the buzzer frequency.
/// Values outside the domain cannot be constructed, so indexing the sprite
/// table with [`Volume::index()`] is always in bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Volume(u8);

impl Volume {
    /// Lowest level (silence, "off" sprite).
    pub const MIN: u8 = 0;
    /// Highest level.
    pub const MAX: u8 = 10;

    /// Silent volume, the boot value.
    pub const ZERO: Volume = Volume(Self::MIN);

    /// Build a volume from a raw level.
    ///
    /// Returns [`PanelError::VolumeOutOfRange`] if `level > Volume::MAX`.
    pub const fn new(level: u8) -> Result<Self, PanelError> {
        if level > Self::MAX {
            return Err(PanelError::VolumeOutOfRange);
        }
        Ok(Self(level))
    }

    /// Raw level in `0..=10`.
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Level as a table index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for level 0.
    pub const fn is_silent(self) -> bool {
        self.0 == Self::MIN
    }

    /// One level up, stopping at [`Volume::MAX`].
    pub const fn increment(self) -> Self {
        if self.0 < Self::MAX {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// One level down, stopping at [`Volume::MIN`].
    pub const fn decrement(self) -> Self {
        if self.0 > Self::MIN {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl TryFrom<u8> for Volume {
    type Error = PanelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}
