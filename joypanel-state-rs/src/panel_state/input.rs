use super::error::PanelError;

/// GPIO wired to button A (volume down).
pub const BUTTON_A_GPIO: u8 = 5;
/// GPIO wired to button B (volume up).
pub const BUTTON_B_GPIO: u8 = 6;
/// GPIO wired to the joystick push-switch (mode toggle).
pub const JOYSTICK_SW_GPIO: u8 = 22;

/// One of the three monitored inputs.
///
/// All three are active-low with pull-up and fire on the falling edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    /// Decrements the volume while Active.
    ButtonA,
    /// Increments the volume while Active.
    ButtonB,
    /// Toggles the mode.
    JoystickSwitch,
}

impl InputSource {
    /// GPIO number this source is wired to.
    pub const fn gpio(self) -> u8 {
        match self {
            InputSource::ButtonA => BUTTON_A_GPIO,
            InputSource::ButtonB => BUTTON_B_GPIO,
            InputSource::JoystickSwitch => JOYSTICK_SW_GPIO,
        }
    }
}

impl TryFrom<u8> for InputSource {
    type Error = PanelError;

    fn try_from(gpio: u8) -> Result<Self, Self::Error> {
        match gpio {
            BUTTON_A_GPIO => Ok(InputSource::ButtonA),
            BUTTON_B_GPIO => Ok(InputSource::ButtonB),
            JOYSTICK_SW_GPIO => Ok(InputSource::JoystickSwitch),
            _ => Err(PanelError::UnknownInputPin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpio_round_trips() {
        for source in [
            InputSource::ButtonA,
            InputSource::ButtonB,
            InputSource::JoystickSwitch,
        ] {
            assert_eq!(InputSource::try_from(source.gpio()), Ok(source));
        }
    }

    #[test]
    fn unknown_gpio_rejected() {
        assert_eq!(InputSource::try_from(7), Err(PanelError::UnknownInputPin));
        assert_eq!(InputSource::try_from(0), Err(PanelError::UnknownInputPin));
    }
}
