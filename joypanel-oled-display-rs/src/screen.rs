//! [`MarkerDisplay`] implementation on top of [`OledDriver`].

use embedded_hal_async::i2c::I2c;
use joypanel::peripherals::MarkerDisplay;
use joypanel::ScreenPosition;

use crate::driver::OledDriver;
use crate::error::OledError;
use crate::layout::{render_frame, FrameLayout};

/// The panel's OLED: an initialised driver plus the frame layout.
///
/// Every [`show_marker()`](MarkerDisplay::show_marker) call redraws the
/// whole frame and flushes it, whether or not the marker moved.
pub struct OledScreen<I2C> {
    driver: OledDriver<I2C>,
    layout: FrameLayout,
}

impl<I2C> OledScreen<I2C>
where
    I2C: I2c,
{
    /// Wrap a driver. The driver may still be uninitialised.
    pub fn new(driver: OledDriver<I2C>, layout: FrameLayout) -> Self {
        Self { driver, layout }
    }

    /// Initialise the controller and blank the panel.
    ///
    /// # Errors
    ///
    /// Propagates [`OledDriver::init()`] and [`OledDriver::flush()`] errors.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.driver.init().await?;
        self.driver.clear_buffer();
        self.driver.flush().await
    }

    /// Layout used for every frame.
    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }
}

impl<I2C> MarkerDisplay for OledScreen<I2C>
where
    I2C: I2c,
{
    type Error = OledError;

    async fn show_marker(&mut self, position: ScreenPosition) -> Result<(), OledError> {
        self.driver.clear_buffer();
        let display = self.driver.display_mut().ok_or(OledError::NotInitialized)?;
        render_frame(display, position, &self.layout)?;
        self.driver.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::OLED_ADDRESS;
    use core::cell::Cell;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};

    /// Bus that counts written bytes and can be told to fail.
    struct CountingBus<'a> {
        written: &'a Cell<usize>,
        fail: &'a Cell<bool>,
    }

    impl ErrorType for CountingBus<'_> {
        type Error = ErrorKind;
    }

    impl I2c for CountingBus<'_> {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), ErrorKind> {
            assert_eq!(address, OLED_ADDRESS);
            if self.fail.get() {
                return Err(ErrorKind::Other);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.written.set(self.written.get() + bytes.len());
                }
            }
            Ok(())
        }
    }

    fn screen<'a>(written: &'a Cell<usize>, fail: &'a Cell<bool>) -> OledScreen<CountingBus<'a>> {
        let bus = CountingBus { written, fail };
        OledScreen::new(OledDriver::new(bus, OLED_ADDRESS), FrameLayout::default())
    }

    const CENTER: ScreenPosition = ScreenPosition { x: 60, y: 28 };

    #[test]
    fn show_marker_before_init_fails() {
        let (written, fail) = (Cell::new(0), Cell::new(false));
        let mut s = screen(&written, &fail);
        assert!(matches!(
            block_on(s.show_marker(CENTER)),
            Err(OledError::NotInitialized)
        ));
        assert_eq!(written.get(), 0);
    }

    #[test]
    fn show_marker_flushes_whole_frame() {
        let (written, fail) = (Cell::new(0), Cell::new(false));
        let mut s = screen(&written, &fail);
        block_on(s.init()).unwrap();

        let before = written.get();
        block_on(s.show_marker(CENTER)).unwrap();
        assert!(written.get() - before >= 1024);
    }

    #[test]
    fn redraws_even_when_marker_is_still() {
        let (written, fail) = (Cell::new(0), Cell::new(false));
        let mut s = screen(&written, &fail);
        block_on(s.init()).unwrap();

        block_on(s.show_marker(CENTER)).unwrap();
        let after_first = written.get();
        block_on(s.show_marker(CENTER)).unwrap();
        assert!(written.get() > after_first);
    }

    #[test]
    fn dead_bus_fails_init() {
        let (written, fail) = (Cell::new(0), Cell::new(true));
        let mut s = screen(&written, &fail);
        assert!(matches!(
            block_on(s.init()),
            Err(OledError::InitializationFailed)
        ));
    }

    #[test]
    fn bus_failure_after_init_is_reported() {
        let (written, fail) = (Cell::new(0), Cell::new(false));
        let mut s = screen(&written, &fail);
        block_on(s.init()).unwrap();

        fail.set(true);
        assert!(matches!(
            block_on(s.show_marker(CENTER)),
            Err(OledError::Display(_))
        ));

        fail.set(false);
        assert!(block_on(s.show_marker(CENTER)).is_ok());
    }
}
