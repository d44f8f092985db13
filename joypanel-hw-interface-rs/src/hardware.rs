//! Panel capability traits bound to RP2040 peripherals.

use core::convert::Infallible;

use defmt::debug;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_rp::pwm::{Config, Pwm};

use joypanel::mapping::JoystickSample;
use joypanel::peripherals::{Buzzer, Joystick, LedMatrix, ModeIndicator};
use joypanel::sprites::LED_COUNT;
use joypanel::{MatrixFrame, Mode, SliceSettings, Tone};

// ── Joystick ─────────────────────────────────────────────────────────────

/// Both joystick axes on the ADC, read one after the other.
pub struct AdcJoystick<'d> {
    adc: Adc<'d, adc::Async>,
    x: Channel<'d>,
    y: Channel<'d>,
}

impl<'d> AdcJoystick<'d> {
    pub fn new(adc: Adc<'d, adc::Async>, x: Channel<'d>, y: Channel<'d>) -> Self {
        Self { adc, x, y }
    }
}

impl Joystick for AdcJoystick<'_> {
    type Error = adc::Error;

    async fn sample(&mut self) -> Result<JoystickSample, adc::Error> {
        let x = self.adc.read(&mut self.x).await?;
        let y = self.adc.read(&mut self.y).await?;
        Ok(JoystickSample { x, y })
    }
}

// ── LED matrix ───────────────────────────────────────────────────────────

/// 5×5 WS2812 matrix on PIO0 state machine 0.
pub struct Ws2812Matrix<'d> {
    driver: PioWs2812<'d, PIO0, 0, LED_COUNT>,
}

impl<'d> Ws2812Matrix<'d> {
    pub fn new(driver: PioWs2812<'d, PIO0, 0, LED_COUNT>) -> Self {
        Self { driver }
    }
}

impl LedMatrix for Ws2812Matrix<'_> {
    type Error = Infallible;

    async fn write(&mut self, frame: &MatrixFrame) -> Result<(), Infallible> {
        self.driver.write(frame.pixels()).await;
        Ok(())
    }
}

// ── Buzzer ───────────────────────────────────────────────────────────────

/// Passive buzzer on PWM channel B.
///
/// Keeps the slice config so that a silent cycle does not lose the divider
/// of the last tone.
pub struct PwmBuzzer<'d> {
    pwm: Pwm<'d>,
    cfg: Config,
    last: Option<SliceSettings>,
}

impl<'d> PwmBuzzer<'d> {
    /// Take a slice created with `Pwm::new_output_b`. Starts silent.
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut cfg = Config::default();
        cfg.compare_b = 0;
        cfg.enable = false;
        pwm.set_config(&cfg);
        Self {
            pwm,
            cfg,
            last: None,
        }
    }
}

impl Buzzer for PwmBuzzer<'_> {
    fn apply(&mut self, tone: &Tone) {
        let settings = match tone {
            Tone::Silent => {
                // Compare 0 holds the pin low once the slice stops.
                self.cfg.compare_b = 0;
                self.cfg.enable = false;
                None
            }
            Tone::Playing(timing) => {
                let settings = SliceSettings::fit(timing);
                self.cfg.divider = settings.divider.into();
                self.cfg.top = settings.top;
                self.cfg.compare_b = settings.compare;
                self.cfg.enable = true;
                Some(settings)
            }
        };
        self.pwm.set_config(&self.cfg);

        if settings != self.last {
            if let Some(s) = settings {
                debug!(
                    "buzzer {}Hz div={} top={} compare={}",
                    tone.frequency_hz(),
                    s.divider,
                    s.top,
                    s.compare
                );
            } else {
                debug!("buzzer off");
            }
            self.last = settings;
        }
    }
}

// ── Mode indicator ───────────────────────────────────────────────────────

/// Red and green channels of the board's RGB LED.
pub struct RgbStatusLed<'d> {
    red: Output<'d>,
    green: Output<'d>,
}

impl<'d> RgbStatusLed<'d> {
    pub fn new(red: Output<'d>, green: Output<'d>) -> Self {
        Self { red, green }
    }
}

impl ModeIndicator for RgbStatusLed<'_> {
    fn show_mode(&mut self, mode: Mode) {
        let active = mode.is_active();
        self.green.set_level(Level::from(active));
        self.red.set_level(Level::from(!active));
    }
}
