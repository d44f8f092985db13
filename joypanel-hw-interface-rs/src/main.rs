//! joypanel-hw-interface
//!
//! Joystick panel firmware for the RP2040 (BitDogLab board). Wires the
//! library crates into a live loop:
//!
//! 1. Button A, button B or the joystick switch is pressed.
//! 2. The input task wakes on the falling edge and calls `handle_edge()`
//!    on the shared `PanelState` mutex. Edges inside the 260 ms window of
//!    the last accepted edge are dropped there.
//! 3. The main loop takes a snapshot every cycle and runs
//!    `PanelLoop::refresh()`: joystick → OLED marker → status LED → LED
//!    matrix → buzzer.
//! 4. The loop sleeps 60 ms and starts over.
//!
//! The input task is a cooperative Embassy task, not an interrupt handler.
//! It only preempts the main loop at `.await` points, so the state lock is
//! never held across a peripheral transfer.

#![no_std]
#![no_main]

mod hardware;

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::{self, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{self, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use joypanel::{InputSource, PanelConfig, PanelLoop, PanelPeripherals, PanelState};
use joypanel_oled_display_rs::{FrameLayout, OledDriver, OledScreen, OLED_ADDRESS};

use hardware::{AdcJoystick, PwmBuzzer, RgbStatusLed, Ws2812Matrix};

// ---------------------------------------------------------------------------
// Interrupt binding
// ---------------------------------------------------------------------------

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    ADC_IRQ_FIFO => adc::InterruptHandler;
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Mode, volume and last-edge timestamp. Written by the input task, read
/// once per cycle by the main loop.
static PANEL_STATE: StaticCell<Mutex<CriticalSectionRawMutex, PanelState>> = StaticCell::new();

/// I2C bus frequency for the OLED.
const I2C_FREQUENCY_HZ: u32 = 400_000;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Edge dispatch for the three active-low inputs.
///
/// Whichever pin falls first wins; the others keep their pending edge for
/// the next iteration, where the debounce window drops it if it came too
/// soon. The mutex is held only for the in-memory transition.
#[embassy_executor::task]
async fn input_task(
    mut button_a: Input<'static>,
    mut button_b: Input<'static>,
    mut joystick_sw: Input<'static>,
    panel_state: &'static Mutex<CriticalSectionRawMutex, PanelState>,
) {
    info!("Input task started");

    loop {
        let source = match select3(
            button_a.wait_for_falling_edge(),
            button_b.wait_for_falling_edge(),
            joystick_sw.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => InputSource::ButtonA,
            Either3::Second(()) => InputSource::ButtonB,
            Either3::Third(()) => InputSource::JoystickSwitch,
        };

        let now_ms = Instant::now().as_millis();
        let report = panel_state.lock().await.handle_edge(source, now_ms);

        if let Some(report) = report {
            info!(
                "{} (GP{}): volume={} mode={}",
                report.source,
                report.source.gpio(),
                report.volume.level(),
                report.mode
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("joypanel-hw-interface starting");

    let config = PanelConfig::default();

    // —— Pin assignments ————————————————————————————————————————————————————
    // BUTTON_A    → GP5   active-low, pull-up
    // BUTTON_B    → GP6   active-low, pull-up
    // JOYSTICK_SW → GP22  active-low, pull-up
    // JOYSTICK_X  → GP27  (ADC1)
    // JOYSTICK_Y  → GP26  (ADC0)
    // I2C1_SDA    → GP14  OLED at 0x3C
    // I2C1_SCL    → GP15
    // LED_MATRIX  → GP7   25 × WS2812, PIO0 SM0
    // BUZZER      → GP21  PWM slice 2, channel B
    // LED_RED     → GP13
    // LED_GREEN   → GP11
    // ———————————————————————————————————————————————————————————————————————

    // OLED on I2C1. Without a display the demo is pointless, so init
    // failure halts here.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(
        p.I2C1,
        p.PIN_15, // SCL
        p.PIN_14, // SDA
        Irqs,
        i2c_config,
    );
    let mut screen = OledScreen::new(OledDriver::new(i2c, OLED_ADDRESS), FrameLayout::default());
    unwrap!(screen.init().await);
    info!("OLED initialised");

    // Joystick axes.
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let joystick = AdcJoystick::new(
        adc,
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_26, Pull::None),
    );

    // LED matrix.
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let matrix = Ws2812Matrix::new(PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program));

    // Buzzer, silent until the first cycle.
    let buzzer = PwmBuzzer::new(Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, pwm::Config::default()));

    // Status LED, green while Active.
    let indicator = RgbStatusLed::new(
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_11, Level::High),
    );

    let mut panel = PanelLoop::new(
        PanelPeripherals {
            joystick,
            display: screen,
            matrix,
            buzzer,
            indicator,
        },
        &config,
    );
    if panel.clear_outputs().await.is_err() {
        warn!("Could not clear LED matrix");
    }

    // —— Input task ———————————————————————————————————————————————————————————

    let panel_state = PANEL_STATE.init(Mutex::new(PanelState::with_debounce(config.debounce_ms)));

    spawner.spawn(unwrap!(input_task(
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_22, Pull::Up),
        panel_state,
    )));

    // Let the joystick and supply settle before the first reading.
    Timer::after_millis(config.startup_delay_ms).await;
    info!(
        "Entering main loop ({} ms cycle, ~{} Hz)",
        config.cycle_period_ms,
        config.nominal_refresh_hz()
    );

    // —— Main loop ————————————————————————————————————————————————————————————

    loop {
        // Lock held only for the copy.
        let snapshot = panel_state.lock().await.snapshot();
        let _report = panel.refresh(snapshot).await;
        Timer::after_millis(config.cycle_period_ms).await;
    }
}
