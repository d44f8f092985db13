//! Fixed 5×5 sprite table for the LED matrix, one sprite per volume level.
//!
//! Sprites are stored row-major with row 0 at the top of the board. Each
//! level lights a bar meter filling from the bottom-left: green in the two
//! bottom rows, amber in the middle row, red in the top two. Level 0 is the
//! blank "off" sprite.

use smart_leds::RGB8;

use crate::panel_state::{Volume, VOLUME_LEVELS};

/// Side length of the square matrix.
pub const MATRIX_SIZE: usize = 5;
/// Number of LEDs on the chain.
pub const LED_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// One frame of colours, `sprite[row][col]`, row 0 at the top.
pub type Sprite = [[RGB8; MATRIX_SIZE]; MATRIX_SIZE];

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
const GREEN: RGB8 = RGB8 { r: 0, g: 24, b: 0 };
const AMBER: RGB8 = RGB8 { r: 20, g: 12, b: 0 };
const RED: RGB8 = RGB8 { r: 24, g: 0, b: 0 };

/// Sprites indexed by volume level, `0..=10`.
pub static VOLUME_SPRITES: [Sprite; VOLUME_LEVELS] = build_sprites();

/// Sprite for `volume`. Always in bounds since `Volume` is range-checked.
pub fn sprite_for(volume: Volume) -> &'static Sprite {
    &VOLUME_SPRITES[volume.index()]
}

/// Position of `(row, col)` on the LED chain.
///
/// The chain starts at the bottom-right LED and snakes upward, reversing
/// direction on every row.
pub const fn led_index(row: usize, col: usize) -> usize {
    let linear = if row % 2 == 0 {
        row * MATRIX_SIZE + col
    } else {
        row * MATRIX_SIZE + (MATRIX_SIZE - 1 - col)
    };
    LED_COUNT - 1 - linear
}

const fn row_color(row: usize) -> RGB8 {
    match row {
        0 | 1 => RED,
        2 => AMBER,
        _ => GREEN,
    }
}

/// LEDs lit at `level`, rounded to the nearest whole LED.
const fn lit_count(level: usize) -> usize {
    (level * LED_COUNT + 5) / 10
}

const fn volume_meter(level: usize) -> Sprite {
    let mut sprite = [[OFF; MATRIX_SIZE]; MATRIX_SIZE];
    let lit = lit_count(level);
    let mut n = 0;
    while n < lit {
        let row = MATRIX_SIZE - 1 - n / MATRIX_SIZE;
        let col = n % MATRIX_SIZE;
        sprite[row][col] = row_color(row);
        n += 1;
    }
    sprite
}

const fn build_sprites() -> [Sprite; VOLUME_LEVELS] {
    let mut table = [[[OFF; MATRIX_SIZE]; MATRIX_SIZE]; VOLUME_LEVELS];
    let mut level = 0;
    while level < VOLUME_LEVELS {
        table[level] = volume_meter(level);
        level += 1;
    }
    table
}
