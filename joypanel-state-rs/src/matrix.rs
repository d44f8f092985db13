//! LED matrix frame buffer and per-cycle rendering.

use smart_leds::RGB8;

use crate::panel_state::PanelSnapshot;
use crate::sprites::{led_index, sprite_for, Sprite, LED_COUNT};

/// Colour used by [`MatrixStyle::SolidFill`] by default.
pub const DEFAULT_FILL: RGB8 = RGB8 { r: 80, g: 0, b: 0 };

/// What the matrix shows while the panel is Active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatrixStyle {
    /// Volume meter sprite for the current level.
    #[default]
    VolumeSprite,
    /// Every LED at one fixed colour, independent of volume.
    SolidFill(RGB8),
}

/// Colours for every LED, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixFrame {
    pixels: [RGB8; LED_COUNT],
}

impl Default for MatrixFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixFrame {
    /// A cleared frame.
    pub const fn new() -> Self {
        Self {
            pixels: [RGB8 { r: 0, g: 0, b: 0 }; LED_COUNT],
        }
    }

    /// Turn every LED off.
    pub fn clear(&mut self) {
        self.fill(RGB8::default());
    }

    /// Set every LED to `color`.
    pub fn fill(&mut self, color: RGB8) {
        self.pixels = [color; LED_COUNT];
    }

    /// Set one LED by chain index. Indices past the chain are ignored.
    pub fn set(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Copy a row-major sprite onto the chain layout.
    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        for (row, colors) in sprite.iter().enumerate() {
            for (col, &color) in colors.iter().enumerate() {
                self.set(led_index(row, col), color);
            }
        }
    }

    /// Clear, then draw what the panel state calls for.
    ///
    /// Inactive always leaves the frame cleared, whatever the stored volume.
    pub fn render(&mut self, snapshot: PanelSnapshot, style: MatrixStyle) {
        self.clear();
        let Some(volume) = snapshot.effective_volume() else {
            return;
        };
        match style {
            MatrixStyle::VolumeSprite => self.draw_sprite(sprite_for(volume)),
            MatrixStyle::SolidFill(color) => self.fill(color),
        }
    }

    /// Colours in chain order, ready for the LED driver.
    pub fn pixels(&self) -> &[RGB8; LED_COUNT] {
        &self.pixels
    }

    /// Returns `true` if every LED is off.
    pub fn is_clear(&self) -> bool {
        self.pixels.iter().all(|p| *p == RGB8::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel_state::{Mode, Volume};
    use crate::sprites::VOLUME_SPRITES;

    fn snapshot(mode: Mode, level: u8) -> PanelSnapshot {
        PanelSnapshot {
            mode,
            volume: Volume::new(level).unwrap(),
        }
    }

    #[test]
    fn new_frame_is_clear() {
        assert!(MatrixFrame::new().is_clear());
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut frame = MatrixFrame::new();
        frame.set(LED_COUNT, DEFAULT_FILL);
        frame.set(usize::MAX, DEFAULT_FILL);
        assert!(frame.is_clear());
        frame.set(3, DEFAULT_FILL);
        assert_eq!(frame.pixels()[3], DEFAULT_FILL);
    }

    #[test]
    fn active_zero_shows_off_sprite() {
        let mut frame = MatrixFrame::new();
        frame.fill(DEFAULT_FILL);
        frame.render(snapshot(Mode::Active, 0), MatrixStyle::VolumeSprite);
        assert!(frame.is_clear());
    }

    #[test]
    fn active_volume_shows_matching_sprite() {
        for level in 0..=10u8 {
            let mut frame = MatrixFrame::new();
            frame.render(snapshot(Mode::Active, level), MatrixStyle::VolumeSprite);

            let mut expected = MatrixFrame::new();
            expected.draw_sprite(&VOLUME_SPRITES[usize::from(level)]);
            assert_eq!(frame, expected, "level {}", level);
        }
    }

    #[test]
    fn sprite_rows_land_on_chain_positions() {
        let mut frame = MatrixFrame::new();
        frame.render(snapshot(Mode::Active, 1), MatrixStyle::VolumeSprite);
        // Level 1 lights the three bottom-left LEDs: chain 4, 3, 2.
        let lit: [bool; LED_COUNT] = core::array::from_fn(|i| frame.pixels()[i] != RGB8::default());
        assert!(lit[4] && lit[3] && lit[2]);
        assert_eq!(lit.iter().filter(|&&l| l).count(), 3);
    }

    #[test]
    fn inactive_is_cleared_for_any_volume() {
        for level in 0..=10 {
            let mut frame = MatrixFrame::new();
            frame.fill(DEFAULT_FILL);
            frame.render(snapshot(Mode::Inactive, level), MatrixStyle::VolumeSprite);
            assert!(frame.is_clear());

            frame.render(snapshot(Mode::Inactive, level), MatrixStyle::SolidFill(DEFAULT_FILL));
            assert!(frame.is_clear());
        }
    }

    #[test]
    fn solid_fill_ignores_volume() {
        let mut frame = MatrixFrame::new();
        frame.render(snapshot(Mode::Active, 0), MatrixStyle::SolidFill(DEFAULT_FILL));
        assert!(frame.pixels().iter().all(|p| *p == DEFAULT_FILL));
    }
}
