//! Frame geometry and rendering.
//!
//! Every frame is a one-pixel border plus a filled square marker whose
//! top-left corner sits at the mapped joystick position:
//!
//! ```text
//! (0,0)
//!   ┌────────────────────────────────────┐   border: origin (1,1),
//!   │                                    │   126×62, outline only
//!   │              ██                    │
//!   │              ██ ← marker at (x, y) │   marker: 8×8, filled
//!   │                                    │
//!   └────────────────────────────────────┘
//!                                   (127,63)
//! ```

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{ContainsPoint, PrimitiveStyle, Rectangle},
};
use joypanel::ScreenPosition;

// ── FrameLayout ──────────────────────────────────────────────────────────

/// Geometry of one frame.
///
/// [`FrameLayout::default()`] matches the 128×64 panel and the marker
/// bounds produced by the joystick mapping (`x ≤ 120`, `y ≤ 56`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Top-left corner of the border. Default: (1, 1).
    pub border_origin: Point,
    /// Border size in pixels. Default: 126×62.
    pub border_size: Size,
    /// Border stroke width. Default: 1.
    pub border_stroke: u32,
    /// Side length of the square marker. Default: 8.
    pub marker_size: u32,
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self {
            display_width: 128,
            display_height: 64,
            border_origin: Point::new(1, 1),
            border_size: Size::new(126, 62),
            border_stroke: 1,
            marker_size: 8,
        }
    }
}

impl FrameLayout {
    /// The border rectangle.
    pub fn border(&self) -> Rectangle {
        Rectangle::new(self.border_origin, self.border_size)
    }

    /// The marker rectangle for `position`.
    pub fn marker(&self, position: ScreenPosition) -> Rectangle {
        Rectangle::new(
            Point::new(position.x, position.y),
            Size::new_equal(self.marker_size),
        )
    }

    /// Returns `true` if the marker at `position` lies fully on the panel.
    pub fn marker_fits(&self, position: ScreenPosition) -> bool {
        let screen = Rectangle::new(
            Point::zero(),
            Size::new(self.display_width, self.display_height),
        );
        let marker = self.marker(position);
        marker
            .bottom_right()
            .is_some_and(|corner| screen.contains(marker.top_left) && screen.contains(corner))
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Draw the border and the marker at `position`.
///
/// Draws over whatever the target holds; clear the buffer first for a
/// fresh frame. Parts of the marker beyond the target are clipped by the
/// target.
///
/// # Example
///
/// ```no_run
/// # use joypanel_oled_display_rs::{render_frame, FrameLayout};
/// # use joypanel::ScreenPosition;
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// render_frame(display, ScreenPosition { x: 60, y: 28 }, &FrameLayout::default()).ok();
/// # }
/// ```
pub fn render_frame<D>(
    display: &mut D,
    position: ScreenPosition,
    layout: &FrameLayout,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    layout
        .border()
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, layout.border_stroke))
        .draw(display)?;

    layout
        .marker(position)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)?;

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::Pixel;

    const WIDTH: usize = 128;
    const HEIGHT: usize = 64;

    /// In-memory 128×64 monochrome target.
    struct Framebuffer {
        pixels: [[bool; WIDTH]; HEIGHT],
    }

    impl Framebuffer {
        fn new() -> Self {
            Self {
                pixels: [[false; WIDTH]; HEIGHT],
            }
        }

        fn is_on(&self, x: usize, y: usize) -> bool {
            self.pixels[y][x]
        }

        fn lit(&self) -> usize {
            self.pixels.iter().flatten().filter(|&&p| p).count()
        }
    }

    impl OriginDimensions for Framebuffer {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    impl DrawTarget for Framebuffer {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                    continue;
                };
                if x < WIDTH && y < HEIGHT {
                    self.pixels[y][x] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn render(position: ScreenPosition) -> Framebuffer {
        let mut fb = Framebuffer::new();
        render_frame(&mut fb, position, &FrameLayout::default()).unwrap();
        fb
    }

    const CENTER: ScreenPosition = ScreenPosition { x: 60, y: 28 };

    // ── Border ───────────────────────────────────────────────────────

    #[test]
    fn border_corners_are_lit() {
        let fb = render(CENTER);
        assert!(fb.is_on(1, 1));
        assert!(fb.is_on(126, 1));
        assert!(fb.is_on(1, 62));
        assert!(fb.is_on(126, 62));
    }

    #[test]
    fn outside_and_inside_border_stay_dark() {
        let fb = render(CENTER);
        assert!(!fb.is_on(0, 0));
        assert!(!fb.is_on(127, 63));
        assert!(!fb.is_on(2, 2));
        assert!(!fb.is_on(125, 61));
    }

    // ── Marker ───────────────────────────────────────────────────────

    #[test]
    fn marker_is_filled_square_at_position() {
        let fb = render(CENTER);
        for y in 28..36 {
            for x in 60..68 {
                assert!(fb.is_on(x, y), "({}, {}) should be lit", x, y);
            }
        }
        assert!(!fb.is_on(68, 28));
        assert!(!fb.is_on(60, 36));
        assert!(!fb.is_on(59, 28));
    }

    #[test]
    fn frame_pixel_count() {
        // Perimeter of a 126×62 outline plus a non-overlapping 8×8 marker.
        let border = 2 * 126 + 2 * 62 - 4;
        assert_eq!(render(CENTER).lit(), border + 64);
    }

    #[test]
    fn marker_at_limits_stays_on_panel() {
        let layout = FrameLayout::default();
        for position in [
            ScreenPosition { x: 0, y: 0 },
            ScreenPosition { x: 120, y: 56 },
            ScreenPosition { x: 120, y: 0 },
            ScreenPosition { x: 0, y: 56 },
        ] {
            assert!(layout.marker_fits(position));
        }
        let fb = render(ScreenPosition { x: 120, y: 56 });
        assert!(fb.is_on(127, 63));
        assert!(fb.is_on(120, 56));
    }

    #[test]
    fn marker_past_limits_does_not_fit() {
        let layout = FrameLayout::default();
        assert!(!layout.marker_fits(ScreenPosition { x: 121, y: 0 }));
        assert!(!layout.marker_fits(ScreenPosition { x: 0, y: 57 }));
        assert!(!layout.marker_fits(ScreenPosition { x: -1, y: 0 }));
    }

    // ── Config ───────────────────────────────────────────────────────

    #[test]
    fn default_layout_values() {
        let l = FrameLayout::default();
        assert_eq!(l.display_width, 128);
        assert_eq!(l.display_height, 64);
        assert_eq!(l.border_origin, Point::new(1, 1));
        assert_eq!(l.border_size, Size::new(126, 62));
        assert_eq!(l.marker_size, 8);
    }

    #[test]
    fn marker_size_is_configurable() {
        let layout = FrameLayout {
            marker_size: 4,
            ..FrameLayout::default()
        };
        let mut fb = Framebuffer::new();
        render_frame(&mut fb, CENTER, &layout).unwrap();
        assert!(fb.is_on(63, 31));
        assert!(!fb.is_on(64, 28));
    }
}
