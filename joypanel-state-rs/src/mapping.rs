//! Joystick sample to screen position mapping.
//!
//! The joystick's rest position and mechanical travel are not symmetric,
//! so each axis has its own centre and maximum displacement. The y axis is
//! inverted so pushing the stick up moves the marker up.

/// Largest x the 8×8 marker may take on a 128×64 display with a 1 px border.
pub const MARKER_MAX_X: i32 = 120;
/// Largest y the 8×8 marker may take.
pub const MARKER_MAX_Y: i32 = 56;

/// Marker position when the stick rests at the calibration centre.
pub const MARKER_CENTER: ScreenPosition = ScreenPosition { x: 60, y: 28 };

/// One raw reading of both joystick axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    /// Raw x-axis conversion, `0..=4095`.
    pub x: u16,
    /// Raw y-axis conversion, `0..=4095`.
    pub y: u16,
}

/// Top-left corner of the marker on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenPosition {
    pub x: i32,
    pub y: i32,
}

/// Joystick calibration against the physical stick on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Raw x reading at rest. Default: 2049.
    pub center_x: u16,
    /// Raw y reading at rest. Default: 1988.
    pub center_y: u16,
    /// Raw x travel from centre to end stop. Default: 2049.0.
    pub max_displacement_x: f32,
    /// Raw y travel from centre to end stop. Default: 2107.0.
    pub max_displacement_y: f32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            center_x: 2049,
            center_y: 1988,
            max_displacement_x: 2049.0,
            max_displacement_y: 2107.0,
        }
    }
}

impl Calibration {
    /// A sample taken with the stick at rest.
    pub fn center_sample(&self) -> JoystickSample {
        JoystickSample {
            x: self.center_x,
            y: self.center_y,
        }
    }

    /// Project a sample onto the screen without clamping.
    ///
    /// Each axis is normalised by its maximum displacement, scaled by half
    /// the drawable span (60, 28) and offset by the marker centre (60, 28).
    /// The fractional part is truncated toward zero.
    pub fn project(&self, sample: JoystickSample) -> ScreenPosition {
        let dx = i32::from(sample.x) - i32::from(self.center_x);
        let dy = i32::from(self.center_y) - i32::from(sample.y);

        let normalized_x = dx as f32 / self.max_displacement_x;
        let normalized_y = dy as f32 / self.max_displacement_y;

        ScreenPosition {
            x: MARKER_CENTER.x + (normalized_x * MARKER_CENTER.x as f32) as i32,
            y: MARKER_CENTER.y + (normalized_y * MARKER_CENTER.y as f32) as i32,
        }
    }

    /// Project a sample and clamp it so the marker stays inside the border.
    pub fn map_to_screen(&self, sample: JoystickSample) -> ScreenPosition {
        let p = self.project(sample);
        ScreenPosition {
            x: p.x.clamp(0, MARKER_MAX_X),
            y: p.y.clamp(0, MARKER_MAX_Y),
        }
    }
}

/// Absolute distance of `raw` from `center`, rescaled by `4095 / 2047`.
///
/// Computed every cycle and reported, but no output depends on it.
pub fn deflection(center: u16, raw: u16) -> u16 {
    const SCALE: f32 = 4095.0 / 2047.0;
    let distance = (i32::from(center) - i32::from(raw)).unsigned_abs();
    (distance as f32 * SCALE) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADC_MAX: u16 = 4095;

    #[test]
    fn center_maps_to_marker_center() {
        let cal = Calibration::default();
        let sample = JoystickSample { x: 2049, y: 1988 };
        assert_eq!(cal.project(sample), ScreenPosition { x: 60, y: 28 });
        assert_eq!(cal.map_to_screen(sample), MARKER_CENTER);
        assert_eq!(cal.center_sample(), sample);
    }

    #[test]
    fn whole_domain_stays_on_screen() {
        let cal = Calibration::default();
        let mut x = 0u16;
        loop {
            let mut y = 0u16;
            loop {
                let p = cal.map_to_screen(JoystickSample { x, y });
                assert!((0..=MARKER_MAX_X).contains(&p.x), "x={} for {:?}", p.x, (x, y));
                assert!((0..=MARKER_MAX_Y).contains(&p.y), "y={} for {:?}", p.y, (x, y));
                if y == ADC_MAX {
                    break;
                }
                y = (y + 15).min(ADC_MAX);
            }
            if x == ADC_MAX {
                break;
            }
            x = (x + 15).min(ADC_MAX);
        }
    }

    #[test]
    fn extremes_clamp_to_bounds() {
        let cal = Calibration::default();
        // Full right, full down (y inverted).
        let p = cal.map_to_screen(JoystickSample { x: ADC_MAX, y: ADC_MAX });
        assert_eq!(p, ScreenPosition { x: 119, y: 0 });
        // Full left, full up.
        let p = cal.map_to_screen(JoystickSample { x: 0, y: 0 });
        assert_eq!(p, ScreenPosition { x: 0, y: 54 });
    }

    #[test]
    fn out_of_range_calibration_is_clamped() {
        // A stick that travels further than calibrated overshoots before clamping.
        let cal = Calibration {
            max_displacement_x: 1000.0,
            max_displacement_y: 1000.0,
            ..Calibration::default()
        };
        let raw = JoystickSample { x: ADC_MAX, y: 0 };
        let p = cal.project(raw);
        assert!(p.x > MARKER_MAX_X);
        assert!(p.y > MARKER_MAX_Y);
        assert_eq!(
            cal.map_to_screen(raw),
            ScreenPosition { x: MARKER_MAX_X, y: MARKER_MAX_Y }
        );
    }

    #[test]
    fn y_axis_is_inverted() {
        let cal = Calibration::default();
        let low_raw = cal.map_to_screen(JoystickSample { x: 2049, y: 1000 });
        let high_raw = cal.map_to_screen(JoystickSample { x: 2049, y: 3000 });
        assert!(low_raw.y > MARKER_CENTER.y);
        assert!(high_raw.y < MARKER_CENTER.y);
    }

    #[test]
    fn axes_use_their_own_displacement() {
        let cal = Calibration::default();
        // Same raw offset of 1000 on both axes.
        let p = cal.project(JoystickSample { x: 3049, y: 988 });
        // 1000 / 2049 * 60 = 29.28 -> 29
        assert_eq!(p.x, 89);
        // 1000 / 2107 * 28 = 13.28 -> 13
        assert_eq!(p.y, 41);
    }

    #[test]
    fn truncates_toward_zero_on_both_sides() {
        let cal = Calibration::default();
        // +/-50 raw on x is +/-1.46 px, truncated to +/-1.
        assert_eq!(cal.project(JoystickSample { x: 2099, y: 1988 }).x, 61);
        assert_eq!(cal.project(JoystickSample { x: 1999, y: 1988 }).x, 59);
    }

    #[test]
    fn deflection_is_zero_at_center() {
        assert_eq!(deflection(2049, 2049), 0);
    }

    #[test]
    fn deflection_is_symmetric() {
        assert_eq!(deflection(2049, 1049), deflection(2049, 3049));
        // 1000 * 4095 / 2047 = 2000.49
        assert_eq!(deflection(2049, 3049), 2000);
    }

    #[test]
    fn deflection_fits_full_travel() {
        // 2107 * 2.0005 = 4215
        assert_eq!(deflection(1988, 4095), 4215);
        assert!(deflection(2049, 0) > 4090);
    }
}
