use serde::{Deserialize, Serialize};

/// Offset from the dial center for a label at `hour`, on a dial whose hour 0 sits at
/// `start_angle` degrees (counter-clockwise from 3 o'clock) and whose 24 hours cover
/// `sweep_degrees` going clockwise. The returned `y` grows downwards.
pub fn position_for_hour(hour: f32, radius: f32, start_angle: f32, sweep_degrees: f32) -> (f32, f32) {
    let angle = (start_angle - hour / 24.0 * sweep_degrees).to_radians();
    (radius * angle.cos(), -radius * angle.sin())
}

/// Angular layout of the dial, shared by the gradient arc and the labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialSpan {
    pub start_angle_deg: f32,
    pub sweep_deg: f32,
}

impl Default for DialSpan {
    fn default() -> Self {
        // Opening centered at 6 o'clock
        Self { start_angle_deg: 225.0, sweep_deg: 270.0 }
    }
}

impl DialSpan {
    pub fn is_valid(&self) -> bool {
        self.start_angle_deg.is_finite() && self.sweep_deg > 0.0 && self.sweep_deg <= 360.0
    }

    fn gap_deg(&self) -> f32 {
        360.0 - self.sweep_deg
    }

    /// Gradient bounds as fractions of a full turn, measured clockwise from the middle
    /// of the dial's opening.
    pub fn arc_bounds(&self) -> (f32, f32) {
        let arc_start = self.gap_deg() / 720.0;
        (arc_start, 1.0 - arc_start)
    }

    /// Math angle (degrees, counter-clockwise from 3 o'clock) of a gradient fraction.
    pub fn angle_for_fraction(&self, fraction: f32) -> f32 {
        self.start_angle_deg + self.gap_deg() / 2.0 - 360.0 * fraction
    }

    pub fn position_for_hour(&self, hour: f32, radius: f32) -> (f32, f32) {
        position_for_hour(hour, radius, self.start_angle_deg, self.sweep_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn ends_of_the_sweep() {
        let r = 100.0;
        let h = r * std::f32::consts::FRAC_1_SQRT_2;
        let start = position_for_hour(0.0, r, 135.0, 270.0);
        let end = position_for_hour(24.0, r, 135.0, 270.0);
        assert!(close(start, (-h, -h)), "{start:?}");
        assert!(close(end, (-h, h)), "{end:?}");
        assert!(!close(start, end));
    }

    #[test]
    fn hours_advance_clockwise_on_screen() {
        // 135 - 270 * 4/24 = 90 degrees, straight up
        let top = position_for_hour(4.0, 50.0, 135.0, 270.0);
        assert!(close(top, (0.0, -50.0)), "{top:?}");
        // 135 - 270 * 12/24 = 0 degrees, 3 o'clock
        let right = position_for_hour(12.0, 50.0, 135.0, 270.0);
        assert!(close(right, (50.0, 0.0)), "{right:?}");
    }

    #[test]
    fn labels_stay_on_the_radius() {
        for hour in [0.0, 3.5, 9.0, 17.25, 23.9] {
            let (x, y) = position_for_hour(hour, 80.0, 225.0, 270.0);
            assert!(((x * x + y * y).sqrt() - 80.0).abs() < 1e-3);
        }
    }

    #[test]
    fn arc_bounds_for_common_sweeps() {
        let (a, b) = DialSpan { start_angle_deg: 225.0, sweep_deg: 270.0 }.arc_bounds();
        assert!((a - 0.125).abs() < 1e-6 && (b - 0.875).abs() < 1e-6);
        assert_eq!(DialSpan { start_angle_deg: 90.0, sweep_deg: 360.0 }.arc_bounds(), (0.0, 1.0));
    }

    #[test]
    fn gradient_and_labels_agree_on_angles() {
        let span = DialSpan::default();
        let (arc_start, arc_end) = span.arc_bounds();
        for hour in [0.0f32, 6.0, 12.0, 18.0, 24.0] {
            let fraction = arc_start + hour / 24.0 * (arc_end - arc_start);
            let label_angle = span.start_angle_deg - hour / 24.0 * span.sweep_deg;
            assert!((span.angle_for_fraction(fraction) - label_angle).abs() < 1e-3);
        }
    }

    #[test]
    fn validity() {
        assert!(DialSpan::default().is_valid());
        assert!(!DialSpan { start_angle_deg: 0.0, sweep_deg: 0.0 }.is_valid());
        assert!(!DialSpan { start_angle_deg: 0.0, sweep_deg: 400.0 }.is_valid());
    }
}
