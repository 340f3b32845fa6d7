//! Color mapping utilities for SVG visualization.

use std::fmt;

/// HSL color: h in degrees, s and l in [0.0, 1.0].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Hsl {
    pub(crate) h: f64,
    pub(crate) s: f64,
    pub(crate) l: f64,
}

impl fmt::Display for Hsl {
    /// Format as CSS HSL:
    ///   hsl({h:.1},{s:.0}%,{l:.0}%)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // normalize hue into [0,360)
        let h = (self.h % 360.0 + 360.0) % 360.0;
        let s = (self.s * 100.0).clamp(0.0, 100.0);
        let l = (self.l * 100.0).clamp(0.0, 100.0);
        write!(f, "hsl({:.1},{:.0}%,{:.0}%)", h, s, l)
    }
}

const GOLDEN_ANGLE: f64 = 137.50776405;

/// Distinct hue per party index.
pub(crate) fn golden_angle_color(index: usize) -> Hsl {
    Hsl { h: ((index as f64) * GOLDEN_ANGLE) % 360.0, s: 0.70, l: 0.45 }
}

/// Sequential blue ramp for seat sums between the majority threshold and the full house.
pub(crate) fn seat_color(seats: u32, threshold: u32, total: u32) -> Hsl {
    let span = total.saturating_sub(threshold).max(1) as f64;
    let t = (seats.saturating_sub(threshold) as f64 / span).clamp(0.0, 1.0);
    Hsl { h: 212.0, s: 0.65, l: 0.78 - 0.43 * t }
}

/// Fill for grid points without a majority.
pub(crate) const MINORITY_FILL: &str = "#e5e7eb";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_formatting_normalizes_hue() {
        assert_eq!(Hsl { h: -30.0, s: 0.5, l: 0.25 }.to_string(), "hsl(330.0,50%,25%)");
    }

    #[test]
    fn seat_ramp_darkens_with_seats() {
        let low = seat_color(51, 51, 101);
        let high = seat_color(101, 51, 101);
        assert!(low.l > high.l);
        assert!((high.l - 0.35).abs() < 1e-12);
    }
}
