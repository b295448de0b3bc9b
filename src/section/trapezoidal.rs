//! Trapezoidal open channel.
//!
//! Side slope z is the horizontal run per unit rise, so a depth d wets
//!
//!   A = d(b + z·d),  P = b + 2d√(1+z²),  T = b + 2zd

use super::{non_negative_dimension, positive_dimension, CrossSection, SectionError};

/// Trapezoidal open channel: bottom width, side slope and bank-full height.
///
/// A zero side slope gives a rectangle, a zero bottom width a triangular
/// ditch; both at once are rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrapezoidalSection {
    bottom_width: f64,
    side_slope: f64,
    height: f64,
}

impl TrapezoidalSection {
    /// Create a trapezoidal section.
    pub fn new(bottom_width: f64, side_slope: f64, height: f64) -> Result<Self, SectionError> {
        let bottom_width = non_negative_dimension("bottom_width", bottom_width)?;
        let side_slope = non_negative_dimension("side_slope", side_slope)?;
        let height = positive_dimension("height", height)?;
        if bottom_width == 0.0 && side_slope == 0.0 {
            return Err(SectionError::InvalidDimension {
                name: "bottom_width",
                value: 0.0,
                requirement: "positive when the side slope is zero",
            });
        }
        Ok(Self {
            bottom_width,
            side_slope,
            height,
        })
    }

    /// Bottom width [m].
    #[inline]
    pub fn bottom_width(&self) -> f64 {
        self.bottom_width
    }

    /// Side slope [m horizontal per m vertical].
    #[inline]
    pub fn side_slope(&self) -> f64 {
        self.side_slope
    }

    /// Bank-full height [m].
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    fn sloped_length(&self, depth: f64) -> f64 {
        2.0 * depth * (1.0 + self.side_slope * self.side_slope).sqrt()
    }
}

impl CrossSection for TrapezoidalSection {
    fn max_depth(&self) -> f64 {
        self.height
    }

    fn flow_area(&self, depth: f64) -> f64 {
        depth * (self.bottom_width + self.side_slope * depth)
    }

    fn wetted_perimeter(&self, depth: f64) -> f64 {
        self.bottom_width + self.sloped_length(depth)
    }

    fn surface_width(&self, depth: f64) -> f64 {
        self.bottom_width + 2.0 * self.side_slope * depth
    }

    fn full_area(&self) -> f64 {
        self.flow_area(self.height)
    }

    fn full_perimeter(&self) -> f64 {
        self.wetted_perimeter(self.height)
    }

    fn name(&self) -> &'static str {
        "trapezoidal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use crate::section::RectangularSection;

    #[test]
    fn test_rejects_degenerate_sections() {
        assert!(TrapezoidalSection::new(0.0, 0.0, 1.0).is_err());
        assert!(TrapezoidalSection::new(-1.0, 1.5, 1.0).is_err());
        assert!(TrapezoidalSection::new(1.0, 1.5, 0.0).is_err());
        assert!(TrapezoidalSection::new(0.0, 1.5, 1.0).is_ok(), "triangular ditch is valid");
        assert!(TrapezoidalSection::new(1.2, 0.0, 1.0).is_ok(), "rectangle is valid");
    }

    #[test]
    fn test_geometry_at_fixture_depth() {
        let channel = TrapezoidalSection::new(1.2, 1.5, 1.0).unwrap();
        let depth = 0.4;

        assert!((channel.flow_area(depth) - 0.4 * (1.2 + 0.6)).abs() < 1e-14);
        assert!((channel.surface_width(depth) - (1.2 + 1.2)).abs() < 1e-14);
        let expected_p = 1.2 + 0.8 * (1.0f64 + 2.25).sqrt();
        assert!((channel.wetted_perimeter(depth) - expected_p).abs() < 1e-14);
    }

    #[test]
    fn test_zero_side_slope_matches_rectangle() {
        let trapezoid = TrapezoidalSection::new(2.0, 0.0, 1.5).unwrap();
        let rectangle = RectangularSection::open(2.0, 1.5).unwrap();

        for depth in [0.2, 0.7, 1.3] {
            assert!((trapezoid.flow_area(depth) - rectangle.flow_area(depth)).abs() < 1e-14);
            assert!(
                (trapezoid.wetted_perimeter(depth) - rectangle.wetted_perimeter(depth)).abs()
                    < 1e-14
            );
            assert!(
                (trapezoid.surface_width(depth) - rectangle.surface_width(depth)).abs() < 1e-14
            );
        }
        assert!((trapezoid.full_perimeter() - rectangle.full_perimeter()).abs() < 1e-14);
    }

    #[test]
    fn test_critical_depth_froude_condition() {
        let channel = TrapezoidalSection::new(1.2, 1.5, 1.0).unwrap();
        let flow = 0.8;
        let yc = channel.critical_depth(flow);

        assert!(yc > 0.0 && yc < channel.max_depth());
        let area = channel.flow_area(yc);
        let residual = flow * flow * channel.surface_width(yc) / (GRAVITY * area.powi(3)) - 1.0;
        assert!(
            residual.abs() < 1e-3,
            "Froude residual {} at critical depth {}",
            residual,
            yc
        );
    }
}
