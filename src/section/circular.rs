//! Circular conduit section, the common drainage pipe.
//!
//! Partial-flow geometry follows the circular-segment relations in terms of
//! the central angle θ subtended by the free surface:
//!
//!   θ = 2·acos(1 − 2d/D),  A = r²(θ − sin θ)/2,  P = r·θ,  T = 2r·sin(θ/2)

use super::{positive_dimension, CrossSection, SectionError};
use std::f64::consts::PI;

/// Circular closed conduit of a given internal diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularSection {
    diameter: f64,
}

impl CircularSection {
    /// Create a circular section from its internal diameter [m].
    pub fn new(diameter: f64) -> Result<Self, SectionError> {
        Ok(Self {
            diameter: positive_dimension("diameter", diameter)?,
        })
    }

    /// Internal diameter [m].
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Central angle subtended by the free surface at `depth`.
    ///
    /// Clamped so depths marginally outside [0, D] degrade to the empty or
    /// full section instead of NaN.
    fn central_angle(&self, depth: f64) -> f64 {
        let cosine = (1.0 - 2.0 * depth / self.diameter).clamp(-1.0, 1.0);
        2.0 * cosine.acos()
    }
}

impl CrossSection for CircularSection {
    fn max_depth(&self) -> f64 {
        self.diameter
    }

    fn flow_area(&self, depth: f64) -> f64 {
        let r = 0.5 * self.diameter;
        let theta = self.central_angle(depth);
        0.5 * r * r * (theta - theta.sin())
    }

    fn wetted_perimeter(&self, depth: f64) -> f64 {
        0.5 * self.diameter * self.central_angle(depth)
    }

    fn surface_width(&self, depth: f64) -> f64 {
        self.diameter * (0.5 * self.central_angle(depth)).sin()
    }

    fn full_area(&self) -> f64 {
        0.25 * PI * self.diameter * self.diameter
    }

    fn full_perimeter(&self) -> f64 {
        PI * self.diameter
    }

    fn name(&self) -> &'static str {
        "circular"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;

    #[test]
    fn test_rejects_bad_diameter() {
        assert!(CircularSection::new(0.0).is_err());
        assert!(CircularSection::new(-0.3).is_err());
        assert!(CircularSection::new(f64::INFINITY).is_err());
        assert!(CircularSection::new(0.45).is_ok());
    }

    #[test]
    fn test_half_full_geometry() {
        let pipe = CircularSection::new(1.0).unwrap();
        let r = 0.5;
        let depth = 0.5;

        assert!(
            (pipe.flow_area(depth) - 0.5 * PI * r * r).abs() < 1e-12,
            "half-full area should be half the circle"
        );
        assert!(
            (pipe.wetted_perimeter(depth) - PI * r).abs() < 1e-12,
            "half-full perimeter should be half the circumference"
        );
        assert!(
            (pipe.surface_width(depth) - 1.0).abs() < 1e-12,
            "free surface at half depth spans the diameter"
        );
    }

    #[test]
    fn test_full_depth_matches_full_geometry() {
        let pipe = CircularSection::new(0.6).unwrap();
        let depth = pipe.max_depth();

        assert!((pipe.flow_area(depth) - pipe.full_area()).abs() < 1e-12);
        assert!((pipe.wetted_perimeter(depth) - pipe.full_perimeter()).abs() < 1e-12);
        assert!(
            pipe.surface_width(depth).abs() < 1e-12,
            "free surface closes at the soffit"
        );
    }

    #[test]
    fn test_area_monotone_in_depth() {
        let pipe = CircularSection::new(0.8).unwrap();
        let mut previous = 0.0;
        for i in 1..=8 {
            let depth = 0.1 * i as f64;
            let area = pipe.flow_area(depth);
            assert!(area > previous, "area must grow with depth");
            previous = area;
        }
    }

    #[test]
    fn test_critical_depth_froude_condition() {
        let pipe = CircularSection::new(1.0).unwrap();
        let flow = 0.5;
        let yc = pipe.critical_depth(flow);

        assert!(yc > 0.0 && yc < pipe.max_depth());
        let area = pipe.flow_area(yc);
        let residual = flow * flow * pipe.surface_width(yc) / (GRAVITY * area.powi(3)) - 1.0;
        assert!(
            residual.abs() < 1e-3,
            "Froude residual {} at critical depth {}",
            residual,
            yc
        );
    }
}
