//! Per-station hydraulic state.

use crate::constants::GRAVITY;
use crate::friction::FrictionLaw;
use crate::section::CrossSection;

/// Hydraulic state at one station: depth, wetted geometry and mean velocity.
///
/// A plain value type; build one per trial depth and read the derived
/// quantities off it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowState {
    /// Flow depth [m]; the hydraulic-grade depth when surcharged.
    pub depth: f64,
    /// Wetted area [m²].
    pub area: f64,
    /// Wetted perimeter [m].
    pub perimeter: f64,
    /// Mean velocity [m/s].
    pub velocity: f64,
}

impl FlowState {
    /// State on free-surface (partial-flow) geometry.
    pub fn at_depth<S: CrossSection + ?Sized>(section: &S, flow: f64, depth: f64) -> Self {
        let area = section.flow_area(depth);
        Self {
            depth,
            area,
            perimeter: section.wetted_perimeter(depth),
            velocity: flow / area,
        }
    }

    /// State on full-bore geometry, keeping the hydraulic-grade `depth`,
    /// which may stand above the section's crown.
    pub fn surcharged<S: CrossSection + ?Sized>(section: &S, flow: f64, depth: f64) -> Self {
        let area = section.full_area();
        Self {
            depth,
            area,
            perimeter: section.full_perimeter(),
            velocity: flow / area,
        }
    }

    /// Hydraulic radius A/P [m].
    #[inline]
    pub fn hydraulic_radius(&self) -> f64 {
        self.area / self.perimeter
    }

    /// Velocity head v²/(2g) [m].
    #[inline]
    pub fn velocity_head(&self) -> f64 {
        self.velocity * self.velocity / (2.0 * GRAVITY)
    }

    /// Specific energy E = d + v²/(2g) [m].
    #[inline]
    pub fn specific_energy(&self) -> f64 {
        self.depth + self.velocity_head()
    }

    /// Friction slope under the given law [m/m].
    pub fn friction_slope<F: FrictionLaw + ?Sized>(&self, law: &F) -> f64 {
        law.friction_slope(self.hydraulic_radius(), self.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::RectangularSection;

    #[test]
    fn test_partial_flow_state() {
        let channel = RectangularSection::open(2.0, 3.0).unwrap();
        let state = FlowState::at_depth(&channel, 3.0, 0.5);

        assert!((state.area - 1.0).abs() < 1e-14);
        assert!((state.perimeter - 3.0).abs() < 1e-14);
        assert!((state.hydraulic_radius() - 1.0 / 3.0).abs() < 1e-14);
        assert!((state.velocity - 3.0).abs() < 1e-14);
        assert!((state.velocity_head() - 9.0 / (2.0 * GRAVITY)).abs() < 1e-14);
        assert!((state.specific_energy() - (0.5 + 9.0 / (2.0 * GRAVITY))).abs() < 1e-14);
    }

    #[test]
    fn test_surcharged_state_keeps_grade_depth() {
        let barrel = RectangularSection::closed(2.0, 3.0).unwrap();
        let state = FlowState::surcharged(&barrel, 3.0, 4.2);

        assert!((state.depth - 4.2).abs() < 1e-14, "grade depth carried through");
        assert!((state.area - 6.0).abs() < 1e-14, "full-bore area");
        assert!((state.perimeter - 10.0).abs() < 1e-14, "full-bore perimeter");
        assert!((state.velocity - 0.5).abs() < 1e-14);
    }
}
