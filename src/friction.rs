//! Friction laws for the conveyance and energy-gradient relations.
//!
//! The solvers consume friction through one contract: a Darcy friction
//! factor λ for the local flow state, and the friction slope
//!
//!   Sf = λ v² / (8 g R)
//!
//! `DarcyWeisbach` resolves λ from the Colebrook-White relation (laminar
//! 64/Re below the transition Reynolds number, a Swamee-Jain seeded fixed
//! point above it). `Manning` maps Manning's n onto an equivalent λ so the
//! same conveyance relation reproduces Manning's equation exactly.

use crate::constants::GRAVITY;

/// Transition Reynolds number below which flow is treated as laminar.
const RE_LAMINAR: f64 = 2000.0;
/// Velocities below this are treated as quiescent.
const QUIESCENT_VELOCITY: f64 = 1e-12;
/// Fixed-point iteration cap for the Colebrook-White relation.
const COLEBROOK_MAX_ITERATIONS: usize = 20;
/// Fixed-point convergence tolerance on λ.
const COLEBROOK_TOLERANCE: f64 = 1e-8;

/// Hydraulic friction law evaluated station by station.
///
/// `hydraulic_radius` is A/P [m]; `velocity` the mean section velocity
/// [m/s].
pub trait FrictionLaw: Send + Sync {
    /// Darcy friction factor λ for the local flow state.
    fn friction_factor(&self, hydraulic_radius: f64, velocity: f64) -> f64;

    /// Energy gradient Sf = λ·v²/(8·g·R) [m/m].
    ///
    /// Quiescent water has no gradient.
    fn friction_slope(&self, hydraulic_radius: f64, velocity: f64) -> f64 {
        if velocity.abs() < QUIESCENT_VELOCITY {
            return 0.0;
        }
        self.friction_factor(hydraulic_radius, velocity) * velocity * velocity
            / (8.0 * GRAVITY * hydraulic_radius)
    }

    /// Short label for diagnostics.
    fn name(&self) -> &'static str;
}

/// Colebrook-White friction from a sand roughness height and the fluid's
/// kinematic viscosity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DarcyWeisbach {
    roughness: f64,
    kinematic_viscosity: f64,
}

impl DarcyWeisbach {
    /// Create a law from a roughness height ks [m] and kinematic viscosity
    /// ν [m²/s].
    ///
    /// # Panics
    ///
    /// Panics if the roughness height or the viscosity is negative.
    /// Reach inputs routed through `ReachConfig` are validated with typed
    /// errors before a law is constructed.
    pub fn new(roughness: f64, kinematic_viscosity: f64) -> Self {
        assert!(
            roughness >= 0.0,
            "roughness height must be non-negative, got {}",
            roughness
        );
        assert!(
            kinematic_viscosity >= 0.0,
            "kinematic viscosity must be non-negative, got {}",
            kinematic_viscosity
        );
        Self {
            roughness,
            kinematic_viscosity,
        }
    }

    /// Water at 15 °C (ν = 1.141e-6 m²/s) over a 0.3 mm roughness height,
    /// typical of aged concrete pipe.
    pub fn standard() -> Self {
        Self::new(3.0e-4, 1.141e-6)
    }

    /// Roughness height ks [m].
    #[inline]
    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Kinematic viscosity ν [m²/s].
    #[inline]
    pub fn kinematic_viscosity(&self) -> f64 {
        self.kinematic_viscosity
    }
}

impl FrictionLaw for DarcyWeisbach {
    fn friction_factor(&self, hydraulic_radius: f64, velocity: f64) -> f64 {
        let hydraulic_diameter = 4.0 * hydraulic_radius;
        let reynolds = velocity.abs() * hydraulic_diameter / self.kinematic_viscosity;
        if reynolds < RE_LAMINAR {
            return 64.0 / reynolds;
        }

        let relative = self.roughness / (3.7 * hydraulic_diameter);
        // Swamee-Jain explicit seed, then the Colebrook-White fixed point.
        let mut factor = 0.25 / (relative + 5.74 / reynolds.powf(0.9)).log10().powi(2);
        for _ in 0..COLEBROOK_MAX_ITERATIONS {
            let root = -2.0 * (relative + 2.51 / (reynolds * factor.sqrt())).log10();
            let next = 1.0 / (root * root);
            if (next - factor).abs() < COLEBROOK_TOLERANCE {
                return next;
            }
            factor = next;
        }
        factor
    }

    fn name(&self) -> &'static str {
        "colebrook-white"
    }
}

/// Manning's n roughness mapped onto the Darcy friction factor.
///
/// λ = 8 g n² / R^(1/3) makes the conveyance relation collapse to
/// Q = (A/n) R^(2/3) √S.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Manning {
    n: f64,
}

impl Manning {
    /// Create a law from Manning's n [s/m^(1/3)].
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or negative.
    pub fn new(n: f64) -> Self {
        assert!(n > 0.0, "Manning coefficient must be positive, got {}", n);
        Self { n }
    }

    /// Manning's n.
    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.n
    }
}

impl FrictionLaw for Manning {
    fn friction_factor(&self, hydraulic_radius: f64, _velocity: f64) -> f64 {
        8.0 * GRAVITY * self.n * self.n / hydraulic_radius.cbrt()
    }

    fn friction_slope(&self, hydraulic_radius: f64, velocity: f64) -> f64 {
        if velocity.abs() < QUIESCENT_VELOCITY {
            return 0.0;
        }
        self.n * self.n * velocity * velocity / hydraulic_radius.powf(4.0 / 3.0)
    }

    fn name(&self) -> &'static str {
        "manning"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laminar_branch() {
        let law = DarcyWeisbach::new(1.0e-3, 1.0e-6);
        // Re = v·4R/ν = 1e-3 · 1.0 / 1e-6 = 1000
        let factor = law.friction_factor(0.25, 1.0e-3);
        assert!(
            (factor - 0.064).abs() < 1e-12,
            "laminar factor should be 64/Re, got {}",
            factor
        );
    }

    #[test]
    fn test_colebrook_satisfies_implicit_relation() {
        let law = DarcyWeisbach::new(3.0e-3, 1.141e-6);
        let radius = 0.25;
        let velocity = 1.0;
        let factor = law.friction_factor(radius, velocity);

        let diameter = 4.0 * radius;
        let reynolds = velocity * diameter / law.kinematic_viscosity();
        let relative = law.roughness() / (3.7 * diameter);
        let residual = 1.0 / factor.sqrt()
            + 2.0 * (relative + 2.51 / (reynolds * factor.sqrt())).log10();
        assert!(
            residual.abs() < 1e-3,
            "Colebrook-White relation not satisfied: residual {}, λ {}",
            residual,
            factor
        );
    }

    #[test]
    fn test_rougher_pipe_has_more_friction() {
        let smooth = DarcyWeisbach::new(1.0e-4, 1.141e-6);
        let rough = DarcyWeisbach::new(3.0e-3, 1.141e-6);

        let f_smooth = smooth.friction_factor(0.2, 1.5);
        let f_rough = rough.friction_factor(0.2, 1.5);
        assert!(
            f_rough > f_smooth,
            "rough {} should exceed smooth {}",
            f_rough,
            f_smooth
        );
    }

    #[test]
    fn test_friction_slope_consistent_with_factor() {
        let law = DarcyWeisbach::new(6.0e-4, 1.141e-6);
        let radius = 0.32;
        let velocity = 1.3;

        let from_factor =
            law.friction_factor(radius, velocity) * velocity * velocity / (8.0 * GRAVITY * radius);
        let slope = law.friction_slope(radius, velocity);
        assert!((slope - from_factor).abs() < 1e-12);
    }

    #[test]
    fn test_manning_slope_matches_factor_form() {
        let law = Manning::new(0.013);
        let radius = 0.32;
        let velocity = 1.3;

        let via_factor =
            law.friction_factor(radius, velocity) * velocity * velocity / (8.0 * GRAVITY * radius);
        let direct = law.friction_slope(radius, velocity);
        assert!(
            (via_factor - direct).abs() < 1e-12,
            "Manning λ and Sf forms disagree: {} vs {}",
            via_factor,
            direct
        );
    }

    #[test]
    fn test_quiescent_water_has_no_gradient() {
        let law = DarcyWeisbach::standard();
        assert_eq!(law.friction_slope(0.5, 0.0), 0.0);
        let manning = Manning::new(0.015);
        assert_eq!(manning.friction_slope(0.5, 0.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "roughness height must be non-negative")]
    fn test_negative_roughness_rejected() {
        DarcyWeisbach::new(-1.0e-3, 1.141e-6);
    }

    #[test]
    #[should_panic(expected = "kinematic viscosity must be non-negative")]
    fn test_negative_viscosity_rejected() {
        DarcyWeisbach::new(3.0e-4, -1.0e-6);
    }

    #[test]
    #[should_panic(expected = "Manning coefficient must be positive")]
    fn test_non_positive_manning_rejected() {
        Manning::new(0.0);
    }
}
