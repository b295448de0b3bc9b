//! Normal (uniform-flow) depth by bisection on the conveyance relation.
//!
//! Uniform flow balances gravity against friction. For a Darcy-type law the
//! section then conveys
//!
//!   Q = √(S · 4R · A² · 2g / λ)
//!
//! which grows monotonically with depth for ordinary sections, so bisection
//! over (0, max_depth] brackets the uniform depth.

use crate::constants::{CONVERGENCE_TOLERANCE, GRAVITY, MAX_BISECTION_ITERATIONS, MIN_SLOPE};
use crate::friction::FrictionLaw;
use crate::section::CrossSection;
use crate::solver::FlowState;
use thiserror::Error;

/// The reach cannot sustain uniform flow: its invert falls too little, or
/// rises, in the downstream direction.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("slope {slope} cannot sustain uniform flow (must exceed {})", MIN_SLOPE)]
pub struct InvalidSlopeError {
    /// Invert slope that was rejected [m/m].
    pub slope: f64,
}

/// Result of the normal-depth solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalDepthSolution {
    /// Uniform-flow depth [m].
    pub depth: f64,
    /// Bisection iterations performed.
    pub iterations: usize,
    /// False when the iteration cap stopped the solve before the discharge
    /// matched; the depth is then the last bracket midpoint.
    pub converged: bool,
}

/// Solve for the depth at which `section` conveys `flow` uniformly on
/// `slope`.
///
/// Fails typed on flat or adverse slopes. On sections that cannot convey
/// the demanded discharge at any depth, the bisection walks to the full
/// depth bound and the solution comes back with `converged == false`.
///
/// # Example
///
/// ```
/// use gvf_rs::{compute_normal_depth, CircularSection, DarcyWeisbach};
///
/// let pipe = CircularSection::new(0.6)?;
/// let law = DarcyWeisbach::standard();
/// let solution = compute_normal_depth(&pipe, &law, 0.1, 0.002)?;
/// assert!(solution.converged);
/// assert!(solution.depth > 0.0 && solution.depth < 0.6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_normal_depth<S, F>(
    section: &S,
    law: &F,
    flow: f64,
    slope: f64,
) -> Result<NormalDepthSolution, InvalidSlopeError>
where
    S: CrossSection + ?Sized,
    F: FrictionLaw + ?Sized,
{
    if slope <= MIN_SLOPE {
        return Err(InvalidSlopeError { slope });
    }

    let mut lower = 0.0;
    let mut upper = section.max_depth();
    let mut depth = 0.5 * (lower + upper);

    for iteration in 0..MAX_BISECTION_ITERATIONS {
        depth = 0.5 * (lower + upper);
        let state = FlowState::at_depth(section, flow, depth);
        let radius = state.hydraulic_radius();
        let factor = law.friction_factor(radius, state.velocity);
        let conveyed =
            (slope * 4.0 * radius * state.area * state.area * 2.0 * GRAVITY / factor).sqrt();

        if (flow - conveyed).abs() < CONVERGENCE_TOLERANCE {
            return Ok(NormalDepthSolution {
                depth,
                iterations: iteration + 1,
                converged: true,
            });
        }
        if conveyed > flow {
            upper = depth;
        } else {
            lower = depth;
        }
    }

    Ok(NormalDepthSolution {
        depth,
        iterations: MAX_BISECTION_ITERATIONS,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friction::{DarcyWeisbach, Manning};
    use crate::section::{CircularSection, RectangularSection};

    #[test]
    fn test_rejects_flat_and_adverse_slopes() {
        let pipe = CircularSection::new(0.6).unwrap();
        let law = DarcyWeisbach::standard();

        for slope in [0.0, -0.01, MIN_SLOPE] {
            let result = compute_normal_depth(&pipe, &law, 0.1, slope);
            assert_eq!(
                result,
                Err(InvalidSlopeError { slope }),
                "slope {} must be rejected",
                slope
            );
        }
    }

    #[test]
    fn test_manning_uniform_flow_recovered() {
        // With a Manning law the conveyance relation is exactly
        // Q = (A/n) R^(2/3) √S, so the solved depth must satisfy it.
        let channel = RectangularSection::open(2.0, 3.0).unwrap();
        let law = Manning::new(0.015);
        let flow = 3.0;
        let slope = 0.002;

        let solution = compute_normal_depth(&channel, &law, flow, slope).unwrap();
        assert!(solution.converged, "solve should converge");
        assert!(solution.depth > 0.0 && solution.depth < 3.0);

        let area = channel.flow_area(solution.depth);
        let radius = area / channel.wetted_perimeter(solution.depth);
        let manning_q = area * radius.powf(2.0 / 3.0) * slope.sqrt() / 0.015;
        assert!(
            (manning_q - flow).abs() < 1e-3,
            "Manning equation off at solved depth: Q = {}",
            manning_q
        );
    }

    #[test]
    fn test_depth_decreases_with_slope() {
        let pipe = CircularSection::new(1.0).unwrap();
        let law = DarcyWeisbach::standard();
        let flow = 0.4;

        let mut previous = f64::INFINITY;
        for slope in [0.001, 0.002, 0.004, 0.008] {
            let solution = compute_normal_depth(&pipe, &law, flow, slope).unwrap();
            assert!(solution.converged, "slope {} should converge", slope);
            assert!(
                solution.depth < previous,
                "steeper slope {} must lower the normal depth ({} >= {})",
                slope,
                solution.depth,
                previous
            );
            previous = solution.depth;
        }
    }

    #[test]
    fn test_capacity_exceeded_flags_non_convergence() {
        // 5 m³/s through a 300 mm pipe has no uniform-flow depth.
        let pipe = CircularSection::new(0.3).unwrap();
        let law = DarcyWeisbach::standard();

        let solution = compute_normal_depth(&pipe, &law, 5.0, 0.002).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, MAX_BISECTION_ITERATIONS);
        assert!(
            solution.depth > 0.29,
            "bisection should walk to the soffit, got {}",
            solution.depth
        );
    }
}
