//! Standard-step backwater integration.
//!
//! Marches the energy equation upstream from a downstream control over a
//! fixed, non-uniform step schedule (short steps near the control where the
//! profile bends hardest). Each free-surface station balances
//!
//!   E(d) = E₋ − ΔL·(S0 − S̄f),  S̄f = (Sf(d) + Sf₋)/2
//!
//! by bisection on depth. Stations at or above the crown carry full-bore
//! friction instead: the hydraulic grade line simply rises by ΔL·Sf.

use crate::constants::{CONVERGENCE_TOLERANCE, MAX_ENERGY_ITERATIONS};
use crate::friction::FrictionLaw;
use crate::profile::Profile;
use crate::section::CrossSection;
use crate::solver::FlowState;

/// Marching schedule, percent of reach length per step.
///
/// The zero first entry is the downstream boundary station itself; steps
/// shorten toward the control. Entries sum to exactly 100.
pub const STEP_SCHEDULE: [f64; 17] = [
    0.0, 0.625, 0.625, 1.25, 2.5, 2.5, 5.0, 5.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0,
    2.5,
];

/// What a completed march ended with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackwaterSummary {
    /// Stations recorded by this march.
    pub stations: usize,
    /// Free-surface stations where the energy balance hit the iteration cap
    /// and accepted the bracket midpoint.
    pub capped_steps: usize,
    /// Specific energy carried at the upstream end [m].
    pub final_energy: f64,
}

/// Integrate the water-surface profile upstream from the downstream control.
///
/// The starting depth is the deeper of the downstream boundary depth and
/// the critical depth. Appends one station per schedule entry to `profile`;
/// callers wanting a fresh profile clear it first.
#[allow(clippy::too_many_arguments)]
pub fn integrate_backwater<S, F>(
    section: &S,
    law: &F,
    flow: f64,
    length: f64,
    slope: f64,
    downstream_invert: f64,
    downstream_depth: f64,
    critical_depth: f64,
    profile: &mut Profile,
) -> BackwaterSummary
where
    S: CrossSection + ?Sized,
    F: FrictionLaw + ?Sized,
{
    let max_depth = section.max_depth();
    let recorded_before = profile.len();
    let mut capped_steps = 0;

    // Downstream control. Full-bore geometry only if the grade line already
    // stands above the crown.
    let mut depth = downstream_depth.max(critical_depth);
    let boundary = if depth > max_depth {
        FlowState::surcharged(section, flow, depth)
    } else {
        FlowState::at_depth(section, flow, depth)
    };
    let mut energy = boundary.specific_energy();
    let mut friction = boundary.friction_slope(law);
    let mut chainage = 0.0;
    profile.record(chainage, downstream_invert, energy, depth);

    for pct in &STEP_SCHEDULE[1..] {
        let step = pct * length / 100.0;
        chainage += step;
        let invert = downstream_invert + chainage * slope;

        if depth >= max_depth {
            // Surcharged: the grade line rises by the full-bore head loss.
            let state = FlowState::surcharged(section, flow, depth);
            let full_bore = state.friction_slope(law);
            let upstream_energy = state.specific_energy() + step * full_bore;
            depth = upstream_energy - state.velocity_head();
            energy = upstream_energy;
            friction = full_bore;
            profile.record(chainage, invert, energy, depth);
            continue;
        }

        // Free surface: bisect the trial depth between the previous depth
        // and the crown until the trial energy meets the carried energy.
        let mut lower = depth;
        let mut upper = max_depth;
        let mut target;
        let mut iterations = 0;
        loop {
            let trial = 0.5 * (lower + upper);
            let state = FlowState::at_depth(section, flow, trial);
            let trial_friction = state.friction_slope(law);
            target = energy - step * (slope - 0.5 * (trial_friction + friction));

            if (state.specific_energy() - target).abs() < CONVERGENCE_TOLERANCE {
                depth = trial;
                friction = trial_friction;
                break;
            }
            iterations += 1;
            if iterations >= MAX_ENERGY_ITERATIONS {
                depth = trial;
                friction = trial_friction;
                capped_steps += 1;
                break;
            }
            if state.specific_energy() > target {
                upper = trial;
            } else {
                lower = trial;
            }
        }
        energy = target;
        profile.record(chainage, invert, energy, depth);
    }

    BackwaterSummary {
        stations: profile.len() - recorded_before,
        capped_steps,
        final_energy: energy,
    }
}
