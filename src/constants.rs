//! Engineering constants shared across the solvers.
//!
//! Values follow common drainage-design practice: gravity at 9.806 m/s², an
//! absolute convergence tolerance of 1e-4 (applied to discharge matching in
//! the normal-depth solve and to energy matching in the standard step), and
//! hard iteration caps so degenerate inputs surface as flagged
//! non-convergence instead of hung loops.

/// Gravitational acceleration [m/s²].
pub const GRAVITY: f64 = 9.806;

/// Absolute convergence tolerance for the bisection loops.
///
/// The normal-depth solve compares discharges [m³/s] against this, the
/// standard-step solve compares specific energies [m].
pub const CONVERGENCE_TOLERANCE: f64 = 1e-4;

/// Minimum sustainable invert slope [m/m].
///
/// Reaches with `slope <= MIN_SLOPE` (flat or adverse) have no uniform-flow
/// solution; normal-depth solving fails with a typed error.
pub const MIN_SLOPE: f64 = 1e-4;

/// Iteration cap for the per-station energy-balance bisection.
///
/// When a standard step fails to balance within this many halvings, the
/// bracket midpoint is accepted and the station is counted as capped.
pub const MAX_ENERGY_ITERATIONS: usize = 29;

/// Iteration cap for the normal-depth and critical-depth bisections.
///
/// Sixty halvings exhaust f64 resolution over any realistic depth range, so
/// hitting the cap means the relation has no root in the section, for
/// example a demanded discharge beyond full-bore capacity.
pub const MAX_BISECTION_ITERATIONS: usize = 60;
