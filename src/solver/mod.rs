//! Steady-flow solvers.
//!
//! # Submodules
//!
//! - [`normal_depth`]: uniform-flow depth by bisection on the conveyance
//!   relation
//! - [`backwater`]: standard-step energy integration upstream from the
//!   downstream control
//! - [`flow_state`]: per-station hydraulic state shared by both solvers

pub mod backwater;
pub mod flow_state;
pub mod normal_depth;

pub use backwater::{integrate_backwater, BackwaterSummary, STEP_SCHEDULE};
pub use flow_state::FlowState;
pub use normal_depth::{compute_normal_depth, InvalidSlopeError, NormalDepthSolution};
