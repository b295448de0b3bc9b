//! # gvf-rs
//!
//! Steady gradually-varied flow profiles for open channels and closed
//! conduits.
//!
//! This crate provides the building blocks for one-dimensional steady-flow
//! analysis of a single reach:
//! - Cross-section geometry (circular, rectangular, trapezoidal)
//! - Friction laws (Colebrook-White, Manning)
//! - Critical and normal depth solvers
//! - Standard-step backwater integration with surcharge handling
//! - Typed calculation outcomes and result series
//!
//! The downstream boundary controls the profile: on a hydraulically mild
//! reach (normal depth above critical depth) the water surface is marched
//! upstream with the energy equation over a fixed step schedule. Closed
//! conduits whose grade line stands above the crown switch to full-bore
//! friction.
//!
//! # Example
//!
//! ```
//! use gvf_rs::{Conduit, ProfileOutcome, ReachConfig, RectangularSection};
//!
//! let section = RectangularSection::open(0.8, 2.0)?;
//! let mut conduit = Conduit::new(section);
//! conduit.setup(ReachConfig {
//!     flow: 0.5,
//!     length: 100.0,
//!     upstream_invert: 1.0,
//!     downstream_invert: 0.9,
//!     roughness: 3.0e-3,
//!     kinematic_viscosity: 1.141e-6,
//!     downstream_depth: 0.0,
//!     open_channel: true,
//! })?;
//!
//! match conduit.calculate()? {
//!     ProfileOutcome::Computed(summary) => {
//!         assert_eq!(summary.stations, conduit.profile().len());
//!     }
//!     ProfileOutcome::NoProfile { .. } => unreachable!("the fixture is mild"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod conduit;
pub mod constants;
pub mod friction;
pub mod profile;
pub mod section;
pub mod solver;

// Re-export main types for convenience
pub use conduit::{Conduit, ConduitError, ProfileOutcome, ReachConfig};
pub use friction::{DarcyWeisbach, FrictionLaw, Manning};
pub use profile::{Profile, Station};
pub use section::{
    CircularSection, CrossSection, RectangularSection, SectionError, TrapezoidalSection,
};
pub use solver::{
    compute_normal_depth, integrate_backwater, BackwaterSummary, FlowState, InvalidSlopeError,
    NormalDepthSolution, STEP_SCHEDULE,
};

pub use batch::calculate_all;
#[cfg(feature = "parallel")]
pub use batch::calculate_all_parallel;
