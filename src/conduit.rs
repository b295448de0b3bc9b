//! Reach orchestration: configuration, validation and profile calculation.
//!
//! `Conduit` ties a cross-section to a reach definition and runs the whole
//! analysis: critical depth, normal depth, and, when the reach is
//! hydraulically mild, the backwater profile. Outcomes are typed; nothing
//! is swallowed.

use crate::friction::DarcyWeisbach;
use crate::profile::Profile;
use crate::section::CrossSection;
use crate::solver::{
    compute_normal_depth, integrate_backwater, BackwaterSummary, InvalidSlopeError,
    NormalDepthSolution, STEP_SCHEDULE,
};
use log::{debug, warn};
use thiserror::Error;

/// Reach definition for one conduit or channel run.
///
/// Plain data; `Conduit::setup` validates it. Lengths and depths in metres,
/// discharge in m³/s, viscosity in m²/s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReachConfig {
    /// Discharge through the reach [m³/s]. Strictly positive.
    pub flow: f64,
    /// Reach length along the invert [m]. Strictly positive.
    pub length: f64,
    /// Invert level at the upstream end [m above datum].
    pub upstream_invert: f64,
    /// Invert level at the downstream end [m above datum].
    pub downstream_invert: f64,
    /// Equivalent sand roughness ks [m]. Non-negative.
    pub roughness: f64,
    /// Kinematic viscosity of the fluid [m²/s]. Non-negative.
    pub kinematic_viscosity: f64,
    /// Water depth at the downstream boundary [m]. Non-negative; zero means
    /// a free outfall controlled by critical depth.
    pub downstream_depth: f64,
    /// Open channel rather than a closed conduit. Carried for callers that
    /// report or branch on it; the section geometry is what the solvers
    /// actually read.
    pub open_channel: bool,
}

/// Failure modes of conduit setup and calculation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConduitError {
    /// An input failed validation; the previous configuration is kept.
    #[error("{name} must be {requirement}, got {value}")]
    InvalidInput {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
    /// The invert falls too little, or rises, in the downstream direction.
    #[error(transparent)]
    InvalidSlope(#[from] InvalidSlopeError),
    /// `calculate` was called before a successful `setup`.
    #[error("conduit is not configured; call setup() first")]
    NotConfigured,
}

/// Outcome of a profile calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProfileOutcome {
    /// A backwater profile was integrated; the result series are populated.
    Computed(BackwaterSummary),
    /// Normal depth does not exceed critical depth: the downstream control
    /// cannot back water up the reach, no profile exists and the result
    /// series stay empty.
    NoProfile {
        normal_depth: f64,
        critical_depth: f64,
    },
}

enum Constraint {
    Positive,
    NonNegative,
    Finite,
}

impl Constraint {
    fn describe(&self) -> &'static str {
        match self {
            Constraint::Positive => "positive and finite",
            Constraint::NonNegative => "non-negative and finite",
            Constraint::Finite => "finite",
        }
    }

    fn holds(&self, value: f64) -> bool {
        match self {
            Constraint::Positive => value.is_finite() && value > 0.0,
            Constraint::NonNegative => value.is_finite() && value >= 0.0,
            Constraint::Finite => value.is_finite(),
        }
    }
}

fn validate(name: &'static str, value: f64, constraint: Constraint) -> Result<(), ConduitError> {
    if constraint.holds(value) {
        Ok(())
    } else {
        Err(ConduitError::InvalidInput {
            name,
            value,
            requirement: constraint.describe(),
        })
    }
}

/// A single reach of channel or conduit with its flow configuration.
///
/// Workflow: wrap a section, `setup` a validated [`ReachConfig`], then
/// `calculate`. Cached depths and the result series belong to the
/// configuration that produced them and are cleared whenever it changes.
#[derive(Clone, Debug)]
pub struct Conduit<S> {
    section: S,
    config: Option<ReachConfig>,
    slope: f64,
    law: DarcyWeisbach,
    critical_depth: Option<f64>,
    normal_depth: Option<NormalDepthSolution>,
    profile: Profile,
}

impl<S: CrossSection> Conduit<S> {
    /// New, unconfigured conduit around a section.
    pub fn new(section: S) -> Self {
        Self {
            section,
            config: None,
            slope: 0.0,
            law: DarcyWeisbach::standard(),
            critical_depth: None,
            normal_depth: None,
            profile: Profile::with_capacity(STEP_SCHEDULE.len()),
        }
    }

    /// Validate and install a reach configuration.
    ///
    /// On failure the previous configuration, if any, stays in force.
    /// Cached depths and result series are cleared on success.
    pub fn setup(&mut self, config: ReachConfig) -> Result<(), ConduitError> {
        validate("flow", config.flow, Constraint::Positive)?;
        validate("length", config.length, Constraint::Positive)?;
        validate("upstream_invert", config.upstream_invert, Constraint::Finite)?;
        validate(
            "downstream_invert",
            config.downstream_invert,
            Constraint::Finite,
        )?;
        validate("roughness", config.roughness, Constraint::NonNegative)?;
        validate(
            "kinematic_viscosity",
            config.kinematic_viscosity,
            Constraint::NonNegative,
        )?;
        validate(
            "downstream_depth",
            config.downstream_depth,
            Constraint::NonNegative,
        )?;

        self.slope = (config.upstream_invert - config.downstream_invert) / config.length;
        self.law = DarcyWeisbach::new(config.roughness, config.kinematic_viscosity);
        self.config = Some(config);
        self.critical_depth = None;
        self.normal_depth = None;
        self.profile.clear();
        debug!(
            "conduit configured: Q = {} m³/s over {} m at slope {}",
            config.flow, config.length, self.slope
        );
        Ok(())
    }

    /// Run the profile calculation for the installed configuration.
    ///
    /// Clears previous results first, so every failure path leaves the
    /// series empty. A mild reach (normal depth above critical depth)
    /// integrates a backwater profile; otherwise the `NoProfile` outcome
    /// reports both depths.
    pub fn calculate(&mut self) -> Result<ProfileOutcome, ConduitError> {
        let config = self.config.ok_or(ConduitError::NotConfigured)?;
        self.profile.clear();
        self.critical_depth = None;
        self.normal_depth = None;

        let critical = self.section.critical_depth(config.flow);
        self.critical_depth = Some(critical);

        let normal = compute_normal_depth(&self.section, &self.law, config.flow, self.slope)?;
        self.normal_depth = Some(normal);
        if !normal.converged {
            warn!(
                "normal depth unconverged after {} iterations (depth {} m); the section may not convey {} m³/s",
                normal.iterations, normal.depth, config.flow
            );
        }
        debug!(
            "critical depth {} m, normal depth {} m",
            critical, normal.depth
        );

        if normal.depth <= critical {
            debug!("reach is hydraulically steep, no backwater profile");
            return Ok(ProfileOutcome::NoProfile {
                normal_depth: normal.depth,
                critical_depth: critical,
            });
        }

        let summary = integrate_backwater(
            &self.section,
            &self.law,
            config.flow,
            config.length,
            self.slope,
            config.downstream_invert,
            config.downstream_depth,
            critical,
            &mut self.profile,
        );
        if summary.capped_steps > 0 {
            warn!(
                "{} of {} stations hit the energy-balance iteration cap",
                summary.capped_steps, summary.stations
            );
        }
        Ok(ProfileOutcome::Computed(summary))
    }

    /// The wrapped cross-section.
    pub fn section(&self) -> &S {
        &self.section
    }

    /// The installed configuration, if `setup` has succeeded.
    pub fn config(&self) -> Option<&ReachConfig> {
        self.config.as_ref()
    }

    /// Whether a configuration is installed.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Invert slope of the installed configuration [m/m].
    pub fn slope(&self) -> Option<f64> {
        self.config.map(|_| self.slope)
    }

    /// Critical depth cached by the last `calculate` [m].
    pub fn critical_depth(&self) -> Option<f64> {
        self.critical_depth
    }

    /// Normal-depth solution cached by the last `calculate`.
    pub fn normal_depth(&self) -> Option<NormalDepthSolution> {
        self.normal_depth
    }

    /// Result series of the last successful profile calculation.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
