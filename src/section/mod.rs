//! Cross-section geometry contracts and implementations.
//!
//! A cross-section supplies the wetted geometry the solvers need: area,
//! wetted perimeter and free-surface width at a partial depth, plus the
//! full-bore geometry used once a closed conduit surcharges. Critical depth
//! is provided on the trait itself from the Froude condition
//!
//!   Q² T / (g A³) = 1
//!
//! solved by bisection, so any shape that reports area and surface width
//! gets it for free; shapes with a closed form override it.

mod circular;
mod rectangular;
mod trapezoidal;

pub use circular::CircularSection;
pub use rectangular::RectangularSection;
pub use trapezoidal::TrapezoidalSection;

use crate::constants::{CONVERGENCE_TOLERANCE, GRAVITY, MAX_BISECTION_ITERATIONS};
use thiserror::Error;

/// Invalid cross-section geometry.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SectionError {
    /// A geometric dimension failed validation.
    #[error("{name} must be {requirement}, got {value}")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

pub(crate) fn positive_dimension(name: &'static str, value: f64) -> Result<f64, SectionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SectionError::InvalidDimension {
            name,
            value,
            requirement: "positive and finite",
        })
    }
}

pub(crate) fn non_negative_dimension(
    name: &'static str,
    value: f64,
) -> Result<f64, SectionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SectionError::InvalidDimension {
            name,
            value,
            requirement: "non-negative and finite",
        })
    }
}

/// Wetted geometry of a prismatic cross-section.
///
/// Depths are measured from the invert. Implementations are stateless value
/// types; the discharge is always passed in explicitly, so one section can
/// serve any number of reaches.
pub trait CrossSection: Send + Sync {
    /// Depth at which the section runs full [m]: the soffit for closed
    /// conduits, bank-full for open channels.
    fn max_depth(&self) -> f64;

    /// Wetted area at a partial depth [m²].
    fn flow_area(&self, depth: f64) -> f64;

    /// Wetted perimeter at a partial depth [m], free surface excluded.
    fn wetted_perimeter(&self, depth: f64) -> f64;

    /// Free-surface width at a partial depth [m].
    fn surface_width(&self, depth: f64) -> f64;

    /// Wetted area when running full [m²].
    fn full_area(&self) -> f64;

    /// Wetted perimeter when running full [m].
    ///
    /// Closed conduits wet their entire boundary; open channels keep the
    /// free surface open at bank-full.
    fn full_perimeter(&self) -> f64;

    /// Short label for diagnostics.
    fn name(&self) -> &'static str;

    /// Critical depth for the given discharge [m].
    ///
    /// Bisects Q²·T/(g·A³) − 1 over (0, max_depth). The residual falls from
    /// large positive values at small depths toward −1 as the section fills,
    /// so the bracket keeps the root throughout.
    fn critical_depth(&self, flow: f64) -> f64 {
        let mut lower = 0.0;
        let mut upper = self.max_depth();
        let mut depth = 0.5 * (lower + upper);
        for _ in 0..MAX_BISECTION_ITERATIONS {
            depth = 0.5 * (lower + upper);
            let area = self.flow_area(depth);
            let width = self.surface_width(depth);
            let residual = flow * flow * width / (GRAVITY * area.powi(3)) - 1.0;
            if residual.abs() < CONVERGENCE_TOLERANCE {
                return depth;
            }
            if residual > 0.0 {
                // Supercritical at this depth: the critical depth is deeper.
                lower = depth;
            } else {
                upper = depth;
            }
        }
        depth
    }
}
