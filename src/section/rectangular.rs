//! Rectangular section: an open channel or a box-culvert barrel.

use super::{positive_dimension, CrossSection, SectionError};
use crate::constants::GRAVITY;

/// Rectangular channel or culvert of a given width and height.
///
/// Open and closed variants differ only when running full: a closed barrel
/// wets its top slab, an open channel keeps the free surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangularSection {
    width: f64,
    height: f64,
    closed_top: bool,
}

impl RectangularSection {
    /// Open rectangular channel.
    pub fn open(width: f64, height: f64) -> Result<Self, SectionError> {
        Self::build(width, height, false)
    }

    /// Closed rectangular barrel (box culvert).
    pub fn closed(width: f64, height: f64) -> Result<Self, SectionError> {
        Self::build(width, height, true)
    }

    fn build(width: f64, height: f64, closed_top: bool) -> Result<Self, SectionError> {
        Ok(Self {
            width: positive_dimension("width", width)?,
            height: positive_dimension("height", height)?,
            closed_top,
        })
    }

    /// Base width [m].
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height to the soffit or bank-full level [m].
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether the section has a top slab.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed_top
    }
}

impl CrossSection for RectangularSection {
    fn max_depth(&self) -> f64 {
        self.height
    }

    fn flow_area(&self, depth: f64) -> f64 {
        self.width * depth
    }

    fn wetted_perimeter(&self, depth: f64) -> f64 {
        self.width + 2.0 * depth
    }

    fn surface_width(&self, _depth: f64) -> f64 {
        self.width
    }

    fn full_area(&self) -> f64 {
        self.width * self.height
    }

    fn full_perimeter(&self) -> f64 {
        if self.closed_top {
            2.0 * (self.width + self.height)
        } else {
            self.width + 2.0 * self.height
        }
    }

    fn name(&self) -> &'static str {
        "rectangular"
    }

    /// Closed form: yc = (q²/g)^(1/3) with q the discharge per unit width.
    fn critical_depth(&self, flow: f64) -> f64 {
        let q = flow / self.width;
        (q * q / GRAVITY).cbrt()
    }
}
