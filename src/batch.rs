//! Sweeps over many independent reaches.

use crate::conduit::{Conduit, ConduitError, ProfileOutcome};
use crate::section::CrossSection;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calculate every conduit in the slice, returning outcomes in slice order.
pub fn calculate_all<S: CrossSection>(
    conduits: &mut [Conduit<S>],
) -> Vec<Result<ProfileOutcome, ConduitError>> {
    conduits
        .iter_mut()
        .map(|conduit| conduit.calculate())
        .collect()
}

/// Parallel variant of [`calculate_all`]. Reaches are independent, so the
/// sweep partitions freely across threads; outcomes keep slice order.
#[cfg(feature = "parallel")]
pub fn calculate_all_parallel<S: CrossSection>(
    conduits: &mut [Conduit<S>],
) -> Vec<Result<ProfileOutcome, ConduitError>> {
    conduits
        .par_iter_mut()
        .map(|conduit| conduit.calculate())
        .collect()
}
