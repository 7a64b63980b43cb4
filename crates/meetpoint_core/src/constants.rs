use crate::weighting::{PathWeight, Weight};

pub(crate) const MAX_WEIGHT: PathWeight = PathWeight::MAX;

/// Cost of an edge between stations that share no line, such as a walking transfer.
pub const DEFAULT_TRANSFER_COST: Weight = 5;

/// Cost of an edge whose stations only share a penalized line.
pub const DEFAULT_PENALTY_COST: Weight = 3;
