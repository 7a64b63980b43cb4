use serde::{Deserialize, Serialize};

/// Picks the meeting point of a path by position, not by cost: the chosen
/// node is in the middle by hop count only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MidpointRule {
    /// `floor((N - 1) / 2)`, used on campus.
    LowerMiddle,
    /// `floor(N / 2)`, used for subway routes.
    UpperMiddle,
}

impl MidpointRule {
    /// Index of the midpoint in a path of `len` nodes. `len` must be non-zero.
    pub fn index(&self, len: usize) -> usize {
        match self {
            MidpointRule::LowerMiddle => len.saturating_sub(1) / 2,
            MidpointRule::UpperMiddle => len / 2,
        }
    }
}
