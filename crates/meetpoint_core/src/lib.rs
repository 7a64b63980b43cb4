pub mod campus;
pub mod constants;
pub mod error;
pub mod graph;
pub mod midpoint;
pub mod network_file;
mod newtype_index;
pub mod recommendation;
pub mod routing;
pub mod stopwatch;
pub mod subway;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_graph_utils;

pub use campus::recommend_on_campus;
pub use recommendation::{MeetingPoint, NotFoundReason, Recommendation};
pub use subway::recommend_off_campus;
