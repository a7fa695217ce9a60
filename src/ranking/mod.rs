pub mod bounded;
pub mod trackers;

pub use bounded::{BoundedRanking, RankEntry};
pub use trackers::MaxTracker;
