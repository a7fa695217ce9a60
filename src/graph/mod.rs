pub mod follow;

pub use follow::FollowGraph;
