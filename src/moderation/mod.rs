pub mod queue;

pub use queue::ModerationQueue;
