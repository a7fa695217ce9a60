pub mod config;
pub mod domain;
pub mod enrollment;
pub mod errors;
pub mod graph;
pub mod moderation;
pub mod ranking;
pub mod registry;
pub mod services;

pub use config::ClubConfig;
pub use errors::{ClubError, ClubResult};
pub use services::SportsClub;
