pub mod settings;

pub use settings::{ClubConfig, RankingSettings};
