pub struct RankingSettings {
    pub best_events_capacity: usize,
    pub top_entities_capacity: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            best_events_capacity: 1, // single best-of tracker
            top_entities_capacity: 5,
        }
    }
}

pub struct ClubConfig {
    pub ranking: RankingSettings,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
        }
    }
}
