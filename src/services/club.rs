use chrono::NaiveDate;
use log::{debug, info};
use serde_json::json;

use crate::config::ClubConfig;
use crate::domain::models::{
    ActivityRequest, ActivityType, Attender, Enrollment, EntityId, EventId, Level,
    OrganizingEntity, Player, PlayerId, Post, Rating, RequestStatus, Role, Score, SportEvent,
    Worker,
};
use crate::enrollment;
use crate::errors::{ClubError, ClubResult};
use crate::graph::FollowGraph;
use crate::moderation::ModerationQueue;
use crate::ranking::{BoundedRanking, MaxTracker};
use crate::registry::{Registry, RoleDirectory};

/// Facade over the club engine: registries for players, organizing entities
/// and sport events, the moderation queue, the follow graph, and the live
/// rankings. Single-threaded; every operation either completes or returns a
/// `ClubError`.
pub struct SportsClub {
    players: Registry<Player>,
    entities: Registry<OrganizingEntity>,
    events: Registry<SportEvent>,
    roles: RoleDirectory,
    moderation: ModerationQueue,
    follow_graph: FollowGraph,
    best_events: BoundedRanking<EventId>,
    top_entities: BoundedRanking<EntityId>,
    most_active: MaxTracker<PlayerId>,
}

impl Default for SportsClub {
    fn default() -> Self {
        Self::new()
    }
}

impl SportsClub {
    pub fn new() -> Self {
        Self::with_config(ClubConfig::new())
    }

    pub fn with_config(config: ClubConfig) -> Self {
        Self {
            players: Registry::new(),
            entities: Registry::new(),
            events: Registry::new(),
            roles: RoleDirectory::new(),
            moderation: ModerationQueue::new(),
            follow_graph: FollowGraph::new(),
            best_events: BoundedRanking::new(config.ranking.best_events_capacity),
            top_entities: BoundedRanking::new(config.ranking.top_entities_capacity),
            most_active: MaxTracker::new(),
        }
    }

    // --- Players ---

    pub fn add_player(&mut self, player_id: &str, name: &str, surname: &str, birthday: NaiveDate) {
        self.players
            .put(player_id, Player::new(player_id, name, surname, birthday));
    }

    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player_level(&self, player_id: &str) -> ClubResult<Level> {
        let player = self.players.get(player_id).ok_or(ClubError::PlayerNotFound)?;
        Ok(player.level())
    }

    pub fn num_ratings_by_player(&self, player_id: &str) -> usize {
        self.players.get(player_id).map_or(0, |p| p.num_ratings())
    }

    // --- Organizing entities ---

    /// Registering an existing entity id replaces the stored entity
    pub fn add_organizing_entity(&mut self, entity_id: &str, name: &str, description: &str) {
        self.entities
            .put(entity_id, OrganizingEntity::new(entity_id, name, description));
    }

    pub fn get_organizing_entity(&self, entity_id: &str) -> Option<&OrganizingEntity> {
        self.entities.get(entity_id)
    }

    pub fn num_organizing_entities(&self) -> usize {
        self.entities.len()
    }

    // --- Moderation ---

    #[allow(clippy::too_many_arguments)]
    pub fn submit_request(
        &mut self,
        request_id: &str,
        event_id: &str,
        entity_id: &str,
        description: &str,
        activity_type: ActivityType,
        resources: u8,
        max: usize,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ClubResult<()> {
        if !self.entities.exists(entity_id) {
            return Err(ClubError::OrganizingEntityNotFound);
        }
        let request = ActivityRequest::new(
            request_id,
            event_id,
            entity_id,
            description,
            activity_type,
            resources,
            max,
            start_date,
            end_date,
        );
        self.moderation.submit(request);
        info!("Queued activity request {} for entity {}", request_id, entity_id);
        Ok(())
    }

    /// Decide the highest-priority pending request. On approval the sport
    /// event is materialized, registered, and linked to its organizing
    /// entity; otherwise the rejection counter grows.
    pub fn decide_request(
        &mut self,
        status: RequestStatus,
        date: NaiveDate,
        note: &str,
    ) -> ClubResult<ActivityRequest> {
        let decided = self.moderation.decide(status, date, note)?;

        if decided.is_approved() {
            let event = decided.to_sport_event();
            if let Some(entity) = self.entities.get_mut(&decided.entity_id) {
                entity.add_event(&event.event_id);
            }
            info!("Approved request {}, registered event {}", decided.request_id, event.event_id);
            let event_id = event.event_id.clone();
            self.events.put(&event_id, event);
        } else {
            info!("Rejected request {}", decided.request_id);
        }
        Ok(decided)
    }

    pub fn rejected_ratio(&self) -> ClubResult<f64> {
        self.moderation
            .rejection_ratio()
            .ok_or(ClubError::NoRequestsSubmitted)
    }

    pub fn current_request(&self) -> Option<&ActivityRequest> {
        self.moderation.current()
    }

    pub fn num_requests(&self) -> usize {
        self.moderation.num_submitted()
    }

    pub fn num_rejected_requests(&self) -> usize {
        self.moderation.num_rejected()
    }

    pub fn num_pending_requests(&self) -> usize {
        self.moderation.num_pending()
    }

    // --- Sport events ---

    pub fn get_sport_event(&self, event_id: &str) -> Option<&SportEvent> {
        self.events.get(event_id)
    }

    pub fn num_sport_events(&self) -> usize {
        self.events.len()
    }

    pub fn all_events(&self) -> ClubResult<Vec<&SportEvent>> {
        if self.events.is_empty() {
            return Err(ClubError::NoSportEvents);
        }
        Ok(self.events.values().collect())
    }

    pub fn events_by_entity(&self, entity_id: &str) -> ClubResult<Vec<&SportEvent>> {
        let entity = self.entities.get(entity_id);
        match entity {
            Some(entity) if entity.has_events() => Ok(entity
                .events()
                .iter()
                .filter_map(|id| self.events.get(id))
                .collect()),
            _ => Err(ClubError::NoSportEvents),
        }
    }

    pub fn events_by_player(&self, player_id: &str) -> ClubResult<Vec<&SportEvent>> {
        let player = self.players.get(player_id);
        match player {
            Some(player) if player.has_events() => Ok(player
                .events()
                .iter()
                .filter_map(|id| self.events.get(id))
                .collect()),
            _ => Err(ClubError::NoSportEvents),
        }
    }

    pub fn num_events_by_player(&self, player_id: &str) -> usize {
        self.players.get(player_id).map_or(0, |p| p.num_events())
    }

    pub fn num_events_by_entity(&self, entity_id: &str) -> usize {
        self.entities.get(entity_id).map_or(0, |e| e.num_events())
    }

    // --- Enrollment ---

    /// Sign a player up for an event.
    ///
    /// The sign-up is always recorded on the player (event list and feed
    /// post). A full event stores the player as a substitute and reports
    /// `CapacityExceeded`; on that path the most-active tracker is not
    /// touched.
    pub fn sign_up(&mut self, player_id: &str, event_id: &str) -> ClubResult<()> {
        if !self.players.exists(player_id) {
            return Err(ClubError::PlayerNotFound);
        }
        if !self.events.exists(event_id) {
            return Err(ClubError::SportEventNotFound);
        }

        let payload = json!({
            "player": player_id,
            "sportEvent": event_id,
            "action": "signup",
        });
        let num_events = {
            let player = self.players.get_mut(player_id).ok_or(ClubError::PlayerNotFound)?;
            player.add_post(Post::new(payload.to_string()));
            player.add_event(event_id);
            player.num_events()
        };

        let player = self.players.get(player_id).ok_or(ClubError::PlayerNotFound)?;
        let event = self.events.get_mut(event_id).ok_or(ClubError::SportEventNotFound)?;
        debug!("Sign-up: player {} -> event {}", player_id, event_id);
        enrollment::enroll(event, player)?;

        self.most_active.update(player_id.to_string(), num_events);
        Ok(())
    }

    pub fn num_players_by_event(&self, event_id: &str) -> usize {
        self.events.get(event_id).map_or(0, |e| e.num_players())
    }

    pub fn num_substitutes_by_event(&self, event_id: &str) -> usize {
        self.events.get(event_id).map_or(0, |e| e.num_substitutes())
    }

    pub fn substitutes(&self, event_id: &str) -> ClubResult<Vec<&Enrollment>> {
        let event = self.events.get(event_id).ok_or(ClubError::SportEventNotFound)?;
        if !event.has_substitutes() {
            return Err(ClubError::NoSubstitutes);
        }
        Ok(event.substitutes().collect())
    }

    // --- Ratings & rankings ---

    /// Record a rating from a player enrolled in the event, refresh the
    /// best-event ranking and post to the player's feed
    pub fn add_rating(
        &mut self,
        player_id: &str,
        event_id: &str,
        score: Score,
        message: Option<&str>,
    ) -> ClubResult<()> {
        if !self.events.exists(event_id) {
            return Err(ClubError::SportEventNotFound);
        }
        let Some(player) = self.players.get_mut(player_id) else {
            return Err(ClubError::PlayerNotFound);
        };
        if !player.is_in_event(event_id) {
            return Err(ClubError::PlayerNotInSportEvent);
        }

        let payload = json!({
            "player": player_id,
            "sportEvent": event_id,
            "rating": score.value(),
            "action": "rating",
        });
        player.add_post(Post::new(payload.to_string()));
        player.record_rating_submission();

        let Some(event) = self.events.get_mut(event_id) else {
            return Err(ClubError::SportEventNotFound);
        };
        event.add_rating(Rating {
            score,
            message: message.map(str::to_string),
            player_id: player_id.to_string(),
        });
        let average = event.average_rating();
        self.best_events.update(event_id.to_string(), average);
        debug!("Rating on event {}: average is now {:.2}", event_id, average);
        Ok(())
    }

    pub fn ratings_by_event(&self, event_id: &str) -> ClubResult<&[Rating]> {
        let event = self.events.get(event_id).ok_or(ClubError::SportEventNotFound)?;
        if !event.has_ratings() {
            return Err(ClubError::NoRatings);
        }
        Ok(event.ratings())
    }

    /// Best event under the literal ranking contract: index 0 of the
    /// ascending average-rating order
    pub fn best_sport_event(&self) -> ClubResult<&SportEvent> {
        let entry = self
            .best_events
            .best()
            .map_err(|_| ClubError::SportEventNotFound)?;
        self.events.get(&entry.id).ok_or(ClubError::SportEventNotFound)
    }

    /// Recompute attender totals for every organizing entity, refresh the
    /// bounded ranking and return it in ranking order
    pub fn best_organizing_entities(&mut self) -> ClubResult<Vec<&OrganizingEntity>> {
        let mut total_attenders = 0;
        let scores: Vec<(EntityId, usize)> = self
            .entities
            .values()
            .map(|entity| (entity.entity_id.clone(), self.entity_attenders(entity)))
            .collect();
        for (entity_id, attenders) in scores {
            total_attenders += attenders;
            self.top_entities.update(entity_id, attenders as f64);
        }
        if total_attenders == 0 {
            return Err(ClubError::NoAttenders);
        }
        Ok(self
            .top_entities
            .values()
            .iter()
            .filter_map(|entry| self.entities.get(&entry.id))
            .collect())
    }

    fn entity_attenders(&self, entity: &OrganizingEntity) -> usize {
        entity
            .events()
            .iter()
            .filter_map(|id| self.events.get(id))
            .map(|event| event.num_attenders())
            .sum()
    }

    /// Event with the most attenders; first in key order wins ties
    pub fn best_event_by_attenders(&self) -> ClubResult<&SportEvent> {
        self.events
            .values()
            .fold(None::<&SportEvent>, |best, event| match best {
                Some(current) if current.num_attenders() >= event.num_attenders() => Some(current),
                _ => Some(event),
            })
            .ok_or(ClubError::NoSportEvents)
    }

    pub fn most_active_player(&self) -> ClubResult<&Player> {
        let player_id = self.most_active.current().ok_or(ClubError::PlayerNotFound)?;
        self.players.get(player_id).ok_or(ClubError::PlayerNotFound)
    }

    // --- Attenders ---

    pub fn add_attender(&mut self, phone: &str, name: &str, event_id: &str) -> ClubResult<()> {
        let event = self.events.get_mut(event_id).ok_or(ClubError::SportEventNotFound)?;
        enrollment::add_attender(event, Attender::new(phone, name))
    }

    pub fn attender(&self, phone: &str, event_id: &str) -> ClubResult<&Attender> {
        let event = self.events.get(event_id).ok_or(ClubError::SportEventNotFound)?;
        event.attender_by_phone(phone).ok_or(ClubError::AttenderNotFound)
    }

    pub fn attenders(&self, event_id: &str) -> ClubResult<Vec<&Attender>> {
        let event = self.events.get(event_id).ok_or(ClubError::SportEventNotFound)?;
        if event.num_attenders() == 0 {
            return Err(ClubError::NoAttenders);
        }
        Ok(event.attenders().collect())
    }

    pub fn num_attenders(&self, event_id: &str) -> usize {
        self.events.get(event_id).map_or(0, |e| e.num_attenders())
    }

    // --- Roles & workers ---

    pub fn add_role(&mut self, role_id: &str, description: &str) {
        self.roles.add_role(role_id, description);
    }

    pub fn get_role(&self, role_id: &str) -> Option<&Role> {
        self.roles.get_role(role_id)
    }

    pub fn num_roles(&self) -> usize {
        self.roles.num_roles()
    }

    pub fn add_worker(
        &mut self,
        dni: &str,
        name: &str,
        surname: &str,
        birthday: NaiveDate,
        role_id: &str,
    ) -> ClubResult<()> {
        self.roles.add_worker(dni, name, surname, birthday, role_id)
    }

    pub fn get_worker(&self, dni: &str) -> Option<&Worker> {
        self.roles.get_worker(dni)
    }

    pub fn assign_worker(&mut self, dni: &str, event_id: &str) -> ClubResult<()> {
        if !self.events.exists(event_id) {
            return Err(ClubError::SportEventNotFound);
        }
        let worker = self.roles.get_worker(dni).ok_or(ClubError::WorkerNotFound)?.clone();

        let Some(event) = self.events.get_mut(event_id) else {
            return Err(ClubError::SportEventNotFound);
        };
        if event.worker_by_dni(dni).is_some() {
            return Err(ClubError::WorkerAlreadyAssigned);
        }
        event.add_worker(worker);
        Ok(())
    }

    pub fn workers_by_event(&self, event_id: &str) -> ClubResult<&[Worker]> {
        let event = self.events.get(event_id).ok_or(ClubError::SportEventNotFound)?;
        if event.num_workers() == 0 {
            return Err(ClubError::NoWorkers);
        }
        Ok(event.workers())
    }

    pub fn workers_by_role(&self, role_id: &str) -> ClubResult<&[Worker]> {
        self.roles.workers_by_role(role_id)
    }

    pub fn num_workers(&self) -> usize {
        self.roles.num_workers()
    }

    pub fn num_workers_by_role(&self, role_id: &str) -> usize {
        self.roles.num_workers_by_role(role_id)
    }

    pub fn num_workers_by_event(&self, event_id: &str) -> usize {
        self.events.get(event_id).map_or(0, |e| e.num_workers())
    }

    // --- Follow graph ---

    pub fn add_follower(&mut self, player_id: &str, follower_id: &str) -> ClubResult<()> {
        if !self.players.exists(player_id) || !self.players.exists(follower_id) {
            return Err(ClubError::PlayerNotFound);
        }
        self.follow_graph.add_follower(player_id, follower_id);
        Ok(())
    }

    pub fn followers(&self, player_id: &str) -> ClubResult<Vec<&Player>> {
        if !self.players.exists(player_id) {
            return Err(ClubError::PlayerNotFound);
        }
        let ids = self.follow_graph.followers(player_id)?;
        Ok(self.resolve_players(&ids))
    }

    pub fn followings(&self, player_id: &str) -> ClubResult<Vec<&Player>> {
        if !self.players.exists(player_id) {
            return Err(ClubError::PlayerNotFound);
        }
        let ids = self.follow_graph.followings(player_id)?;
        Ok(self.resolve_players(&ids))
    }

    pub fn recommendations(&self, player_id: &str) -> ClubResult<Vec<&Player>> {
        if !self.players.exists(player_id) {
            return Err(ClubError::PlayerNotFound);
        }
        let ids = self.follow_graph.recommendations(player_id)?;
        Ok(self.resolve_players(&ids))
    }

    pub fn num_followers(&self, player_id: &str) -> usize {
        self.follow_graph.num_followers(player_id)
    }

    pub fn num_followings(&self, player_id: &str) -> usize {
        self.follow_graph.num_followings(player_id)
    }

    /// Feed for a player: the posts of everyone in their followings set, in
    /// their original publication order per author
    pub fn posts(&self, player_id: &str) -> ClubResult<Vec<Post>> {
        if !self.players.exists(player_id) {
            return Err(ClubError::PlayerNotFound);
        }
        let sources = self
            .follow_graph
            .followings(player_id)
            .map_err(|_| ClubError::NoPosts)?;

        let mut feed = Vec::new();
        for source in &sources {
            if let Some(author) = self.players.get(source) {
                feed.extend(author.posts().iter().cloned());
            }
        }
        Ok(feed)
    }

    fn resolve_players(&self, ids: &[PlayerId]) -> Vec<&Player> {
        ids.iter().filter_map(|id| self.players.get(id)).collect()
    }
}
