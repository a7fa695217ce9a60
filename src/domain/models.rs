use std::collections::{BTreeMap, VecDeque};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enrollment::Waitlist;

pub type PlayerId = String;
pub type EntityId = String;
pub type EventId = String;
pub type RequestId = String;

/// Player tier derived from the number of ratings submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Rookie, // < 2 ratings
    Pro,    // 2-4 ratings
    Expert, // 5-9 ratings
    Master, // 10-14 ratings
    Legend, // 15+ ratings
}

impl Level {
    pub fn from_ratings_submitted(count: usize) -> Self {
        if count >= 15 {
            Level::Legend
        } else if count >= 10 {
            Level::Master
        } else if count >= 5 {
            Level::Expert
        } else if count >= 2 {
            Level::Pro
        } else {
            Level::Rookie
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Level::Rookie => "rookie",
            Level::Pro => "pro",
            Level::Expert => "expert",
            Level::Master => "master",
            Level::Legend => "legend",
        }
    }
}

/// Feed entry published on a player's own timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
}

impl Post {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    events: Vec<EventId>,
    ratings_submitted: usize,
    posts: Vec<Post>,
}

impl Player {
    pub fn new(player_id: &str, name: &str, surname: &str, birthday: NaiveDate) -> Self {
        Self {
            player_id: player_id.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            birthday,
            events: Vec::new(),
            ratings_submitted: 0,
            posts: Vec::new(),
        }
    }

    /// Level is recomputed from the rating-submission count on every read
    pub fn level(&self) -> Level {
        Level::from_ratings_submitted(self.ratings_submitted)
    }

    pub fn add_event(&mut self, event_id: &str) {
        self.events.push(event_id.to_string());
    }

    pub fn is_in_event(&self, event_id: &str) -> bool {
        self.events.iter().any(|e| e == event_id)
    }

    pub fn events(&self) -> &[EventId] {
        &self.events
    }

    pub fn num_events(&self) -> usize {
        self.events.len()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn record_rating_submission(&mut self) {
        self.ratings_submitted += 1;
    }

    pub fn num_ratings(&self) -> usize {
        self.ratings_submitted
    }

    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizingEntity {
    pub entity_id: EntityId,
    pub name: String,
    pub description: String,
    events: Vec<EventId>,
}

impl OrganizingEntity {
    pub fn new(entity_id: &str, name: &str, description: &str) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            events: Vec::new(),
        }
    }

    pub fn add_event(&mut self, event_id: &str) {
        self.events.push(event_id.to_string());
    }

    pub fn events(&self) -> &[EventId] {
        &self.events
    }

    pub fn num_events(&self) -> usize {
        self.events.len()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub dni: String,
    pub name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub role_id: String,
}

impl Worker {
    pub fn new(dni: &str, name: &str, surname: &str, birthday: NaiveDate, role_id: &str) -> Self {
        Self {
            dni: dni.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            birthday,
            role_id: role_id.to_string(),
        }
    }
}

/// Staff role; owns the workers currently holding it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub role_id: String,
    pub description: String,
    workers: Vec<Worker>,
}

impl Role {
    pub fn new(role_id: &str, description: &str) -> Self {
        Self {
            role_id: role_id.to_string(),
            description: description.to_string(),
            workers: Vec::new(),
        }
    }

    pub fn worker_by_dni(&self, dni: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.dni == dni)
    }

    pub fn add_worker(&mut self, worker: Worker) {
        self.workers.push(worker);
    }

    /// Replace the stored record for a worker keeping the same role
    pub fn replace_worker(&mut self, worker: Worker) {
        if let Some(existing) = self.workers.iter_mut().find(|w| w.dni == worker.dni) {
            *existing = worker;
        }
    }

    pub fn remove_worker(&mut self, dni: &str) -> Option<Worker> {
        let position = self.workers.iter().position(|w| w.dni == dni)?;
        Some(self.workers.remove(position))
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }
}

/// Non-player spectator, identified by phone number within one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attender {
    pub phone: String,
    pub name: String,
}

impl Attender {
    pub fn new(phone: &str, name: &str) -> Self {
        Self {
            phone: phone.to_string(),
            name: name.to_string(),
        }
    }
}

/// Sign-up record; the substitute flag marks an over-capacity enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub player_id: PlayerId,
    pub substitute: bool,
}

impl Enrollment {
    pub fn new(player_id: &str, substitute: bool) -> Self {
        Self {
            player_id: player_id.to_string(),
            substitute,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Score {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Score {
    pub fn value(&self) -> f64 {
        match self {
            Score::One => 1.0,
            Score::Two => 2.0,
            Score::Three => 3.0,
            Score::Four => 4.0,
            Score::Five => 5.0,
        }
    }
}

/// A rating left on a sport event by an enrolled player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub score: Score,
    pub message: Option<String>,
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Indoor,
    Outdoor,
    Mixed,
}

/// Moderation outcome attached to an activity request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Submitted activity request, consumed exactly once by the moderation queue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    pub request_id: RequestId,
    pub event_id: EventId,
    pub entity_id: EntityId,
    pub description: String,
    pub activity_type: ActivityType,
    pub resources: u8,
    pub max: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RequestStatus,
    pub decision_date: Option<NaiveDate>,
    pub decision_note: Option<String>,
}

impl ActivityRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        request_id: &str,
        event_id: &str,
        entity_id: &str,
        description: &str,
        activity_type: ActivityType,
        resources: u8,
        max: usize,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            request_id: request_id.to_string(),
            event_id: event_id.to_string(),
            entity_id: entity_id.to_string(),
            description: description.to_string(),
            activity_type,
            resources,
            max,
            start_date,
            end_date,
            status: RequestStatus::Pending,
            decision_date: None,
            decision_note: None,
        }
    }

    pub fn decide(&mut self, status: RequestStatus, date: NaiveDate, note: &str) {
        self.status = status;
        self.decision_date = Some(date);
        self.decision_note = Some(note.to_string());
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == RequestStatus::Approved
    }

    /// Materialize the sport event described by an approved request
    pub fn to_sport_event(&self) -> SportEvent {
        SportEvent::new(
            &self.event_id,
            &self.description,
            self.activity_type,
            self.start_date,
            self.end_date,
            self.max,
            &self.request_id,
            &self.entity_id,
        )
    }
}

/// Scheduled event created from an approved activity request.
///
/// Owns its enrollment queue, substitute waitlist, ratings, workers and
/// attenders exclusively. Never deleted once registered.
#[derive(Debug, Clone)]
pub struct SportEvent {
    pub event_id: EventId,
    pub description: String,
    pub activity_type: ActivityType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max: usize,
    pub request_id: RequestId,
    pub entity_id: EntityId,
    ratings: Vec<Rating>,
    sum_rating: f64,
    enrollments: VecDeque<Enrollment>,
    substitutes: Waitlist,
    workers: Vec<Worker>,
    attenders: BTreeMap<String, Attender>,
}

impl SportEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_id: &str,
        description: &str,
        activity_type: ActivityType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        max: usize,
        request_id: &str,
        entity_id: &str,
    ) -> Self {
        Self {
            event_id: event_id.to_string(),
            description: description.to_string(),
            activity_type,
            start_date,
            end_date,
            max,
            request_id: request_id.to_string(),
            entity_id: entity_id.to_string(),
            ratings: Vec::new(),
            sum_rating: 0.0,
            enrollments: VecDeque::new(),
            substitutes: Waitlist::new(),
            workers: Vec::new(),
            attenders: BTreeMap::new(),
        }
    }

    pub fn is(&self, event_id: &str) -> bool {
        self.event_id == event_id
    }

    // --- Ratings ---

    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            0.0
        } else {
            self.sum_rating / self.ratings.len() as f64
        }
    }

    pub fn add_rating(&mut self, rating: Rating) {
        self.sum_rating += rating.score.value();
        self.ratings.push(rating);
    }

    pub fn has_ratings(&self) -> bool {
        !self.ratings.is_empty()
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    // --- Enrollments & substitutes ---

    pub fn is_full(&self) -> bool {
        self.enrollments.len() >= self.max
    }

    pub fn push_enrollment(&mut self, player_id: &str) {
        self.enrollments.push_back(Enrollment::new(player_id, false));
    }

    pub fn push_substitute(&mut self, player_id: &str, level: Level) {
        self.substitutes.insert(Enrollment::new(player_id, true), level);
    }

    pub fn enrollments(&self) -> impl Iterator<Item = &Enrollment> {
        self.enrollments.iter()
    }

    pub fn substitutes(&self) -> impl Iterator<Item = &Enrollment> {
        self.substitutes.iter()
    }

    /// Accepted enrollments only; substitutes are counted separately
    pub fn num_players(&self) -> usize {
        self.enrollments.len()
    }

    pub fn num_substitutes(&self) -> usize {
        self.substitutes.len()
    }

    pub fn has_substitutes(&self) -> bool {
        !self.substitutes.is_empty()
    }

    // --- Attenders ---

    pub fn num_attenders(&self) -> usize {
        self.attenders.len()
    }

    pub fn attender_by_phone(&self, phone: &str) -> Option<&Attender> {
        self.attenders.get(phone)
    }

    pub fn push_attender(&mut self, attender: Attender) {
        self.attenders.insert(attender.phone.clone(), attender);
    }

    pub fn attenders(&self) -> impl Iterator<Item = &Attender> {
        self.attenders.values()
    }

    // --- Workers ---

    pub fn worker_by_dni(&self, dni: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.dni == dni)
    }

    pub fn add_worker(&mut self, worker: Worker) {
        self.workers.push(worker);
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }
}
