use thiserror::Error;

/// Errors surfaced by the club engine.
///
/// Three families: not-found lookups, empty-state reads, and capacity
/// violations. `CapacityExceeded` is advisory: the player was recorded as a
/// substitute before the error was raised. `LimitExceeded` is not: the
/// attender was discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClubError {
    #[error("player not found")]
    PlayerNotFound,
    #[error("organizing entity not found")]
    OrganizingEntityNotFound,
    #[error("sport event not found")]
    SportEventNotFound,
    #[error("role not found")]
    RoleNotFound,
    #[error("worker not found")]
    WorkerNotFound,
    #[error("attender not found")]
    AttenderNotFound,
    #[error("player is not enrolled in the sport event")]
    PlayerNotInSportEvent,

    #[error("an attender with this phone number already exists")]
    AttenderAlreadyExists,
    #[error("worker is already assigned to the sport event")]
    WorkerAlreadyAssigned,

    #[error("event is full, player was recorded as a substitute")]
    CapacityExceeded,
    #[error("event capacity limit reached")]
    LimitExceeded,

    #[error("no pending activity requests")]
    NoPendingRequests,
    #[error("no activity requests have been submitted")]
    NoRequestsSubmitted,
    #[error("no sport events")]
    NoSportEvents,
    #[error("no ratings")]
    NoRatings,
    #[error("no substitutes")]
    NoSubstitutes,
    #[error("no workers")]
    NoWorkers,
    #[error("no attenders")]
    NoAttenders,
    #[error("no followers")]
    NoFollowers,
    #[error("no followings")]
    NoFollowing,
    #[error("no posts")]
    NoPosts,
    #[error("ranking is empty")]
    EmptyRanking,
}

pub type ClubResult<T> = Result<T, ClubError>;
