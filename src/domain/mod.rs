pub mod models;

pub use models::{
    ActivityRequest, ActivityType, Attender, Enrollment, EntityId, EventId, Level,
    OrganizingEntity, Player, PlayerId, Post, Rating, RequestId, RequestStatus, Role, Score,
    SportEvent, Worker,
};
