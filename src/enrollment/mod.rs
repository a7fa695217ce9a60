pub mod waitlist;

pub use waitlist::Waitlist;

use crate::domain::models::{Attender, Player, SportEvent};
use crate::errors::{ClubError, ClubResult};

/// Enroll a player, or waitlist them when the event is full.
///
/// Below capacity the player joins the FIFO enrollment queue. At capacity
/// the player is recorded as a substitute, ranked by their current level,
/// and `CapacityExceeded` is returned anyway: the error is advisory, the
/// substitute record stands.
pub fn enroll(event: &mut SportEvent, player: &Player) -> ClubResult<()> {
    if !event.is_full() {
        event.push_enrollment(&player.player_id);
        Ok(())
    } else {
        event.push_substitute(&player.player_id, player.level());
        Err(ClubError::CapacityExceeded)
    }
}

/// Register a non-player attender.
///
/// Unlike the player path, an over-capacity attender is NOT recorded; the
/// capacity check counts accepted players and attenders together.
pub fn add_attender(event: &mut SportEvent, attender: Attender) -> ClubResult<()> {
    if event.attender_by_phone(&attender.phone).is_some() {
        return Err(ClubError::AttenderAlreadyExists);
    }
    if event.num_players() + event.num_attenders() >= event.max {
        return Err(ClubError::LimitExceeded);
    }
    event.push_attender(attender);
    Ok(())
}
