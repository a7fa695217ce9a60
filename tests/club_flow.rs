use chrono::NaiveDate;

use sports_club_events::domain::models::{ActivityType, Level, RequestStatus, Score};
use sports_club_events::{ClubError, SportsClub};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1992, 4, 18).unwrap()
}

fn club_with_players(ids: &[&str]) -> SportsClub {
    sensible_env_logger::safe_init!();
    let mut club = SportsClub::new();
    for id in ids {
        club.add_player(id, "Name", "Surname", birthday());
    }
    club
}

/// Approve a capacity-`max` event called `event_id` organized by `org1`
fn approved_event(club: &mut SportsClub, request_id: &str, event_id: &str, max: usize) {
    club.add_organizing_entity("org1", "City Club", "local organizer");
    club.submit_request(
        request_id,
        event_id,
        "org1",
        "friendly match",
        ActivityType::Outdoor,
        2,
        max,
        date(10),
        date(11),
    )
    .unwrap();
    club.decide_request(RequestStatus::Approved, date(1), "ok").unwrap();
}

#[test]
fn capacity_one_event_accepts_first_and_waitlists_second() {
    let mut club = club_with_players(&["p1", "p2"]);
    approved_event(&mut club, "r1", "v1", 1);

    club.sign_up("p1", "v1").unwrap();
    let err = club.sign_up("p2", "v1").unwrap_err();
    assert_eq!(err, ClubError::CapacityExceeded);

    assert_eq!(club.num_players_by_event("v1"), 1);
    assert_eq!(club.num_substitutes_by_event("v1"), 1);
    let substitutes = club.substitutes("v1").unwrap();
    assert_eq!(substitutes[0].player_id, "p2");
    assert!(substitutes[0].substitute);
}

#[test]
fn moderation_queue_drains_in_submission_order_on_equal_priority() {
    let mut club = club_with_players(&[]);
    club.add_organizing_entity("org1", "City Club", "local organizer");
    for id in ["r1", "r2", "r3"] {
        club.submit_request(
            id,
            &format!("ev-{id}"),
            "org1",
            "match",
            ActivityType::Indoor,
            1,
            5,
            date(10),
            date(11),
        )
        .unwrap();
    }

    for expected in ["r1", "r2", "r3"] {
        let decided = club.decide_request(RequestStatus::Approved, date(1), "ok").unwrap();
        assert_eq!(decided.request_id, expected);
    }
    assert_eq!(club.num_sport_events(), 3);
    assert_eq!(club.num_pending_requests(), 0);
}

#[test]
fn rejection_ratio_counts_non_approvals() {
    let mut club = club_with_players(&[]);
    club.add_organizing_entity("org1", "City Club", "local organizer");

    assert_eq!(club.rejected_ratio().unwrap_err(), ClubError::NoRequestsSubmitted);

    for id in ["r1", "r2"] {
        club.submit_request(id, &format!("ev-{id}"), "org1", "match", ActivityType::Indoor, 1, 5, date(10), date(11))
            .unwrap();
    }
    club.decide_request(RequestStatus::Approved, date(1), "ok").unwrap();
    club.decide_request(RequestStatus::Rejected, date(1), "no venue").unwrap();

    assert_eq!(club.rejected_ratio().unwrap(), 0.5);
    assert_eq!(club.num_rejected_requests(), 1);
}

#[test]
fn submit_requires_known_organizing_entity() {
    let mut club = club_with_players(&[]);
    let err = club
        .submit_request("r1", "v1", "ghost", "match", ActivityType::Indoor, 1, 5, date(10), date(11))
        .unwrap_err();
    assert_eq!(err, ClubError::OrganizingEntityNotFound);
}

#[test]
fn follow_chain_followers_and_followings() {
    let mut club = club_with_players(&["a", "b", "c"]);
    club.add_follower("a", "b").unwrap();
    club.add_follower("b", "c").unwrap();

    let followers_of_a = club.followers("a").unwrap();
    assert_eq!(followers_of_a.len(), 1);
    assert_eq!(followers_of_a[0].player_id, "b");

    let followings_of_b = club.followings("b").unwrap();
    assert_eq!(followings_of_b.len(), 1);
    assert_eq!(followings_of_b[0].player_id, "a");
}

#[test]
fn repeated_follow_keeps_a_single_edge() {
    let mut club = club_with_players(&["a", "b"]);
    club.add_follower("a", "b").unwrap();
    club.add_follower("a", "b").unwrap();
    assert_eq!(club.num_followers("a"), 1);
    assert_eq!(club.num_followings("b"), 1);
}

#[test]
fn recommendation_disappears_after_direct_follow() {
    let mut club = club_with_players(&["a", "b", "c"]);
    club.add_follower("a", "b").unwrap();
    club.add_follower("b", "c").unwrap();

    let recommended = club.recommendations("a").unwrap();
    assert_eq!(recommended.len(), 1);
    assert_eq!(recommended[0].player_id, "c");

    club.add_follower("a", "c").unwrap();
    assert!(club.recommendations("a").unwrap().is_empty());
}

#[test]
fn follow_requires_known_players() {
    let mut club = club_with_players(&["a"]);
    assert_eq!(club.add_follower("a", "ghost").unwrap_err(), ClubError::PlayerNotFound);
    assert_eq!(club.followers("ghost").unwrap_err(), ClubError::PlayerNotFound);
}

#[test]
fn feed_collects_posts_of_followings() {
    let mut club = club_with_players(&["author", "reader"]);
    approved_event(&mut club, "r1", "v1", 5);

    club.sign_up("author", "v1").unwrap();
    club.add_rating("author", "v1", Score::Four, Some("great pitch")).unwrap();

    // author -> reader means the reader's followings set is {author}
    club.add_follower("author", "reader").unwrap();

    let feed = club.posts("reader").unwrap();
    assert_eq!(feed.len(), 2);
    assert!(feed[0].content.contains("signup"));
    assert!(feed[1].content.contains("rating"));

    assert_eq!(club.posts("author").unwrap_err(), ClubError::NoPosts);
}

#[test]
fn rating_updates_best_event_and_player_level() {
    let mut club = club_with_players(&["p1", "p2"]);
    approved_event(&mut club, "r1", "v1", 5);

    club.sign_up("p1", "v1").unwrap();
    assert_eq!(
        club.add_rating("p2", "v1", Score::Five, None).unwrap_err(),
        ClubError::PlayerNotInSportEvent
    );

    club.add_rating("p1", "v1", Score::Five, None).unwrap();
    let best = club.best_sport_event().unwrap();
    assert_eq!(best.event_id, "v1");
    assert_eq!(best.average_rating(), 5.0);

    assert_eq!(club.player_level("p1").unwrap(), Level::Rookie);
    club.add_rating("p1", "v1", Score::Three, None).unwrap();
    assert_eq!(club.player_level("p1").unwrap(), Level::Pro);
    assert_eq!(club.num_ratings_by_player("p1"), 2);
}

#[test]
fn attender_rules_and_entity_ranking() {
    let mut club = club_with_players(&["p1"]);
    approved_event(&mut club, "r1", "v1", 3);

    assert_eq!(club.best_organizing_entities().unwrap_err(), ClubError::NoAttenders);

    club.add_attender("600111222", "Ann", "v1").unwrap();
    assert_eq!(
        club.add_attender("600111222", "Ann", "v1").unwrap_err(),
        ClubError::AttenderAlreadyExists
    );
    club.add_attender("600333444", "Bob", "v1").unwrap();
    club.sign_up("p1", "v1").unwrap();

    // event is at capacity: 1 player + 2 attenders, nothing gets recorded
    let err = club.add_attender("600555666", "Eva", "v1").unwrap_err();
    assert_eq!(err, ClubError::LimitExceeded);
    assert_eq!(club.num_attenders("v1"), 2);

    let ranked = club.best_organizing_entities().unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].entity_id, "org1");

    assert_eq!(club.attender("600111222", "v1").unwrap().name, "Ann");
    assert_eq!(club.attender("999", "v1").unwrap_err(), ClubError::AttenderNotFound);
    assert_eq!(club.best_event_by_attenders().unwrap().event_id, "v1");
}

#[test]
fn workers_are_assigned_once_per_event() {
    let mut club = club_with_players(&[]);
    approved_event(&mut club, "r1", "v1", 3);

    club.add_role("referee", "match referee");
    club.add_worker("123A", "Joan", "Mir", birthday(), "referee").unwrap();

    assert_eq!(club.workers_by_event("v1").unwrap_err(), ClubError::NoWorkers);
    club.assign_worker("123A", "v1").unwrap();
    assert_eq!(club.assign_worker("123A", "v1").unwrap_err(), ClubError::WorkerAlreadyAssigned);
    assert_eq!(club.assign_worker("ghost", "v1").unwrap_err(), ClubError::WorkerNotFound);

    assert_eq!(club.num_workers_by_event("v1"), 1);
    assert_eq!(club.workers_by_role("referee").unwrap().len(), 1);
    assert_eq!(club.num_workers(), 1);
}

#[test]
fn most_active_player_tracks_signups() {
    let mut club = club_with_players(&["p1", "p2"]);
    approved_event(&mut club, "r1", "v1", 5);
    club.submit_request("r2", "v2", "org1", "second match", ActivityType::Indoor, 1, 5, date(12), date(13))
        .unwrap();
    club.decide_request(RequestStatus::Approved, date(2), "ok").unwrap();

    assert_eq!(club.most_active_player().unwrap_err(), ClubError::PlayerNotFound);

    club.sign_up("p2", "v1").unwrap();
    club.sign_up("p1", "v1").unwrap();
    assert_eq!(club.most_active_player().unwrap().player_id, "p2");

    club.sign_up("p1", "v2").unwrap();
    assert_eq!(club.most_active_player().unwrap().player_id, "p1");
}

#[test]
fn event_listings_and_counts() {
    let mut club = club_with_players(&["p1"]);
    assert_eq!(club.all_events().unwrap_err(), ClubError::NoSportEvents);

    approved_event(&mut club, "r1", "v1", 5);
    club.sign_up("p1", "v1").unwrap();

    assert_eq!(club.all_events().unwrap().len(), 1);
    assert_eq!(club.events_by_entity("org1").unwrap()[0].event_id, "v1");
    assert_eq!(club.events_by_player("p1").unwrap()[0].event_id, "v1");
    assert_eq!(club.events_by_entity("ghost").unwrap_err(), ClubError::NoSportEvents);
    assert_eq!(club.num_events_by_entity("org1"), 1);
    assert_eq!(club.num_events_by_player("p1"), 1);
    assert_eq!(club.num_organizing_entities(), 1);
    assert_eq!(club.num_players(), 1);
}
