//! End-to-end roster integration tests
//!
//! These tests drive the public `RosterService` API through complete flows:
//! - Team and player registration with its error ordering
//! - Captain assignment and reassignment
//! - Per-team aggregations and the league-wide top list
//! - Away jersey selection

use chrono::NaiveDate;
use roster::domain::player::PlayerEvent;
use roster::domain::repositories::PlayerRepository;
use roster::domain::team::TeamEvent;
use roster::domain::RosterEvent;
use roster::{RosterError, RosterService};
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Reds (red/white) and Blues (red/black)
fn setup_two_teams() -> RosterService {
    let mut roster = RosterService::new();
    roster
        .register_team(1, "Reds", date(1990, 5, 1), "red", "white")
        .expect("register Reds");
    roster
        .register_team(2, "Blues", date(1994, 8, 20), "red", "black")
        .expect("register Blues");
    roster
}

/// Reds with players 1, 2, 3 at skills 50, 90, 70
fn setup_reds_roster() -> RosterService {
    let mut roster = setup_two_teams();
    for (id, skill) in [(1, 50), (2, 90), (3, 70)] {
        roster
            .register_player(
                id,
                1,
                format!("Player {}", id),
                date(1995, 1, id as u32),
                skill,
                Decimal::from(1000 * id),
            )
            .expect("register player");
    }
    roster
}

fn captains_of(roster: &RosterService, team_id: i64) -> Vec<i64> {
    roster
        .player_store()
        .find_by_team(team_id)
        .iter()
        .filter(|p| p.is_captain())
        .map(|p| p.id())
        .collect()
}

#[test]
fn test_duplicate_team_identifier_is_rejected() {
    let mut roster = setup_two_teams();

    let result = roster.register_team(1, "Other Reds", date(2000, 1, 1), "pink", "white");

    assert_eq!(result, Err(RosterError::duplicate_team(1)));
    assert_eq!(roster.team_name(1).unwrap(), "Reds");
}

#[test]
fn test_duplicate_player_identifier_is_rejected_across_teams() {
    let mut roster = setup_reds_roster();

    let result = roster.register_player(2, 2, "Impostor", date(2000, 1, 1), 10, Decimal::ONE);

    assert_eq!(result, Err(RosterError::duplicate_player(2)));
    assert_eq!(roster.player_name(2).unwrap(), "Player 2");
    assert!(roster.team_players(2).unwrap().is_empty());
}

#[test]
fn test_register_player_on_unknown_team() {
    let mut roster = setup_two_teams();

    let result = roster.register_player(1, 42, "Lost", date(2000, 1, 1), 10, Decimal::ONE);

    assert_eq!(result, Err(RosterError::TeamNotFound(42)));
}

#[test]
fn test_register_player_with_invalid_arguments() {
    let mut roster = setup_two_teams();

    for (id, skill) in [(-1, 50), (1, -1), (1, 101)] {
        let result = roster.register_player(id, 1, "Bad", date(2000, 1, 1), skill, Decimal::ONE);
        assert!(
            matches!(result, Err(RosterError::InvalidArgument(_))),
            "id {} skill {} should be invalid, got {:?}",
            id,
            skill,
            result
        );
    }
    assert!(roster.team_players(1).unwrap().is_empty());
}

#[test]
fn test_skill_bounds_are_accepted() {
    let mut roster = setup_two_teams();

    assert!(roster
        .register_player(1, 1, "Zero", date(2000, 1, 1), 0, Decimal::ONE)
        .is_ok());
    assert!(roster
        .register_player(2, 1, "Hundred", date(2000, 1, 1), 100, Decimal::ONE)
        .is_ok());
}

#[test]
fn test_captain_flow() {
    let mut roster = setup_reds_roster();

    assert_eq!(roster.team_captain(1), Err(RosterError::CaptainNotSet(1)));

    roster.set_captain(1).expect("set captain");
    assert_eq!(roster.team_captain(1), Ok(1));

    roster.set_captain(3).expect("reassign captain");
    assert_eq!(roster.team_captain(1), Ok(3));
    assert_eq!(captains_of(&roster, 1), vec![3]);

    let relieved = roster.history().iter().any(|event| {
        *event
            == RosterEvent::Player(PlayerEvent::CaptainRelieved {
                player_id: 1,
                team_id: 1,
            })
    });
    assert!(relieved, "previous captain should be relieved");
}

#[test]
fn test_captains_are_per_team() {
    let mut roster = setup_reds_roster();
    roster
        .register_player(10, 2, "Blue Captain", date(1990, 1, 1), 60, Decimal::ONE)
        .unwrap();

    roster.set_captain(10).unwrap();
    roster.set_captain(2).unwrap();

    assert_eq!(roster.team_captain(2), Ok(10));
    assert_eq!(roster.team_captain(1), Ok(2));
    assert_eq!(captains_of(&roster, 1), vec![2]);
    assert_eq!(captains_of(&roster, 2), vec![10]);
}

#[test]
fn test_set_captain_unknown_player() {
    let mut roster = setup_reds_roster();

    let result = roster.set_captain(99);

    assert_eq!(result, Err(RosterError::unknown_player(99)));
}

#[test]
fn test_team_captain_unknown_team() {
    let roster = setup_reds_roster();
    assert_eq!(roster.team_captain(7), Err(RosterError::TeamNotFound(7)));
}

#[test]
fn test_best_player_and_top_players() {
    let roster = setup_reds_roster();

    assert_eq!(roster.best_player(1), Ok(2));
    assert_eq!(roster.top_players(2), vec![2, 3]);
}

#[test]
fn test_top_players_spans_teams_and_truncates() {
    let mut roster = setup_reds_roster();
    roster
        .register_player(4, 2, "Blue Star", date(1990, 1, 1), 95, Decimal::ONE)
        .unwrap();
    roster
        .register_player(5, 2, "Blue Twin", date(1990, 1, 1), 70, Decimal::ONE)
        .unwrap();

    assert_eq!(roster.top_players(10), vec![4, 2, 3, 5, 1]);
    assert_eq!(roster.top_players(3), vec![4, 2, 3]);
}

#[test]
fn test_top_players_without_players() {
    let roster = setup_two_teams();
    assert!(roster.top_players(5).is_empty());
}

#[test]
fn test_oldest_and_highest_paid() {
    let roster = setup_reds_roster();

    assert_eq!(roster.oldest_player(1), Ok(1));
    assert_eq!(roster.highest_paid_player(1), Ok(3));
    assert_eq!(roster.player_salary(3), Ok(Decimal::from(3000)));
}

#[test]
fn test_aggregations_on_team_without_players() {
    let roster = setup_reds_roster();

    assert!(matches!(
        roster.best_player(2),
        Err(RosterError::PlayerNotFound(_))
    ));
    assert!(matches!(
        roster.oldest_player(2),
        Err(RosterError::PlayerNotFound(_))
    ));
    assert!(matches!(
        roster.highest_paid_player(2),
        Err(RosterError::PlayerNotFound(_))
    ));
}

#[test]
fn test_unknown_identifiers() {
    let roster = setup_reds_roster();

    assert_eq!(roster.team_name(9), Err(RosterError::TeamNotFound(9)));
    assert_eq!(roster.team_players(9), Err(RosterError::TeamNotFound(9)));
    assert_eq!(roster.best_player(9), Err(RosterError::TeamNotFound(9)));
    assert_eq!(roster.oldest_player(9), Err(RosterError::TeamNotFound(9)));
    assert_eq!(roster.highest_paid_player(9), Err(RosterError::TeamNotFound(9)));
    assert_eq!(roster.team_summary(9), Err(RosterError::TeamNotFound(9)));
    assert_eq!(roster.player_name(9), Err(RosterError::unknown_player(9)));
    assert_eq!(roster.player_salary(9), Err(RosterError::unknown_player(9)));
}

#[test]
fn test_listings_are_ascending() {
    let mut roster = RosterService::new();
    for id in [8, 3, 5] {
        roster
            .register_team(id, format!("Team {}", id), date(2000, 1, 1), "a", "b")
            .unwrap();
    }
    for id in [30, 10, 20] {
        roster
            .register_player(id, 5, "P", date(2000, 1, 1), 50, Decimal::ONE)
            .unwrap();
    }

    assert_eq!(roster.teams(), vec![3, 5, 8]);
    assert_eq!(roster.team_players(5).unwrap(), vec![10, 20, 30]);
}

#[test]
fn test_away_jersey_color() {
    let mut roster = setup_two_teams();
    roster
        .register_team(3, "Greens", date(2003, 2, 11), "green", "yellow")
        .unwrap();

    assert_eq!(roster.away_jersey_color(1, 2).unwrap(), "black");
    assert_eq!(roster.away_jersey_color(2, 1).unwrap(), "white");
    assert_eq!(roster.away_jersey_color(1, 3).unwrap(), "green");
    assert_eq!(
        roster.away_jersey_color(1, 9),
        Err(RosterError::TeamNotFound(9))
    );
    assert_eq!(
        roster.away_jersey_color(9, 1),
        Err(RosterError::TeamNotFound(9))
    );
}

#[test]
fn test_team_summary() {
    let mut roster = setup_reds_roster();
    roster.set_captain(2).unwrap();

    let summary = roster.team_summary(1).unwrap();

    assert_eq!(summary.id, 1);
    assert_eq!(summary.name, "Reds");
    assert_eq!(summary.created_on, date(1990, 5, 1));
    assert_eq!(summary.colors.primary, "red");
    assert_eq!(summary.players, vec![1, 2, 3]);
    assert_eq!(summary.captain, Some(2));
    assert_eq!(summary.best_player, Some(2));
    assert_eq!(summary.oldest_player, Some(1));
    assert_eq!(summary.highest_paid_player, Some(3));
    assert_eq!(summary.payroll, Decimal::from(6000));
}

#[test]
fn test_history_records_registrations_in_order() {
    let roster = setup_reds_roster();

    let history = roster.history();

    assert_eq!(history.len(), 5);
    assert!(matches!(
        &history[0],
        RosterEvent::Team(TeamEvent::Registered { team_id: 1, .. })
    ));
    assert_eq!(
        history[4],
        RosterEvent::Player(PlayerEvent::Registered {
            player_id: 3,
            team_id: 1
        })
    );
}
