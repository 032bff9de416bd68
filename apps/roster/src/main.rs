use chrono::NaiveDate;
use roster::config::RosterConfig;
use roster::{RosterError, RosterResult, RosterService};
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> RosterResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RosterError::InvalidArgument(format!("invalid date {}-{}-{}", year, month, day))
    })
}

/// Registers the demo league
fn seed(roster: &mut RosterService) -> RosterResult<()> {
    roster.register_team(1, "Reds", date(1990, 5, 1)?, "red", "white")?;
    roster.register_team(2, "Blues", date(1994, 8, 20)?, "red", "black")?;
    roster.register_team(3, "Greens", date(2003, 2, 11)?, "green", "yellow")?;

    roster.register_player(1, 1, "Ana", date(1996, 4, 2)?, 50, Decimal::new(120_000, 2))?;
    roster.register_player(2, 1, "Bruno", date(1992, 11, 30)?, 90, Decimal::new(450_000, 2))?;
    roster.register_player(3, 1, "Carla", date(1999, 6, 15)?, 70, Decimal::new(210_000, 2))?;
    roster.register_player(4, 2, "Davi", date(1988, 1, 9)?, 85, Decimal::new(380_000, 2))?;
    roster.register_player(5, 2, "Elis", date(2001, 3, 3)?, 64, Decimal::new(99_000, 2))?;

    roster.set_captain(1)?;
    roster.set_captain(3)?;
    roster.set_captain(4)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RosterConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let mut roster = RosterService::new();
    seed(&mut roster)?;

    tracing::info!(
        top = ?roster.top_players(config.top_players),
        "top {} players",
        config.top_players
    );
    let away_color = roster.away_jersey_color(1, 2)?;
    tracing::info!(color = %away_color, "Blues jersey when visiting Reds");
    tracing::info!(events = roster.history().len(), "roster seeded");

    let summaries = roster
        .teams()
        .into_iter()
        .map(|id| roster.team_summary(id))
        .collect::<RosterResult<Vec<_>>>()?;

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
