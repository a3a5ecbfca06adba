use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::London;
use serde::Serialize;

use crate::model::fixture::FixtureRecord;
use crate::model::funballer::FunballerRecord;
use crate::model::player::PlayerRecord;
use crate::model::valid_team::ValidTeamRecord;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub name: String,
    pub team_points: i64,
    pub player_points: i64,
    pub total_points: i64,
}

/// Standings, highest total first. Ties keep backend order.
pub fn format_standings(records: &[FunballerRecord]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = records
        .iter()
        .map(|f| StandingsRow {
            name: f.first_name.clone(),
            team_points: f.team_points,
            player_points: f.player_points,
            total_points: f.points,
        })
        .collect();
    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    rows
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerRow {
    pub player_name: String,
    pub goals: i64,
    pub assists: i64,
}

/// Players ordered by goals, then assists, then name, all descending.
pub fn sort_players(records: &[PlayerRecord]) -> Vec<PlayerRow> {
    let mut rows: Vec<PlayerRow> = records
        .iter()
        .map(|p| PlayerRow {
            player_name: format!("{} {}", p.first_name, p.surname),
            goals: p.goals,
            assists: p.assists,
        })
        .collect();
    rows.sort_by(|a, b| {
        (b.goals, b.assists, &b.player_name).cmp(&(a.goals, a.assists, &a.player_name))
    });
    rows
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FixtureRow {
    pub home_team: String,
    pub away_team: String,
    pub kickoff: String,
    pub date: String,
}

/// UTC `%Y-%m-%d %H:%M:%S` kickoff to London `%H:%M`.
pub fn format_kickoff(kickoff: &str) -> Result<String, String> {
    let naive = NaiveDateTime::parse_from_str(kickoff, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| format!("Invalid kickoff '{}': {}", kickoff, e))?;
    let local = Utc.from_utc_datetime(&naive).with_timezone(&London);
    Ok(local.format("%H:%M").to_string())
}

/// Fixtures of a gameweek in id order (ids follow kickoff order).
pub fn format_fixtures(records: &[FixtureRecord]) -> Result<Vec<FixtureRow>, String> {
    let mut sorted: Vec<&FixtureRecord> = records.iter().collect();
    sorted.sort_by_key(|f| f.id);
    sorted
        .into_iter()
        .map(|f| {
            Ok(FixtureRow {
                home_team: f.home_team.clone(),
                away_team: f.away_team.clone(),
                kickoff: format_kickoff(&f.kickoff)?,
                date: f.game_date.clone(),
            })
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionColour {
    Green,
    Orange,
    Red,
    None,
}

impl SelectionColour {
    pub fn for_remaining(remaining_selections: i64) -> Self {
        match remaining_selections {
            2 => SelectionColour::Green,
            1 => SelectionColour::Orange,
            0 => SelectionColour::Red,
            _ => SelectionColour::None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidTeamRow {
    pub team_name: String,
    pub remaining_selections: i64,
    pub colour: SelectionColour,
}

pub fn format_valid_team_selections(records: &[ValidTeamRecord]) -> Vec<ValidTeamRow> {
    records
        .iter()
        .map(|t| ValidTeamRow {
            team_name: t.team_name.clone(),
            remaining_selections: t.remaining_selections,
            colour: SelectionColour::for_remaining(t.remaining_selections),
        })
        .collect()
}
