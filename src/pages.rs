use chrono::{DateTime, Utc};
use serde_json::json;

use crate::choices::{build_colour_map, format_choices, visible_choices};
use crate::formatter::{format_fixtures, format_standings, format_valid_team_selections, sort_players};
use crate::gameweek::{determine_default_gameweek_no, gameweek_info_message, get_deadline_string};
use crate::handler::Response;
use crate::model::choice::ChoiceRecord;
use crate::model::fixture::FixtureRecord;
use crate::model::funballer::FunballerRecord;
use crate::model::gameweek::{GameweekRecord, GameweekSummary};
use crate::model::player::PlayerRecord;
use crate::model::valid_team::ValidTeamRecord;
use crate::session::Session;

pub fn standings_page(
    gameweeks: &[GameweekRecord],
    summary: Option<&GameweekSummary>,
    funballers: &[FunballerRecord],
    now: DateTime<Utc>,
) -> Response {
    let mut message = gameweek_info_message(gameweeks, now);
    if let Some(summary) = summary {
        message.push_str("\n\n");
        message.push_str(&summary.text);
    }
    let standings = format_standings(funballers);
    Response::with_data(message, json!({ "standings": standings }))
}

pub fn gameweeks_page(
    gameweek_no: u32,
    gameweeks: &[GameweekRecord],
    fixtures: &[FixtureRecord],
) -> Result<Response, String> {
    let rows = format_fixtures(fixtures)?;
    let message = format!(
        "Gameweek {}:  \nDeadline: {}",
        gameweek_no,
        get_deadline_string(gameweek_no, gameweeks)
    );
    Ok(Response::with_data(message, json!({ "gameweek_no": gameweek_no, "fixtures": rows })))
}

/// Choices of `funballer_name` with their highlight colours and remaining team picks.
pub fn choices_page(
    funballer_name: &str,
    session: &Session,
    gameweeks: &[GameweekRecord],
    choices: Vec<ChoiceRecord>,
    valid_teams: &[ValidTeamRecord],
    now: DateTime<Utc>,
) -> Response {
    let gameweek_no_limit = determine_default_gameweek_no(gameweeks, now);
    let visible = visible_choices(choices, funballer_name, session, gameweek_no_limit);
    let table = format_choices(&visible);
    let colour_map = build_colour_map(&table);
    let remaining = format_valid_team_selections(valid_teams);

    Response::with_data(
        format!("{}'s Choices:", funballer_name),
        json!({
            "funballer_name": funballer_name,
            "default_gameweek_no": gameweek_no_limit,
            "choices": table,
            "team_colours": colour_map.team_colours(),
            "player_colours": colour_map.player_colours(),
            "remaining_team_picks": remaining,
        }),
    )
}

pub fn players_page(team_name: &str, players: &[PlayerRecord]) -> Response {
    let rows = sort_players(players);
    Response::with_data(format!("{} Players:", team_name), json!({ "players": rows }))
}
