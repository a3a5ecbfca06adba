use std::env;

use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::funball::FunballClient;
use crate::gameweek::{LAST_GAMEWEEK, determine_default_gameweek_no};
use crate::model::funballer::FunballerPin;
use crate::pages;
use crate::session::{Session, normalise_funballer_name};
use crate::submission::{SubmitChoice, is_known_team, resolve_player_id};

/// Shown when the choices for a funballer cannot be read.
pub const INVALID_FUNBALLER: &str = "Please enter a valid funballer name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Standings,
    Gameweeks,
    Choices,
    SubmitChoice,
    Players,
    UpdateStandings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub page: Page,
    /// Falls back to the FANTASY_FUNBALL_URL environment variable.
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub funballer_name: Option<String>,
    #[serde(default)]
    pub pin: Option<String>,
    #[serde(default)]
    pub gameweek_no: Option<u32>,
    #[serde(default)]
    pub team_choice: Option<String>,
    #[serde(default)]
    pub player_choice: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    /// PIN directory used to log a funballer in.
    #[serde(default)]
    pub funballers: Vec<FunballerPin>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Response {
    pub fn message(message: impl Into<String>) -> Self {
        Self { message: message.into(), data: None }
    }

    pub fn with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self { message: message.into(), data: Some(data) }
    }
}

#[instrument(skip(event), fields(page = ?event.payload.page))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;

    let base_url = match payload.backend_url.clone().or_else(|| env::var("FANTASY_FUNBALL_URL").ok()) {
        Some(url) => url,
        None => {
            error!("No backend_url in request and FANTASY_FUNBALL_URL is not set");
            return Err("backend_url must be provided or FANTASY_FUNBALL_URL set".into());
        }
    };
    let client = FunballClient::new(base_url);

    // ureq is blocking, so the page runs on the blocking pool and owns its inputs.
    let handle = tokio::task::spawn_blocking(move || run_page(&client, &payload, Utc::now()));

    match handle.await {
        Ok(Ok(response)) => {
            info!(message = %response.message, "Page rendered");
            Ok(response)
        }
        Ok(Err(message)) => {
            error!(error = %message, "Page failed");
            Ok(Response::message(message))
        }
        Err(e) => Ok(Response::message(format!("Page task join error: {}", e))),
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("{} is required", field))
}

/// Fetch what `request.page` needs from the backend and assemble the response.
pub fn run_page(client: &FunballClient, request: &Request, now: DateTime<Utc>) -> Result<Response, String> {
    match request.page {
        Page::Standings => {
            let gameweeks = client.get_all_gameweeks()?;
            let funballers = client.get_funballers()?;
            let summary = match client.get_gameweek_summary() {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!(error = %e, "Gameweek summary unavailable");
                    None
                }
            };
            Ok(pages::standings_page(&gameweeks, summary.as_ref(), &funballers, now))
        }
        Page::Gameweeks => {
            let gameweeks = client.get_all_gameweeks()?;
            let gameweek_no = request
                .gameweek_no
                .unwrap_or_else(|| determine_default_gameweek_no(&gameweeks, now))
                .clamp(1, LAST_GAMEWEEK);
            let fixtures = client.get_gameweek_fixtures(gameweek_no)?;
            pages::gameweeks_page(gameweek_no, &gameweeks, &fixtures)
        }
        Page::Choices => {
            let funballer_name = normalise_funballer_name(required(&request.funballer_name, "funballer_name")?);
            let session = match request.pin.as_deref() {
                Some(pin) => Session::login(pin, &request.funballers),
                None => Session::anonymous(),
            };
            let gameweeks = client.get_all_gameweeks()?;
            let choices = client.get_choices(&funballer_name).map_err(|e| {
                warn!(error = %e, funballer = %funballer_name, "Could not read choices");
                INVALID_FUNBALLER.to_string()
            })?;
            let valid_teams = client.get_valid_team_selections(&funballer_name)?;
            Ok(pages::choices_page(&funballer_name, &session, &gameweeks, choices, &valid_teams, now))
        }
        Page::SubmitChoice => {
            let pin = required(&request.pin, "pin")?;
            let team_choice = required(&request.team_choice, "team_choice")?;
            let player_name = required(&request.player_choice, "player_choice")?;
            if !is_known_team(team_choice) {
                return Err(format!("Unknown team: {}", team_choice));
            }
            let gameweek_no = match request.gameweek_no {
                Some(n) => n,
                None => determine_default_gameweek_no(&client.get_all_gameweeks()?, now),
            };
            let player_options = client.get_player_options()?;
            let player_choice = resolve_player_id(&player_options, player_name)
                .ok_or_else(|| format!("Unknown player: {}", player_name))?;

            let choice = SubmitChoice {
                pin: pin.to_string(),
                gameweek_no,
                team_choice: team_choice.to_string(),
                player_choice,
            };
            let outcome = client.submit_choice(&choice)?;
            let data = serde_json::to_value(&outcome).map_err(|e| e.to_string())?;
            Ok(Response::with_data(outcome.message(), data))
        }
        Page::Players => {
            let team_name = required(&request.team_name, "team_name")?;
            if !is_known_team(team_name) {
                return Err(format!("Unknown team: {}", team_name));
            }
            let players = client.get_team_players(team_name)?;
            Ok(pages::players_page(team_name, &players))
        }
        Page::UpdateStandings => {
            client.update_standings()?;
            Ok(Response::message("Standings updated! :white_check_mark:"))
        }
    }
}
