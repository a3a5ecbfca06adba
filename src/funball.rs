use serde::de::DeserializeOwned;
use tracing::{error, info, info_span, instrument};

use crate::model::choice::ChoiceRecord;
use crate::model::fixture::FixtureRecord;
use crate::model::funballer::FunballerRecord;
use crate::model::gameweek::{GameweekRecord, GameweekSummary};
use crate::model::player::{PlayerOption, PlayerRecord};
use crate::model::valid_team::ValidTeamRecord;
use crate::submission::{SubmissionOutcome, SubmitChoice};

/// Blocking client for the Fantasy Funball backend. `base_url` ends with `/`.
#[derive(Debug, Clone)]
pub struct FunballClient {
    base_url: String,
}

impl FunballClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_body(&self, path: &str) -> Result<String, String> {
        let url = self.url(path);
        let response_result = {
            let _span = info_span!("funball_fetch", url = %url).entered();
            ureq::get(&url).call()
        };
        match response_result {
            Ok(response) => {
                let mut body_reader = response.into_body();
                body_reader.read_to_string().map_err(|e| {
                    error!(error = %e, url = %url, "Failed to read response body");
                    format!("Failed to read response body: {}", e)
                })
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request failed");
                Err(format!("Request failed: {}", e))
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let body = self.get_body(path)?;
        parse_backend_json(&body)
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_all_gameweeks(&self) -> Result<Vec<GameweekRecord>, String> {
        let gameweeks: Vec<GameweekRecord> = self.get_json("gameweek/all/")?;
        info!(count = gameweeks.len(), "Fetched gameweeks");
        Ok(gameweeks)
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_gameweek_fixtures(&self, gameweek_no: u32) -> Result<Vec<FixtureRecord>, String> {
        self.get_json(&format!("gameweek/{}", gameweek_no))
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_funballers(&self) -> Result<Vec<FunballerRecord>, String> {
        self.get_json("funballer/")
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_choices(&self, funballer_name: &str) -> Result<Vec<ChoiceRecord>, String> {
        self.get_json(&format!("funballer/choices/{}", path_segment(funballer_name)))
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_valid_team_selections(&self, funballer_name: &str) -> Result<Vec<ValidTeamRecord>, String> {
        self.get_json(&format!("funballer/choices/valid_teams/{}", path_segment(funballer_name)))
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_team_players(&self, team_name: &str) -> Result<Vec<PlayerRecord>, String> {
        self.get_json(&format!("{}/players/", path_segment(team_name)))
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_player_options(&self) -> Result<Vec<PlayerOption>, String> {
        self.get_json("players/")
    }

    #[instrument(level = "info", skip(self))]
    pub fn get_gameweek_summary(&self) -> Result<GameweekSummary, String> {
        self.get_json("gameweek_summary/")
    }

    #[instrument(level = "info", skip(self))]
    pub fn update_standings(&self) -> Result<(), String> {
        self.get_body("update_standings/").map(|_| ())
    }

    /// Post a pick. Backend rejections come back as `Ok(SubmissionOutcome::Rejected)`.
    #[instrument(level = "info", skip(self, choice), fields(gameweek_no = choice.gameweek_no))]
    pub fn submit_choice(&self, choice: &SubmitChoice) -> Result<SubmissionOutcome, String> {
        let url = self.url(&format!("funballer/choices/submit/{}", path_segment(&choice.pin)));
        let response = ureq::post(&url)
            .config()
            .http_status_as_error(false)
            .build()
            .send_form(choice.form_fields())
            .map_err(|e| {
                error!(error = %e, "Failed to post choice");
                format!("Failed to post choice: {}", e)
            })?;
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        let body = body_reader
            .read_to_string()
            .map_err(|e| format!("Failed to read response body: {}", e))?;
        let outcome = SubmissionOutcome::from_response(status, &body)?;
        info!(status, outcome = ?outcome, "Submitted choice");
        Ok(outcome)
    }
}

/// Deserialize a backend body, reporting anything that is not the expected JSON
/// as invalid input.
pub fn parse_backend_json<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!(error = %e, bytes = body.len(), "Backend returned unexpected JSON");
        format!("Invalid response from backend: {}", e)
    })
}

fn path_segment(raw: &str) -> String {
    raw.trim().replace(' ', "%20")
}
