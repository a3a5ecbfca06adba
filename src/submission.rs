use serde::{Deserialize, Serialize};

use crate::model::player::PlayerOption;

/// Teams that can be picked this season.
pub const TEAM_NAMES: [&str; 20] = [
    "Arsenal",
    "Aston Villa",
    "Bournemouth",
    "Brentford",
    "Brighton",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Leicester",
    "Leeds",
    "Liverpool",
    "Man City",
    "Man Utd",
    "Newcastle",
    "Nottingham Forest",
    "Southampton",
    "Spurs",
    "West Ham",
    "Wolves",
];

pub fn is_known_team(team_name: &str) -> bool {
    TEAM_NAMES.contains(&team_name)
}

/// Backend id of the player listed under `player_name`.
pub fn resolve_player_id(options: &[PlayerOption], player_name: &str) -> Option<i64> {
    options.iter().find(|p| p.name == player_name).map(|p| p.id)
}

/// A pick ready to be posted to `funballer/choices/submit/{pin}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitChoice {
    pub pin: String,
    pub gameweek_no: u32,
    pub team_choice: String,
    /// Backend id of the picked player.
    pub player_choice: i64,
}

impl SubmitChoice {
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("gameweek_no", self.gameweek_no.to_string()),
            ("team_choice", self.team_choice.clone()),
            ("player_choice", self.player_choice.to_string()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Created,
    Updated,
    Rejected { reason: String },
}

#[derive(Deserialize)]
struct RejectionBody {
    detail: String,
}

impl SubmissionOutcome {
    /// Map the backend's reply to an outcome: 201 created, 200 updated,
    /// 400/404/500 rejected with the body's `detail`.
    pub fn from_response(status: u16, body: &str) -> Result<Self, String> {
        match status {
            201 => Ok(SubmissionOutcome::Created),
            200 => Ok(SubmissionOutcome::Updated),
            400 | 404 | 500 => serde_json::from_str::<RejectionBody>(body)
                .map(|b| SubmissionOutcome::Rejected { reason: b.detail })
                .map_err(|e| format!("Invalid rejection body from backend: {}", e)),
            other => Err(format!("Unexpected status from backend: {}", other)),
        }
    }

    pub fn message(&self) -> String {
        match self {
            SubmissionOutcome::Created => "Gameweek selection submitted! :white_check_mark:".to_string(),
            SubmissionOutcome::Updated => "Gameweek selection updated! :ballot_box_with_check:".to_string(),
            SubmissionOutcome::Rejected { reason } => reason.clone(),
        }
    }
}
