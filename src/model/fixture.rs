use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub id: i64,
    #[serde(rename = "home_team__team_name")]
    pub home_team: String,
    #[serde(rename = "away_team__team_name")]
    pub away_team: String,
    #[serde(rename = "gameday__date")]
    pub game_date: String,
    /// UTC kickoff, `%Y-%m-%d %H:%M:%S`.
    pub kickoff: String,
}
