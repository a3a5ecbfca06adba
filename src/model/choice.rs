use serde::{Deserialize, Serialize};

/// A funballer's pick for one gameweek, as returned by `funballer/choices/{name}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    #[serde(rename = "gameweek_id__gameweek_no")]
    pub gameweek_no: u32,
    #[serde(rename = "team_choice__team_name")]
    pub team_name: String,
    #[serde(rename = "player_choice__first_name")]
    pub player_first_name: String,
    #[serde(rename = "player_choice__surname")]
    pub player_surname: String,
    // The backend leaves these null until the gameweek has been scored
    #[serde(default)]
    pub team_point_awarded: Option<bool>,
    #[serde(default)]
    pub player_point_awarded: Option<bool>,
}
