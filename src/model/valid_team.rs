use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidTeamRecord {
    pub team_name: String,
    pub remaining_selections: i64,
}
