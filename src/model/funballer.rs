use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunballerRecord {
    pub first_name: String,
    #[serde(default)]
    pub team_points: i64,
    #[serde(default)]
    pub player_points: i64,
    #[serde(default)]
    pub points: i64,
}

/// Login directory entry mapping a PIN to a funballer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunballerPin {
    pub first_name: String,
    pub pin: String,
}
