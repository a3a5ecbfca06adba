use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub first_name: String,
    pub surname: String,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub assists: i64,
}

/// Entry of the global `players/` listing used to resolve a picked player to its id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerOption {
    pub id: i64,
    pub name: String,
}
