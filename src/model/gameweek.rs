use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `gameweek/all/`: a gameweek number and its picks deadline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekRecord {
    pub gameweek_no: u32,
    pub deadline: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameweekSummary {
    pub text: String,
}
