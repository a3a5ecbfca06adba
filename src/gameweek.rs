use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::London;

use crate::model::gameweek::GameweekRecord;

/// Returned by [`get_deadline_string`] when there is no gameweek left to show.
pub const SEASON_FINISHED: &str = "Season finished.";

/// Number of gameweeks in a season.
pub const LAST_GAMEWEEK: u32 = 38;

// e.g. "Sat 1 January 2022 @ 00:00:00"
const DEADLINE_DISPLAY_FORMAT: &str = "%a %-d %B %Y @ %H:%M:%S";
const DEADLINE_PARSE_FORMAT: &str = "%a %d %B %Y @ %H:%M:%S";

/// Gameweek number of the most recent deadline strictly before `now`, or 0 if
/// the season has not started yet. Input order does not matter.
pub fn determine_current_gameweek(records: &[GameweekRecord], now: DateTime<Utc>) -> u32 {
    records
        .iter()
        .filter(|gw| gw.deadline < now)
        .max_by_key(|gw| gw.deadline)
        .map(|gw| gw.gameweek_no)
        .unwrap_or(0)
}

/// Deadline of the first record for `gameweek_no`, with 0 treated as gameweek 1.
fn find_deadline(gameweek_no: u32, records: &[GameweekRecord]) -> Option<DateTime<Utc>> {
    let gameweek_no = gameweek_no.max(1);
    if gameweek_no > LAST_GAMEWEEK {
        return None;
    }
    records
        .iter()
        .find(|gw| gw.gameweek_no == gameweek_no)
        .map(|gw| gw.deadline)
}

/// Format a UTC instant as London civil time for display.
pub fn format_deadline(deadline: DateTime<Utc>) -> String {
    deadline.with_timezone(&London).format(DEADLINE_DISPLAY_FORMAT).to_string()
}

/// Display deadline for `gameweek_no` in Europe/London time, or [`SEASON_FINISHED`].
pub fn get_deadline_string(gameweek_no: u32, records: &[GameweekRecord]) -> String {
    match find_deadline(gameweek_no, records) {
        Some(deadline) => format_deadline(deadline),
        None => SEASON_FINISHED.to_string(),
    }
}

/// Parse a string produced by [`format_deadline`] back into a UTC instant.
/// London wall times that occur twice (autumn clock change) resolve to the earlier one.
pub fn parse_deadline_string(deadline: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(deadline, DEADLINE_PARSE_FORMAT).ok()?;
    London
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// True when `now` is strictly after the deadline of `gameweek_no`.
/// Always false once the season is finished.
pub fn has_deadline_passed(gameweek_no: u32, records: &[GameweekRecord], now: DateTime<Utc>) -> bool {
    // Compare against the record rather than re-parsing the display string, so the
    // repeated hour of the autumn clock change cannot shift the deadline.
    match find_deadline(gameweek_no, records) {
        Some(deadline) => now > deadline,
        None => false,
    }
}

/// The gameweek picks are currently open for: the current gameweek (at least 1),
/// moved on by one once its deadline has passed.
pub fn determine_default_gameweek_no(records: &[GameweekRecord], now: DateTime<Utc>) -> u32 {
    let mut gameweek_no = determine_current_gameweek(records, now).max(1);
    if has_deadline_passed(gameweek_no, records, now) {
        gameweek_no += 1;
    }
    gameweek_no
}

/// Markdown banner shown above the standings.
pub fn gameweek_info_message(records: &[GameweekRecord], now: DateTime<Utc>) -> String {
    let gameweek_no = determine_default_gameweek_no(records, now);
    if gameweek_no > LAST_GAMEWEEK {
        return format!("**{}**", SEASON_FINISHED);
    }
    let deadline = get_deadline_string(gameweek_no, records);
    format!(
        "**Current Gameweek:** {}  \n**Gameweek {} Deadline:** {}",
        gameweek_no, gameweek_no, deadline
    )
}
