use chrono::{DateTime, TimeZone, Utc};

use fantasy_funball_lambda::funball::parse_backend_json;
use fantasy_funball_lambda::gameweek::{
    SEASON_FINISHED, determine_current_gameweek, determine_default_gameweek_no, format_deadline,
    gameweek_info_message, get_deadline_string, has_deadline_passed, parse_deadline_string,
};
use fantasy_funball_lambda::model::gameweek::GameweekRecord;

fn gw(gameweek_no: u32, deadline: DateTime<Utc>) -> GameweekRecord {
    GameweekRecord { gameweek_no, deadline }
}

fn load_sample() -> Vec<GameweekRecord> {
    let json = std::fs::read_to_string("tests/sample_gameweeks.json").expect("failed to read sample_gameweeks.json");
    parse_backend_json(&json).expect("sample gameweeks should parse")
}

#[test]
fn single_gameweek_example() {
    let records = vec![gw(1, Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())];
    let now = Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();

    assert_eq!(determine_current_gameweek(&records, now), 1);
    assert_eq!(get_deadline_string(1, &records), "Sat 1 January 2022 @ 00:00:00");
    assert!(has_deadline_passed(1, &records, now));
}

#[test]
fn current_gameweek_uses_latest_passed_deadline_regardless_of_order() {
    // Sample file is deliberately out of order
    let records = load_sample();
    let now = Utc.with_ymd_and_hms(2022, 8, 21, 0, 0, 0).unwrap();
    assert_eq!(determine_current_gameweek(&records, now), 3);

    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(determine_current_gameweek(&reversed, now), 3);
}

#[test]
fn current_gameweek_is_zero_before_season() {
    let now = Utc.with_ymd_and_hms(2022, 7, 1, 0, 0, 0).unwrap();
    assert_eq!(determine_current_gameweek(&load_sample(), now), 0);
    assert_eq!(determine_current_gameweek(&[], now), 0);
}

#[test]
fn deadline_equal_to_now_has_not_passed() {
    let deadline = Utc.with_ymd_and_hms(2022, 8, 13, 10, 0, 0).unwrap();
    let records = vec![gw(1, Utc.with_ymd_and_hms(2022, 8, 5, 17, 30, 0).unwrap()), gw(2, deadline)];

    assert_eq!(determine_current_gameweek(&records, deadline), 1);
    assert!(!has_deadline_passed(2, &records, deadline));
    assert!(has_deadline_passed(2, &records, deadline + chrono::Duration::seconds(1)));
}

#[test]
fn gameweek_zero_uses_gameweek_one_deadline() {
    let records = load_sample();
    assert_eq!(get_deadline_string(0, &records), get_deadline_string(1, &records));
}

#[test]
fn deadline_string_is_london_summer_time() {
    let records = load_sample();
    // 17:30 UTC is 18:30 BST
    assert_eq!(get_deadline_string(1, &records), "Fri 5 August 2022 @ 18:30:00");
    assert_eq!(get_deadline_string(2, &records), "Sat 13 August 2022 @ 11:00:00");
}

#[test]
fn missing_or_out_of_range_gameweek_is_season_finished() {
    let records = load_sample();
    assert_eq!(get_deadline_string(5, &records), SEASON_FINISHED);
    assert_eq!(get_deadline_string(39, &[gw(39, Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap())]), SEASON_FINISHED);
    assert_eq!(get_deadline_string(1, &[]), SEASON_FINISHED);
}

#[test]
fn finished_season_deadline_never_passes() {
    let records = load_sample();
    let far_future = Utc.with_ymd_and_hms(2040, 1, 1, 0, 0, 0).unwrap();
    assert!(!has_deadline_passed(5, &records, far_future));
    assert!(!has_deadline_passed(1, &[], far_future));
}

#[test]
fn duplicate_gameweek_numbers_use_first_record() {
    let records = vec![
        gw(1, Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()),
        gw(1, Utc.with_ymd_and_hms(2022, 2, 1, 0, 0, 0).unwrap()),
    ];
    assert_eq!(get_deadline_string(1, &records), "Sat 1 January 2022 @ 00:00:00");
}

#[test]
fn deadline_string_round_trips_to_the_second() {
    for deadline in [
        Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2022, 8, 5, 17, 30, 45).unwrap(),
        Utc.with_ymd_and_hms(2023, 3, 26, 1, 0, 0).unwrap(),
        // First 01:30 of the autumn clock change (BST)
        Utc.with_ymd_and_hms(2022, 10, 30, 0, 30, 0).unwrap(),
    ] {
        let formatted = format_deadline(deadline);
        assert_eq!(parse_deadline_string(&formatted), Some(deadline), "formatted was: {}", formatted);
    }
    assert_eq!(parse_deadline_string(SEASON_FINISHED), None);
}

#[test]
fn repeated_autumn_hour_does_not_shift_deadline() {
    // 01:30 UTC on 30 Oct 2022 is the second 01:30 in London
    let deadline = Utc.with_ymd_and_hms(2022, 10, 30, 1, 30, 0).unwrap();
    let records = vec![gw(12, deadline)];
    assert_eq!(get_deadline_string(12, &records), "Sun 30 October 2022 @ 01:30:00");

    let now = Utc.with_ymd_and_hms(2022, 10, 30, 1, 0, 0).unwrap();
    assert!(!has_deadline_passed(12, &records, now));
}

#[test]
fn default_gameweek_moves_on_after_deadline() {
    let records = load_sample();

    let before_season = Utc.with_ymd_and_hms(2022, 7, 1, 0, 0, 0).unwrap();
    assert_eq!(determine_default_gameweek_no(&records, before_season), 1);

    let during_gw2 = Utc.with_ymd_and_hms(2022, 8, 14, 0, 0, 0).unwrap();
    assert_eq!(determine_default_gameweek_no(&records, during_gw2), 3);
}

#[test]
fn info_message_shows_next_deadline() {
    let records = load_sample();
    let now = Utc.with_ymd_and_hms(2022, 8, 14, 0, 0, 0).unwrap();
    assert_eq!(
        gameweek_info_message(&records, now),
        "**Current Gameweek:** 3  \n**Gameweek 3 Deadline:** Sat 20 August 2022 @ 11:00:00"
    );
}

#[test]
fn info_message_after_last_gameweek() {
    let records = vec![gw(38, Utc.with_ymd_and_hms(2023, 5, 28, 14, 0, 0).unwrap())];
    let now = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(gameweek_info_message(&records, now), "**Season finished.**");
}
