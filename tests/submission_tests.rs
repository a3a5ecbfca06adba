use fantasy_funball_lambda::model::player::PlayerOption;
use fantasy_funball_lambda::submission::{SubmissionOutcome, SubmitChoice, is_known_team, resolve_player_id};

#[test]
fn maps_backend_status_to_outcome() {
    assert_eq!(SubmissionOutcome::from_response(201, "{}"), Ok(SubmissionOutcome::Created));
    assert_eq!(SubmissionOutcome::from_response(200, ""), Ok(SubmissionOutcome::Updated));

    for status in [400, 404, 500] {
        let outcome = SubmissionOutcome::from_response(status, r#"{"detail": "Gameweek deadline has passed"}"#)
            .expect("rejection should parse");
        assert_eq!(outcome, SubmissionOutcome::Rejected { reason: "Gameweek deadline has passed".to_string() });
        assert_eq!(outcome.message(), "Gameweek deadline has passed");
    }
}

#[test]
fn malformed_rejection_and_unknown_status_are_errors() {
    let err = SubmissionOutcome::from_response(400, "<html>oops</html>").unwrap_err();
    assert!(err.starts_with("Invalid rejection body"), "error was: {}", err);

    let err = SubmissionOutcome::from_response(302, "").unwrap_err();
    assert_eq!(err, "Unexpected status from backend: 302");
}

#[test]
fn outcome_messages() {
    assert!(SubmissionOutcome::Created.message().starts_with("Gameweek selection submitted!"));
    assert!(SubmissionOutcome::Updated.message().starts_with("Gameweek selection updated!"));
}

#[test]
fn outcome_serializes_with_tag() {
    let value = serde_json::to_value(SubmissionOutcome::Rejected { reason: "Invalid pin".to_string() }).unwrap();
    assert_eq!(value, serde_json::json!({ "outcome": "rejected", "reason": "Invalid pin" }));
    let value = serde_json::to_value(SubmissionOutcome::Created).unwrap();
    assert_eq!(value, serde_json::json!({ "outcome": "created" }));
}

#[test]
fn form_fields_match_backend_names() {
    let choice = SubmitChoice {
        pin: "1234".to_string(),
        gameweek_no: 7,
        team_choice: "Spurs".to_string(),
        player_choice: 42,
    };
    let fields = choice.form_fields();
    assert_eq!(fields[0], ("gameweek_no", "7".to_string()));
    assert_eq!(fields[1], ("team_choice", "Spurs".to_string()));
    assert_eq!(fields[2], ("player_choice", "42".to_string()));
}

#[test]
fn resolves_player_and_team_names() {
    let options = vec![
        PlayerOption { id: 10, name: "Harry Kane".to_string() },
        PlayerOption { id: 11, name: "Son Heung-min".to_string() },
    ];
    assert_eq!(resolve_player_id(&options, "Son Heung-min"), Some(11));
    assert_eq!(resolve_player_id(&options, "Hugo Lloris"), None);

    assert!(is_known_team("Nottingham Forest"));
    assert!(!is_known_team("Norwich"));
}
