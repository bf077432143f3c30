// Unit tests for domain models

use super::*;

#[test]
fn test_time_spec_from_components() {
    let time = TimeSpec::from_components(1, 2, 3, 45);
    assert_eq!(time.centiseconds(), 372_345);
    assert_eq!(time.components(), (1, 2, 3, 45));
    assert_eq!(time.as_seconds(), 3723.45);
}

#[test]
fn test_time_spec_from_seconds_rounds() {
    assert_eq!(TimeSpec::from_seconds(90.5).centiseconds(), 9050);
    assert_eq!(TimeSpec::from_seconds(1.004).centiseconds(), 100);
    assert_eq!(TimeSpec::from_seconds(-3.0), TimeSpec::ZERO);
    assert_eq!(TimeSpec::from_seconds(f64::NAN), TimeSpec::ZERO);
}

#[test]
fn test_parse_clock() {
    let time = TimeSpec::parse_clock("00:01:30.50").unwrap();
    assert_eq!(time.as_seconds(), 90.5);

    assert_eq!(
        TimeSpec::parse_clock("12:00:00.00").unwrap().components(),
        (12, 0, 0, 0)
    );
}

#[test]
fn test_parse_clock_rejects_partial_and_malformed() {
    assert!(TimeSpec::parse_clock("00:01:30.5").is_none());
    assert!(TimeSpec::parse_clock("00:01:30.500").is_none());
    assert!(TimeSpec::parse_clock("N/A bitrate").is_none());
    assert!(TimeSpec::parse_clock("00:61:00.00").is_none());
    assert!(TimeSpec::parse_clock("00:00:60.00").is_none());
    assert!(TimeSpec::parse_clock("-0:00:00.02").is_none());
    assert!(TimeSpec::parse_clock("00-01-30.50").is_none());
}

#[test]
fn test_time_spec_parse_seconds() {
    assert_eq!(TimeSpec::parse("5").unwrap().as_seconds(), 5.0);
    assert_eq!(TimeSpec::parse("123.45").unwrap().as_seconds(), 123.45);
}

#[test]
fn test_time_spec_parse_mm_ss() {
    assert_eq!(TimeSpec::parse("01:30.5").unwrap().as_seconds(), 90.5);
}

#[test]
fn test_time_spec_parse_hh_mm_ss() {
    assert_eq!(TimeSpec::parse("00:00:05").unwrap().as_seconds(), 5.0);
    assert_eq!(TimeSpec::parse("01:02:03.45").unwrap().as_seconds(), 3723.45);
}

#[test]
fn test_time_spec_parse_invalid() {
    assert!(TimeSpec::parse("invalid").is_err());
    assert!(TimeSpec::parse("00:60").is_err());
    assert!(TimeSpec::parse("00:60:00").is_err());
    assert!(TimeSpec::parse("-10").is_err());
    assert!(TimeSpec::parse("1:2:3:4").is_err());
    assert!(TimeSpec::parse("").is_err());
    assert!(TimeSpec::parse("inf").is_err());
}

#[test]
fn test_parse_rejects_float_only_spellings() {
    for text in ["5e2", "1E1", "+5", "00:01:5e1", "01:.5", "5.", ".5", "1.2.3", "NaN"] {
        assert!(TimeSpec::parse(text).is_err(), "accepted {}", text);
    }
}

#[test]
fn test_time_spec_display() {
    let time = TimeSpec::from_components(1, 2, 3, 4);
    assert_eq!(format!("{}", time), "01:02:03.04");
    assert_eq!(TimeSpec::ZERO.to_string(), "00:00:00.00");
}

#[test]
fn test_run_outcome_messages() {
    let ok = RunOutcome {
        exit_code: 0,
        diagnostics: String::new(),
        output_path: PathBuf::from("/videos/a_clip.mp4"),
    };
    assert!(ok.succeeded());
    assert!(ok.message().contains("a_clip.mp4"));
    assert!(ok.clone().into_result().is_ok());

    let silent = RunOutcome {
        exit_code: 3,
        diagnostics: "  \n".to_string(),
        output_path: PathBuf::from("/videos/a_clip.mp4"),
    };
    assert_eq!(silent.message(), "ffmpeg exited with code 3");

    let noisy = RunOutcome {
        exit_code: 1,
        diagnostics: "Invalid data found when processing input\n".to_string(),
        output_path: PathBuf::from("/videos/a_clip.mp4"),
    };
    assert_eq!(noisy.message(), "Invalid data found when processing input");
    match noisy.into_result() {
        Err(TrimError::ProcessFailed {
            exit_code,
            diagnostics,
        }) => {
            assert_eq!(exit_code, 1);
            assert!(diagnostics.contains("Invalid data"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_state_machine_happy_path() {
    let mut machine = ClipStateMachine::new();
    assert_eq!(machine.state(), ClipState::Idle);
    machine.advance(ClipState::Validating).unwrap();
    machine.advance(ClipState::Probing).unwrap();
    machine.advance(ClipState::Running).unwrap();
    machine.advance(ClipState::Succeeded).unwrap();
    assert!(machine.state().is_terminal());
}

#[test]
fn test_state_machine_failure_from_each_phase() {
    for path in [
        vec![ClipState::Validating],
        vec![ClipState::Validating, ClipState::Probing],
        vec![ClipState::Validating, ClipState::Probing, ClipState::Running],
    ] {
        let mut machine = ClipStateMachine::new();
        for state in path {
            machine.advance(state).unwrap();
        }
        machine.advance(ClipState::Failed).unwrap();
        assert_eq!(machine.state(), ClipState::Failed);
    }
}

#[test]
fn test_state_machine_rejects_illegal_transitions() {
    let mut machine = ClipStateMachine::new();
    assert!(machine.advance(ClipState::Running).is_err());
    assert!(machine.advance(ClipState::Failed).is_err());

    machine.advance(ClipState::Validating).unwrap();
    machine.advance(ClipState::Failed).unwrap();
    assert!(machine.advance(ClipState::Validating).is_err());
    assert!(machine.advance(ClipState::Succeeded).is_err());
    assert_eq!(machine.state(), ClipState::Failed);
}
