//! Session tests driving the calculator through keys and buttons.

use calcpad::core::Phase;
use calcpad::session::RecordingSink;
use calcpad::{ButtonTag, Display, Input, Keypad, Session, Settings};
use std::time::{Duration, Instant};

fn session() -> Session<RecordingSink> {
    Session::new(RecordingSink::new(), &Settings::immediate())
}

async fn press_all(session: &mut Session<RecordingSink>, keys: &[&str]) {
    for key in keys {
        session.press_key(key).await;
    }
}

fn display(previous: &str, current: &str) -> Display {
    Display {
        previous: previous.to_string(),
        current: current.to_string(),
    }
}

#[tokio::test]
async fn keyboard_session_renders_each_step() {
    let mut session = session();
    press_all(&mut session, &["1", "2", "3", "4", "*", "2", "Enter"]).await;

    let frames = &session.sink().frames;
    assert_eq!(frames[4], display("", "1,234"));
    assert_eq!(frames[5], display("1,234 ×", ""));
    assert_eq!(frames[6], display("1,234 ×", "2"));
    assert_eq!(frames[7], display("", "2,468"));
}

#[tokio::test]
async fn division_by_zero_requires_clear() {
    let mut session = session();
    press_all(&mut session, &["5", "/", "0", "="]).await;
    assert_eq!(session.display(), display("", "Error"));
    assert_eq!(session.phase(), Phase::Error);

    session.press_key("7").await;
    assert_eq!(session.calculator().current_operand(), "Error7");

    session.press_key("Escape").await;
    assert_eq!(session.display(), display("", "0"));
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn backspace_edits_current_operand() {
    let mut session = session();
    press_all(&mut session, &["4", ".", "2", "Backspace", "Backspace"]).await;
    assert_eq!(session.calculator().current_operand(), "4");

    session.press_key("Backspace").await;
    assert_eq!(session.calculator().current_operand(), "0");
}

#[tokio::test]
async fn keypad_buttons_drive_the_calculator() {
    let keypad = Keypad::standard();
    let mut session = session();

    for label in ["9", "%", "4", "="] {
        let button = keypad.button(label).unwrap();
        session.press_button(&button.tag).await.unwrap();
    }

    assert_eq!(session.display(), display("", "1"));
}

#[tokio::test]
async fn unknown_operation_button_is_rejected() {
    let mut session = session();
    let result = session
        .press_button(&ButtonTag::Operation("√".to_string()))
        .await;
    assert!(result.is_err());
    assert_eq!(session.sink().frames.len(), 1);
}

#[tokio::test]
async fn result_then_digit_starts_fresh() {
    let mut session = session();
    press_all(&mut session, &["6", "+", "3", "=", "2"]).await;
    assert_eq!(session.display(), display("", "2"));
}

#[tokio::test]
async fn equals_without_pending_operation_still_renders() {
    let mut session = session();
    session.dispatch(Input::Digit('8')).await;
    session.dispatch(Input::Equals).await;

    assert_eq!(session.sink().frames.len(), 3);
    assert_eq!(session.display(), display("", "8"));
    assert_eq!(session.phase(), Phase::Accumulating);
}

#[tokio::test]
async fn compute_waits_for_configured_delay() {
    let settings = Settings {
        compute_delay_ms: 30,
        ..Settings::default()
    };
    let mut session = Session::new(RecordingSink::new(), &settings);
    press_all(&mut session, &["2", "+", "2"]).await;

    let started = Instant::now();
    session.press_key("Enter").await;

    assert!(started.elapsed() >= Duration::from_millis(30));
    assert_eq!(session.display(), display("", "4"));
    assert_eq!(session.sink().calculating, vec![true, false]);
}

#[tokio::test]
async fn history_limit_bounds_recorded_transitions() {
    let settings = Settings {
        compute_delay_ms: 0,
        history_limit: 2,
        ..Settings::default()
    };
    let mut session = Session::new(RecordingSink::new(), &settings);
    press_all(&mut session, &["1", "+", "1", "=", "Escape"]).await;

    let transitions = session.history().transitions();
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[1].to, Phase::Idle);
    assert_eq!(transitions[1].trigger, "AC");
}
