//! End-to-end tests for the sign-up form session.
//!
//! These tests drive a spawned session through its handle and record every
//! view it renders. Time is paused, so debounce windows elapse instantly.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use common::{AppResult, FormConfig, ValidationMode};
use domain::{
    DisplayState, Field, PasswordPolicy, REQUIREMENT_DIGIT_LABEL, REQUIREMENT_MIN_LENGTH_LABEL,
    REQUIREMENT_UPPERCASE_LABEL, SUBMIT_SUCCESS_MESSAGE,
};
use signup_form::{FeedbackSink, FormHandle, FormSession, FormView, SubmissionState};

// =============================================================================
// Test Sink
// =============================================================================

/// Sink that keeps every rendered view
#[derive(Clone, Default)]
struct RecordingSink {
    views: Arc<Mutex<Vec<FormView>>>,
}

impl RecordingSink {
    fn last(&self) -> FormView {
        self.views
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one render")
    }

    fn count(&self) -> usize {
        self.views.lock().unwrap().len()
    }
}

#[async_trait]
impl FeedbackSink for RecordingSink {
    async fn render(&self, view: &FormView) -> AppResult<()> {
        self.views.lock().unwrap().push(view.clone());
        Ok(())
    }
}

const DEBOUNCE: Duration = Duration::from_millis(1000);

fn spawn(config: FormConfig) -> (FormHandle, RecordingSink) {
    let sink = RecordingSink::default();
    let handle = FormSession::spawn(&config, sink.clone());
    (handle, sink)
}

async fn type_chars(handle: &FormHandle, field: Field, text: &str) {
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        handle.input(field, typed.clone()).await.unwrap();
        sleep(Duration::from_millis(50)).await;
    }
}

fn requirement_state(view: &FormView, label: &str) -> DisplayState {
    view.requirement(label).map(|line| line.state).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_valid_sign_up_submits_and_locks() {
    let (handle, sink) = spawn(FormConfig::default());

    type_chars(&handle, Field::Email, "user@example.com").await;
    type_chars(&handle, Field::Password, "Abcdefg1").await;
    sleep(DEBOUNCE + Duration::from_millis(100)).await;

    let settled = sink.last();
    assert_eq!(settled.email.state, DisplayState::Valid);
    assert_eq!(settled.password.state, DisplayState::Valid);
    assert_eq!(requirement_state(&settled, REQUIREMENT_MIN_LENGTH_LABEL), DisplayState::Valid);
    assert_eq!(requirement_state(&settled, REQUIREMENT_UPPERCASE_LABEL), DisplayState::Valid);
    assert_eq!(requirement_state(&settled, REQUIREMENT_DIGIT_LABEL), DisplayState::Valid);

    handle.submit().await.unwrap();
    sleep(Duration::from_millis(10)).await;

    let submitted = sink.last();
    assert_eq!(submitted.submission, SubmissionState::Submitted);
    assert!(!submitted.email.enabled);
    assert!(!submitted.password.enabled);
    assert!(!submitted.submit_enabled);
    assert_eq!(submitted.message, Some(SUBMIT_SUCCESS_MESSAGE));

    // Further edits do not reopen the form
    handle.input(Field::Email, "other@example.com").await.unwrap();
    handle.submit().await.unwrap();
    sleep(DEBOUNCE * 2).await;

    let view = handle.teardown().await.unwrap();
    assert_eq!(view.submission, SubmissionState::Submitted);
    assert_eq!(view.email.value, "user@example.com");
    assert!(!view.email.enabled);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_sign_up_stays_editing() {
    let (handle, sink) = spawn(FormConfig::default());

    type_chars(&handle, Field::Email, "bad-email").await;
    type_chars(&handle, Field::Password, "short").await;
    sleep(DEBOUNCE + Duration::from_millis(100)).await;

    let settled = sink.last();
    assert_eq!(settled.email.state, DisplayState::Invalid);
    assert_eq!(settled.password.state, DisplayState::Invalid);
    assert_eq!(requirement_state(&settled, REQUIREMENT_MIN_LENGTH_LABEL), DisplayState::Invalid);

    handle.submit().await.unwrap();
    let view = handle.teardown().await.unwrap();

    assert_eq!(view.submission, SubmissionState::Editing);
    assert!(view.email.enabled && view.password.enabled && view.submit_enabled);
    assert_eq!(view.email.state, DisplayState::Invalid);
    assert!(view.message.is_none());
    assert!(!view.email.errors.is_empty());
    assert!(!view.password.errors.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_feedback_waits_for_quiet_period() {
    let (handle, sink) = spawn(FormConfig::default());

    type_chars(&handle, Field::Email, "bad").await;
    let typing = sink.last();
    assert_eq!(typing.email.value, "bad");
    assert_eq!(typing.email.state, DisplayState::Neutral);

    sleep(DEBOUNCE).await;
    assert_eq!(sink.last().email.state, DisplayState::Invalid);

    handle.teardown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_clearing_settled_field_is_neutral_immediately() {
    let (handle, sink) = spawn(FormConfig::default());

    handle.input(Field::Email, "bad").await.unwrap();
    handle.input(Field::Password, "short").await.unwrap();
    sleep(DEBOUNCE + Duration::from_millis(100)).await;
    assert_eq!(sink.last().email.state, DisplayState::Invalid);
    assert_eq!(sink.last().password.state, DisplayState::Invalid);

    handle.input(Field::Email, "").await.unwrap();
    handle.input(Field::Password, "").await.unwrap();
    sleep(Duration::from_millis(10)).await;

    // Still inside the debounce window
    let cleared = sink.last();
    assert_eq!(cleared.email.value, "");
    assert_eq!(cleared.email.state, DisplayState::Neutral);
    assert_eq!(cleared.password.state, DisplayState::Neutral);
    assert!(cleared
        .requirements
        .iter()
        .all(|line| line.state == DisplayState::Neutral));

    handle.teardown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_burst_settles_once_per_field() {
    let (handle, sink) = spawn(FormConfig::default());

    type_chars(&handle, Field::Email, "a@b.co").await;
    let after_typing = sink.count();
    sleep(DEBOUNCE * 3).await;

    // One initial render, one per keystroke, one settle
    assert_eq!(after_typing, 1 + "a@b.co".len());
    assert_eq!(sink.count(), after_typing + 1);

    handle.teardown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_updates() {
    let (handle, sink) = spawn(FormConfig::default());

    handle.input(Field::Email, "a@b.co").await.unwrap();
    handle.input(Field::Password, "Abcdefg1").await.unwrap();
    sleep(Duration::from_millis(10)).await;
    let rendered = sink.count();

    let view = handle.teardown().await.unwrap();
    sleep(DEBOUNCE * 2).await;

    assert_eq!(sink.count(), rendered);
    assert_eq!(view.email.state, DisplayState::Neutral);
    assert_eq!(view.password.state, DisplayState::Neutral);
}

#[tokio::test(start_paused = true)]
async fn test_synchronous_mode_skips_debounce() {
    let (handle, sink) = spawn(FormConfig {
        validation_mode: ValidationMode::Synchronous,
        ..FormConfig::default()
    });

    handle.input(Field::Password, "P4ss").await.unwrap();
    sleep(Duration::from_millis(1)).await;

    let view = sink.last();
    assert_eq!(view.password.state, DisplayState::Invalid);
    assert_eq!(requirement_state(&view, REQUIREMENT_MIN_LENGTH_LABEL), DisplayState::Invalid);
    assert_eq!(requirement_state(&view, REQUIREMENT_DIGIT_LABEL), DisplayState::Valid);

    handle.teardown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_strict_policy_rejects_spaces_on_submit() {
    let (handle, _sink) = spawn(FormConfig {
        validation_mode: ValidationMode::Synchronous,
        password_policy: PasswordPolicy::Strict,
        ..FormConfig::default()
    });

    handle.input(Field::Email, "user@example.com").await.unwrap();
    handle.input(Field::Password, "Abc defg1").await.unwrap();
    handle.submit().await.unwrap();

    let view = handle.teardown().await.unwrap();
    assert_eq!(view.submission, SubmissionState::Editing);
    assert_eq!(view.password.errors, vec!["No spaces allowed".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_password_visibility_renders() {
    let (handle, sink) = spawn(FormConfig::default());

    handle.toggle_password_visibility().await.unwrap();
    sleep(Duration::from_millis(1)).await;
    assert!(sink.last().password_visible);

    handle.toggle_password_visibility().await.unwrap();
    let view = handle.teardown().await.unwrap();
    assert!(!view.password_visible);
}
