//! Sign-up form state machine.
//!
//! Owns the raw and debounced values of both fields and the one-way
//! `Editing -> Submitted` transition. Timing lives elsewhere: the controller
//! only reports when a debounced update should be scheduled, and accepts
//! settled values when they arrive.

use common::{FormConfig, ValidationMode};
use domain::{
    classify, DisplayState, Field, PasswordPolicy, ValidationResult,
    REQUIREMENT_DIGIT_LABEL, REQUIREMENT_MIN_LENGTH_LABEL, REQUIREMENT_UPPERCASE_LABEL,
    SUBMIT_SUCCESS_MESSAGE,
};

use crate::schema::{FieldErrors, SignUpSchema};
use crate::view::{FieldView, FormView, RequirementView, SubmissionState};

/// What happened to a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Raw value updated; a debounced update should be scheduled
    Scheduled,
    /// Raw and debounced values both updated
    Applied,
    /// Form already submitted; nothing changed
    Locked,
}

/// Result of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// Schema failed; the form stays editable
    Rejected(FieldErrors),
    AlreadySubmitted,
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    raw: String,
    settled: String,
}

/// The form controller.
#[derive(Debug, Clone)]
pub struct FormController {
    policy: PasswordPolicy,
    mode: ValidationMode,
    email: FieldState,
    password: FieldState,
    password_visible: bool,
    submission: SubmissionState,
    submit_attempted: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl FormController {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            policy: config.password_policy,
            mode: config.validation_mode,
            email: FieldState::default(),
            password: FieldState::default(),
            password_visible: false,
            submission: SubmissionState::Editing,
            submit_attempted: false,
        }
    }

    fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// Handle a keystroke in a field.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> InputOutcome {
        if self.submission.is_submitted() {
            tracing::debug!(%field, "Ignoring input on submitted form");
            return InputOutcome::Locked;
        }

        let value = value.into();
        let synchronous = matches!(self.mode, ValidationMode::Synchronous);
        let state = self.field_mut(field);
        if synchronous {
            state.settled.clone_from(&value);
        }
        state.raw = value;

        if synchronous {
            InputOutcome::Applied
        } else {
            InputOutcome::Scheduled
        }
    }

    /// Accept a debounced value for a field.
    ///
    /// # Returns
    /// * `bool` - True if the displayed feedback may have changed
    pub fn settle(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.submission.is_submitted() {
            tracing::debug!(%field, "Dropping settled value on submitted form");
            return false;
        }

        let value = value.into();
        let state = self.field_mut(field);
        if state.settled == value {
            return false;
        }
        state.settled = value;
        tracing::debug!(%field, "Field settled");
        true
    }

    /// Run the schema against the raw values and submit if it passes.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submission.is_submitted() {
            return SubmitOutcome::AlreadySubmitted;
        }

        self.submit_attempted = true;
        let errors = self.schema_errors();
        if !errors.is_empty() {
            tracing::debug!(
                email_errors = errors.email.len(),
                password_errors = errors.password.len(),
                "Submit rejected"
            );
            return SubmitOutcome::Rejected(errors);
        }

        // Accepted values are what the form shows from now on
        self.email.settled.clone_from(&self.email.raw);
        self.password.settled.clone_from(&self.password.raw);
        self.submission = SubmissionState::Submitted;
        tracing::info!("Sign-up form submitted");
        SubmitOutcome::Submitted
    }

    /// Flip the password between masked and plain.
    ///
    /// # Returns
    /// * `bool` - The new visibility
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).raw
    }

    pub fn debounced_value(&self, field: Field) -> &str {
        &self.field(field).settled
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_submitted()
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    /// Rule outcomes for the debounced values.
    pub fn validation(&self) -> ValidationResult {
        ValidationResult::evaluate(&self.email.settled, &self.password.settled, self.policy)
    }

    /// Schema outcome for the raw values.
    pub fn schema_errors(&self) -> FieldErrors {
        SignUpSchema::new(self.email.raw.as_str(), self.password.raw.as_str()).check(self.policy)
    }

    /// Build the state the renderer draws.
    pub fn view(&self) -> FormView {
        let result = self.validation();
        // A cleared input is neutral right away, before its debounce fires
        let email_empty = self.email.raw.is_empty() || self.email.settled.is_empty();
        let password_empty = self.password.raw.is_empty() || self.password.settled.is_empty();
        let submitted = self.submission.is_submitted();

        let errors = if self.submit_attempted && !submitted {
            self.schema_errors()
        } else {
            FieldErrors::default()
        };

        let field_state = |empty: bool, passes: bool| {
            if submitted {
                DisplayState::Valid
            } else {
                classify(empty, passes)
            }
        };

        let requirements = vec![
            RequirementView {
                label: REQUIREMENT_MIN_LENGTH_LABEL,
                state: classify(password_empty, result.password.length_requirement()),
            },
            RequirementView {
                label: REQUIREMENT_UPPERCASE_LABEL,
                state: classify(password_empty, result.password.uppercase),
            },
            RequirementView {
                label: REQUIREMENT_DIGIT_LABEL,
                state: classify(password_empty, result.password.digit),
            },
        ];

        FormView {
            email: FieldView {
                value: self.email.raw.clone(),
                state: field_state(email_empty, result.valid_email),
                enabled: !submitted,
                errors: errors.email,
            },
            password: FieldView {
                value: self.password.raw.clone(),
                state: field_state(password_empty, result.valid_password()),
                enabled: !submitted,
                errors: errors.password,
            },
            password_visible: self.password_visible,
            requirements,
            submit_enabled: !submitted,
            submission: self.submission,
            message: submitted.then_some(SUBMIT_SUCCESS_MESSAGE),
        }
    }
}
