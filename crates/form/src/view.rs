//! Declarative form state consumed by renderers.

use domain::DisplayState;
use serde::Serialize;

/// Lifecycle of one mounted form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Editing,
    /// Terminal: no path leads back to editing
    Submitted,
}

impl SubmissionState {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionState::Submitted)
    }
}

/// One input as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Raw value echoed back into the input
    pub value: String,
    pub state: DisplayState,
    pub enabled: bool,
    /// Schema messages, present once a submit has been attempted
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// One password requirement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementView {
    pub label: &'static str,
    pub state: DisplayState,
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub email: FieldView,
    pub password: FieldView,
    pub password_visible: bool,
    /// Min length, uppercase and digit lines, in display order
    pub requirements: Vec<RequirementView>,
    pub submit_enabled: bool,
    pub submission: SubmissionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl FormView {
    /// Find a requirement line by label.
    pub fn requirement(&self, label: &str) -> Option<&RequirementView> {
        self.requirements.iter().find(|line| line.label == label)
    }
}
