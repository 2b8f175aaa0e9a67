//! Terminal renderer.
//!
//! Draws each view on stdout, either as a text block or a JSON line.

use std::fmt::Write as _;

use async_trait::async_trait;
use common::AppResult;
use domain::DisplayState;
use signup_form::{FeedbackSink, FieldView, FormView};
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Writes views to stdout.
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    format: OutputFormat,
}

impl TerminalRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn draw(&self, view: &FormView) -> AppResult<String> {
        match self.format {
            OutputFormat::Text => Ok(format_text(view)),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(view)?)),
        }
    }
}

#[async_trait]
impl FeedbackSink for TerminalRenderer {
    async fn render(&self, view: &FormView) -> AppResult<()> {
        let out = self.draw(view)?;
        let mut stdout = tokio::io::stdout();
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

fn marker(state: DisplayState) -> &'static str {
    match state {
        DisplayState::Neutral => "[ ]",
        DisplayState::Valid => "[+]",
        DisplayState::Invalid => "[x]",
    }
}

fn field_line(out: &mut String, name: &str, field: &FieldView, shown: &str) {
    let lock = if field.enabled { "" } else { " (locked)" };
    let _ = writeln!(out, "  {} {:<9}{}{}", marker(field.state), name, shown, lock);
    for error in &field.errors {
        let _ = writeln!(out, "        ! {}", error);
    }
}

/// Render a view as a text block.
pub fn format_text(view: &FormView) -> String {
    let mut out = String::from("Sign Up\n");

    field_line(&mut out, "email", &view.email, &view.email.value);

    let password = if view.password_visible {
        view.password.value.clone()
    } else {
        "*".repeat(view.password.value.chars().count())
    };
    field_line(&mut out, "password", &view.password, &password);

    for line in &view.requirements {
        let _ = writeln!(out, "      {} {}", marker(line.state), line.label);
    }

    let submit = if view.submit_enabled { "enabled" } else { "disabled" };
    let _ = writeln!(out, "  submit: {}", submit);
    if let Some(message) = view.message {
        let _ = writeln!(out, "  {}", message);
    }
    out
}
