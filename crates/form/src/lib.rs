//! Sign-up form core.
//!
//! # Modules
//!
//! - **debounce**: trailing-edge debouncer backed by tokio timers
//! - **schema**: form-level validation run on submit
//! - **controller**: field state and the `Editing -> Submitted` machine
//! - **view**: declarative state handed to renderers
//! - **session**: async driver tying controller, debouncers and a sink together
//!
//! Raw keystrokes update the controller immediately; feedback follows the
//! debounced copies, and submission reads the raw values through the schema.

pub mod controller;
pub mod debounce;
pub mod schema;
pub mod session;
pub mod view;

pub use controller::{FormController, InputOutcome, SubmitOutcome};
pub use debounce::Debouncer;
pub use schema::{FieldErrors, SignUpSchema};
pub use session::{FeedbackSink, FormEvent, FormHandle, FormSession};
pub use view::{FieldView, FormView, RequirementView, SubmissionState};
