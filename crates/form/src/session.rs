//! Async driver for one mounted form.
//!
//! Runs as a single task: rendering-layer events and settled debounce
//! values are handled one at a time, so form state is never shared.

use async_trait::async_trait;
use common::{AppError, AppResult, FormConfig};
use domain::Field;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::controller::{FormController, InputOutcome, SubmitOutcome};
use crate::debounce::Debouncer;
use crate::view::FormView;

/// Events produced by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// New raw value for a field
    Input { field: Field, value: String },
    Submit,
    TogglePasswordVisibility,
    /// The form is being unmounted
    Teardown,
}

impl FormEvent {
    pub fn input(field: Field, value: impl Into<String>) -> Self {
        FormEvent::Input {
            field,
            value: value.into(),
        }
    }
}

/// Receives a fresh view after every state change.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn render(&self, view: &FormView) -> AppResult<()>;
}

type Settled = (Field, String);

struct FieldDebouncers {
    email: Debouncer<String>,
    password: Debouncer<String>,
}

impl FieldDebouncers {
    fn new(config: &FormConfig, settled: mpsc::UnboundedSender<Settled>) -> Self {
        let delay = config.debounce_delay();
        let to_field = |field: Field| {
            let tx = settled.clone();
            move |value: String| {
                // Receiver only goes away once the session has stopped
                let _ = tx.send((field, value));
            }
        };

        Self {
            email: Debouncer::new(to_field(Field::Email), delay),
            password: Debouncer::new(to_field(Field::Password), delay),
        }
    }

    fn get(&mut self, field: Field) -> &mut Debouncer<String> {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    fn cancel_all(&mut self) {
        let email = self.email.cancel();
        let password = self.password.cancel();
        if email || password {
            tracing::debug!(email, password, "Cancelled pending debounced updates");
        }
    }
}

struct SessionCore<S> {
    controller: FormController,
    debouncers: FieldDebouncers,
    sink: S,
}

impl<S: FeedbackSink> SessionCore<S> {
    async fn render(&self) -> AppResult<()> {
        self.sink.render(&self.controller.view()).await
    }

    async fn handle(&mut self, event: FormEvent) -> AppResult<()> {
        match event {
            FormEvent::Input { field, value } => {
                tracing::debug!(%field, len = value.chars().count(), "Keystroke");
                match self.controller.input(field, value.as_str()) {
                    InputOutcome::Scheduled => self.debouncers.get(field).call(value),
                    InputOutcome::Applied => {}
                    InputOutcome::Locked => return Ok(()),
                }
                self.render().await
            }
            FormEvent::Submit => match self.controller.submit() {
                SubmitOutcome::Submitted => {
                    self.debouncers.cancel_all();
                    self.render().await
                }
                SubmitOutcome::Rejected(_) => self.render().await,
                SubmitOutcome::AlreadySubmitted => Ok(()),
            },
            FormEvent::TogglePasswordVisibility => {
                self.controller.toggle_password_visibility();
                self.render().await
            }
            // Handled by the loop
            FormEvent::Teardown => Ok(()),
        }
    }

    async fn settle(&mut self, field: Field, value: String) -> AppResult<()> {
        if self.controller.settle(field, value) {
            self.render().await?;
        }
        Ok(())
    }
}

/// One form instance wired to its debouncers and a sink.
pub struct FormSession<S> {
    core: SessionCore<S>,
    settled_rx: mpsc::UnboundedReceiver<Settled>,
}

impl<S: FeedbackSink + 'static> FormSession<S> {
    pub fn new(config: &FormConfig, sink: S) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        Self {
            core: SessionCore {
                controller: FormController::new(config),
                debouncers: FieldDebouncers::new(config, settled_tx),
                sink,
            },
            settled_rx,
        }
    }

    /// Process events until teardown or until every sender is dropped.
    ///
    /// Pending debounced updates are cancelled before returning, so no
    /// settled value is applied after this resolves.
    ///
    /// # Returns
    /// * `AppResult<FormView>` - The final state of the form
    pub async fn run(self, mut events: mpsc::Receiver<FormEvent>) -> AppResult<FormView> {
        let FormSession {
            mut core,
            mut settled_rx,
        } = self;

        core.render().await?;

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(FormEvent::Teardown) | None => break,
                    Some(event) => core.handle(event).await?,
                },
                Some((field, value)) = settled_rx.recv() => {
                    core.settle(field, value).await?;
                }
            }
        }

        core.debouncers.cancel_all();
        tracing::debug!("Form session torn down");
        Ok(core.controller.view())
    }

    /// Run the session on its own task.
    pub fn spawn(config: &FormConfig, sink: S) -> FormHandle {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let session = Self::new(config, sink);
        let task = tokio::spawn(session.run(rx));
        FormHandle { tx, task }
    }
}

/// Event queue depth for spawned sessions
const EVENT_BUFFER: usize = 64;

/// Sends events to a spawned session.
pub struct FormHandle {
    tx: mpsc::Sender<FormEvent>,
    task: JoinHandle<AppResult<FormView>>,
}

impl FormHandle {
    /// Queue an event for the session.
    ///
    /// Fails with [`AppError::Session`] once the session has stopped; the
    /// error that stopped it is returned by [`FormHandle::teardown`].
    pub async fn send(&self, event: FormEvent) -> AppResult<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| AppError::session("form session has stopped"))
    }

    pub async fn input(&self, field: Field, value: impl Into<String>) -> AppResult<()> {
        self.send(FormEvent::input(field, value)).await
    }

    pub async fn submit(&self) -> AppResult<()> {
        self.send(FormEvent::Submit).await
    }

    pub async fn toggle_password_visibility(&self) -> AppResult<()> {
        self.send(FormEvent::TogglePasswordVisibility).await
    }

    /// Unmount the form and wait for the session to stop.
    pub async fn teardown(self) -> AppResult<FormView> {
        // A stopped session already reported its outcome through the task
        let _ = self.tx.send(FormEvent::Teardown).await;
        self.task
            .await
            .map_err(|e| AppError::session(format!("form session task failed: {}", e)))?
    }
}
