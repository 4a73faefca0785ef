use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use super::handler::SubmitHandler;
use crate::config::{SUBMIT_ERROR_FIELD, SUBMIT_FAILURE_MESSAGE, SUCCESS_RESET_DELAY};
use crate::validation::form_input::{FormInput, ValidationErrors};

/// Where a form instance currently is in its submission lifecycle.
/// Exactly one status is active per form instance at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

struct SessionState<D> {
    data: D,
    status: FormStatus,
    errors: ValidationErrors,
    reset_task: Option<JoinHandle<()>>,
}

/// Per-form-instance submission state machine.
///
/// Owns the form's data, error map, and [`FormStatus`], and drives the
/// Idle -> Loading -> Success/Error lifecycle. One session per mounted form;
/// sessions share nothing with each other. Must live inside a tokio runtime
/// (the post-success reset is a spawned timer task).
///
/// The timer dies with the session: dropping a session aborts any pending
/// auto-reset so nothing mutates state after teardown. An in-flight submit
/// future that the caller drops is simply abandoned; the handler's eventual
/// resolution is ignored.
pub struct FormSession<D: FormInput> {
    inner: Arc<Mutex<SessionState<D>>>,
    reset_delay: Duration,
}

impl<D: FormInput> FormSession<D> {
    /// A session for a freshly mounted, empty form.
    pub fn new() -> Self {
        Self::with_data(D::default())
    }

    pub fn with_data(data: D) -> Self {
        FormSession {
            inner: Arc::new(Mutex::new(SessionState {
                data,
                status: FormStatus::Idle,
                errors: ValidationErrors::new(),
                reset_task: None,
            })),
            reset_delay: SUCCESS_RESET_DELAY,
        }
    }

    /// Override the success auto-reset delay.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn status(&self) -> FormStatus {
        self.lock().status
    }

    pub fn data(&self) -> D {
        self.lock().data.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.lock().errors.clone()
    }

    /// Apply a field change event. Clears only that field's error entry;
    /// the status is untouched.
    pub fn edit(&self, field: &str, value: &str) {
        let mut state = self.lock();
        if state.data.set_field(field, value) {
            state.errors.remove(field);
        }
    }

    /// Run a submit event against the injected handler.
    ///
    /// Invalid data populates the error map and leaves the status where it
    /// was; the handler is not invoked. Valid data moves the session to
    /// `Loading` and hands the sanitized payload to the handler: `Ok` clears
    /// the fields and lands in `Success` (auto-resetting to `Idle` after the
    /// configured delay), `Err` lands in `Error` with a generic `submit`
    /// error and the fields preserved for a retry.
    ///
    /// A submit while one is already in flight is ignored.
    pub async fn submit(&self, handler: &dyn SubmitHandler<D>) -> FormStatus {
        let payload = {
            let mut state = self.lock();
            if state.status == FormStatus::Loading {
                tracing::debug!("submission already in flight, ignoring submit");
                return FormStatus::Loading;
            }

            let result = state.data.validate();
            if !result.is_valid {
                tracing::debug!(fields = result.errors.len(), "form failed validation");
                state.errors = result.errors;
                return state.status;
            }

            state.errors.clear();
            state.status = FormStatus::Loading;
            state.data.sanitized()
        };

        // Lock released while the handler runs; only the Loading guard above
        // keeps the session single-flight.
        match handler.submit(payload).await {
            Ok(()) => {
                let mut state = self.lock();
                state.status = FormStatus::Success;
                state.data = D::default();
                self.schedule_reset(&mut state);
                FormStatus::Success
            }
            Err(e) => {
                tracing::warn!(error = %e, "form submission failed");
                let mut state = self.lock();
                state.status = FormStatus::Error;
                state
                    .errors
                    .insert(SUBMIT_ERROR_FIELD.to_string(), SUBMIT_FAILURE_MESSAGE.to_string());
                FormStatus::Error
            }
        }
    }

    fn schedule_reset(&self, state: &mut SessionState<D>) {
        if let Some(task) = state.reset_task.take() {
            task.abort();
        }

        // Weak handle: the timer must not keep a torn-down session alive,
        // and firing after teardown is a no-op.
        let weak = Arc::downgrade(&self.inner);
        let delay = self.reset_delay;
        state.reset_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                let mut state = inner.lock().expect("form session state poisoned");
                if state.status == FormStatus::Success {
                    state.status = FormStatus::Idle;
                }
                state.reset_task = None;
            }
        }));
    }

    fn lock(&self) -> MutexGuard<'_, SessionState<D>> {
        self.inner.lock().expect("form session state poisoned")
    }
}

impl<D: FormInput> Default for FormSession<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: FormInput> Drop for FormSession<D> {
    fn drop(&mut self) {
        if let Some(task) = self.lock().reset_task.take() {
            task.abort();
        }
    }
}
