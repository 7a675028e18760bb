use crate::client::{Classifier, ClassifiedError};
use crate::history::HistoryStore;
use crate::models::{CheckResult, HistoryItem};

/// What the user sees after a failed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFailure {
    pub error: ClassifiedError,
    /// Inline message derived from the error taxonomy.
    pub message: String,
    /// Set only for `NetworkUnreachable`: the whole service is down, which
    /// warrants a separate alert besides the inline message.
    pub connection_alert: bool,
}

/// Session states. `Analyzing` is the only state with an operation in
/// flight; `submit` is rejected while in it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Analyzing,
    Result(CheckResult),
    Failed(SessionFailure),
}

/// Outcome of a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The cycle ran to completion; state is now `Result` or `Failed`.
    Settled,
    /// A prior analyze had not settled yet; this call was ignored.
    Busy,
    /// The controller moved on (reset) while the call was in flight; the
    /// late result was discarded.
    Superseded,
}

/// Orchestrates one analyze cycle over a [`Classifier`] and a
/// [`HistoryStore`].
///
/// At most one analyze operation is in flight at a time: a `submit` while in
/// `Analyzing` returns [`SubmitOutcome::Busy`] with no side effects. A cycle
/// token guards against a late network response landing after `reset` has
/// already moved the session on.
pub struct SessionController<C: Classifier, S: HistoryStore> {
    classifier: C,
    store: S,
    text: String,
    state: SessionState,
    /// Bumped whenever the store changes, so observers know to re-read it.
    history_refresh: u64,
    cycle: u64,
}

impl<C: Classifier, S: HistoryStore> SessionController<C, S> {
    pub fn new(classifier: C, store: S) -> Self {
        Self {
            classifier,
            store,
            text: String::new(),
            state: SessionState::Idle,
            history_refresh: 0,
            cycle: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The working text (trimmed form once a submit has run).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn history_refresh(&self) -> u64 {
        self.history_refresh
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one analyze cycle for `raw`.
    ///
    /// Empty-after-trim input fails locally with `Validation` and issues no
    /// network call; otherwise exactly one `predict` call is made. On success
    /// the result is recorded into the history store (best effort) before the
    /// session lands in `Result`.
    pub async fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if matches!(self.state, SessionState::Analyzing) {
            return SubmitOutcome::Busy;
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.state = SessionState::Failed(failure_for(ClassifiedError::Validation));
            return SubmitOutcome::Settled;
        }

        self.text = trimmed.to_string();
        self.state = SessionState::Analyzing;
        self.cycle += 1;
        let token = self.cycle;

        let outcome = self.classifier.predict(trimmed).await;

        // A reset (or a newer cycle) while we were suspended makes this
        // response stale; drop it without touching state or history.
        if self.cycle != token || !matches!(self.state, SessionState::Analyzing) {
            return SubmitOutcome::Superseded;
        }

        match outcome {
            Ok(check) => {
                if self.store.append(&self.text, check.label, check.confidence).is_none() {
                    tracing::warn!("check result not recorded to history");
                }
                self.history_refresh += 1;
                self.state = SessionState::Result(check);
            }
            Err(err) => {
                self.state = SessionState::Failed(failure_for(err));
            }
        }
        SubmitOutcome::Settled
    }

    /// Back to `Idle`: clears the working text, result, and error. Also
    /// invalidates any in-flight cycle so its late result is discarded.
    pub fn reset(&mut self) {
        self.cycle += 1;
        self.text.clear();
        self.state = SessionState::Idle;
    }

    /// Load `text` as the working text (e.g. a bundled sample message),
    /// clearing any previous result or error. Ignored while analyzing.
    pub fn select_example(&mut self, text: &str) {
        if matches!(self.state, SessionState::Analyzing) {
            return;
        }
        self.text = text.to_string();
        self.state = SessionState::Idle;
    }

    /// Replay a stored check: the working text and `Result` state come
    /// straight from the item, with no network call. A fresh analysis still
    /// requires an explicit `submit`. Ignored while analyzing.
    pub fn select_history_item(&mut self, item: &HistoryItem) {
        if matches!(self.state, SessionState::Analyzing) {
            return;
        }
        self.text = item.text.clone();
        self.state = SessionState::Result(item.result());
    }

    /// Remove all stored history and notify observers.
    pub fn clear_history(&mut self) {
        self.store.clear();
        self.history_refresh += 1;
    }
}

fn failure_for(err: ClassifiedError) -> SessionFailure {
    SessionFailure {
        message: err.user_message(),
        connection_alert: err.is_unreachable(),
        error: err,
    }
}
