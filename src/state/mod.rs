//! View state for one document

use crate::aggregate::AggregateError;
use crate::types::AggregationResult;

/// Projection chosen for the table renderers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Json,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Json => "JSON",
        }
    }

    pub fn variants() -> &'static [ViewMode] {
        &[ViewMode::Table, ViewMode::Json]
    }
}

/// Load phase of one document view
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState {
    /// No document requested yet.
    #[default]
    Idle,
    /// A load is in flight; nothing is exposed to the renderer.
    Loading,
    /// The full aggregation result, swapped in wholesale.
    Ready(AggregationResult),
    /// The load failed; no data is exposed.
    Failed {
        pdf_id: i64,
        error: AggregateError,
    },
}

/// Owns the aggregation result and the UI-only toggles for one document
/// view.
///
/// Results are swapped wholesale: a render pass sees either the previous
/// complete state or the next one, never a half-built result. Each
/// [`request`](Presenter::request) bumps an epoch; completions carrying a
/// stale epoch are dropped, so a superseded or abandoned load can never
/// clobber the current view.
#[derive(Debug, Default)]
pub struct Presenter {
    state: LoadState,
    view_mode: ViewMode,
    epoch: u64,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch the table projection. Purely presentational: the loaded
    /// result is untouched and nothing is refetched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Begin loading a document.
    ///
    /// Returns the epoch the eventual [`complete`](Presenter::complete)
    /// call must present.
    pub fn request(&mut self) -> u64 {
        self.epoch += 1;
        self.state = LoadState::Loading;
        self.epoch
    }

    /// Apply the outcome of the load started at `epoch`.
    ///
    /// A completion from an older request is ignored: the view has either
    /// moved on to a newer load or been torn down and re-created.
    pub fn complete(
        &mut self,
        epoch: u64,
        pdf_id: i64,
        outcome: Result<AggregationResult, AggregateError>,
    ) {
        if epoch != self.epoch {
            return;
        }

        self.state = match outcome {
            Ok(result) => LoadState::Ready(result),
            Err(error) => LoadState::Failed { pdf_id, error },
        };
    }

    /// The loaded result, only while the view is `Ready`.
    pub fn result(&self) -> Option<&AggregationResult> {
        match &self.state {
            LoadState::Ready(result) => Some(result),
            _ => None,
        }
    }
}
