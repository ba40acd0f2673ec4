//! Module for loading the top 10 leaderboard into the host page

use self::{
    models::{Diagnostic, ViewerState},
    render::render_rows,
};
use crate::{page::DisplayContainer, retriever::Retriever};
use log::{debug, error, warn};
use parking_lot::Mutex;
use std::sync::Arc;

pub mod models;
pub mod render;

/// Loads the leaderboard from the [Retriever] and renders it into
/// the display container. Failures are only logged and recorded
/// as [Diagnostic]s, the container is left untouched on failure
pub struct LeaderboardViewer {
    retriever: Retriever,
    container: Arc<DisplayContainer>,
    state: Mutex<ViewerState>,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl LeaderboardViewer {
    pub fn new(retriever: Retriever, container: Arc<DisplayContainer>) -> Self {
        Self {
            retriever,
            container,
            state: Mutex::new(ViewerState::Idle),
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    /// Entry point invoked once by the host at startup. Later calls
    /// don't load anything and return the current state
    pub async fn initialize(&self) -> ViewerState {
        let state = self.state();
        if state != ViewerState::Idle {
            warn!("Leaderboard viewer already initialized ({:?})", state);
            return state;
        }

        self.load_top10().await
    }

    /// Requests the top 10 players and replaces the container content
    /// with the rendered rows
    pub async fn load_top10(&self) -> ViewerState {
        self.set_state(ViewerState::Requesting);

        let state = match self.retriever.find_score_top10().await {
            Ok(entries) => match render_rows(&entries) {
                Ok(fragment) => {
                    debug!(
                        "Rendered {} leaderboard rows into #{}",
                        entries.len(),
                        self.container.id()
                    );
                    self.container.replace(fragment);
                    ViewerState::Rendered
                }
                Err(err) => {
                    error!("{}", err);
                    ViewerState::Failed
                }
            },
            Err(err) => {
                let diagnostic = err.diagnostic();
                error!("Failed to load leaderboard: {}", err);
                error!("{}", diagnostic.status);
                error!("{}", diagnostic.body);
                self.diagnostics.lock().push(diagnostic);
                ViewerState::Failed
            }
        };

        self.set_state(state);
        state
    }

    pub fn state(&self) -> ViewerState {
        *self.state.lock()
    }

    fn set_state(&self, state: ViewerState) {
        *self.state.lock() = state;
    }

    /// Diagnostics recorded for every failed request
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }
}
