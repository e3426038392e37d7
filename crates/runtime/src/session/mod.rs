//! Dispatch orchestration around the pure engine.
//!
//! A [`Session`] owns the current snapshot and replaces it wholesale on every
//! transition. It also owns the two caller policies the engine stays out of:
//! routing life gestures into the active modal target, and dropping the
//! selection highlight on unrelated interactions. Persistence is best-effort
//! and never surfaces to the caller.

mod intent;

pub use intent::{Intent, route_adjustment};

use tracker_core::{Action, GameConfig, GameEngine, GameState, RngOracle};

use crate::repository::{StateRepository, load_or_default};

pub struct Session<R> {
    state: GameState,
    engine: GameEngine<R>,
    repository: Option<Box<dyn StateRepository>>,
}

impl<R: RngOracle> Session<R> {
    /// Session over `state` with nothing persisted.
    pub fn new(state: GameState, rng: R) -> Self {
        Self {
            state,
            engine: GameEngine::new(rng),
            repository: None,
        }
    }

    /// Restores the stored snapshot (or a fresh game) and keeps saving to
    /// `repository` from then on.
    pub fn restore(repository: Box<dyn StateRepository>, config: &GameConfig, rng: R) -> Self {
        let state = load_or_default(repository.as_ref(), config);
        tracing::info!(
            visible = state.visible_count,
            "Session started"
        );
        Self::new(state, rng).with_repository(repository)
    }

    pub fn with_repository(mut self, repository: Box<dyn StateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one action as-is and persists the result if anything changed.
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        if self.apply(&action) {
            self.persist();
        }
        &self.state
    }

    /// Applies a UI intent: clears the selection where the intent calls for
    /// it, routes it onto an action, and persists once at the end.
    pub fn handle(&mut self, intent: Intent) -> &GameState {
        let mut changed = false;
        if intent.clears_selection() {
            changed |= self.apply(&Action::ClearSelection);
        }
        let action = intent.to_action(&self.state);
        changed |= self.apply(&action);

        if changed {
            self.persist();
        }
        &self.state
    }

    /// Replaces the table with a fresh game and forgets the stored snapshot.
    pub fn start_over(&mut self, config: &GameConfig) -> &GameState {
        if let Some(repository) = &self.repository
            && let Err(error) = repository.clear()
        {
            tracing::warn!("Failed to clear stored snapshot: {}", error);
        }
        self.dispatch(Action::hydrate(GameState::from_config(config)))
    }

    fn apply(&mut self, action: &Action) -> bool {
        let next = self.engine.reduce(&self.state, action);
        if next == self.state {
            tracing::trace!(action = action.name(), "Action left the table unchanged");
            return false;
        }
        tracing::debug!(action = action.name(), "Applied action");
        self.state = next;
        true
    }

    fn persist(&self) {
        let Some(repository) = &self.repository else {
            return;
        };
        if let Err(error) = repository.save(&self.state) {
            tracing::warn!("Failed to save snapshot: {}", error);
        }
    }
}
