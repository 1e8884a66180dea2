//! Session state and the actions that mutate it.
//!
//! [`Controller`] is the only owner of mutable session state. Host UIs call
//! one method per user action and apply the returned [`Effect`]. All card
//! clicks go through [`Controller::click`], which dispatches on the
//! target's `data-role`, so re-rendered cards never need their own
//! listeners.

use crate::config::CatalogConfig;
use crate::favorites::{FavoriteSet, FavoritesRegistry, KeyValueStore};
use crate::model::{Recipe, RecipeStore};
use crate::query::{compute_visible, QueryState};
use crate::render::{
    render, ExpandedPanels, PanelKey, RenderedView, ROLE_FAVORITE, ROLE_TOGGLE_PANEL,
};
use std::time::Instant;

mod debounce;
mod event;

pub use debounce::Debouncer;
pub use event::{ClickTarget, Effect};

/// Mutable UI state for one page visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub query: QueryState,
    pub expanded: ExpandedPanels,
    /// Raw contents of the search box, committed or not
    pub search_input: String,
}

type ClickHandler<S> = fn(&mut Controller<S>, &ClickTarget) -> Effect;

pub struct Controller<S: KeyValueStore> {
    store: RecipeStore,
    favorites: FavoritesRegistry<S>,
    state: SessionState,
    search_debounce: Debouncer<String>,
    config: CatalogConfig,
}

impl<S: KeyValueStore> Controller<S> {
    /// Creates a controller, loading favorites from `storage` once.
    pub fn new(store: RecipeStore, storage: S, config: CatalogConfig) -> Self {
        let favorites = FavoritesRegistry::load(storage, config.storage_key.clone());
        Controller {
            store,
            favorites,
            state: SessionState::default(),
            search_debounce: Debouncer::new(config.debounce()),
            config,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn favorites(&self) -> &FavoriteSet {
        self.favorites.favorites()
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        self.favorites.store()
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn visible(&self) -> Vec<&Recipe> {
        compute_visible(
            self.store.recipes(),
            &self.state.query,
            self.favorites.favorites(),
            self.config.quick_threshold_minutes,
        )
    }

    /// Renders the current state. Used for the initial paint and after
    /// every state change that affects the visible set.
    pub fn view(&self) -> RenderedView {
        let visible = self.visible();
        let mut view = render(
            &visible,
            self.store.len(),
            self.favorites.favorites(),
            &self.state.expanded,
            self.config.max_step_depth,
        );
        view.clear_visible = !self.state.search_input.is_empty();
        view.active_filter = self.state.query.filter.clone();
        view.active_sort = self.state.query.sort.clone();
        view
    }

    pub fn select_filter(&mut self, filter: &str) -> Effect {
        tracing::debug!(filter, "filter selected");
        self.state.query.filter = filter.to_string();
        Effect::Render(self.view())
    }

    pub fn select_sort(&mut self, sort: &str) -> Effect {
        tracing::debug!(sort, "sort selected");
        self.state.query.sort = sort.to_string();
        Effect::Render(self.view())
    }

    /// Records a keystroke in the search box.
    ///
    /// Non-empty text is held until the debounce delay passes without
    /// another keystroke. An emptied box commits at once.
    pub fn input_search(&mut self, text: &str, now: Instant) -> Effect {
        self.state.search_input = text.to_string();
        if text.is_empty() {
            self.search_debounce.cancel();
            return self.commit_search(String::new());
        }
        let deadline = self.search_debounce.schedule(text.to_string(), now);
        Effect::SearchPending { deadline }
    }

    /// Commits buffered search text if its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Effect {
        match self.search_debounce.poll(now) {
            Some(text) => self.commit_search(text),
            None => Effect::None,
        }
    }

    /// Deadline of the buffered search text, if any.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.search_debounce.deadline()
    }

    /// Handles the clear affordance: drops pending input and commits empty
    /// text immediately.
    pub fn clear_search(&mut self) -> Effect {
        self.search_debounce.cancel();
        self.state.search_input.clear();
        self.commit_search(String::new())
    }

    fn commit_search(&mut self, text: String) -> Effect {
        tracing::debug!(search = %text, "search committed");
        self.state.query.search = text;
        Effect::Render(self.view())
    }

    /// Single delegated entry point for clicks inside the recipe container.
    pub fn click(&mut self, target: &ClickTarget) -> Effect {
        let Some(handler) = target.role.as_deref().and_then(Self::handler_for) else {
            tracing::debug!(?target, "click without a known role ignored");
            return Effect::None;
        };
        handler(self, target)
    }

    fn handler_for(role: &str) -> Option<ClickHandler<S>> {
        match role {
            ROLE_FAVORITE => Some(Self::on_favorite),
            ROLE_TOGGLE_PANEL => Some(Self::on_toggle_panel),
            _ => None,
        }
    }

    fn on_favorite(&mut self, target: &ClickTarget) -> Effect {
        let Some(id) = target.resolve_id().filter(|id| self.store.contains(*id)) else {
            tracing::debug!(?target, "favorite click without a known recipe ignored");
            return Effect::None;
        };
        self.favorites.toggle(id);
        Effect::Render(self.view())
    }

    fn on_toggle_panel(&mut self, target: &ClickTarget) -> Effect {
        let id = target.resolve_id().filter(|id| self.store.contains(*id));
        let (Some(recipe_id), Some(panel)) = (id, target.resolve_panel()) else {
            tracing::debug!(?target, "panel toggle without a known recipe or panel ignored");
            return Effect::None;
        };

        let key = PanelKey::new(recipe_id, panel);
        let expanded = if self.state.expanded.remove(&key) {
            false
        } else {
            self.state.expanded.insert(key);
            true
        };
        tracing::debug!(recipe_id, %panel, expanded, "panel toggled");

        Effect::Panel {
            recipe_id,
            panel,
            expanded,
            label: panel.toggle_label(expanded),
        }
    }
}
