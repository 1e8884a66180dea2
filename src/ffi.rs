//! UniFFI bindings for cross-platform hosts (iOS, Android, desktop shells).
//!
//! The host owns the actual widgets. It creates one [`FfiCatalogSession`]
//! per page visit, forwards user actions to it and applies the returned
//! [`FfiEffect`]. Debounce timing uses the process clock; hosts call
//! [`FfiCatalogSession::poll`] after the delay reported in
//! [`FfiEffect::SearchPending`].

use crate::config::{CatalogConfig, ConfigError};
use crate::controller::{ClickTarget, Controller, Effect};
use crate::favorites::{FileStore, KeyValueStore, MemoryStore, StorageError};
use crate::fetcher::{parse_catalog, sample_catalog, CatalogFormat, FetchError};
use crate::model::RecipeStore;
use crate::render::{Card, Panel, PanelContent, RenderedView, StepList};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeCatalogError {
    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },
}

impl From<FetchError> for RecipeCatalogError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::YamlError(_) | FetchError::JsonError(_) => RecipeCatalogError::ParseError {
                message: e.to_string(),
            },
            FetchError::IoError(_)
            | FetchError::GlobError(_)
            | FetchError::DirectoryNotFound(_)
            | FetchError::InvalidPath(_) => RecipeCatalogError::IoError {
                message: e.to_string(),
            },
            FetchError::UnsupportedFormat(_)
            | FetchError::PatternError(_)
            | FetchError::Catalog(_) => RecipeCatalogError::CatalogError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ConfigError> for RecipeCatalogError {
    fn from(e: ConfigError) -> Self {
        RecipeCatalogError::ConfigError {
            message: e.to_string(),
        }
    }
}

/// Favorites backend chosen by the host: a directory on disk, or memory.
pub enum SessionStorage {
    Memory(MemoryStore),
    File(FileStore),
}

impl SessionStorage {
    fn from_dir(storage_dir: Option<String>) -> Self {
        match storage_dir {
            Some(dir) => SessionStorage::File(FileStore::new(dir)),
            None => SessionStorage::Memory(MemoryStore::default()),
        }
    }
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            SessionStorage::Memory(store) => store.get(key),
            SessionStorage::File(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            SessionStorage::Memory(store) => store.set(key, value),
            SessionStorage::File(store) => store.set(key, value),
        }
    }
}

/// One line of a flattened step list.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiStepLine {
    pub depth: u32,
    pub indent_em: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiPanel {
    /// "ingredients" or "steps"
    pub kind: String,
    pub expanded: bool,
    pub toggle_label: String,
    /// Ingredient names; empty for the steps panel
    pub ingredients: Vec<String>,
    /// Steps in display order; empty for the ingredients panel
    pub steps: Vec<FfiStepLine>,
}

impl From<&Panel> for FfiPanel {
    fn from(panel: &Panel) -> Self {
        let (ingredients, steps) = match &panel.content {
            PanelContent::Ingredients { items } => (items.clone(), Vec::new()),
            PanelContent::Steps { list } => {
                let mut lines = Vec::new();
                flatten_steps(list, &mut lines);
                (Vec::new(), lines)
            }
        };
        FfiPanel {
            kind: panel.kind.as_str().to_string(),
            expanded: panel.expanded,
            toggle_label: panel.toggle_label.clone(),
            ingredients,
            steps,
        }
    }
}

fn flatten_steps(list: &StepList, lines: &mut Vec<FfiStepLine>) {
    for item in &list.items {
        lines.push(FfiStepLine {
            depth: list.depth as u32,
            indent_em: list.indent_em,
            text: item.text.clone(),
        });
        if let Some(children) = &item.children {
            flatten_steps(children, lines);
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiCard {
    pub id: u32,
    pub title: String,
    pub time_label: String,
    pub difficulty: String,
    pub description: String,
    pub category: String,
    pub favorite: bool,
    pub favorite_label: String,
    pub ingredients: FfiPanel,
    pub steps: FfiPanel,
}

impl From<&Card> for FfiCard {
    fn from(card: &Card) -> Self {
        FfiCard {
            id: card.id,
            title: card.title.clone(),
            time_label: card.time_label.clone(),
            difficulty: card.difficulty.as_str().to_string(),
            description: card.description.clone(),
            category: card.category.clone(),
            favorite: card.favorite,
            favorite_label: card.favorite_label.clone(),
            ingredients: FfiPanel::from(&card.ingredients),
            steps: FfiPanel::from(&card.steps),
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiView {
    pub cards: Vec<FfiCard>,
    pub shown: u32,
    pub total: u32,
    pub counter: String,
    pub clear_visible: bool,
    /// Filter and sort buttons to mark active
    pub active_filter: String,
    pub active_sort: String,
    /// Ready-to-insert markup for web hosts
    pub html: String,
}

impl From<&RenderedView> for FfiView {
    fn from(view: &RenderedView) -> Self {
        FfiView {
            cards: view.cards.iter().map(FfiCard::from).collect(),
            shown: view.shown as u32,
            total: view.total as u32,
            counter: view.counter.clone(),
            clear_visible: view.clear_visible,
            active_filter: view.active_filter.clone(),
            active_sort: view.active_sort.clone(),
            html: view.to_html(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiEffect {
    Unchanged,
    Render {
        view: FfiView,
    },
    Panel {
        recipe_id: u32,
        panel: String,
        expanded: bool,
        label: String,
    },
    SearchPending {
        /// Milliseconds until `poll` should be called
        delay_ms: u64,
    },
}

impl FfiEffect {
    fn from_effect(effect: Effect, now: Instant) -> Self {
        match effect {
            Effect::None => FfiEffect::Unchanged,
            Effect::Render(view) => FfiEffect::Render {
                view: FfiView::from(&view),
            },
            Effect::Panel {
                recipe_id,
                panel,
                expanded,
                label,
            } => FfiEffect::Panel {
                recipe_id,
                panel: panel.as_str().to_string(),
                expanded,
                label,
            },
            Effect::SearchPending { deadline } => FfiEffect::SearchPending {
                delay_ms: deadline.saturating_duration_since(now).as_millis() as u64,
            },
        }
    }
}

/// One catalog viewing session.
#[derive(uniffi::Object)]
pub struct FfiCatalogSession {
    inner: Mutex<Controller<SessionStorage>>,
}

#[uniffi::export]
impl FfiCatalogSession {
    /// Creates a session from JSON catalog text.
    ///
    /// # Arguments
    /// * `catalog_json` - A list of recipes, or a mapping with a `recipes` key
    /// * `storage_dir` - Directory for persisted favorites; memory-only if absent
    /// * `config_toml` - Optional TOML overriding the default config
    #[uniffi::constructor]
    pub fn new(
        catalog_json: String,
        storage_dir: Option<String>,
        config_toml: Option<String>,
    ) -> Result<Arc<Self>, RecipeCatalogError> {
        let store = parse_catalog(&catalog_json, CatalogFormat::Json)?;
        Self::build(store, storage_dir, config_toml)
    }

    /// Creates a session from YAML catalog text.
    #[uniffi::constructor]
    pub fn from_yaml(
        catalog_yaml: String,
        storage_dir: Option<String>,
        config_toml: Option<String>,
    ) -> Result<Arc<Self>, RecipeCatalogError> {
        let store = parse_catalog(&catalog_yaml, CatalogFormat::Yaml)?;
        Self::build(store, storage_dir, config_toml)
    }

    /// Creates a session over the built-in demo catalog.
    #[uniffi::constructor]
    pub fn sample(storage_dir: Option<String>) -> Result<Arc<Self>, RecipeCatalogError> {
        Self::build(sample_catalog(), storage_dir, None)
    }

    /// Current view, for the initial paint.
    pub fn view(&self) -> FfiView {
        FfiView::from(&self.lock().view())
    }

    pub fn select_filter(&self, filter: String) -> FfiEffect {
        self.apply(|controller, _| controller.select_filter(&filter))
    }

    pub fn select_sort(&self, sort: String) -> FfiEffect {
        self.apply(|controller, _| controller.select_sort(&sort))
    }

    pub fn input_search(&self, text: String) -> FfiEffect {
        self.apply(|controller, now| controller.input_search(&text, now))
    }

    /// Commits buffered search text once its delay has elapsed.
    pub fn poll(&self) -> FfiEffect {
        self.apply(|controller, now| controller.poll(now))
    }

    pub fn clear_search(&self) -> FfiEffect {
        self.apply(|controller, _| controller.clear_search())
    }

    /// Handles a click inside the recipe container, given the clicked
    /// element's `data-role`, `data-id` and `data-panel` attributes.
    pub fn click(
        &self,
        role: Option<String>,
        recipe_id: Option<String>,
        panel: Option<String>,
    ) -> FfiEffect {
        let target = ClickTarget {
            role,
            recipe_id,
            panel,
        };
        self.apply(|controller, _| controller.click(&target))
    }

    pub fn favorites(&self) -> Vec<u32> {
        self.lock().favorites().iter().collect()
    }

    pub fn is_favorite(&self, recipe_id: u32) -> bool {
        self.lock().favorites().contains(recipe_id)
    }

    /// Distinct recipe categories, for building filter controls.
    pub fn categories(&self) -> Vec<String> {
        self.lock()
            .store()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl FfiCatalogSession {
    fn build(
        store: RecipeStore,
        storage_dir: Option<String>,
        config_toml: Option<String>,
    ) -> Result<Arc<Self>, RecipeCatalogError> {
        let config = match config_toml {
            Some(toml) => CatalogConfig::from_toml_str(&toml)?,
            None => CatalogConfig::default(),
        };
        let controller = Controller::new(store, SessionStorage::from_dir(storage_dir), config);
        Ok(Arc::new(FfiCatalogSession {
            inner: Mutex::new(controller),
        }))
    }

    fn lock(&self) -> MutexGuard<'_, Controller<SessionStorage>> {
        // A panic mid-update leaves plain data behind; keep serving it.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(
        &self,
        action: impl FnOnce(&mut Controller<SessionStorage>, Instant) -> Effect,
    ) -> FfiEffect {
        let now = Instant::now();
        let mut controller = self.lock();
        let effect = action(&mut controller, now);
        FfiEffect::from_effect(effect, now)
    }
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
