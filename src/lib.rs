//! Recipe catalog core.
//!
//! Holds an immutable list of recipes, runs the search → filter → sort
//! pipeline over it, tracks favorites in a key-value store and renders
//! recipe cards with nested step lists. Host UIs drive a
//! [`Controller`] and paint the [`RenderedView`] it hands back.

uniffi::setup_scaffolding!();

pub mod config;
pub mod controller;
pub mod favorites;
pub mod fetcher;
pub mod ffi;
pub mod model;
pub mod query;
pub mod render;

pub use config::{CatalogConfig, ConfigError};
pub use controller::{ClickTarget, Controller, Effect, SessionState};
pub use favorites::{FavoriteSet, FavoritesRegistry, FileStore, KeyValueStore, MemoryStore};
pub use fetcher::{load_catalog, load_catalog_dir, sample_catalog};
pub use model::*;
pub use query::compute_visible;
pub use render::{render, render_steps, RenderedView};
