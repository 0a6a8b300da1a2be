use serde::{Deserialize, Serialize};
use thiserror::Error;

const SETTINGS_KEY: &str = "mediashelf.settings";

/// Error type for the key-value persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string storage that survives page reloads.
pub trait PersistentStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Markup names the page bindings look for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMarkup {
    pub play_trigger_selector: String,
    pub collection_attr: String,
    pub item_attr: String,
    pub track_row_selector: String,
    pub favorite_trigger_selector: String,
    pub favorite_attr: String,
    pub active_class: String,
    pub player_container_id: String,
    pub player_title_id: String,
    pub audio_element_id: String,
    pub favorites_list_id: String,
    pub list_row_class: String,
    pub list_link_class: String,
    pub solid_star_class: String,
    pub outline_star_class: String,
}

impl Default for PageMarkup {
    fn default() -> Self {
        Self {
            play_trigger_selector: ".play-audio-btn".to_string(),
            collection_attr: "data-account".to_string(),
            item_attr: "data-name".to_string(),
            track_row_selector: ".audio-item".to_string(),
            favorite_trigger_selector: ".favorite-btn[data-video]".to_string(),
            favorite_attr: "data-video".to_string(),
            active_class: "active".to_string(),
            player_container_id: "audio-player-container".to_string(),
            player_title_id: "audio-title".to_string(),
            audio_element_id: "audio-player".to_string(),
            favorites_list_id: "favoritesList".to_string(),
            list_row_class: "list-group-item".to_string(),
            list_link_class: "text-dark".to_string(),
            solid_star_class: "fas fa-star".to_string(),
            outline_star_class: "far fa-star".to_string(),
        }
    }
}

/// App settings stored next to the favorites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub favorites_key: String,
    pub audio_root: String,
    pub video_root: String,
    pub title_extensions: Vec<String>,
    pub empty_favorites_text: String,
    pub markup: PageMarkup,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            favorites_key: "favorites".to_string(),
            audio_root: "/audio".to_string(),
            video_root: "/video".to_string(),
            title_extensions: vec!["mp3".to_string(), "wav".to_string(), "ogg".to_string()],
            empty_favorites_text: "List is empty".to_string(),
            markup: PageMarkup::default(),
        }
    }
}

/// Read settings from `store`, falling back to defaults when absent or unreadable.
pub fn load_settings<S: PersistentStore + ?Sized>(store: &S) -> Settings {
    match store.get(SETTINGS_KEY) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|err| {
            dioxus::logger::tracing::warn!("ignoring malformed settings: {err}");
            Settings::default()
        }),
        Ok(None) => Settings::default(),
        Err(err) => {
            dioxus::logger::tracing::warn!("settings unavailable: {err}");
            Settings::default()
        }
    }
}

/// `window.localStorage`, read and written as raw strings.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    /// `window.localStorage`, or `Unavailable` when the browser blocks or lacks it.
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StoreError::Unavailable("no local storage".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PersistentStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
    }
}
