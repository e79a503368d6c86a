//! `localStorage`-backed key-value store.

use sudoku_engine::KeyValueStore;
use wasm_bindgen::JsValue;

/// Storage key for the theme preference ("dark" or "light")
pub const THEME_KEY: &str = "theme";

/// Storage key for the font-family preference
pub const FONT_KEY: &str = "font";

/// The browser's `localStorage`, adapted to the engine's store trait.
/// Storage failures degrade to "no value" on reads and a silent drop on
/// writes; persistence is best-effort and never blocks play.
#[derive(Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, JsValue> {
        let storage = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }
}
