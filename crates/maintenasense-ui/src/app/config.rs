//! Deck configuration loaded from the host page.

use crate::core::config::DeckConfig;
use gloo::console;
use gloo::utils::document;

/// Id of the optional `<script type="application/json">` config block.
pub(crate) const CONFIG_ELEMENT_ID: &str = "deck-config";

/// Read the inline config block, falling back to defaults when it is absent or invalid.
pub(crate) fn load_deck_config() -> DeckConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        console::debug!("deck config block absent; using defaults");
        return DeckConfig::default();
    };
    if raw.trim().is_empty() {
        return DeckConfig::default();
    }
    match DeckConfig::from_json(&raw) {
        Ok(config) => {
            console::log!("deck config loaded", CONFIG_ELEMENT_ID);
            config
        }
        Err(err) => {
            console::error!("deck config rejected; using defaults", err.to_string());
            DeckConfig::default()
        }
    }
}
