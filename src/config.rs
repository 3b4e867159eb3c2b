//! Page selectors and sizes. Defaults reproduce the stock valentine markup.

#[cfg(feature = "serde")]
use serde::Deserialize;

#[cfg(feature = "serde_json")]
use crate::error::PageError;

use crate::layout::ElementSize;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PageConfig {
    /// Id of the button that runs away from the pointer.
    pub evader_id: String,
    /// Id of the button that starts the celebration.
    pub celebrate_id: String,
    /// Container hidden once the celebration starts.
    pub choices_selector: String,
    /// Class given to every heart; the stylesheet attaches the fall animation to it.
    pub heart_class: String,
    pub heart_count: usize,
    pub evader_width: f64,
    pub evader_height: f64,
    /// Write debug lines to the browser console.
    pub debug_log: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            evader_id: "no".to_string(),
            celebrate_id: "yes".to_string(),
            choices_selector: ".choices".to_string(),
            heart_class: "heart".to_string(),
            heart_count: 50,
            evader_width: 200.0,
            evader_height: 50.0,
            debug_log: false,
        }
    }
}

impl PageConfig {
    pub fn evader_size(&self) -> ElementSize {
        ElementSize { width: self.evader_width, height: self.evader_height }
    }

    /// Parse a (possibly partial) JSON object; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))
    }
}

thread_local! {
    static ACTIVE: std::cell::RefCell<PageConfig> = std::cell::RefCell::new(PageConfig::default());
}

/// Snapshot of the configuration the wasm entry points use.
pub fn active() -> PageConfig {
    ACTIVE.with(|c| c.borrow().clone())
}

pub fn set_active(config: PageConfig) {
    ACTIVE.with(|c| c.replace(config));
}
