//! Valentine page core crate.
//!
//! Two behaviors for the "will you be my valentine?" page: the "no" button jumps to
//! a random spot whenever the pointer reaches it (`move_no_box`), and "yes" rains
//! hearts over the page and hides both buttons (`celebrate_yes`). The logic lives in
//! `page` and `layout` and is host-independent; the exports below bind it to the
//! browser document.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod layout;
pub mod page;

use page::Page;
use page::dom::DomPage;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[cfg(feature = "rng")]
type HostRandom = layout::CryptoRandom;
#[cfg(not(feature = "rng"))]
type HostRandom = layout::MathRandom;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Move the "no" button to a random position inside the viewport.
#[wasm_bindgen]
pub fn move_no_box() -> Result<(), JsValue> {
    let config = config::active();
    let mut page = DomPage::from_window()?;
    page::evade(&mut page, &config, &mut HostRandom::default())?;
    Ok(())
}

/// Spawn the falling hearts and hide the choices.
#[wasm_bindgen]
pub fn celebrate_yes() -> Result<(), JsValue> {
    let config = config::active();
    let mut page = DomPage::from_window()?;
    page::celebrate(&mut page, &config, &mut HostRandom::default())?;
    Ok(())
}

/// Wire the buttons to the entry points: hovering or clicking "no" moves it,
/// clicking "yes" celebrates. Errors from the handlers are thrown back to JS.
#[wasm_bindgen]
pub fn install_handlers() -> Result<(), JsValue> {
    let config = config::active();
    let page = DomPage::from_window()?;
    let evader = page.element_by_id(&config.evader_id)?;
    let yes = page.element_by_id(&config.celebrate_id)?;

    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| move_no_box())
            as Box<dyn FnMut(_) -> Result<(), JsValue>>);
        evader.add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref())?;
        evader.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| celebrate_yes())
            as Box<dyn FnMut(_) -> Result<(), JsValue>>);
        yes.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if config.debug_log {
        page.debug(&format!(
            "handlers installed on #{} and #{}",
            config.evader_id, config.celebrate_id
        ));
    }
    Ok(())
}

/// Override selectors / sizes from a JSON object, e.g. `{"heart_count": 80}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    config::set_active(config::PageConfig::from_json(json)?);
    Ok(())
}
