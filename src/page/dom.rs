//! Browser `Page` backed by web-sys.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, Window, window};

use super::Page;
use crate::error::PageError;
use crate::layout::{self, Offset, Viewport};

pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn from_window() -> Result<Self, PageError> {
        let window = window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Look up `#id` as an HTML element.
    pub fn element_by_id(&self, id: &str) -> Result<HtmlElement, PageError> {
        let selector = format!("#{}", id);
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::missing(selector.clone()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::NotHtmlElement { selector })
    }

    fn query(&self, selector: &str) -> Result<HtmlElement, PageError> {
        self.document
            .query_selector(selector)?
            .ok_or_else(|| PageError::missing(selector))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::NotHtmlElement { selector: selector.to_string() })
    }

    fn dimension(value: Result<JsValue, JsValue>, what: &str) -> Result<f64, PageError> {
        value?
            .as_f64()
            .ok_or_else(|| PageError::Dom(format!("{} is not a number", what)))
    }
}

impl Page for DomPage {
    fn viewport(&self) -> Result<Viewport, PageError> {
        let width = Self::dimension(self.window.inner_width(), "innerWidth")?;
        let height = Self::dimension(self.window.inner_height(), "innerHeight")?;
        Ok(Viewport::new(width, height))
    }

    fn translate(&mut self, element_id: &str, offset: Offset) -> Result<(), PageError> {
        let el = self.element_by_id(element_id)?;
        el.style().set_property("transform", &layout::translate(offset))?;
        Ok(())
    }

    fn spawn_heart(&mut self, class: &str, position: Offset) -> Result<(), PageError> {
        let body = self.document.body().ok_or(PageError::NoBody)?;
        let heart: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| PageError::NotHtmlElement { selector: "div".to_string() })?;
        heart.set_class_name(class);
        body.append_child(&heart)?;

        let style = heart.style();
        style.set_property("left", &layout::px(position.x))?;
        style.set_property("top", &layout::px(position.y))?;

        // One-shot: the closure is freed by wasm-bindgen after its single call.
        let target = heart.clone();
        let on_end = Closure::once_into_js(move || target.remove());
        let opts = AddEventListenerOptions::new();
        opts.set_once(true);
        heart.add_event_listener_with_callback_and_add_event_listener_options(
            "animationend",
            on_end.unchecked_ref(),
            &opts,
        )?;
        Ok(())
    }

    fn hide(&mut self, selector: &str) -> Result<(), PageError> {
        self.query(selector)?.style().set_property("visibility", "hidden")?;
        Ok(())
    }

    fn debug(&self, message: &str) {
        web_sys::console::debug_1(&JsValue::from_str(message));
    }
}
