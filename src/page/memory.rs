//! In-memory `Page`: records what the behaviors do to the document and lets the
//! caller fire each heart's animation-end notification by hand.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use super::Page;
use crate::error::PageError;
use crate::layout::{Offset, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub id: u64,
    pub class: String,
    pub position: Offset,
}

#[derive(Debug)]
pub struct MemoryPage {
    viewport: Viewport,
    // element id -> current translation (None until first moved)
    elements: HashMap<String, Option<Offset>>,
    // selector -> hidden
    containers: HashMap<String, bool>,
    // live hearts keyed by spawn order
    hearts: BTreeMap<u64, Heart>,
    next_heart: u64,
    debug: RefCell<Vec<String>>,
}

impl MemoryPage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: HashMap::new(),
            containers: HashMap::new(),
            hearts: BTreeMap::new(),
            next_heart: 0,
            debug: RefCell::new(Vec::new()),
        }
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), None);
        self
    }

    /// Register a visible container reachable through `selector`.
    pub fn with_container(mut self, selector: &str) -> Self {
        self.containers.insert(selector.to_string(), false);
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn translation(&self, id: &str) -> Option<Offset> {
        self.elements.get(id).copied().flatten()
    }

    pub fn is_hidden(&self, selector: &str) -> bool {
        self.containers.get(selector).copied().unwrap_or(false)
    }

    /// Hearts still attached, oldest first.
    pub fn hearts(&self) -> impl Iterator<Item = &Heart> {
        self.hearts.values()
    }

    pub fn heart_count(&self) -> usize {
        self.hearts.len()
    }

    /// Total hearts ever spawned, including removed ones.
    pub fn spawned_total(&self) -> u64 {
        self.next_heart
    }

    /// Deliver the animation-end notification for one heart, which removes it.
    /// Returns false if the heart is already gone.
    pub fn finish_animation(&mut self, id: u64) -> bool {
        self.hearts.remove(&id).is_some()
    }

    pub fn debug_lines(&self) -> Vec<String> {
        self.debug.borrow().clone()
    }
}

impl Page for MemoryPage {
    fn viewport(&self) -> Result<Viewport, PageError> {
        Ok(self.viewport)
    }

    fn translate(&mut self, element_id: &str, offset: Offset) -> Result<(), PageError> {
        let slot = self
            .elements
            .get_mut(element_id)
            .ok_or_else(|| PageError::missing(format!("#{}", element_id)))?;
        *slot = Some(offset);
        Ok(())
    }

    fn spawn_heart(&mut self, class: &str, position: Offset) -> Result<(), PageError> {
        let id = self.next_heart;
        self.next_heart += 1;
        self.hearts.insert(id, Heart { id, class: class.to_string(), position });
        Ok(())
    }

    fn hide(&mut self, selector: &str) -> Result<(), PageError> {
        let hidden = self
            .containers
            .get_mut(selector)
            .ok_or_else(|| PageError::missing(selector))?;
        *hidden = true;
        Ok(())
    }

    fn debug(&self, message: &str) {
        self.debug.borrow_mut().push(message.to_string());
    }
}
