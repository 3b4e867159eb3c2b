//! The two page behaviors, written against a small host seam.
//!
//! `Page` names exactly what the behaviors need from the document: the viewport
//! size, moving one element, spawning a self-removing heart and hiding the
//! choices container. `dom::DomPage` is the browser implementation;
//! `memory::MemoryPage` keeps the same bookkeeping in plain Rust so the
//! behaviors can be exercised natively.

pub mod dom;
pub mod memory;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::layout::{self, Offset, RandomSource, Viewport};

pub trait Page {
    fn viewport(&self) -> Result<Viewport, PageError>;

    /// Apply `offset` as the CSS translation of the element with this id.
    fn translate(&mut self, element_id: &str, offset: Offset) -> Result<(), PageError>;

    /// Create a heart with `class`, attach it, place it at `position` (left/top),
    /// and arrange for it to remove itself once its animation ends.
    fn spawn_heart(&mut self, class: &str, position: Offset) -> Result<(), PageError>;

    /// Set `visibility: hidden` on the first element matching `selector`.
    fn hide(&mut self, selector: &str) -> Result<(), PageError>;

    fn debug(&self, _message: &str) {}
}

/// Move the evading element to a random spot inside the viewport.
pub fn evade<P: Page + ?Sized>(
    page: &mut P,
    config: &PageConfig,
    rng: &mut impl RandomSource,
) -> Result<Offset, PageError> {
    let viewport = page.viewport()?;
    let offset = layout::evader_offset(viewport, config.evader_size(), rng)?;
    page.translate(&config.evader_id, offset)?;
    if config.debug_log {
        page.debug(&format!("evade: #{} -> {}", config.evader_id, layout::translate(offset)));
    }
    Ok(offset)
}

/// Spawn a burst of hearts across the viewport, then hide the choices.
/// Returns how many hearts were spawned. A failure part way leaves the hearts
/// already spawned in place.
pub fn celebrate<P: Page + ?Sized>(
    page: &mut P,
    config: &PageConfig,
    rng: &mut impl RandomSource,
) -> Result<usize, PageError> {
    let viewport = page.viewport()?;
    for _ in 0..config.heart_count {
        let position = layout::heart_position(viewport, rng)?;
        page.spawn_heart(&config.heart_class, position)?;
    }
    page.hide(&config.choices_selector)?;
    if config.debug_log {
        page.debug(&format!(
            "celebrate: {} hearts, {} hidden",
            config.heart_count, config.choices_selector
        ));
    }
    Ok(config.heart_count)
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryPage;
    use super::*;
    use crate::layout::SequenceRandom;

    fn stock_page(width: f64, height: f64) -> MemoryPage {
        MemoryPage::new(Viewport::new(width, height))
            .with_element("no")
            .with_container(".choices")
    }

    #[test]
    fn test_evade_applies_translation_to_evader() {
        let mut page = stock_page(1000.0, 800.0);
        let mut rng = SequenceRandom::new(vec![0.5, 0.5]);
        let off = evade(&mut page, &PageConfig::default(), &mut rng).unwrap();
        assert_eq!(off, Offset { x: 400.0, y: 375.0 });
        assert_eq!(page.translation("no"), Some(off));
        assert_eq!(page.heart_count(), 0);
    }

    #[test]
    fn test_evade_missing_element_is_error() {
        let mut page = MemoryPage::new(Viewport::new(1000.0, 800.0));
        let mut rng = SequenceRandom::new(vec![0.5]);
        let err = evade(&mut page, &PageConfig::default(), &mut rng).unwrap_err();
        assert_eq!(err, PageError::missing("#no"));
    }

    #[test]
    fn test_celebrate_spawns_hearts_and_hides_choices() {
        let mut page = stock_page(1000.0, 800.0);
        let mut rng = SequenceRandom::new(vec![0.0, 0.3, 0.6, 0.999]);
        let n = celebrate(&mut page, &PageConfig::default(), &mut rng).unwrap();
        assert_eq!(n, 50);
        assert_eq!(page.heart_count(), 50);
        assert!(page.is_hidden(".choices"));
        assert!(page.hearts().all(|h| h.class == "heart"));
    }

    #[test]
    fn test_celebrate_without_choices_keeps_spawned_hearts() {
        let mut page = MemoryPage::new(Viewport::new(300.0, 300.0));
        let mut rng = SequenceRandom::new(vec![0.5]);
        let err = celebrate(&mut page, &PageConfig::default(), &mut rng).unwrap_err();
        assert_eq!(err, PageError::missing(".choices"));
        assert_eq!(page.heart_count(), 50);
    }

    #[test]
    fn test_random_failure_leaves_page_untouched() {
        let mut page = stock_page(1000.0, 800.0);
        let mut dry = SequenceRandom::new(Vec::new());
        let err = evade(&mut page, &PageConfig::default(), &mut dry).unwrap_err();
        assert!(matches!(err, PageError::Random(_)));
        assert_eq!(page.translation("no"), None);

        let err = celebrate(&mut page, &PageConfig::default(), &mut dry).unwrap_err();
        assert!(matches!(err, PageError::Random(_)));
        assert_eq!(page.heart_count(), 0);
        assert!(!page.is_hidden(".choices"));
    }

    #[test]
    fn test_celebrate_keeps_already_hidden_choices_hidden() {
        let mut page = stock_page(1000.0, 800.0);
        page.hide(".choices").unwrap();
        let mut rng = SequenceRandom::new(vec![0.5]);
        celebrate(&mut page, &PageConfig::default(), &mut rng).unwrap();
        assert!(page.is_hidden(".choices"));
        celebrate(&mut page, &PageConfig::default(), &mut rng).unwrap();
        assert!(page.is_hidden(".choices"));
        assert_eq!(page.heart_count(), 100);
    }

    #[test]
    fn test_evade_reads_viewport_on_every_call() {
        let mut page = stock_page(1000.0, 800.0);
        let mut rng = SequenceRandom::new(vec![0.5]);
        let first = evade(&mut page, &PageConfig::default(), &mut rng).unwrap();
        assert_eq!(first, Offset { x: 400.0, y: 375.0 });
        page.set_viewport(Viewport::new(400.0, 150.0));
        let second = evade(&mut page, &PageConfig::default(), &mut rng).unwrap();
        assert_eq!(second, Offset { x: 100.0, y: 50.0 });
        assert_eq!(page.translation("no"), Some(second));
    }

    #[test]
    fn test_debug_lines_only_when_enabled() {
        let mut page = stock_page(1000.0, 800.0);
        let mut rng = SequenceRandom::new(vec![0.5]);
        let mut cfg = PageConfig::default();
        celebrate(&mut page, &cfg, &mut rng).unwrap();
        assert!(page.debug_lines().is_empty());
        cfg.debug_log = true;
        cfg.heart_count = 2;
        celebrate(&mut page, &cfg, &mut rng).unwrap();
        assert_eq!(page.debug_lines(), ["celebrate: 2 hearts, .choices hidden"]);
    }
}
