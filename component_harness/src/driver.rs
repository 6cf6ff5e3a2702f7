//! Ways of poking a mounted component.
//!
//! Every driver implements [`Interaction`], so a test body can be written once
//! and run through a simulated click or a direct call into the component's
//! state. [`interact`] fires one interaction and waits for the reactive
//! system to settle before returning.

use crate::{error::Result, query::Screen};
use web_sys::HtmlElement;

/// Something that can fire one interaction against a mounted component.
pub trait Interaction {
    /// Fires a single interaction without waiting for the view to update.
    fn trigger(&mut self) -> Result<()>;
}

impl<I: Interaction + ?Sized> Interaction for &mut I {
    fn trigger(&mut self) -> Result<()> {
        (**self).trigger()
    }
}

/// Fires one interaction, then settles pending updates, so the next
/// assertion sees the rendered result.
pub async fn interact<I: Interaction + ?Sized>(driver: &mut I) -> Result<()> {
    driver.trigger()?;
    settle().await;
    Ok(())
}

/// Yields to the executor once, letting scheduled render effects run.
pub async fn settle() {
    leptos::task::tick().await;
}

/// Clicks an element located once up front.
#[derive(Debug, Clone)]
pub struct ElementClick {
    target: HtmlElement,
}

impl ElementClick {
    pub fn new(target: HtmlElement) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &HtmlElement {
        &self.target
    }
}

impl Interaction for ElementClick {
    fn trigger(&mut self) -> Result<()> {
        self.target.click();
        Ok(())
    }
}

/// Re-locates its target by selector before every click.
///
/// This is the slow path: each interaction pays for a fresh query, and fails
/// with `NotFound` if the target has gone away.
#[derive(Debug, Clone)]
pub struct SelectorClick {
    screen: Screen,
    selector: String,
}

impl SelectorClick {
    pub fn new(screen: Screen, selector: impl Into<String>) -> Self {
        Self {
            screen,
            selector: selector.into(),
        }
    }
}

impl Interaction for SelectorClick {
    fn trigger(&mut self) -> Result<()> {
        self.screen.get_by_selector(&self.selector)?.click();
        Ok(())
    }
}

/// Calls straight into the component through a setter it exposes, bypassing
/// the DOM entirely.
pub struct DirectDriver<F> {
    action: F,
}

impl<F: FnMut()> DirectDriver<F> {
    pub fn new(action: F) -> Self {
        Self { action }
    }
}

impl<F: FnMut()> Interaction for DirectDriver<F> {
    fn trigger(&mut self) -> Result<()> {
        (self.action)();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fire_n(driver: &mut impl Interaction, n: usize) -> Result<()> {
        for _ in 0..n {
            driver.trigger()?;
        }
        Ok(())
    }

    #[test]
    fn direct_driver_runs_its_action_once_per_trigger() {
        let hits = Cell::new(0);
        let mut driver = DirectDriver::new(|| hits.set(hits.get() + 1));
        fire_n(&mut driver, 3).unwrap();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn mutable_references_are_drivers_too() {
        let hits = Cell::new(0);
        let mut driver = DirectDriver::new(|| hits.set(hits.get() + 1));
        let mut by_ref = &mut driver;
        fire_n(&mut by_ref, 2).unwrap();
        driver.trigger().unwrap();
        assert_eq!(hits.get(), 3);
    }
}
