//! Counter fixtures for the component test suite.
//!
//! Each test builds its own fixture, so none of the state here outlives the
//! test that created it.

use component_harness::Spy;
use leptos::prelude::*;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use web_sys::MouseEvent;

pub fn counter_label(count: i64) -> String {
    format!("Count is {count}")
}

#[component]
pub fn Greeting(#[prop(into)] text: String) -> impl IntoView {
    view! { <div>{text}</div> }
}

/// The button shared by the counter fixtures.
///
/// The label is a single text node, so the button serializes to
/// `<button>Count is 0</button>` at rest.
pub fn counter_button<F>(count: Signal<i64>, on_click: F) -> impl IntoView
where
    F: FnMut(MouseEvent) + Send + 'static,
{
    view! {
        <button on:click=on_click>{move || counter_label(count.get())}</button>
    }
}

/// A counter that owns its state: every click adds one.
#[component]
pub fn Counter() -> impl IntoView {
    let count = RwSignal::new(0);

    view! {
        <div>{counter_button(count.into(), move |_| count.update(|n| *n += 1))}</div>
    }
}

/// State for [`BridgedCounter`] that tests can also write to directly.
///
/// Clones share the same counter. Every write notifies the views that read
/// it, whether it came from a click or from [`CounterState::force`].
#[derive(Clone, Debug, Default)]
pub struct CounterState {
    count: Arc<AtomicI64>,
    rerender: ArcTrigger,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.rerender.notify();
    }

    /// Overwrites the count and re-renders, bypassing the click handler.
    pub fn force(&self, value: i64) {
        self.count.store(value, Ordering::Relaxed);
        self.rerender.notify();
    }

    /// Subscribes the running effect to future writes.
    pub fn track(&self) {
        self.rerender.track();
    }
}

/// A counter whose state lives outside the component.
#[component]
pub fn BridgedCounter(state: CounterState) -> impl IntoView {
    let count = Signal::derive({
        let state = state.clone();
        move || {
            state.track();
            state.value()
        }
    });

    view! { <div>{counter_button(count, move |_| state.increment())}</div> }
}

/// A button whose click handler is a [`Spy`].
#[component]
pub fn SpyButton(spy: Spy, #[prop(into)] label: String) -> impl IntoView {
    let on_click = spy.handler::<MouseEvent>();

    view! { <button on:click=on_click>{label}</button> }
}
