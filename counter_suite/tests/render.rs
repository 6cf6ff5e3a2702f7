#![cfg(not(target_family = "wasm"))]

//! Renders the fixtures to HTML without a browser. Clicks need a DOM, so the
//! click path is covered by the browser suite; here state is driven directly.

use component_harness::{DirectDriver, Interaction, Spy};
use counter_suite::*;
use leptos::{prelude::*, tachys::view::RenderHtml};
use pretty_assertions::assert_eq;

fn bridged_html(state: &CounterState) -> String {
    let state = state.clone();
    view! { <BridgedCounter state=state/> }.to_html()
}

#[test]
fn greeting_renders_its_text() {
    Owner::new().with(|| {
        assert_eq!(
            view! { <Greeting text="Test1"/> }.to_html(),
            "<div>Test1</div>"
        );
    });
}

#[test]
fn counter_starts_at_zero() {
    Owner::new().with(|| {
        assert_eq!(
            view! { <Counter/> }.to_html(),
            "<div><button>Count is 0</button></div>"
        );
    });
}

#[test]
fn bridged_counter_reflects_forced_values() {
    Owner::new().with(|| {
        let state = CounterState::new();
        assert_eq!(
            bridged_html(&state),
            "<div><button>Count is 0</button></div>"
        );

        state.increment();
        assert_eq!(
            bridged_html(&state),
            "<div><button>Count is 1</button></div>"
        );

        state.force(50);
        assert_eq!(
            bridged_html(&state),
            "<div><button>Count is 50</button></div>"
        );

        state.increment();
        assert_eq!(
            bridged_html(&state),
            "<div><button>Count is 51</button></div>"
        );
    });
}

#[test]
fn direct_driver_advances_the_shared_state() {
    Owner::new().with(|| {
        let state = CounterState::new();
        let mut driver = DirectDriver::new({
            let state = state.clone();
            move || state.increment()
        });

        for k in 1..=3 {
            driver.trigger().unwrap();
            assert_eq!(state.value(), k);
        }
        assert_eq!(
            bridged_html(&state),
            "<div><button>Count is 3</button></div>"
        );
    });
}

#[test]
fn spy_button_renders_without_calling_the_spy() {
    Owner::new().with(|| {
        let spy: Spy = Spy::new();
        let html = view! { <SpyButton spy=spy.clone() label="Test1"/> }
            .to_html();
        assert_eq!(html, "<button>Test1</button>");
        assert_eq!(spy.call_count(), 0);
    });
}
