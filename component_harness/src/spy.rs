use or_poisoned::OrPoisoned;
use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// A stand-in callback that remembers how it was called.
///
/// Clones share one record, so a clone can be moved into an event handler
/// while the test keeps the original for assertions.
pub struct Spy<A = ()> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A> Clone for Spy<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> Default for Spy<A> {
    fn default() -> Self {
        Self {
            calls: Default::default(),
        }
    }
}

impl<A> fmt::Debug for Spy<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spy")
            .field("call_count", &self.call_count())
            .finish()
    }
}

impl<A> Spy<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one invocation.
    pub fn record(&self, args: A) {
        self.calls.lock().or_poisoned().push(args);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().or_poisoned().len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    pub fn reset(&self) {
        self.calls.lock().or_poisoned().clear();
    }

    /// An event handler that records `map(event)` on every call.
    pub fn handler_with<E, M>(&self, map: M) -> impl FnMut(E) + Send + 'static
    where
        A: Send + 'static,
        E: 'static,
        M: Fn(E) -> A + Send + 'static,
    {
        let spy = self.clone();
        move |event| spy.record(map(event))
    }
}

impl<A: Clone> Spy<A> {
    /// Arguments of every call so far, oldest first.
    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().or_poisoned().clone()
    }

    pub fn last_call(&self) -> Option<A> {
        self.calls.lock().or_poisoned().last().cloned()
    }
}

impl Spy<()> {
    /// An event handler that only counts its calls.
    pub fn handler<E: 'static>(&self) -> impl FnMut(E) + Send + 'static {
        self.handler_with(|_: E| ())
    }
}
