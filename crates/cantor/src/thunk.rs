//! Evaluate-once suspended computations.
//!
//! A [`Thunk`] holds a deferred computation and the slot its result is cached
//! in. The first call to [`Thunk::force`] runs the computation; every later
//! call returns the cached value. This is the only mutable state in the crate,
//! and it is scoped to the thunk instance that owns it.

use std::cell::{OnceCell, RefCell};
use std::fmt;

type Init<T> = Box<dyn FnOnce() -> T>;

/// A value computed on first demand and cached afterwards.
pub struct Thunk<T> {
    value: OnceCell<T>,
    init: RefCell<Option<Init<T>>>,
}

impl<T> Thunk<T> {
    /// Suspends `init` until the thunk is first forced.
    pub fn new(init: impl FnOnce() -> T + 'static) -> Self {
        Self {
            value: OnceCell::new(),
            init: RefCell::new(Some(Box::new(init))),
        }
    }

    /// Returns the value, running the suspended computation if this is the
    /// first demand.
    ///
    /// # Panics
    ///
    /// Panics if the computation demands its own result. A thunk whose value
    /// depends on itself has no value to produce.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| {
            // The borrow ends with this statement, so `init` may force other thunks.
            let init = self
                .init
                .borrow_mut()
                .take()
                .expect("thunk forced re-entrantly from its own computation");
            init()
        })
    }

    /// Returns `true` once the computation has run.
    pub fn is_forced(&self) -> bool {
        self.value.get().is_some()
    }

    /// Consumes the thunk, returning the value if it was ever forced.
    /// A computation that never ran is discarded.
    pub fn into_value(self) -> Option<T> {
        self.value.into_inner()
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Thunk").field(value).finish(),
            None => f.write_str("Thunk(<suspended>)"),
        }
    }
}
