//! One-shot deferred cells backing lazily built type bodies.
//!
//! Reference-carrying members (fields, implemented interfaces, union
//! members) may be supplied as thunks instead of values so that mutually
//! recursive types can be constructed before every referenced type exists.
//! A thunk runs at most once; every later access observes the same value.

use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Mutex;

type Thunk<T> = Box<dyn FnOnce() -> T + Send>;

/// A value that is either ready or produced on first access by a one-shot thunk.
pub struct Deferred<T> {
    cell: OnceCell<T>,
    thunk: Mutex<Option<Thunk<T>>>,
}

impl<T> Deferred<T> {
    /// Wraps an already-computed value.
    pub fn ready(value: T) -> Self {
        let cell = OnceCell::new();
        cell.set(value).ok().expect("fresh cell already populated");
        Self {
            cell,
            thunk: Mutex::new(None),
        }
    }

    /// Defers computation until the first call to [`Deferred::get`].
    pub fn new(thunk: impl FnOnce() -> T + Send + 'static) -> Self {
        Self {
            cell: OnceCell::new(),
            thunk: Mutex::new(Some(Box::new(thunk))),
        }
    }

    /// Returns the value, running the thunk if it has not run yet.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| {
            let thunk = self
                .thunk
                .lock()
                .expect("deferred thunk lock poisoned")
                .take()
                .expect("deferred cell has neither value nor thunk");
            thunk()
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => f.write_str("Deferred(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn ready_value_is_returned() {
        let cell = Deferred::ready(7);
        assert_eq!(*cell.get(), 7);
    }

    #[test]
    fn thunk_runs_exactly_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let cell = Deferred::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "body"
        });
        assert_eq!(*cell.get(), "body");
        assert_eq!(*cell.get(), "body");
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
