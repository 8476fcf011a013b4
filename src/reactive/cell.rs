//! Observable cells with version tracking.
//!
//! Each cell carries a version counter bumped on every write. A computed
//! evaluation runs inside a tracking frame; every cell read during the
//! frame records itself with the version it had, which is what lets the
//! computed later decide staleness per-dependency instead of per-object.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

thread_local! {
    static TRACK_FRAMES: RefCell<Vec<Vec<Dep>>> = RefCell::new(Vec::new());
}

/// Anything a computed can depend on: exposes a monotonically increasing
/// version.
pub(crate) trait Versioned {
    fn version(&self) -> u64;
}

/// A recorded dependency: the source and the version seen when it was read.
pub(crate) struct Dep {
    source: Rc<dyn Versioned>,
    seen: u64,
}

impl Dep {
    /// True while the source has not changed since the read was recorded.
    pub(crate) fn is_current(&self) -> bool {
        self.source.version() == self.seen
    }
}

/// Run `f` with a fresh tracking frame, returning its value and every
/// dependency it read.
pub(crate) fn with_tracking<T>(f: impl FnOnce() -> T) -> (T, Vec<Dep>) {
    TRACK_FRAMES.with(|frames| frames.borrow_mut().push(Vec::new()));
    let value = f();
    let deps = TRACK_FRAMES.with(|frames| frames.borrow_mut().pop().unwrap_or_default());
    (value, deps)
}

fn record_read(source: Rc<dyn Versioned>, seen: u64) {
    TRACK_FRAMES.with(|frames| {
        if let Some(frame) = frames.borrow_mut().last_mut() {
            frame.push(Dep { source, seen });
        }
    });
}

struct CellInner<T> {
    value: T,
    version: u64,
}

impl<T> Versioned for RefCell<CellInner<T>> {
    fn version(&self) -> u64 {
        self.borrow().version
    }
}

/// An independently observable, mutable slot.
///
/// Handles are cheap clones sharing one slot. Reads performed inside a
/// computed evaluation are tracked; writes bump the version and so mark
/// dependent computeds stale.
pub struct Cell<T> {
    inner: Rc<RefCell<CellInner<T>>>,
}

impl<T: 'static> Cell<T> {
    /// Create a cell holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner { value, version: 0 })),
        }
    }

    fn track(&self) {
        let seen = self.inner.borrow().version;
        record_read(Rc::clone(&self.inner) as Rc<dyn Versioned>, seen);
    }

    /// Clone the current value out.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.track();
        self.inner.borrow().value.clone()
    }

    /// Read the current value by reference, without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.track();
        f(&self.inner.borrow().value)
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        let mut inner = self.inner.borrow_mut();
        inner.value = value;
        inner.version += 1;
    }

    /// Mutate the value in place.
    ///
    /// Counts as a write even if `f` leaves the value untouched.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut inner = self.inner.borrow_mut();
        let out = f(&mut inner.value);
        inner.version += 1;
        out
    }
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cell").field(&self.inner.borrow().value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let cell = Cell::new(5);
        assert_eq!(cell.get(), 5);

        cell.set(7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn test_with_reads_by_reference() {
        let cell = Cell::new(String::from("hello"));
        assert_eq!(cell.with(|s| s.len()), 5);
    }

    #[test]
    fn test_update_in_place() {
        let cell = Cell::new(vec![1, 2]);
        let len = cell.update(|v| {
            v.push(3);
            v.len()
        });
        assert_eq!(len, 3);
        assert_eq!(cell.get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let a = Cell::new(1);
        let b = a.clone();

        b.set(2);
        assert_eq!(a.get(), 2);
    }

    #[test]
    fn test_writes_bump_version() {
        let cell = Cell::new(0);
        let v0 = cell.inner.version();

        cell.set(1);
        cell.update(|n| *n += 1);

        assert_eq!(cell.inner.version(), v0 + 2);
    }

    #[test]
    fn test_reads_outside_tracking_record_nothing() {
        let cell = Cell::new(1);
        let ((), deps) = with_tracking(|| ());
        assert!(deps.is_empty());

        // A read outside any frame must not leak into the next frame
        cell.get();
        let ((), deps) = with_tracking(|| ());
        assert!(deps.is_empty());
    }

    #[test]
    fn test_tracked_reads_are_recorded() {
        let cell = Cell::new(1);
        let (value, deps) = with_tracking(|| cell.get());

        assert_eq!(value, 1);
        assert_eq!(deps.len(), 1);
        assert!(deps[0].is_current());

        cell.set(2);
        assert!(!deps[0].is_current());
    }
}
