//! Cached derivations over cells.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::cell::{with_tracking, Dep};

struct ComputedState<T> {
    cached: Option<T>,
    deps: Vec<Dep>,
    evaluations: u64,
}

/// A derived value that re-evaluates only when a cell it read during its
/// last evaluation has changed.
///
/// Evaluation is lazy: staleness is checked on `get`, and the closure runs
/// at most once per batch of dependency changes. Reading one computed from
/// inside another is not supported; derivations read cells directly.
pub struct Computed<T> {
    f: Rc<dyn Fn() -> T>,
    state: Rc<RefCell<ComputedState<T>>>,
}

impl<T: Clone + 'static> Computed<T> {
    /// Create a computed from its derivation closure.
    ///
    /// The closure does not run until the first `get`.
    #[must_use]
    pub fn new(f: impl Fn() -> T + 'static) -> Self {
        Self {
            f: Rc::new(f),
            state: Rc::new(RefCell::new(ComputedState {
                cached: None,
                deps: Vec::new(),
                evaluations: 0,
            })),
        }
    }

    /// Get the current value, re-evaluating first if any dependency changed.
    pub fn get(&self) -> T {
        if let Some(value) = self.cached_if_current() {
            return value;
        }

        let (value, deps) = with_tracking(|| (self.f)());
        let mut state = self.state.borrow_mut();
        state.cached = Some(value.clone());
        state.deps = deps;
        state.evaluations += 1;
        value
    }

    fn cached_if_current(&self) -> Option<T> {
        let state = self.state.borrow();
        let value = state.cached.as_ref()?;
        state
            .deps
            .iter()
            .all(Dep::is_current)
            .then(|| value.clone())
    }

    /// How many times the derivation closure has run. Lets tests pin down
    /// that unrelated writes do not trigger re-evaluation.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.state.borrow().evaluations
    }
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("evaluations", &self.state.borrow().evaluations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::cell::Cell;
    use super::*;

    #[test]
    fn test_lazy_first_evaluation() {
        let cell = Cell::new(2);
        let reader = cell.clone();
        let squared = Computed::new(move || reader.get() * reader.get());

        assert_eq!(squared.evaluations(), 0);
        assert_eq!(squared.get(), 4);
        assert_eq!(squared.evaluations(), 1);
    }

    #[test]
    fn test_repeated_gets_hit_the_cache() {
        let cell = Cell::new(2);
        let reader = cell.clone();
        let squared = Computed::new(move || reader.get() * reader.get());

        squared.get();
        squared.get();
        squared.get();
        assert_eq!(squared.evaluations(), 1);
    }

    #[test]
    fn test_dependency_write_forces_reevaluation() {
        let cell = Cell::new(2);
        let reader = cell.clone();
        let squared = Computed::new(move || reader.get() * reader.get());

        assert_eq!(squared.get(), 4);
        cell.set(3);
        assert_eq!(squared.get(), 9);
        assert_eq!(squared.evaluations(), 2);
    }

    #[test]
    fn test_unrelated_write_does_not_reevaluate() {
        let used = Cell::new(1);
        let unused = Cell::new(1);

        let reader = used.clone();
        let derived = Computed::new(move || reader.get() + 1);
        derived.get();

        unused.set(2);
        unused.set(3);
        derived.get();
        assert_eq!(derived.evaluations(), 1);
    }

    #[test]
    fn test_dependencies_retrack_each_evaluation() {
        let switch = Cell::new(true);
        let left = Cell::new(10);
        let right = Cell::new(20);

        let (s, l, r) = (switch.clone(), left.clone(), right.clone());
        let picked = Computed::new(move || if s.get() { l.get() } else { r.get() });

        assert_eq!(picked.get(), 10);

        // While on the left branch, right is not a dependency
        right.set(21);
        picked.get();
        assert_eq!(picked.evaluations(), 1);

        switch.set(false);
        assert_eq!(picked.get(), 21);

        // Now left is no longer a dependency
        left.set(11);
        picked.get();
        assert_eq!(picked.evaluations(), 2);
    }

    #[test]
    fn test_update_counts_as_write() {
        let cell = Cell::new(vec![1]);
        let reader = cell.clone();
        let len = Computed::new(move || reader.with(|v| v.len()));

        assert_eq!(len.get(), 1);
        cell.update(|v| v.push(2));
        assert_eq!(len.get(), 2);
    }

    #[test]
    fn test_clone_shares_cache() {
        let cell = Cell::new(1);
        let reader = cell.clone();
        let a = Computed::new(move || reader.get());
        let b = a.clone();

        a.get();
        b.get();
        assert_eq!(b.evaluations(), 1);
    }
}
