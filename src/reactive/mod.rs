//! Fine-grained reactive cells.
//!
//! The update model is single-threaded, cooperative, and synchronous:
//! handles are `Rc`-based (deliberately not `Send`), reads and writes
//! complete immediately, and a derived value observes every effect of the
//! write that preceded it.
//!
//! ## Key Types
//!
//! - `Cell<T>`: an independently observable, mutable slot
//! - `Computed<T>`: a cached derivation that re-evaluates only when a cell
//!   it read during its last evaluation has changed
//! - `Reactive`: wraps a plain record into one cell per field
//!
//! ## Fine-grained invalidation
//!
//! ```
//! use sushi_tally::reactive::{Cell, Computed};
//!
//! let count = Cell::new(1usize);
//! let unrelated = Cell::new(0usize);
//!
//! let reader = count.clone();
//! let doubled = Computed::new(move || reader.get() * 2);
//!
//! assert_eq!(doubled.get(), 2);
//!
//! unrelated.set(99);
//! doubled.get();
//! assert_eq!(doubled.evaluations(), 1); // untouched by unrelated writes
//!
//! count.set(5);
//! assert_eq!(doubled.get(), 10);
//! assert_eq!(doubled.evaluations(), 2);
//! ```

pub mod cell;
pub mod computed;

pub use cell::Cell;
pub use computed::Computed;

/// A plain record that can be split into one cell per field.
///
/// Implementations move each field into its own `Cell` so observers of one
/// field are not invalidated by writes to another.
pub trait Reactive {
    /// The per-field cell bundle.
    type Cells;

    /// Consume the record, wrapping every field in a fresh cell.
    fn into_cells(self) -> Self::Cells;
}

/// Wrap a sequence element-wise: one cell bundle per element, each element
/// recursively wrapped through its own `Reactive` impl.
pub fn reactive<T: Reactive>(values: Vec<T>) -> Vec<T::Cells> {
    values.into_iter().map(Reactive::into_cells).collect()
}
