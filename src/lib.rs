#![forbid(unsafe_code)]
//! vista: lazy, composable sequence operators over standard iterators.
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no shared state, no
//!   allocation outside the materializing terminals).
//! - Stages are plain iterator adaptors built through the [`Vista`]
//!   extension trait; nothing runs until a terminal consumer pulls.
//!   Filter-family stages do their leading skip when the first element is
//!   pulled, never at construction.
//! - Stages are single-pass. A composed pipeline can be traversed again by
//!   cloning it, which replays every upstream callable from scratch; there
//!   is no memoization anywhere.
//!
//! ```
//! use vista::Vista;
//!
//! let numbers = [-3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8];
//! let result = numbers
//!     .iter()
//!     .copied()
//!     .keep(|n| n % 2 == 0)
//!     .select(|n| n * n)
//!     .keep(|sq| *sq > 10)
//!     .to_vec();
//! assert_eq!(result, vec![16, 36, 64]);
//! ```

pub mod keep;
pub mod non_null;
pub mod prelude;
pub mod select;
pub mod visit;

pub use keep::Keep;
pub use non_null::{NonNull, NonNullMut, NonNullRef};
pub use select::Select;
pub use visit::Visit;

/// Extension trait carrying every stage constructor and terminal consumer.
///
/// Blanket-implemented for all sized iterators, so any source that exposes
/// forward iteration (`iter`, `iter_mut`, `into_iter`, ranges, other
/// adaptors) can open a pipeline.
pub trait Vista: Iterator {
    /// Filter stage: yield only the elements satisfying `predicate`, in
    /// source order. The leading skip past non-matching elements runs at
    /// traversal start; the predicate is invoked once per element
    /// inspected, not per element yielded.
    fn keep<P>(self, predicate: P) -> Keep<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Keep::new(self, predicate)
    }

    /// Map stage: yield `selector`'s result for each element, lazily, in
    /// order. The selector may return a borrowed value (e.g. `&mut` into
    /// the element) to enable downstream in-place mutation.
    fn select<F, R>(self, selector: F) -> Select<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        Select::new(self, selector)
    }

    /// Null-filter stage: skip `None` slots, yielding each `Some` payload.
    ///
    /// ```
    /// use vista::Vista;
    ///
    /// let (a, b, c) = (1, 2, 3);
    /// let slots = [None, Some(&a), None, None, Some(&b), Some(&c)];
    /// let hits: Vec<&i32> = slots.iter().copied().non_null().to_vec();
    /// assert_eq!(hits, vec![&1, &2, &3]);
    /// ```
    fn non_null<T>(self) -> NonNull<Self>
    where
        Self: Sized + Iterator<Item = Option<T>>,
    {
        NonNull::new(self)
    }

    /// Fused null-filter-and-dereference over borrowed slots: skip `None`,
    /// yield `&T` into each `Some`. Observably identical to composing
    /// [`Vista::keep`] with an unwrapping [`Vista::select`], in one pass.
    fn non_null_ref<'a, T: 'a>(self) -> NonNullRef<Self>
    where
        Self: Sized + Iterator<Item = &'a Option<T>>,
    {
        NonNullRef::new(self)
    }

    /// Mutable twin of [`Vista::non_null_ref`]: yields `&mut T`, so the
    /// pipeline can edit the referents in place.
    ///
    /// ```
    /// use vista::Vista;
    ///
    /// let mut slots = [Some(1), None, Some(3)];
    /// slots.iter_mut().non_null_mut().each(|v| *v *= 2);
    /// assert_eq!(slots, [Some(2), None, Some(6)]);
    /// ```
    fn non_null_mut<'a, T: 'a>(self) -> NonNullMut<Self>
    where
        Self: Sized + Iterator<Item = &'a mut Option<T>>,
    {
        NonNullMut::new(self)
    }

    /// Pass-through stage: invoke `visitor` on each element as it flows
    /// past, then yield the element unchanged. The mutable borrow lets
    /// visitors edit elements in flight.
    fn visit<F>(self, visitor: F) -> Visit<Self, F>
    where
        Self: Sized,
        F: FnMut(&mut Self::Item),
    {
        Visit::new(self, visitor)
    }

    /// Materialize the remaining elements into a freshly allocated `Vec`.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.to_vec_reserve(0)
    }

    /// Like [`Vista::to_vec`], reserving `capacity` slots up front.
    fn to_vec_reserve(self, capacity: usize) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut out = Vec::with_capacity(capacity);
        out.extend(self);
        out
    }

    /// Materialize while applying a final transform to each element.
    fn to_vec_by<F, R>(self, selector: F) -> Vec<R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        self.to_vec_reserve_by(0, selector)
    }

    /// Like [`Vista::to_vec_by`], reserving `capacity` slots up front.
    fn to_vec_reserve_by<F, R>(self, capacity: usize, mut selector: F) -> Vec<R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        let mut out = Vec::with_capacity(capacity);
        for item in self {
            out.push(selector(item));
        }
        out
    }

    /// First element, or the item type's default if the view is empty.
    /// Short-circuits: walks nothing past the first element.
    fn first_or_default(mut self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Default,
    {
        self.next().unwrap_or_default()
    }

    /// First element satisfying `predicate`, or the item type's default if
    /// none matches.
    ///
    /// ```
    /// use vista::Vista;
    ///
    /// let numbers = [8, 6, 7, 5, 3, 0, 9];
    /// assert_eq!(numbers.iter().copied().first_or_default_by(|n| *n < 5), 3);
    /// assert_eq!(numbers.iter().copied().first_or_default_by(|n| *n > 10), 0);
    /// ```
    fn first_or_default_by<P>(mut self, predicate: P) -> Self::Item
    where
        Self: Sized,
        Self::Item: Default,
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).unwrap_or_default()
    }

    /// Walk the full view, invoking a side-effecting callable per element
    /// and discarding results.
    fn each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for item in self {
            f(item);
        }
    }

    /// Drain the view discarding every element. Forces evaluation of a lazy
    /// chain whose side effects matter but whose values do not.
    fn consume(self)
    where
        Self: Sized,
    {
        for item in self {
            drop(item);
        }
    }
}

impl<I: Iterator> Vista for I {}
