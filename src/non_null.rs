//! Null-filtering stage family: skip `None` slots in a single pass.
//!
//! Each stage here is observably equal to a [`Keep`](crate::Keep) over
//! `Option::is_some` composed with an unwrapping [`Select`](crate::Select),
//! fused into one adaptor. The fused forms exist purely as performance
//! variants; the benchmarks compare them against the composed spelling.
//!
//! All three are strictly lazy, like the rest of the filter family: the
//! leading skip past null slots runs when the first element is pulled.

/// Null filter over owned `Option` elements, yielding each `Some` payload.
///
/// The payload may itself be pointer-like (`&T`, `&mut T`, `Box<T>`), so
/// this is the "yield the original pointer" variant.
#[derive(Clone)]
#[must_use = "stages are lazy and do nothing unless consumed"]
pub struct NonNull<I> {
    source: I,
}

impl<I> NonNull<I> {
    pub(crate) fn new(source: I) -> Self {
        NonNull { source }
    }
}

impl<I, T> Iterator for NonNull<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.source.find_map(|slot| slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

/// Fused null-filter-and-dereference over borrowed slots: `&Option<T>`
/// elements in, `&T` referents out, `None` slots skipped entirely.
#[derive(Clone)]
#[must_use = "stages are lazy and do nothing unless consumed"]
pub struct NonNullRef<I> {
    source: I,
}

impl<I> NonNullRef<I> {
    pub(crate) fn new(source: I) -> Self {
        NonNullRef { source }
    }
}

impl<'a, I, T: 'a> Iterator for NonNullRef<I>
where
    I: Iterator<Item = &'a Option<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.source.find_map(|slot| slot.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

/// Mutable twin of [`NonNullRef`]: `&mut Option<T>` elements in, `&mut T`
/// referents out. Downstream stages can edit the referents in place.
///
/// Not `Clone`; a pipeline holding live `&mut` slots cannot be duplicated.
#[must_use = "stages are lazy and do nothing unless consumed"]
pub struct NonNullMut<I> {
    source: I,
}

impl<I> NonNullMut<I> {
    pub(crate) fn new(source: I) -> Self {
        NonNullMut { source }
    }
}

impl<'a, I, T: 'a> Iterator for NonNullMut<I>
where
    I: Iterator<Item = &'a mut Option<T>>,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.source.find_map(|slot| slot.as_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}
