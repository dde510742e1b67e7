//! Pass-through visitor stage.

/// Invokes a callable on each element as it flows past, then yields the
/// element unchanged. Created by [`Vista::visit`](crate::Vista::visit).
///
/// The visitor receives `&mut` access, so it can edit elements in flight;
/// a read-only visitor simply ignores the mutability. Like every other
/// stage, nothing runs until a consumer pulls.
#[derive(Clone)]
#[must_use = "stages are lazy and do nothing unless consumed"]
pub struct Visit<I, F> {
    source: I,
    visitor: F,
}

impl<I, F> Visit<I, F> {
    pub(crate) fn new(source: I, visitor: F) -> Self {
        Visit { source, visitor }
    }
}

impl<I, F> Iterator for Visit<I, F>
where
    I: Iterator,
    F: FnMut(&mut I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let mut item = self.source.next()?;
        (self.visitor)(&mut item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}
