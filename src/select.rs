//! Map stage: transform each element through a selector.

/// Lazy map over a source iterator, created by [`Vista::select`](crate::Vista::select).
///
/// Strictly lazy: construction inspects nothing, and the selector runs
/// fresh for every element on every traversal. No result is ever cached.
#[derive(Clone)]
#[must_use = "stages are lazy and do nothing unless consumed"]
pub struct Select<I, F> {
    source: I,
    selector: F,
}

impl<I, F> Select<I, F> {
    pub(crate) fn new(source: I, selector: F) -> Self {
        Select { source, selector }
    }
}

impl<I, F, R> Iterator for Select<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.source.next().map(&mut self.selector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}
