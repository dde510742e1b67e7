//! Filter stage: keep only the elements satisfying a predicate.

/// Lazy filter over a source iterator, created by [`Vista::keep`](crate::Vista::keep).
///
/// Construction inspects nothing. The leading skip past non-matching
/// elements happens when the first element is pulled, and every later pull
/// scans forward to the next satisfying element, so the predicate runs once
/// per element inspected, not per element yielded. Each traversal of a
/// cloned stage pays that full price again; nothing is remembered across
/// traversals.
#[derive(Clone)]
#[must_use = "stages are lazy and do nothing unless consumed"]
pub struct Keep<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> Keep<I, P> {
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Keep { source, predicate }
    }
}

impl<I, P> Iterator for Keep<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.source.find(&mut self.predicate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}
