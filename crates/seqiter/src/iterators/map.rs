use std::fmt;

use crate::{Error, Result, SeqIterator, State};

/// Applies a function to every element of its source, keeping the element type.
///
/// Positioning is left to the source. The function runs on every call to
/// `current()`, so it should be pure.
#[derive(Clone)]
pub struct MapIterator<I, F> {
    source: I,
    mapper: F,
    state: State,
}

impl<I, F> MapIterator<I, F> {
    pub fn new(source: I, mapper: F) -> Self {
        Self {
            source,
            mapper,
            state: State::Fresh,
        }
    }

    pub fn into_inner(self) -> I {
        self.source
    }
}

/// Wraps `iter` so that every element is passed through `f`.
#[inline]
pub fn map<I, F>(iter: I, f: F) -> MapIterator<I, F>
where
    I: SeqIterator,
    F: Fn(I::Item) -> I::Item,
{
    MapIterator::new(iter, f)
}

impl<I, F> SeqIterator for MapIterator<I, F>
where
    I: SeqIterator,
    F: Fn(I::Item) -> I::Item,
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        if self.state.is_exhausted() {
            return false;
        }
        let found = self.source.advance();
        self.state = self.state.advanced(found);
        found
    }

    #[inline]
    fn current(&self) -> Result<Self::Item> {
        if !self.state.is_active() {
            return Err(Error::invalid_state(self.state));
        }
        self.source.current().map(&self.mapper)
    }

    #[inline]
    fn state(&self) -> State {
        self.state
    }
}

impl<I, F> fmt::Debug for MapIterator<I, F>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapIterator")
            .field("source", &self.source)
            .field("state", &self.state)
            .finish()
    }
}
