use std::fmt;

use crate::{Error, Result, SeqIterator, State};

/// Like [`MapIterator`](crate::MapIterator), but the function may change the element type.
#[derive(Clone)]
pub struct MapIntoIterator<I, F> {
    source: I,
    mapper: F,
    state: State,
}

impl<I, F> MapIntoIterator<I, F> {
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

#[inline]
pub fn map_into<I, U, F>(iter: I, f: F) -> MapIntoIterator<I, F>
where
    I: SeqIterator,
    F: Fn(I::Item) -> U,
{
    MapIntoIterator::new(iter, f)
}

impl<I, U, F> SeqIterator for MapIntoIterator<I, F>
where
    I: SeqIterator,
    F: Fn(I::Item) -> U,
{
    type Item = U;

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
    fn current(&self) -> Result<U> {
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

impl<I, F> fmt::Debug for MapIntoIterator<I, F>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapIntoIterator")
            .field("source", &self.source)
            .field("state", &self.state)
            .finish()
    }
}
