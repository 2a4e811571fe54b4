use std::fmt;

use log::debug;

use crate::{Error, Result, SeqIterator, State};

/// Yields only the elements of its source that satisfy a predicate.
///
/// A single `advance()` keeps pulling the source until a match or the end, so
/// one call can cost O(remaining source length). The current element lives in
/// the source; `current()` reads it through unchanged.
#[derive(Clone)]
pub struct FilterIterator<I, P> {
    source: I,
    pred: P,
    state: State,
}

impl<I, P> FilterIterator<I, P> {
    pub fn new(source: I, pred: P) -> Self {
        Self {
            source,
            pred,
            state: State::Fresh,
        }
    }

    pub fn into_inner(self) -> I {
        self.source
    }
}

/// Keeps only the elements of `iter` for which `pred` returns `true`.
#[inline]
pub fn filter<I, P>(iter: I, pred: P) -> FilterIterator<I, P>
where
    I: SeqIterator,
    P: FnMut(&I::Item) -> bool,
{
    FilterIterator::new(iter, pred)
}

impl<I, P> SeqIterator for FilterIterator<I, P>
where
    I: SeqIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        if self.state.is_exhausted() {
            return false;
        }

        while self.source.advance() {
            // An element the source cannot produce right after advancing is
            // skipped as a non-match.
            match self.source.current() {
                Ok(value) => {
                    if (self.pred)(&value) {
                        self.state = State::Active;
                        return true;
                    }
                }
                Err(err) => debug!("filter skipped an unreadable element: {err}"),
            }
        }

        self.state = State::Exhausted;
        false
    }

    #[inline]
    fn current(&self) -> Result<Self::Item> {
        if !self.state.is_active() {
            return Err(Error::invalid_state(self.state));
        }
        self.source.current()
    }

    #[inline]
    fn state(&self) -> State {
        self.state
    }
}

impl<I, P> fmt::Debug for FilterIterator<I, P>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterIterator")
            .field("source", &self.source)
            .field("state", &self.state)
            .finish()
    }
}
