use log::trace;

use crate::{Error, Result, SeqIterator, State};

/// Iterator over a borrowed slice.
///
/// Holds a cursor and the element it last moved onto. The borrow keeps the
/// slice from being mutated while iterating.
#[derive(Debug, Clone)]
pub struct SliceIterator<'a, T> {
    elements: &'a [T],
    index: usize,
    value: Option<&'a T>,
    state: State,
}

impl<'a, T> SliceIterator<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            index: 0,
            value: None,
            state: State::Fresh,
        }
    }

    /// Number of elements not yet visited.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.elements.len() - self.index
    }
}

/// Creates an iterator over `xs`.
#[inline]
pub fn slice<T>(xs: &[T]) -> SliceIterator<'_, T>
where
    T: Clone,
{
    SliceIterator::new(xs)
}

impl<'a, T> From<&'a [T]> for SliceIterator<'a, T> {
    fn from(value: &'a [T]) -> Self {
        Self::new(value)
    }
}

impl<'a, T> From<&'a Vec<T>> for SliceIterator<'a, T> {
    fn from(value: &'a Vec<T>) -> Self {
        Self::new(value)
    }
}

impl<T> SeqIterator for SliceIterator<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.state.is_exhausted() {
            return false;
        }

        let next = self.elements.get(self.index);
        self.value = next;
        self.state = self.state.advanced(next.is_some());

        if next.is_some() {
            self.index += 1;
        } else {
            trace!("slice iterator exhausted after {} elements", self.index);
        }

        next.is_some()
    }

    #[inline]
    fn current(&self) -> Result<T> {
        match self.value {
            Some(value) if self.state.is_active() => Ok(value.clone()),
            _ => Err(Error::invalid_state(self.state)),
        }
    }

    #[inline]
    fn state(&self) -> State {
        self.state
    }
}
