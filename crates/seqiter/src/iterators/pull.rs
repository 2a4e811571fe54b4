use std::iter::FusedIterator;

use log::debug;

use crate::SeqIterator;

/// Adapts a [`SeqIterator`] to [`std::iter::Iterator`].
///
/// Iteration ends at the first failed advance, or if the source cannot produce
/// its current value.
#[derive(Debug, Clone)]
pub struct Pull<I> {
    iter: I,
    done: bool,
}

impl<I> Pull<I>
where
    I: SeqIterator,
{
    pub fn new(iter: I) -> Self {
        Self { iter, done: false }
    }

    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Iterator for Pull<I>
where
    I: SeqIterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.iter.advance() {
            self.done = true;
            return None;
        }
        match self.iter.current() {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("std iteration stopped on an unreadable element: {err}");
                self.done = true;
                None
            }
        }
    }
}

impl<I> FusedIterator for Pull<I> where I: SeqIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iterators::testing::Holey, slice};

    #[test]
    fn test_feeds_std_adapters() {
        let xs = [1, 2, 3, 4];
        let evens = slice(&xs)
            .into_std()
            .enumerate()
            .filter(|(_, x)| x % 2 == 0)
            .collect::<Vec<_>>();

        assert_eq!(evens, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_fused() {
        let xs = [1];
        let mut iter = slice(&xs).into_std();

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert!(iter.into_inner().state().is_exhausted());
    }

    #[test]
    fn test_stops_on_unreadable_element() {
        let xs = [Some(1), None, Some(3)];
        let mut iter = Holey(slice(&xs)).into_std();

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert!(iter.into_inner().state().is_active());
    }
}
