use crate::{FilterIterator, MapIntoIterator, MapIterator, Pull, Result, State, terminal};

/// A single-pass, pull-based iterator.
///
/// Progress is driven by the consumer: [`advance`](Self::advance) moves to the
/// next element and [`current`](Self::current) reads it. Implementations never
/// do work ahead of a pull and are not restartable.
pub trait SeqIterator {
    type Item;

    /// Moves to the next element, returning whether one exists.
    ///
    /// Once this has returned `false` it must keep returning `false`.
    fn advance(&mut self) -> bool;

    /// The element at the current position.
    ///
    /// Fails with [`Error::InvalidState`](crate::Error::InvalidState) unless the
    /// last call to `advance` returned `true`.
    fn current(&self) -> Result<Self::Item>;

    fn state(&self) -> State;

    /// Lazily applies `f` to every element. The output type is the input type.
    fn map<F>(self, f: F) -> MapIterator<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Self::Item,
    {
        MapIterator::new(self, f)
    }

    /// Lazily converts every element with `f`.
    fn map_into<U, F>(self, f: F) -> MapIntoIterator<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        MapIntoIterator::new(self, f)
    }

    /// Lazily skips the elements for which `pred` returns `false`.
    fn filter<P>(self, pred: P) -> FilterIterator<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        FilterIterator::new(self, pred)
    }

    fn collect(self) -> Result<Vec<Self::Item>>
    where
        Self: Sized,
    {
        terminal::collect(self)
    }

    fn reduce<A, F>(self, f: F) -> Result<A>
    where
        Self: Sized,
        A: Default,
        F: FnMut(A, Self::Item) -> A,
    {
        terminal::reduce(self, f)
    }

    fn fold<A, F>(self, init: A, f: F) -> Result<A>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        terminal::fold(self, init, f)
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        terminal::count(self)
    }

    fn boxed<'a>(self) -> BoxedSeqIterator<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapts this iterator to [`std::iter::Iterator`].
    fn into_std(self) -> Pull<Self>
    where
        Self: Sized,
    {
        Pull::new(self)
    }
}

/// Type alias for boxed iterators, used to build chains whose shape is only
/// known at runtime.
pub type BoxedSeqIterator<'a, T> = Box<dyn SeqIterator<Item = T> + 'a>;

impl<I> SeqIterator for Box<I>
where
    I: SeqIterator + ?Sized,
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> Result<Self::Item> {
        (**self).current()
    }

    #[inline]
    fn state(&self) -> State {
        (**self).state()
    }
}

impl<I> SeqIterator for &mut I
where
    I: SeqIterator + ?Sized,
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> Result<Self::Item> {
        (**self).current()
    }

    #[inline]
    fn state(&self) -> State {
        (**self).state()
    }
}
