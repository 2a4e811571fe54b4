//! Helpers for optional, heap-held values.

/// Types with a nil sentinel.
pub trait Nil {
    fn is_nil(&self) -> bool;
}

impl<T> Nil for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nil for *const T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nil for *mut T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

#[inline]
pub fn is_nil<N>(v: &N) -> bool
where
    N: Nil + ?Sized,
{
    v.is_nil()
}

/// Moves `v` to the heap.
#[inline]
pub fn to<T>(v: T) -> Box<T> {
    Box::new(v)
}

/// Like [`to`], but gives `None` for a nil value.
#[inline]
pub fn to_non_nil<T>(v: T) -> Option<Box<T>>
where
    T: Nil,
{
    if v.is_nil() { None } else { Some(to(v)) }
}
