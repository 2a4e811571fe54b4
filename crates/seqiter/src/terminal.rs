use crate::{Result, SeqIterator};

/// Drives `iter` to the end and gathers every element in iteration order.
pub fn collect<I>(mut iter: I) -> Result<Vec<I::Item>>
where
    I: SeqIterator,
{
    let mut xs = Vec::new();
    while iter.advance() {
        xs.push(iter.current()?);
    }
    Ok(xs)
}

/// Folds every element into an accumulator that starts at `A::default()`.
///
/// An empty iterator yields the default value untouched.
pub fn reduce<I, A, F>(iter: I, f: F) -> Result<A>
where
    I: SeqIterator,
    A: Default,
    F: FnMut(A, I::Item) -> A,
{
    fold(iter, A::default(), f)
}

/// Folds every element into `init`, left to right.
pub fn fold<I, A, F>(mut iter: I, init: A, mut f: F) -> Result<A>
where
    I: SeqIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut accum = init;
    while iter.advance() {
        accum = f(accum, iter.current()?);
    }
    Ok(accum)
}

/// Drives `iter` to the end, returning how many elements it produced.
pub fn count<I>(mut iter: I) -> usize
where
    I: SeqIterator,
{
    let mut n = 0;
    while iter.advance() {
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice;

    #[test]
    fn test_collect_empty_is_empty_vec() {
        let xs: [String; 0] = [];
        assert_eq!(collect(slice(&xs)), Ok(vec![]));
    }

    #[test]
    fn test_collect_exhausts_source() {
        let xs = [1, 2];
        let mut iter = slice(&xs);

        assert_eq!(collect(&mut iter), Ok(vec![1, 2]));
        assert!(iter.state().is_exhausted());
        assert!(!iter.advance());
    }

    #[test]
    fn test_reduce_sums_left_to_right() {
        let xs = [1, 2, 3, 4];
        assert_eq!(reduce(slice(&xs), |acc: i32, x| acc + x), Ok(10));
    }

    #[test]
    fn test_reduce_preserves_order() {
        let xs = ["a", "b", "c"];
        let joined = reduce(slice(&xs), |mut acc: String, x| {
            acc.push_str(x);
            acc
        });

        assert_eq!(joined.as_deref(), Ok("abc"));
    }

    #[test]
    fn test_reduce_empty_returns_default() {
        let xs: [u64; 0] = [];
        assert_eq!(reduce(slice(&xs), |acc: u64, x| acc * x), Ok(0));
    }

    #[test]
    fn test_fold_with_initial_value() {
        let xs = [2, 3, 4];
        assert_eq!(fold(slice(&xs), 1, |acc, x| acc * x), Ok(24));
    }

    #[test]
    fn test_count() {
        let xs = [1, 2, 3, 4, 5];
        assert_eq!(count(slice(&xs).filter(|x| *x > 2)), 3);
    }
}
