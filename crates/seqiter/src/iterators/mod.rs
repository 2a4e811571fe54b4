mod filter;
mod map;
mod map_into;
mod pull;
mod slice;

pub use filter::*;
pub use map::*;
pub use map_into::*;
pub use pull::*;
pub use slice::*;

#[cfg(test)]
pub(crate) mod testing {
    use crate::{Error, Result, SeqIterator, SliceIterator, State};

    /// Advances like a slice source but fails `current()` on `None` elements.
    pub struct Holey<'a>(pub SliceIterator<'a, Option<i32>>);

    impl SeqIterator for Holey<'_> {
        type Item = i32;

        fn advance(&mut self) -> bool {
            self.0.advance()
        }

        fn current(&self) -> Result<i32> {
            self.0.current()?.ok_or(Error::InvalidState {
                state: State::Active,
            })
        }

        fn state(&self) -> State {
            self.0.state()
        }
    }
}
