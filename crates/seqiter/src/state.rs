use std::fmt;

/// Lifecycle of every iterator in a chain.
///
/// `Fresh -> Active` on the first successful advance, `Active -> Active` on the
/// following ones, and `Fresh | Active -> Exhausted` on the first failed one.
/// Nothing leaves `Exhausted`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Fresh,
    Active,
    Exhausted,
}

impl State {
    #[inline]
    pub fn is_fresh(self) -> bool {
        self == Self::Fresh
    }

    #[inline]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    #[inline]
    pub fn is_exhausted(self) -> bool {
        self == Self::Exhausted
    }

    /// State reached after an advance that did (`true`) or did not find an element.
    #[inline]
    pub(crate) fn advanced(self, found: bool) -> Self {
        match (self, found) {
            (Self::Exhausted, _) | (_, false) => Self::Exhausted,
            (_, true) => Self::Active,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            State::Fresh => write!(f, "fresh"),
            State::Active => write!(f, "active"),
            State::Exhausted => write!(f, "exhausted"),
        }
    }
}
