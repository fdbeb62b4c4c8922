use std::fmt;

/// Outcome of a resolution call.
///
/// Callers that only care about "answer or no answer" use
/// [`Resolution::into_option`]; the two empty variants exist for
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Found(T),
    /// The upstream answered but had nothing usable.
    Miss,
    /// The upstream could not be reached or kept failing.
    TransientFailure,
}

impl<T> Resolution<T> {
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Miss | Self::TransientFailure => None,
        }
    }
}

/// One variant of the forward fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Exact,
    SuffixStripped,
    SynonymReversed,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::SuffixStripped => write!(f, "suffix-stripped"),
            Self::SynonymReversed => write!(f, "synonym-reversed"),
        }
    }
}

#[cfg(test)]
#[path = "resolution_test.rs"]
mod tests;
