//! Synchronous command execution
//!
//! Every mutation in this crate is a command struct executing against a
//! store. Commands are built with `new(..)` plus `with_*` builders and run
//! via [`Execute::execute`]. Execution is synchronous: the engine models a
//! single UI event loop, so no operation blocks or spans ticks.

use crate::error::Result;

/// A command that executes against a store of type `S`
pub trait Execute<S> {
    /// What the command produces on success
    type Output;

    /// Run the command against the store
    fn execute(&self, store: &mut S) -> Result<Self::Output>;
}

/// Whether a command changed the store
///
/// Operations whose target is missing (or of the wrong kind) are soft
/// failures: they return `Ignored` and leave the store untouched, rather
/// than erroring. The surrounding UI treats `Ignored` as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store was mutated
    Applied,
    /// The command did not apply; the store is unchanged
    Ignored,
}

impl Outcome {
    /// True if the store was mutated
    pub fn applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_applied() {
        assert!(Outcome::Applied.applied());
        assert!(!Outcome::Ignored.applied());
    }
}
