//! Decidable predicates over Cantor space.
//!
//! A [`Predicate`] wraps any closure `Fn(&Cantor) -> bool`. The search
//! functions only ever call it and derive new predicates from it, so it is a
//! capability rather than a type hierarchy.
//!
//! # Contract
//!
//! The caller guarantees that every predicate
//!
//! - terminates on every sequence, and
//! - is *continuous*: its answer depends on some finite prefix of its
//!   argument.
//!
//! Nothing here checks either property. A predicate that breaks them (for
//! example "every entry is `true`") makes the search diverge.

use std::fmt;
use std::rc::Rc;

use crate::prefix::Prefix;
use crate::sequence::Cantor;

/// A total, continuous test of an infinite boolean sequence.
#[derive(Clone)]
pub struct Predicate {
    test: Rc<dyn Fn(&Cantor) -> bool>,
    /// Bits committed by [`restrict`](Self::restrict) on the way to this
    /// predicate. Only used for tracing.
    depth: usize,
}

impl Predicate {
    /// Wraps `test` as a predicate.
    pub fn new(test: impl Fn(&Cantor) -> bool + 'static) -> Self {
        Self {
            test: Rc::new(test),
            depth: 0,
        }
    }

    /// Applies the predicate to `seq`.
    pub fn test(&self, seq: &Cantor) -> bool {
        (self.test)(seq)
    }

    /// Returns `c -> self(prepend(head, c))`: this predicate with the first
    /// `head.len()` bits fixed.
    pub fn restrict(&self, head: impl Into<Prefix>) -> Self {
        let head = head.into();
        let committed = head.len();
        let test = Rc::clone(&self.test);

        let restricted = Self {
            test: Rc::new(move |seq: &Cantor| test(&Cantor::prepend(head.clone(), seq.clone()))),
            depth: self.depth + committed,
        };

        // Postcondition: depth counts every committed bit
        debug_assert_eq!(
            restricted.depth,
            self.depth + committed,
            "restriction by {committed} bits must deepen the predicate by {committed}"
        );

        restricted
    }

    /// Returns `c -> !self(c)`.
    pub fn negate(&self) -> Self {
        let test = Rc::clone(&self.test);

        Self {
            test: Rc::new(move |seq: &Cantor| !test(seq)),
            depth: self.depth,
        }
    }

    /// Returns `c -> self(c) == other(c)`.
    pub fn agrees_with(&self, other: &Predicate) -> Self {
        let left = Rc::clone(&self.test);
        let right = Rc::clone(&other.test);

        Self {
            test: Rc::new(move |seq: &Cantor| left(seq) == right(seq)),
            depth: self.depth.max(other.depth),
        }
    }

    /// Number of leading bits fixed by restriction.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<F> From<F> for Predicate
where
    F: Fn(&Cantor) -> bool + 'static,
{
    fn from(test: F) -> Self {
        Self::new(test)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
