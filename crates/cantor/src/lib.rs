//! # cantor: Exhaustive search over Cantor space
//!
//! Cantor space is the set of all infinite sequences of booleans. It is
//! uncountable, yet for a *continuous* predicate (one that only ever reads a
//! finite prefix of its argument) it can be searched exhaustively in finite
//! time, without telling the search how long that prefix is.
//!
//! ## Key Principles
//!
//! - **Lazy sequences**: a [`Cantor`] computes an entry only when it is indexed
//! - **Suspended recursion**: witness tails are evaluate-once thunks, which is
//!   what lets [`exists`] and [`find_witness`] call each other without
//!   diverging
//! - **No shared state**: every call is independent; memoized entries belong
//!   to the sequence that computed them
//!
//! ## Architecture
//!
//! - [`sequence`]: the infinite sequence type and `prepend`
//! - [`prefix`]: finite bit strings and their `X_` text form
//! - [`predicate`]: the predicate capability and its restrictions
//! - [`search`]: `exists`, `forall`, `never`, `find_witness`, `search`, `equal`
//! - [`thunk`]: evaluate-once suspended computations
//!
//! ## Termination
//!
//! Every search function terminates **only** for predicates that are total
//! and continuous. This cannot be checked. A predicate such as "every entry is
//! `true`" reads the whole sequence and makes the search run forever.
//!
//! ## Example
//!
//! ```
//! use cantor::{Cantor, equal, exists, find_witness, forall};
//!
//! let both = |seq: &Cantor| seq.at(0) && seq.at(1);
//! assert!(exists(both));
//! assert!(!forall(both));
//!
//! let witness = find_witness(both);
//! assert!(witness.at(0) && witness.at(1));
//!
//! // Extensional equality, decided without enumerating sequences.
//! assert!(equal(
//!     |seq: &Cantor| seq.at(0) && !seq.at(1),
//!     |seq: &Cantor| seq.at(0) && seq.at(1) == false,
//! ));
//! assert!(!equal(|seq: &Cantor| seq.at(0), |seq: &Cantor| seq.at(1)));
//! ```

pub mod predicate;
pub mod prefix;
pub mod search;
pub mod sequence;
pub mod thunk;


// Re-export commonly used items
pub use predicate::Predicate;
pub use prefix::{Prefix, PrefixError};
pub use search::{equal, exists, find_witness, forall, never, search};
pub use sequence::Cantor;
pub use thunk::Thunk;
