//! Quantifiers over Cantor space.
//!
//! [`exists`], [`find_witness`] and [`forall`] decide a continuous predicate
//! over *every* infinite boolean sequence in finite time. None of them takes a
//! bound on how many entries the predicate reads. The bound is discovered by
//! the predicate itself, because it only ever forces the entries it needs.
//!
//! # How the search works
//!
//! `find_witness(p)` decides one bit at a time:
//!
//! - if some sequence starting with `false` satisfies `p`, the witness is
//!   `false` followed by a witness for `c -> p(prepend([false], c))`;
//! - otherwise it is `true` followed by a witness for
//!   `c -> p(prepend([true], c))`.
//!
//! `exists(p)` is then just `p(find_witness(p))`. The two are mutually
//! recursive, and the recursion only terminates because every witness tail is
//! a suspended sequence: it is computed when `p` asks for one of its entries,
//! never before. A continuous `p` asks for finitely many entries, so only
//! finitely many tails are ever computed.
//!
//! # Termination
//!
//! All functions here terminate if and only if the predicate is total and
//! continuous. There is no depth limit or timeout: any fixed limit would give
//! wrong answers for a legitimate predicate that reads further than the
//! limit. A predicate that reads unboundedly many entries diverges.

use crate::predicate::Predicate;
use crate::prefix::Prefix;
use crate::sequence::Cantor;

/// Returns `true` if some sequence satisfies `pred`.
///
/// Only the entries `pred` inspects are computed.
///
/// # Termination
///
/// Diverges if `pred` is not total and continuous.
pub fn exists(pred: impl Into<Predicate>) -> bool {
    let (holds, _) = decide(&pred.into());
    tracing::debug!(quantifier = "exists", holds, "quantifier decided");
    holds
}

/// Returns `true` if every sequence satisfies `pred`.
///
/// Defined as `!exists(c -> !pred(c))`.
///
/// # Termination
///
/// Diverges if `pred` is not total and continuous.
pub fn forall(pred: impl Into<Predicate>) -> bool {
    let pred: Predicate = pred.into();
    let (counterexample, _) = decide(&pred.negate());
    let holds = !counterexample;
    tracing::debug!(quantifier = "forall", holds, "quantifier decided");
    holds
}

/// Returns `true` if no sequence satisfies `pred`.
///
/// # Termination
///
/// Diverges if `pred` is not total and continuous.
pub fn never(pred: impl Into<Predicate>) -> bool {
    let (witnessed, _) = decide(&pred.into());
    let holds = !witnessed;
    tracing::debug!(quantifier = "never", holds, "quantifier decided");
    holds
}

/// Returns a sequence satisfying `pred` if one exists.
///
/// When nothing satisfies `pred` the returned sequence is arbitrary (it is
/// all `true` in practice, but callers must not rely on that). Use [`search`]
/// to tell the two cases apart.
///
/// The first bit is decided eagerly; every later bit is decided the first
/// time it is indexed.
///
/// # Termination
///
/// Diverges if `pred` is not total and continuous.
pub fn find_witness(pred: impl Into<Predicate>) -> Cantor {
    witness(&pred.into())
}

/// Returns `Some(witness)` if some sequence satisfies `pred`, `None` otherwise.
///
/// # Termination
///
/// Diverges if `pred` is not total and continuous.
pub fn search(pred: impl Into<Predicate>) -> Option<Cantor> {
    let (holds, candidate) = decide(&pred.into());
    tracing::debug!(quantifier = "search", holds, "quantifier decided");
    holds.then_some(candidate)
}

/// Returns `true` if `pred1` and `pred2` give the same answer on every
/// sequence.
///
/// Defined as `forall(c -> pred1(c) == pred2(c))`, so no sequence is ever
/// enumerated.
///
/// # Termination
///
/// Diverges if either predicate is not total and continuous.
pub fn equal(pred1: impl Into<Predicate>, pred2: impl Into<Predicate>) -> bool {
    let (pred1, pred2): (Predicate, Predicate) = (pred1.into(), pred2.into());
    let agreement = pred1.agrees_with(&pred2);
    let (disagreement, _) = decide(&agreement.negate());
    let holds = !disagreement;
    tracing::debug!(quantifier = "equal", holds, "quantifier decided");
    holds
}

// ============================================================================
// Search core
// ============================================================================

/// Tests `pred` against its own suspended witness.
///
/// Returns the verdict together with the candidate, so callers that go on to
/// build a witness can reuse the entries the verdict already forced.
fn decide(pred: &Predicate) -> (bool, Cantor) {
    let candidate = {
        let pred = pred.clone();
        Cantor::suspend(move || witness(&pred))
    };
    let holds = pred.test(&candidate);
    (holds, candidate)
}

/// Builds a witness for `pred`, committing the first bit now and suspending
/// the rest.
fn witness(pred: &Predicate) -> Cantor {
    let low = pred.restrict([false]);
    let (low_holds, low_witness) = decide(&low);

    let (bit, tail) = if low_holds {
        // `low_witness` already is the witness for the restricted predicate.
        (false, low_witness)
    } else {
        let high = pred.restrict([true]);
        (true, Cantor::suspend(move || witness(&high)))
    };

    tracing::trace!(depth = pred.depth(), bit, "committed witness bit");

    let witness = Cantor::prepend(Prefix::from([bit]), tail);

    // Postcondition: the committed bit leads the witness (read from the head,
    // so nothing is forced)
    debug_assert_eq!(
        witness.at(0),
        bit,
        "witness at depth {} must start with the committed bit",
        pred.depth()
    );

    witness
}
