//! Infinite boolean sequences.
//!
//! A [`Cantor`] is a point of Cantor space: one boolean for every natural
//! number. Nothing is stored up front. A sequence is a rule, a finite prefix
//! in front of another sequence, or a suspended computation that produces a
//! sequence the first time one of its entries is requested.
//!
//! Sequences are immutable and cheap to clone (an `Rc` bump). Indexing is the
//! only operation that can trigger deferred work, and each suspended
//! computation runs at most once per sequence instance.

use std::fmt::{self, Display};
use std::mem;
use std::rc::Rc;

use crate::prefix::Prefix;
use crate::thunk::Thunk;

/// Number of entries rendered by `Display` when no precision is given.
pub const DEFAULT_RENDER_PRECISION: usize = 3;

/// An infinite sequence of booleans, indexed from zero.
///
/// There is no end, no `append` and no equality: two sequences can only be
/// told apart by indexing them.
#[derive(Clone)]
pub struct Cantor(Rc<Node>);

struct Node {
    shape: Shape,
}

enum Shape {
    /// A total rule from index to bit.
    Rule(Box<dyn Fn(usize) -> bool>),
    /// `head` followed by every entry of `tail`.
    Prepend { head: Prefix, tail: Cantor },
    /// A sequence whose definition has not been computed yet.
    Suspended(Thunk<Cantor>),
}

impl Node {
    fn new(shape: Shape) -> Rc<Self> {
        Rc::new(Self { shape })
    }

    /// Takes the link to the next sequence out of this node, leaving a rule
    /// with nothing behind it.
    fn unlink(&mut self) -> Option<Cantor> {
        match mem::replace(&mut self.shape, Shape::Rule(Box::new(|_| false))) {
            Shape::Prepend { tail, .. } => Some(tail),
            Shape::Suspended(thunk) => thunk.into_value(),
            Shape::Rule(_) => None,
        }
    }
}

impl Drop for Node {
    /// Releases a chain of uniquely owned links one at a time, so dropping a
    /// long witness does not recurse once per link.
    fn drop(&mut self) {
        let mut next = self.unlink();
        while let Some(Cantor(link)) = next {
            // Shared links stay alive for their other owners.
            next = Rc::try_unwrap(link).ok().and_then(|mut node| node.unlink());
        }
    }
}

impl Cantor {
    /// Builds a sequence from a total rule.
    ///
    /// The rule must be pure and terminate for every index.
    pub fn from_fn(rule: impl Fn(usize) -> bool + 'static) -> Self {
        Self(Node::new(Shape::Rule(Box::new(rule))))
    }

    /// The sequence that is `bit` everywhere.
    pub fn constant(bit: bool) -> Self {
        Self::from_fn(move |_| bit)
    }

    /// Defers the whole definition of a sequence until it is first indexed.
    ///
    /// `produce` runs at most once; later lookups reuse its result.
    pub fn suspend(produce: impl FnOnce() -> Cantor + 'static) -> Self {
        Self(Node::new(Shape::Suspended(Thunk::new(produce))))
    }

    /// Places `head` in front of `tail`.
    ///
    /// Entry `i` of the result is `head[i]` for `i < head.len()` and
    /// `tail[i - head.len()]` otherwise. `tail` is shared, not copied, and is
    /// not touched until an index at or past `head.len()` is requested.
    pub fn prepend(head: impl Into<Prefix>, tail: Cantor) -> Self {
        Self(Node::new(Shape::Prepend {
            head: head.into(),
            tail,
        }))
    }

    /// Returns the entry at `index`.
    ///
    /// Walks through prefixes and forced suspensions iteratively, so long
    /// chains of prepends do not grow the call stack.
    pub fn at(&self, index: usize) -> bool {
        let mut node = self;
        let mut index = index;

        loop {
            match &node.0.shape {
                Shape::Rule(rule) => return rule(index),
                Shape::Prepend { head, tail } => {
                    if let Some(bit) = head.get(index) {
                        return bit;
                    }
                    // Invariant: only indexes past the head reach the tail
                    debug_assert!(
                        index >= head.len(),
                        "index {index} fell through a head of length {}",
                        head.len()
                    );
                    index -= head.len();
                    node = tail;
                }
                Shape::Suspended(thunk) => node = thunk.force(),
            }
        }
    }

    /// Materializes the first `len` entries.
    pub fn take(&self, len: usize) -> Prefix {
        let prefix: Prefix = (0..len).map(|i| self.at(i)).collect();

        // Postcondition: exactly `len` entries were read
        debug_assert_eq!(prefix.len(), len);

        prefix
    }

    /// Returns `false` while this sequence is a suspension that has not been
    /// computed. Rules and prefixes are always evaluated.
    pub fn is_evaluated(&self) -> bool {
        match &self.0.shape {
            Shape::Suspended(thunk) => thunk.is_forced(),
            Shape::Rule(_) | Shape::Prepend { .. } => true,
        }
    }

    /// Short name of the outermost node, without looking further down.
    fn kind(&self) -> &'static str {
        match &self.0.shape {
            Shape::Rule(_) => "Cantor::Rule",
            Shape::Prepend { .. } => "Cantor::Prepend",
            Shape::Suspended(thunk) if thunk.is_forced() => "Cantor::Suspended(<forced>)",
            Shape::Suspended(_) => "Cantor::Suspended(<pending>)",
        }
    }
}

impl fmt::Debug for Cantor {
    /// Describes the outermost node without forcing any suspension. A tail
    /// is shown by its kind only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.shape {
            Shape::Prepend { head, tail } => f
                .debug_struct("Cantor::Prepend")
                .field("head", &head.to_string())
                .field("tail", &format_args!("{}", tail.kind()))
                .finish(),
            Shape::Rule(_) | Shape::Suspended(_) => f.write_str(self.kind()),
        }
    }
}

impl Display for Cantor {
    /// Renders the first entries as `[X_X...]`.
    ///
    /// The formatter precision selects how many entries are shown
    /// (`format!("{seq:.8}")`), defaulting to [`DEFAULT_RENDER_PRECISION`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_RENDER_PRECISION);
        write!(f, "[{}...]", self.take(precision))
    }
}
