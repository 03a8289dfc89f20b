//! Union and arithmetic on von Neumann ordinals.
//!
//! The [von Neumann ordinal](https://en.wikipedia.org/wiki/Natural_number#Von_Neumann_ordinals) for
//! a natural n is the set of all smaller ordinals: 0 = Ø and S(n) = n ∪ {n}. Addition and
//! multiplication are then defined by recursion on the second argument:
//!
//! - a + 0 = a, a + S(b) = S(a + b).
//! - a · 0 = 0, a · S(b) = a + a · b.
//!
//! We read the predecessor of a set off its chain, so these only agree with ordinal arithmetic when
//! the second argument is an ordinal built through these same operations.

use crate::prelude::*;
use std::ops::{Add, BitOr, Mul};
use tracing::{debug, trace};

impl Set {
    /// Set union x ∪ y.
    ///
    /// Both chains are walked in lockstep. Elements found at the same position are only written
    /// once if they're equal, but no other duplicates are removed. Once either chain runs out, the
    /// rest of the other one is reused as is.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut buf: Vec<Rc<Self>> = Vec::new();
        let mut fst = self;
        let mut snd = other;

        let tail = loop {
            match (fst, snd) {
                (Self::Empty, Self::Empty) => break Self::Empty,
                (set, Self::Empty) | (Self::Empty, set) => break set.clone(),
                (Self::NonEmpty(x, xs), Self::NonEmpty(y, ys)) => {
                    buf.push(Rc::clone(x));
                    if x != y {
                        buf.push(Rc::clone(y));
                    }

                    fst = xs;
                    snd = ys;
                }
            }
        };

        buf.into_iter()
            .rev()
            .fold(tail, |rest, el| Self::NonEmpty(el, Rc::new(rest)))
    }

    /// Successor S(n) = n ∪ {n}.
    #[must_use]
    pub fn succ(&self) -> Self {
        self.union(&self.clone().singleton())
    }

    /// Ordinal addition.
    ///
    /// Applies [`Set::succ`] to `self` once per element in the chain of `other`.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        trace!(lhs = self.count(), rhs = other.count(), "adding");
        other.iter().fold(self.clone(), |sum, _| sum.succ())
    }

    /// Ordinal multiplication.
    ///
    /// Adds `self` to an accumulator starting at Ø, once per element in the chain of `other`.
    #[must_use]
    pub fn times(&self, other: &Self) -> Self {
        trace!(lhs = self.count(), rhs = other.count(), "multiplying");
        other.iter().fold(Self::Empty, |prod, _| self.plus(&prod))
    }

    /// The von Neumann ordinal for n, built by applying [`Set::succ`] n times to Ø.
    #[must_use]
    pub fn nat(n: usize) -> Self {
        debug!(n, "building ordinal");
        (0..n).fold(Self::Empty, |set, _| set.succ())
    }
}

/// Implements an operator for [`Set`], both for owned values and references.
macro_rules! impl_op {
    ($trait: ident, $fn: ident, $method: ident) => {
        impl $trait<&Set> for &Set {
            type Output = Set;

            fn $fn(self, rhs: &Set) -> Set {
                self.$method(rhs)
            }
        }

        impl $trait for Set {
            type Output = Set;

            fn $fn(self, rhs: Set) -> Set {
                self.$method(&rhs)
            }
        }
    };
}

impl_op!(BitOr, bitor, union);
impl_op!(Add, add, plus);
impl_op!(Mul, mul, times);
