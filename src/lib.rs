//! # Von Neumann arithmetic
//!
//! Natural numbers built out of nothing but hereditarily finite sets. Zero is the empty set Ø, and
//! the successor of n is n ∪ {n}. Addition and multiplication are then defined by recursion on the
//! second operand, and the usual laws can be checked by direct computation.
//!
//! ```
//! use neumann::prelude::*;
//!
//! let three = Set::nat(3);
//! let four = Set::nat(4);
//! assert_eq!((&(&three * &four) * &four).count(), 48);
//! assert_eq!(&three * &(&four + &Set::nat(1)), &(&three * &four) + &three);
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod arith;
pub mod prelude;
pub mod set;
mod tests;
pub mod utils;

use prelude::*;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// Implements [`PartialOrd`] for [`Set`] as the inclusion order.
impl PartialOrd for Set {
    fn le(&self, other: &Self) -> bool {
        self.subset(other)
    }

    fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }

    fn lt(&self, other: &Self) -> bool {
        self.card() < other.card() && self.le(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let cmp = self.card().cmp(&other.card());
        let test = match cmp {
            Ordering::Equal => self.eq(other),
            Ordering::Less => self.le(other),
            Ordering::Greater => self.ge(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}
