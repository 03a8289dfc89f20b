//! Hereditarily finite sets [`Set`], stored as chains of elements.

use crate::prelude::*;

/// A [hereditarily finite set](https://en.wikipedia.org/wiki/Hereditarily_finite_set).
///
/// Each [`Set`] is stored as a chain: either the empty set, or an element followed by a set holding
/// the remaining elements. The chain may repeat elements and may list them in any order. Two chains
/// are equal whenever they have the same elements, no matter how they're laid out.
///
/// Both fields of a cell are reference counted, so sets are cheap to clone and freely shared
/// between larger sets. As there's no way to mutate a set after it's built, Rust's ownership system
/// guarantees that no set can contain itself.
#[derive(Clone, Default)]
pub enum Set {
    /// The empty set Ø.
    #[default]
    Empty,

    /// The set holding some element, plus all elements of the remaining chain.
    NonEmpty(Rc<Set>, Rc<Set>),
}

// -------------------- Basic methods -------------------- //

impl Set {
    /// The empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Prepends an element to a chain.
    #[must_use]
    pub fn cons(element: Self, rest: Self) -> Self {
        Self::NonEmpty(Rc::new(element), Rc::new(rest))
    }

    /// Singleton set {x}.
    #[must_use]
    pub fn singleton(self) -> Self {
        Self::cons(self, Self::Empty)
    }

    /// Set pair {x, y}.
    #[must_use]
    pub fn pair(self, other: Self) -> Self {
        Self::cons(self, other.singleton())
    }

    /// Set insertion x ∪ {y}. The new element is put at the front of the chain, even if it's
    /// already a member.
    #[must_use]
    pub fn insert(self, element: Self) -> Self {
        Self::cons(element, self)
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The first element in the chain.
    #[must_use]
    pub fn head(&self) -> Option<&Self> {
        match self {
            Self::Empty => None,
            Self::NonEmpty(element, _) => Some(element),
        }
    }

    /// The chain following the first element.
    #[must_use]
    pub fn rest(&self) -> Option<&Self> {
        match self {
            Self::Empty => None,
            Self::NonEmpty(_, rest) => Some(rest),
        }
    }

    /// Iterate over the chain.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self)
    }

    /// Length of the chain.
    ///
    /// This counts repeated elements as many times as they appear, so it's only the cardinality of
    /// the set when the chain has no duplicates. This is the case for every ordinal built through
    /// [`Set::succ`], [`Set::plus`] and [`Set::times`]. See [`Set::card`] for the true cardinality.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Set cardinality, i.e. the number of distinct elements.
    #[must_use]
    pub fn card(&self) -> usize {
        let mut labels = Labels::new();
        self.iter()
            .map(|set| labels.label(set))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Get the [`Ahu`] encoding for the set.
    #[must_use]
    pub fn ahu(&self) -> Ahu {
        Ahu::new(self)
    }
}

/// An iterator over the elements of a [`Set`], in chain order.
#[derive(Clone)]
pub struct Iter<'a>(&'a Set);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Set;

    fn next(&mut self) -> Option<&'a Set> {
        let set = self.0;
        match set {
            Set::Empty => None,
            Set::NonEmpty(element, rest) => {
                self.0 = rest;
                Some(element)
            }
        }
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Set;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Builds a chain holding the elements in iteration order.
impl FromIterator<Set> for Set {
    fn from_iter<T: IntoIterator<Item = Set>>(iter: T) -> Self {
        let vec: Vec<_> = iter.into_iter().collect();
        vec.into_iter()
            .rev()
            .fold(Self::Empty, |rest, element| Self::cons(element, rest))
    }
}

// -------------------- Relations -------------------- //

/// Extensional equality: two sets are equal when each element of one is an element of the other.
impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || Labels::new().eq(self, other)
    }
}

impl Eq for Set {}

impl Set {
    /// Membership relation, i.e. whether `element ∈ self`.
    #[must_use]
    pub fn contains(&self, element: &Self) -> bool {
        Labels::new().contains(self, element)
    }

    /// Membership relation, i.e. whether `self ∈ set`.
    #[must_use]
    pub fn mem(&self, set: &Self) -> bool {
        set.contains(self)
    }

    /// Subset relation ⊆.
    #[must_use]
    pub fn subset(&self, other: &Self) -> bool {
        Labels::new().subset(self, other)
    }

    /// Checks that the first element of each chain belongs to the other set.
    ///
    /// This agrees with `==` whenever either chain is empty, and it's implied by `==` otherwise.
    /// The converse fails: {Ø, {Ø}} and {Ø} pass this check since both start with Ø, yet they're
    /// different sets. In particular, this isn't transitive and can't be used as set equality.
    #[must_use]
    pub fn heads_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::NonEmpty(x, _), Self::NonEmpty(y, _)) => self.contains(y) && other.contains(x),
            _ => false,
        }
    }
}

// -------------------- Formatting -------------------- //

/// Succintly writes a set as stored in memory.
impl Debug for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('(')?;
        for el in self {
            write!(f, "{el:?}")?;
        }
        f.write_char(')')
    }
}

/// Displays a set in canonical roster notation.
impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.ahu())
    }
}

// -------------------- String parsing -------------------- //

/// Error in parsing a set. This can only happen due to mismatched brackets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(fmt = "mismatched brackets")]
pub struct SetError;

/// Sets are parsed from their roster notation. Any symbol other than `{` and `}` is ignored,
/// including commas.
///
/// The chain lists the elements in the order they're written, duplicates included.
impl FromStr for Set {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, SetError> {
        let mut stack: Vec<Vec<Self>> = Vec::new();
        let mut iter = s.chars();

        loop {
            let c = iter.next().ok_or(SetError)?;
            match c {
                // New set.
                '{' => stack.push(Vec::new()),

                // Close last set.
                '}' => {
                    let last: Self = stack.pop().ok_or(SetError)?.into_iter().collect();
                    if let Some(prev) = stack.last_mut() {
                        prev.push(last);
                    } else {
                        // Set has been built.
                        if iter.any(|c| ['{', '}'].contains(&c)) {
                            return Err(SetError);
                        }

                        return Ok(last);
                    }
                }
                _ => {}
            }
        }
    }
}
