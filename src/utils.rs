//! Utility types and algorithms for comparing sets.
//!
//! A set's chain can list its elements in any order and any number of times, so comparing two sets
//! element by element quickly gets out of hand. Instead, we label sets in the style of the
//! [Aho–Hopcroft–Ullman](https://www.baeldung.com/cs/isomorphic-trees) algorithm: two sets get the
//! same label exactly when they have the same elements.

use crate::prelude::*;
use std::marker::PhantomData;

/// Assigns an increasing index to a `key` added to a tree, or returns the existing index.
pub(crate) fn btree_index<K: Ord>(tree: &mut BTreeMap<K, usize>, key: K) -> usize {
    let len = tree.len();
    match tree.entry(key) {
        Entry::Vacant(entry) => {
            entry.insert(len);
            len
        }
        Entry::Occupied(entry) => *entry.get(),
    }
}

// -------------------- Labels -------------------- //

/// Assigns integer labels to sets, such that two sets get the same label if and only if they're
/// equal.
///
/// The label of a set is determined by the sorted, deduplicated list of the labels of its elements.
/// This is the "modified" AHU encoding: instead of storing full encodings, each distinct list of
/// labels gets a single integer.
///
/// Sets are heavily shared between each other, so we cache labels by address. Since every set we
/// label is borrowed for `'a`, no address can be reused by a different set while the cache is alive.
/// Labels are only meaningful within a single [`Labels`].
#[derive(Default)]
pub struct Labels<'a> {
    /// Labels of the sets visited so far, by address.
    seen: BTreeMap<*const Set, usize>,
    /// Labels assigned to each list of element labels.
    sets: BTreeMap<SmallVec<usize>, usize>,
    /// Borrows the labelled sets.
    marker: PhantomData<&'a Set>,
}

impl<'a> Labels<'a> {
    /// Initializes an empty labelling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct sets labelled so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no set has been labelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finds the label for a set.
    ///
    /// Recursion depth is the nesting depth of the set, not the length of its chain.
    pub fn label(&mut self, set: &'a Set) -> usize {
        let ptr = std::ptr::from_ref(set);
        if let Some(&label) = self.seen.get(&ptr) {
            return label;
        }

        let mut children: SmallVec<_> = set.iter().map(|el| self.label(el)).collect();
        children.sort_unstable();
        children.dedup();

        let label = btree_index(&mut self.sets, children);
        self.seen.insert(ptr, label);
        label
    }

    /// Set equality.
    pub fn eq(&mut self, fst: &'a Set, snd: &'a Set) -> bool {
        self.label(fst) == self.label(snd)
    }

    /// Membership relation `element ∈ set`.
    pub fn contains(&mut self, set: &'a Set, element: &'a Set) -> bool {
        let label = self.label(element);
        set.iter().any(|el| self.label(el) == label)
    }

    /// Subset relation `fst ⊆ snd`.
    pub fn subset(&mut self, fst: &'a Set, snd: &'a Set) -> bool {
        let snd: BTreeSet<_> = snd.iter().map(|el| self.label(el)).collect();
        fst.iter().all(|el| snd.contains(&self.label(el)))
    }
}

// -------------------- Ahu -------------------- //

/// The [Aho–Hopcroft–Ullman](https://www.baeldung.com/cs/isomorphic-trees) (AHU) encoding for a
/// [`Set`]. It is unique up to set equality.
///
/// Conceptually, this amounts to hereditarily ordered and deduplicated roster notation, with `true`
/// for an opening bracket and `false` for a closing one. The brackets around the set itself are
/// omitted. The [`Display`] implementation for [`Set`] constructs an [`Ahu`] first.
///
/// The encoding grows exponentially with the rank of the set. Use [`Labels`] for comparisons.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, IntoIterator)]
pub struct Ahu(#[into_iterator(owned, ref)] BitVec);

impl Ahu {
    /// The empty encoding.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BitVec::EMPTY)
    }

    /// Finds the [`Ahu`] encoding for a set.
    #[must_use]
    pub fn new(set: &Set) -> Self {
        let mut children: Vec<_> = set.iter().map(Self::new).collect();
        children.sort_unstable();
        children.dedup();

        let mut buf = Self::empty();
        for mut child in children {
            buf.0.push(true);
            buf.0.append(&mut child.0);
            buf.0.push(false);
        }
        buf
    }
}

impl Debug for Ahu {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('(')?;
        for b in self {
            f.write_char(if *b { '(' } else { ')' })?;
        }
        f.write_char(')')
    }
}

impl Display for Ahu {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut last = true;
        for b in self {
            if *b {
                if !last {
                    f.write_str(", ")?;
                }
                f.write_char('{')
            } else {
                f.write_char('}')
            }?;

            last = *b;
        }

        f.write_char('}')
    }
}
