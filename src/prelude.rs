//! Crate prelude.

// The actual prelude.
pub use crate::{
    set::{Iter, Set, SetError},
    utils::{Ahu, Labels},
};

// Convenient imports within the crate.
pub(crate) use crate::{utils::btree_index, SmallVec};
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    cmp::Ordering,
    collections::{btree_map::Entry, BTreeMap, BTreeSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    rc::Rc,
    str::FromStr,
};
