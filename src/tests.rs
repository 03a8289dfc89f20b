//! General library tests.
//!
//! Each law is checked on a handful of ordinals, with one test per case.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;

/// Creates a test for each case of a law. Every case lists the naturals the law is evaluated at.
macro_rules! test {
    ($($law: ident { $($case: ident: ($($n: expr),*)),* $(,)? })*) => {
        $($(
            concat_idents!(fn_name = $law, $case {
                #[test]
                fn fn_name() {
                    $law($(&Set::nat($n)),*);
                }
            });
        )*)*
    };
}

/// Every set equals itself.
#[allow(clippy::eq_op)]
fn reflexive(a: &Set) {
    assert_eq!(a, a);
    assert_eq!(a, &a.clone());
    assert!(a.subset(a));
}

/// Ø is an identity for union.
fn union_identity(a: &Set) {
    let zero = Set::empty();
    assert_eq!(a | &zero, *a);
    assert_eq!(&zero | a, *a);
    assert_eq!(a | a, *a);
}

/// The successor of a is a + 1.
fn succ(a: &Set) {
    let succ = a.succ();
    assert_eq!(succ, a + &Set::nat(1));
    assert_eq!(succ.count(), a.count() + 1);
    assert!(succ.contains(a));
    assert!(a < &succ);
}

/// Chain lengths add up.
fn plus_count(a: &Set, b: &Set) {
    assert_eq!((a + b).count(), a.count() + b.count());
}

/// Chain lengths multiply.
fn times_count(a: &Set, b: &Set) {
    let prod = a * b;
    assert_eq!(prod.count(), a.count() * b.count());
    assert_eq!(prod.card(), prod.count());
}

/// a + b = b + a.
fn plus_comm(a: &Set, b: &Set) {
    assert_eq!(a + b, b + a);
}

/// a · b = b · a.
fn times_comm(a: &Set, b: &Set) {
    assert_eq!(a * b, b * a);
}

/// a + (b + c) = (a + b) + c.
fn plus_assoc(a: &Set, b: &Set, c: &Set) {
    assert_eq!(a + &(b + c), &(a + b) + c);
}

/// a · (b · c) = (a · b) · c.
fn times_assoc(a: &Set, b: &Set, c: &Set) {
    assert_eq!(a * &(b * c), &(a * b) * c);
}

/// a · (b + c) = a · b + a · c.
fn distrib(a: &Set, b: &Set, c: &Set) {
    assert_eq!(a * &(b + c), &(a * b) + &(a * c));
}

/// For ordinals, m < n iff m ∈ n.
fn order(a: &Set, b: &Set) {
    assert_eq!(a < b, b.contains(a));
    assert_eq!(a <= b, a.count() <= b.count());
    assert_eq!(a.partial_cmp(b), Some(a.count().cmp(&b.count())));
}

test! {
    reflexive { _zero: (0), _one: (1), _five: (5) }
    union_identity { _zero: (0), _two: (2), _six: (6) }
    succ { _zero: (0), _three: (3), _seven: (7) }
    plus_count { _zeros: (0, 0), _small: (2, 3), _large: (7, 9) }
    times_count { _zeros: (0, 0), _small: (2, 3), _large: (6, 7) }
    plus_comm { _zero: (0, 4), _small: (1, 2), _large: (5, 8) }
    times_comm { _zero: (0, 4), _small: (2, 3), _large: (4, 5) }
    plus_assoc { _zero: (0, 1, 0), _small: (1, 2, 3), _large: (4, 5, 6) }
    times_assoc { _one: (3, 2, 1), _small: (2, 2, 2), _large: (3, 4, 5) }
    distrib { _zero: (3, 0, 4), _small: (3, 2, 4), _large: (4, 5, 3) }
    order { _equal: (3, 3), _less: (2, 5), _greater: (6, 1) }
}

/// {Ø} ∪ {Ø, Ø} = {Ø, Ø}.
#[test]
fn union_idempotent() {
    let a = Set::empty().singleton();
    let b = Set::empty().pair(Set::empty());
    assert_eq!(&a | &b, b);
}

/// {{Ø, Ø}, {Ø, Ø, Ø}} = {{Ø, Ø, Ø}, {Ø, Ø}}.
#[test]
fn chain_order() {
    let a = Set::empty().pair(Set::empty());
    let b = a.clone().insert(Set::empty());
    assert!(a.contains(&Set::empty()));
    assert_eq!(a.clone().pair(b.clone()), b.pair(a));
}

/// Sets with duplicates have more cells than elements.
#[test]
fn count_card() {
    let a = Set::nat(3).insert(Set::nat(1)).insert(Set::empty());
    assert_eq!(a.count(), 5);
    assert_eq!(a.card(), 3);
    assert_eq!(a, Set::nat(3));
}
