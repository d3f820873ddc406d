// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sets represented by their characteristic function.
//!
//! A set here is nothing more than a membership test: given an
//! element, is it in or out?  That lets us talk about infinite sets
//! (the even integers, a disk in the plane) without ever enumerating
//! them.  Any `Fn(&T) -> bool` is already a set; the combinators
//! below build new sets out of old ones the same way the iterator
//! adapters build new iterators, by wrapping their operands by value.
//! Nothing is ever mutated, and because the combinators are plain
//! structs they can be compared and printed, which is handy when a
//! rendered image does not look the way you expected.

/// A (possibly infinite) set of `T`, known only by its membership
/// test.  Implementations must be deterministic and free of side
/// effects.
pub trait Set<T> {
    /// Is `x` a member of this set?
    fn contains(&self, x: &T) -> bool;

    /// Members of either set.
    fn union<S: Set<T>>(self, other: S) -> Union<Self, S>
    where
        Self: Sized,
    {
        Union(self, other)
    }

    /// Members of both sets.
    fn intersection<S: Set<T>>(self, other: S) -> Intersection<Self, S>
    where
        Self: Sized,
    {
        Intersection(self, other)
    }

    /// Members of this set that are not members of `other`.  Note that
    /// this is the relative complement, `self \ other`, and not the
    /// complement with respect to some universe.
    fn complement<S: Set<T>>(self, other: S) -> Complement<Self, S>
    where
        Self: Sized,
    {
        Complement(self, other)
    }

    /// Members of exactly one of the two sets, assembled from two
    /// relative complements: `(self \ other) ∪ (other \ self)`.
    fn symmetric_difference_without_xor<S>(
        self,
        other: S,
    ) -> Union<Complement<Self, S>, Complement<S, Self>>
    where
        Self: Sized + Clone,
        S: Set<T> + Clone,
    {
        Union(
            Complement(self.clone(), other.clone()),
            Complement(other, self),
        )
    }

    /// Members of exactly one of the two sets, tested directly with an
    /// exclusive or.
    fn symmetric_difference_with_xor<S: Set<T>>(self, other: S) -> SymmetricDifference<Self, S>
    where
        Self: Sized,
    {
        SymmetricDifference(self, other)
    }

    /// The set of pairs `(x, y)` with `x` in this set and `y` in
    /// `other`.  The two sets need not share an element type.
    fn cartesian_product<S>(self, other: S) -> CartesianProduct<Self, S>
    where
        Self: Sized,
    {
        CartesianProduct(self, other)
    }

    /// This set with `element` added.  Membership of `element` is
    /// decided by `==`, so for floating point elements only an exact
    /// bit-for-bit match counts.
    fn add(self, element: T) -> Added<Self, T>
    where
        Self: Sized,
        T: PartialEq,
    {
        Added(self, element)
    }

    /// This set with `element` taken out.  The same exact-equality
    /// caveat as [`Set::add`] applies.
    fn remove(self, element: T) -> Removed<Self, T>
    where
        Self: Sized,
        T: PartialEq,
    {
        Removed(self, element)
    }

    /// Erase the concrete type of this set, so that sets built in
    /// different ways can be chosen between at runtime.
    fn boxed(self) -> BoxedSet<T>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        Box::new(move |x: &T| self.contains(x))
    }
}

/// A set whose concrete type has been erased.  Being a closure it is
/// itself a [`Set`].
pub type BoxedSet<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

impl<T, F> Set<T> for F
where
    F: Fn(&T) -> bool,
{
    fn contains(&self, x: &T) -> bool {
        self(x)
    }
}

/// The set with no members.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Empty;

impl<T> Set<T> for Empty {
    fn contains(&self, _: &T) -> bool {
        false
    }
}

/// The set of everything.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct All;

impl<T> Set<T> for All {
    fn contains(&self, _: &T) -> bool {
        true
    }
}

/// The set holding exactly one element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Singleton<T>(pub T);

impl<T: PartialEq> Set<T> for Singleton<T> {
    fn contains(&self, x: &T) -> bool {
        self.0 == *x
    }
}

/// See [`Set::union`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Union<A, B>(pub A, pub B);

impl<T, A: Set<T>, B: Set<T>> Set<T> for Union<A, B> {
    fn contains(&self, x: &T) -> bool {
        self.0.contains(x) || self.1.contains(x)
    }
}

/// See [`Set::intersection`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection<A, B>(pub A, pub B);

impl<T, A: Set<T>, B: Set<T>> Set<T> for Intersection<A, B> {
    fn contains(&self, x: &T) -> bool {
        self.0.contains(x) && self.1.contains(x)
    }
}

/// See [`Set::complement`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Complement<A, B>(pub A, pub B);

impl<T, A: Set<T>, B: Set<T>> Set<T> for Complement<A, B> {
    fn contains(&self, x: &T) -> bool {
        self.0.contains(x) && !self.1.contains(x)
    }
}

/// See [`Set::symmetric_difference_with_xor`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SymmetricDifference<A, B>(pub A, pub B);

impl<T, A: Set<T>, B: Set<T>> Set<T> for SymmetricDifference<A, B> {
    fn contains(&self, x: &T) -> bool {
        self.0.contains(x) ^ self.1.contains(x)
    }
}

/// See [`Set::cartesian_product`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CartesianProduct<A, B>(pub A, pub B);

impl<A, B> CartesianProduct<A, B> {
    /// Membership test for a pair given as two separate references,
    /// which saves building a tuple of the two.
    pub fn contains_pair<T1, T2>(&self, x: &T1, y: &T2) -> bool
    where
        A: Set<T1>,
        B: Set<T2>,
    {
        self.0.contains(x) && self.1.contains(y)
    }
}

impl<T1, T2, A: Set<T1>, B: Set<T2>> Set<(T1, T2)> for CartesianProduct<A, B> {
    fn contains(&self, x: &(T1, T2)) -> bool {
        self.contains_pair(&x.0, &x.1)
    }
}

/// See [`Set::add`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Added<S, T>(pub S, pub T);

impl<T: PartialEq, S: Set<T>> Set<T> for Added<S, T> {
    fn contains(&self, x: &T) -> bool {
        *x == self.1 || self.0.contains(x)
    }
}

/// See [`Set::remove`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Removed<S, T>(pub S, pub T);

impl<T: PartialEq, S: Set<T>> Set<T> for Removed<S, T> {
    fn contains(&self, x: &T) -> bool {
        *x != self.1 && self.0.contains(x)
    }
}
