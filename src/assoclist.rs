// Bare bones implementation of an association list. We use an assoc list
// instead of a std::collections::HashMap since contexts are tiny and we want
// them to print in the order bindings were introduced
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

use crate::syntax::{Substitutable, Type};

pub type Context = AssocList<String, Type>;

/// Keys are unique: binding a key that is already present overwrites it in
/// place. Equality ignores binding order.
#[derive(Clone, Debug)]
pub struct AssocList<K, V> {
    inner: Vec<(K, V)>,
}

impl<K: PartialEq, V> AssocList<K, V> {
    pub const fn empty() -> AssocList<K, V> {
        AssocList { inner: Vec::new() }
    }

    pub fn insert(&mut self, key: K, val: V) {
        match self.inner.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = val,
            None => self.inner.push((key, val)),
        }
    }

    pub fn lookup<Q>(&self, item: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.inner
            .iter()
            .find(|(key, _)| <K as Borrow<Q>>::borrow(key) == item)
            .map(|(_, val)| val)
    }

    pub fn contains_key<Q>(&self, item: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.lookup(item).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.inner.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Clone + PartialEq, V: Clone> AssocList<K, V> {
    /// A copy of self with `key` bound to `val`, shadowing any previous
    /// binding. Self is left untouched.
    pub fn adding(&self, key: K, val: V) -> AssocList<K, V> {
        let mut copy = self.clone();
        copy.insert(key, val);
        copy
    }

    pub fn map_val<T, F>(&self, mut func: F) -> AssocList<K, T>
    where
        F: FnMut(&V) -> T,
    {
        AssocList {
            inner: self
                .inner
                .iter()
                .map(|(key, val)| (key.clone(), func(val)))
                .collect(),
        }
    }
}

impl<K: PartialEq, V> Default for AssocList<K, V> {
    fn default() -> Self {
        AssocList::empty()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssocList<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .inner
                .iter()
                .all(|(key, val)| other.lookup(key) == Some(val))
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssocList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = AssocList::empty();
        for (key, val) in iter {
            list.insert(key, val);
        }
        list
    }
}

impl fmt::Display for AssocList<String, Type> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.inner
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

impl<T: Clone + Substitutable<T>> Substitutable<T> for AssocList<String, T> {
    fn substitute(self, name: &str, replacement: &T) -> AssocList<String, T> {
        AssocList {
            inner: self
                .inner
                .into_iter()
                .map(|(key, val)| (key, val.substitute(name, replacement)))
                .collect(),
        }
    }
}
