use crate::router::Captures;

use std::iter::FusedIterator;
use std::str::FromStr;
use std::{slice, vec};

/// Owned path parameters of a routed request.
///
/// Names are stored without the `:` prefix that marks them in the query
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(Box<str>, String)>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find_map(|(n, v)| if **n == *name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.pairs.iter(),
        }
    }
}

impl Params {
    pub(super) fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    pub(super) fn new(caps: &Captures<'_>) -> Self {
        let pairs = caps
            .iter()
            .map(|(name, value)| (name.into(), value.to_owned()))
            .collect();
        Self { pairs }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: slice::Iter<'a, (Box<str>, String)>,
}

pub struct IntoIter {
    inner: vec::IntoIter<(Box<str>, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (n, v) = self.inner.next()?;
        Some((&**n, v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (n, v) = self.inner.next()?;
        Some((n.into(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl ExactSizeIterator for IntoIter {}
impl FusedIterator for Iter<'_> {}
impl FusedIterator for IntoIter {}
