use std::borrow::Cow;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Bindings produced by a successful match, in pattern order.
///
/// Values are percent-decoded and borrow from the request path when no
/// decoding was necessary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'a> {
    buf: SmallVec<[(&'a str, Cow<'a, str>); 8]>,
}

impl<'a> Captures<'a> {
    /// Returns the value bound to `name`. If a pattern reuses a name, the
    /// last binding is returned.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .rev()
            .find_map(|(k, v)| if name == *k { Some(&**v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (*k, &**v))
    }
}

impl<'a> Deref for Captures<'a> {
    type Target = [(&'a str, Cow<'a, str>)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<'a> Captures<'a> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn push(&mut self, name: &'a str, value: Cow<'a, str>) {
        self.buf.push((name, value))
    }

    pub(super) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len)
    }
}
