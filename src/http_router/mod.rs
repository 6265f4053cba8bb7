mod router_macro;

use crate::error::RouterError;
use crate::router::{Captures, Router};

pub use http::Method;

/// Outcome of looking up a request against an [`HttpRouter`].
#[derive(Debug)]
pub enum Resolution<'s, 'p, T> {
    /// The first route (in registration order) matching both path and method.
    Matched { data: &'s T, captures: Captures<'p> },
    /// The path matched, but only under other methods. `allowed` holds each
    /// of them once, in the order they were first registered.
    MethodNotAllowed { allowed: Vec<Method> },
    NotFound,
}

/// A route table keyed by method and pattern.
///
/// Unlike a per-method table, routes of all methods share one registration
/// order so that a path match under another method can be told apart from
/// no match at all.
#[derive(Debug)]
pub struct HttpRouter<T> {
    router: Router<(Method, T)>,
}

impl<T> Default for HttpRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HttpRouter<T> {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    pub fn insert(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        self.router.insert(pattern, (method, data));
        self
    }

    /// Like [`insert`](Self::insert), but takes the method as a string.
    /// Methods are compared case-sensitively, so `"get"` and `"GET"` are
    /// different methods.
    pub fn try_insert(
        &mut self,
        method: &str,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, RouterError> {
        let m = Method::from_bytes(method.as_bytes())
            .map_err(|e| RouterError::invalid_method(method, e))?;
        Ok(self.insert(m, pattern, data))
    }

    pub fn trailing_slash_fallback(&mut self, enabled: bool) -> &mut Self {
        self.router.trailing_slash_fallback(enabled);
        self
    }

    pub fn resolve<'s, 'p>(&'s self, method: &Method, path: &'p str) -> Resolution<'s, 'p, T>
    where
        's: 'p,
    {
        let candidates = self.router.find_all(path);
        if candidates.is_empty() {
            return Resolution::NotFound;
        }

        let mut allowed: Vec<Method> = Vec::new();
        for ((m, data), captures) in candidates {
            if m == method {
                return Resolution::Matched { data, captures };
            }
            if !allowed.contains(m) {
                allowed.push(m.clone());
            }
        }

        Resolution::MethodNotAllowed { allowed }
    }

    pub fn find<'s, 'p>(&'s self, method: &Method, path: &'p str) -> Option<(&'s T, Captures<'p>)>
    where
        's: 'p,
    {
        match self.resolve(method, path) {
            Resolution::Matched { data, captures } => Some((data, captures)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.router.len()
    }

    pub fn is_empty(&self) -> bool {
        self.router.is_empty()
    }
}
