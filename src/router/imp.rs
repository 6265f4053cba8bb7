use super::captures::Captures;
use super::pattern::Pattern;
use super::{Route, Router};

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: true,
        }
    }

    /// Enables or disables matching `/foo` against `/foo/` (and the
    /// reverse) when no route matches the path as given. Enabled by default.
    pub fn trailing_slash_fallback(&mut self, enabled: bool) -> &mut Self {
        self.fallback = enabled;
        self
    }

    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        self.routes.push(Route {
            pattern: Pattern::compile(pattern),
            data,
        });
        self
    }

    pub fn find<'s, 'p>(&'s self, path: &'p str) -> Option<(&'s T, Captures<'p>)>
    where
        's: 'p,
    {
        self.collect_matches(path, true).into_iter().next()
    }

    /// Returns every route whose pattern matches `path`, in registration
    /// order.
    pub fn find_all<'s, 'p>(&'s self, path: &'p str) -> Vec<(&'s T, Captures<'p>)>
    where
        's: 'p,
    {
        self.collect_matches(path, false).into_vec()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &T)> + '_ {
        self.routes.iter().map(|r| (&r.pattern, &r.data))
    }
}
