use super::captures::Captures;
use super::pattern::{trim_first_slash, SLASH};
use super::Router;

use smallvec::SmallVec;
use tracing::trace;

pub(super) type MatchBuffer<'s, 'p, T> = SmallVec<[(&'s T, Captures<'p>); 4]>;

/// A request path split the same way patterns are, except that interior
/// empty components are kept so that they can never match.
#[derive(Debug)]
pub(super) struct SplitPath<'p> {
    parts: SmallVec<[&'p str; 8]>,
    trailing_slash: bool,
}

impl<'p> SplitPath<'p> {
    pub(super) fn new(path: &'p str) -> Self {
        let path = match path.find(|c: char| c == '?' || c == '#') {
            Some(end) => &path[..end],
            None => path,
        };
        let path = trim_first_slash(path);

        if path.is_empty() {
            return Self {
                parts: SmallVec::new(),
                trailing_slash: true,
            };
        }

        let (body, trailing_slash) = match path.strip_suffix(SLASH) {
            Some(body) => (body, true),
            None => (path, false),
        };

        Self {
            parts: body.split(SLASH).collect(),
            trailing_slash,
        }
    }
}

impl<T> Router<T> {
    /// Collects matching routes in registration order. The exact form is
    /// tried first; the trailing-slash fallback only runs when it found
    /// nothing.
    pub(super) fn collect_matches<'s, 'p>(
        &'s self,
        path: &'p str,
        first_only: bool,
    ) -> MatchBuffer<'s, 'p, T>
    where
        's: 'p,
    {
        let split = SplitPath::new(path);

        let matches = self.scan(&split, split.trailing_slash, first_only);
        if !matches.is_empty() || !self.fallback {
            return matches;
        }

        let matches = self.scan(&split, !split.trailing_slash, first_only);
        if !matches.is_empty() {
            trace!(
                path,
                candidates = matches.len(),
                "matched with trailing slash fallback"
            );
        }
        matches
    }

    fn scan<'s, 'p>(
        &'s self,
        split: &SplitPath<'p>,
        trailing_slash: bool,
        first_only: bool,
    ) -> MatchBuffer<'s, 'p, T>
    where
        's: 'p,
    {
        let mut matches: MatchBuffer<'s, 'p, T> = SmallVec::new();
        for route in &self.routes {
            let mut captures = Captures::new();
            if route
                .pattern
                .match_parts(&split.parts, trailing_slash, &mut captures)
            {
                matches.push((&route.data, captures));
                if first_only {
                    break;
                }
            }
        }
        matches
    }
}
