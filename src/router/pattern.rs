use super::captures::Captures;

use percent_encoding::percent_decode_str;

pub(super) const COLON: char = ':';
pub(super) const SLASH: char = '/';

/// A single slash-delimited unit of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches a path segment equal to it once percent-decoded.
    Literal(Box<str>),
    /// Matches any non-empty path segment and binds it to the name.
    Capture(Box<str>),
}

/// A path pattern compiled into an ordered sequence of segments.
///
/// `"/user/:id/"` compiles to `[Literal("user"), Capture("id")]` with a
/// trailing slash. Compilation never fails: a lone `:` is a literal, and
/// empty components are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
    trailing_slash: bool,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Self {
        let pattern = trim_first_slash(pattern);
        let trailing_slash = pattern.is_empty() || pattern.ends_with(SLASH);

        let segments = pattern
            .split(SLASH)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix(COLON) {
                Some(name) if !name.is_empty() => Segment::Capture(name.into()),
                _ => Segment::Literal(part.into()),
            })
            .collect();

        Self {
            segments,
            trailing_slash,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Names of the capture segments, in pattern order.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Capture(name) => Some(&**name),
            Segment::Literal(_) => None,
        })
    }

    /// Tests the split path against this pattern, assuming the path ends
    /// with a slash iff `trailing_slash`. Bindings are appended to
    /// `captures` only on success.
    pub(super) fn match_parts<'s, 'p>(
        &'s self,
        parts: &[&'p str],
        trailing_slash: bool,
        captures: &mut Captures<'p>,
    ) -> bool
    where
        's: 'p,
    {
        if self.trailing_slash != trailing_slash || self.segments.len() != parts.len() {
            return false;
        }

        let mark = captures.len();
        for (segment, &part) in self.segments.iter().zip(parts) {
            let ok = match segment {
                Segment::Literal(text) => *percent_decode_str(part).decode_utf8_lossy() == **text,
                Segment::Capture(_) if part.is_empty() => false,
                Segment::Capture(name) => {
                    captures.push(name, percent_decode_str(part).decode_utf8_lossy());
                    true
                }
            };
            if !ok {
                captures.truncate(mark);
                return false;
            }
        }
        true
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::compile(s)
    }
}

#[inline]
pub(super) fn trim_first_slash(s: &str) -> &str {
    s.strip_prefix(SLASH).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.into())
    }

    fn cap(s: &str) -> Segment {
        Segment::Capture(s.into())
    }

    #[test]
    fn compile_segments() {
        let p = Pattern::compile("/foo/:name");
        assert_eq!(p.segments(), &[lit("foo"), cap("name")]);
        assert!(!p.has_trailing_slash());

        let p = Pattern::compile("/hello/:name/");
        assert_eq!(p.segments(), &[lit("hello"), cap("name")]);
        assert!(p.has_trailing_slash());
        assert_eq!(p.capture_names().collect::<Vec<_>>(), ["name"]);
    }

    #[test]
    fn compile_degenerate() {
        for s in &["", "/"] {
            let p = Pattern::compile(s);
            assert!(p.segments().is_empty(), "{:?}", s);
            assert!(p.has_trailing_slash(), "{:?}", s);
        }

        let p = Pattern::compile("/a//b/:");
        assert_eq!(p.segments(), &[lit("a"), lit("b"), lit(":")]);
        assert!(!p.has_trailing_slash());

        assert_eq!(Pattern::compile("a/b"), Pattern::compile("/a/b"));
    }

    #[test]
    fn match_binds_decoded_values() {
        let p = Pattern::compile("/files/:dir/:name");
        let mut caps = Captures::new();
        assert!(p.match_parts(&["files", "a%20b", "x:y"], false, &mut caps));
        assert_eq!(caps.get("dir"), Some("a b"));
        assert_eq!(caps.get("name"), Some("x:y"));
    }

    #[test]
    fn match_literal_against_decoded_segment() {
        let p = Pattern::compile("/hello world/café");
        let mut caps = Captures::new();
        assert!(p.match_parts(&["hello%20world", "caf%C3%A9"], false, &mut caps));
        assert!(p.match_parts(&["hello world", "café"], false, &mut caps));
        assert!(!p.match_parts(&["hello%2Bworld", "café"], false, &mut caps));
    }

    #[test]
    fn match_rolls_back_on_failure() {
        let p = Pattern::compile("/:a/b");
        let mut caps = Captures::new();
        assert!(!p.match_parts(&["x", "c"], false, &mut caps));
        assert!(caps.is_empty());

        assert!(!p.match_parts(&["", "b"], false, &mut caps));
        assert!(!p.match_parts(&["x", "b"], true, &mut caps));
        assert!(!p.match_parts(&["x", "b", "c"], false, &mut caps));
        assert!(caps.is_empty());
    }
}
