mod captures;
mod imp;
mod matcher;
mod pattern;

pub use self::captures::Captures;
pub use self::pattern::{Pattern, Segment};

/// A path-only route table.
///
/// Routes are kept in registration order and are never removed. Among
/// several routes matching the same path, the one registered first wins.
#[derive(Debug)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
    fallback: bool,
}

#[derive(Debug)]
struct Route<T> {
    pattern: Pattern,
    data: T,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
