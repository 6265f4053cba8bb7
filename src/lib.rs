//! A pattern-based HTTP request router.
//!
//! Patterns are slash-delimited strings made of literal segments and named
//! captures (`/user/:id`). A request is dispatched to the first route, in
//! registration order, whose pattern and method both match. Paths differing
//! from a pattern only by a trailing slash are served by that route directly,
//! a path registered only under other methods yields `405 Method Not
//! Allowed`, and everything else goes to a configurable not-found handler.
//!
//! Captured segments reach the handler as [`Params`], and are also prepended
//! to the request's query string under `:`-prefixed names.
//!
//! ```
//! use pat_router::Router;
//!
//! let mut router: Router<u32> = Router::new();
//! router.insert("/user/:id", 1).insert("/static/", 2);
//!
//! let (data, captures) = router.find("/user/42").unwrap();
//! assert_eq!(*data, 1);
//! assert_eq!(captures.get("id"), Some("42"));
//!
//! assert_eq!(router.find("/static").map(|m| *m.0), Some(2));
//! ```

#![forbid(unsafe_code)]

mod router;

pub use self::router::{Captures, Pattern, Router, Segment};

#[cfg(feature = "http-router")]
mod error;

#[cfg(feature = "http-router")]
pub mod http_router;

#[cfg(feature = "http-router")]
mod service;

#[cfg(feature = "http-router")]
pub use self::{
    error::RouterError,
    http_router::{HttpRouter, Method, Resolution},
    service::{BoxError, BoxFuture, BoxHandler, Handler, NotFound, Params, Query, RouterService},
};
