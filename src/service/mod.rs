mod handler;
mod params;
mod query;
mod service;
mod service_macro;

#[cfg(feature = "hyper-service")]
mod hyper_service;

pub use self::handler::{BoxHandler, Handler, NotFound};
pub use self::params::Params;
pub use self::query::Query;
pub use self::service::RouterService;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;
