use super::params::Params;
use super::{BoxError, BoxFuture, StdError};

use std::future::{self, Future};

use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Request, Response, StatusCode};

/// Anything that can answer a routed request.
///
/// Implemented for async functions and closures taking the request and its
/// path parameters, for boxed handlers, and for
/// [`RouterService`](super::RouterService) itself.
pub trait Handler<B, R> {
    fn call(
        &self,
        req: Request<B>,
        params: Params,
    ) -> BoxFuture<'static, Result<Response<R>, BoxError>>;
}

pub type BoxHandler<B, R> = Box<dyn Handler<B, R> + Send + Sync>;

impl<B, R> Handler<B, R> for BoxHandler<B, R> {
    fn call(
        &self,
        req: Request<B>,
        params: Params,
    ) -> BoxFuture<'static, Result<Response<R>, BoxError>> {
        Handler::call(&**self, req, params)
    }
}

impl<F, B, R, E, Fut> Handler<B, R> for F
where
    F: Fn(Request<B>, Params) -> Fut,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<R>, E>> + Send + 'static,
{
    fn call(
        &self,
        req: Request<B>,
        params: Params,
    ) -> BoxFuture<'static, Result<Response<R>, BoxError>> {
        let fut = (self)(req, params);
        Box::pin(async move {
            let ret = fut.await;
            match ret {
                Ok(r) => Ok(r),
                Err(e) => Err(Box::new(e) as BoxError),
            }
        })
    }
}

/// The default not-found handler: `404` with a short plain-text body.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl<B, R> Handler<B, R> for NotFound
where
    R: From<&'static str> + Send + 'static,
{
    fn call(
        &self,
        _: Request<B>,
        _: Params,
    ) -> BoxFuture<'static, Result<Response<R>, BoxError>> {
        let res = plain_text(StatusCode::NOT_FOUND, "404 page not found\n");
        Box::pin(future::ready(Ok(res)))
    }
}

pub(super) fn plain_text<R>(status: StatusCode, body: &'static str) -> Response<R>
where
    R: From<&'static str>,
{
    let mut res = Response::new(R::from(body));
    *res.status_mut() = status;
    res.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    res
}
