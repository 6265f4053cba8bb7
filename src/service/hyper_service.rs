use super::service::RouterService;
use super::{BoxError, BoxFuture};

use http::{Request, Response};

/// Lets hyper serve the router directly, e.g. through
/// `hyper::server::conn::http1::Builder::serve_connection`.
impl<B, R> hyper::service::Service<Request<B>> for RouterService<B, R>
where
    R: From<&'static str> + Send + 'static,
{
    type Response = Response<R>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response<R>, BoxError>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        self.handle(req)
    }
}
