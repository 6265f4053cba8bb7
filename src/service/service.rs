use super::handler::{plain_text, BoxHandler, Handler, NotFound};
use super::params::Params;
use super::{BoxError, BoxFuture};
use crate::error::RouterError;
use crate::http_router::{HttpRouter, Method, Resolution};

use std::fmt;
use std::future;

use http::header::{HeaderValue, ALLOW};
use http::uri::{PathAndQuery, Uri};
use http::{Request, Response, StatusCode};
use tracing::{debug, warn};
use url::form_urlencoded;

/// Dispatches requests to handlers registered by method and path pattern.
///
/// Build it once, then share it (e.g. in an `Arc`) between connections;
/// dispatching only reads the route table.
pub struct RouterService<B, R> {
    router: HttpRouter<BoxHandler<B, R>>,
    not_found: BoxHandler<B, R>,
}

impl<B, R> RouterService<B, R>
where
    R: From<&'static str> + Send + 'static,
{
    pub fn new() -> Self {
        Self::from_router(HttpRouter::new())
    }

    pub fn from_router(router: HttpRouter<BoxHandler<B, R>>) -> Self {
        Self {
            router,
            not_found: Box::new(NotFound),
        }
    }

    /// Dispatches a request.
    ///
    /// The first route matching both path and method handles it. A path
    /// that only matches under other methods gets `405 Method Not Allowed`
    /// with an `Allow` header, and anything else goes to the not-found
    /// handler.
    pub fn handle(
        &self,
        mut req: Request<B>,
    ) -> BoxFuture<'static, Result<Response<R>, BoxError>> {
        let path = req.uri().path().to_owned();

        let (handler, params) = match self.router.resolve(req.method(), &path) {
            Resolution::Matched { data, captures } => {
                debug!(
                    method = %req.method(),
                    path = %path,
                    params = captures.len(),
                    "route matched"
                );
                (data, Params::new(&captures))
            }
            Resolution::MethodNotAllowed { allowed } => {
                debug!(method = %req.method(), path = %path, "method not allowed");
                let res = method_not_allowed(&allowed);
                return Box::pin(future::ready(Ok(res)));
            }
            Resolution::NotFound => {
                debug!(method = %req.method(), path = %path, "no route found");
                (&self.not_found, Params::empty())
            }
        };

        if let Err(e) = inject_params(&mut req, &params) {
            warn!(path = %path, error = %e, "failed to inject path parameters");
            return Box::pin(future::ready(Err(e.into())));
        }

        handler.call(req, params)
    }
}

impl<B, R> RouterService<B, R> {
    pub fn route(
        &mut self,
        method: Method,
        pattern: &str,
        h: impl Handler<B, R> + Send + Sync + 'static,
    ) -> &mut Self {
        self.router.insert(method, pattern, Box::new(h));
        self
    }

    /// Registers a handler under a method given as a string, such as a
    /// custom extension method.
    pub fn on(
        &mut self,
        method: &str,
        pattern: &str,
        h: impl Handler<B, R> + Send + Sync + 'static,
    ) -> Result<&mut Self, RouterError> {
        self.router.try_insert(method, pattern, Box::new(h))?;
        Ok(self)
    }

    /// Replaces the handler used when no route matches the path.
    ///
    /// A path registered only under other methods is answered with
    /// `405 Method Not Allowed`, not with this handler.
    pub fn not_found(&mut self, h: impl Handler<B, R> + Send + Sync + 'static) -> &mut Self {
        self.not_found = Box::new(h);
        self
    }

    pub fn trailing_slash_fallback(&mut self, enabled: bool) -> &mut Self {
        self.router.trailing_slash_fallback(enabled);
        self
    }

    pub fn into_router(self) -> HttpRouter<BoxHandler<B, R>> {
        self.router
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(
            &mut self,
            pattern: &str,
            h: impl Handler<B, R> + Send + Sync + 'static,
        ) -> &mut Self {
            self.route(Method::$method, pattern, h)
        }
    };
}

impl<B, R> RouterService<B, R> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(patch, PATCH);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(trace, TRACE);
}

impl<B, R> Default for RouterService<B, R>
where
    R: From<&'static str> + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, R> fmt::Debug for RouterService<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterService")
            .field("routes", &self.router.len())
            .finish_non_exhaustive()
    }
}

impl<B, R> Handler<B, R> for RouterService<B, R>
where
    R: From<&'static str> + Send + 'static,
{
    fn call(
        &self,
        req: Request<B>,
        _: Params,
    ) -> BoxFuture<'static, Result<Response<R>, BoxError>> {
        self.handle(req)
    }
}

fn method_not_allowed<R: From<&'static str>>(allowed: &[Method]) -> Response<R> {
    let mut res = plain_text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed\n");
    let allow = allowed
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    // method names are tokens, which are always valid header values
    if let Ok(value) = HeaderValue::from_str(&allow) {
        res.headers_mut().insert(ALLOW, value);
    }
    res
}

/// Prepends the path parameters to the raw query as `:name=value` pairs.
/// The URI is left untouched when there are no parameters.
fn inject_params<B>(req: &mut Request<B>, params: &Params) -> Result<(), RouterError> {
    if params.is_empty() {
        return Ok(());
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        query.append_pair(&format!(":{}", name), value);
    }
    let mut query = query.finish();

    if let Some(raw) = req.uri().query().filter(|q| !q.is_empty()) {
        query.push('&');
        query.push_str(raw);
    }

    let path_and_query = format!("{}?{}", req.uri().path(), query);
    let mut parts = req.uri().clone().into_parts();
    let path_and_query = PathAndQuery::try_from(path_and_query).map_err(http::Error::from)?;
    parts.path_and_query = Some(path_and_query);
    *req.uri_mut() = Uri::from_parts(parts).map_err(http::Error::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_for(pattern: &str, path: &str) -> Params {
        let mut router = crate::Router::new();
        router.insert(pattern, ());
        let (_, caps) = router.find(path).unwrap();
        Params::new(&caps)
    }

    #[test]
    fn allow_header_lists_methods() {
        let res: Response<String> = method_not_allowed(&[Method::POST, Method::PUT]);
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(res.headers()[ALLOW], "POST, PUT");
    }

    #[test]
    fn inject_keeps_raw_query_without_params() {
        let mut req = Request::get("/foo/?a=b").body(()).unwrap();
        inject_params(&mut req, &Params::empty()).unwrap();
        assert_eq!(req.uri().query(), Some("a=b"));

        let mut req = Request::get("/foo/").body(()).unwrap();
        inject_params(&mut req, &Params::empty()).unwrap();
        assert_eq!(req.uri().query(), None);
    }

    #[test]
    fn inject_prepends_params() {
        let params = params_for("/foo/:name", "/foo/a%20b");
        assert_eq!(params.get("name"), Some("a b"));

        let mut req = Request::get("http://example.com/foo/a%20b?a=b")
            .body(())
            .unwrap();
        inject_params(&mut req, &params).unwrap();
        assert_eq!(req.uri().query(), Some("%3Aname=a+b&a=b"));
        assert_eq!(req.uri().host(), Some("example.com"));

        let mut req = Request::get("/foo/a%20b").body(()).unwrap();
        inject_params(&mut req, &params).unwrap();
        assert_eq!(req.uri().query(), Some("%3Aname=a+b"));
        assert_eq!(req.uri().path(), "/foo/a%20b");
    }
}
