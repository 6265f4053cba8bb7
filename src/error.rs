use http::method::InvalidMethod;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid method: {method:?}")]
    InvalidMethod {
        method: String,
        source: InvalidMethod,
    },

    #[error("can not rebuild request uri with path parameters")]
    Uri(#[from] http::Error),
}

impl RouterError {
    pub(crate) fn invalid_method(method: &str, source: InvalidMethod) -> Self {
        Self::InvalidMethod {
            method: method.to_owned(),
            source,
        }
    }
}
