use bytes::Bytes;
use http::{header::AsHeaderName, request::Parts, HeaderMap, HeaderValue, Method, Request, Uri};

/// Immutable snapshot of an inbound webhook request
///
/// The body has to be the exact byte sequence received on the wire.
/// Anything that went through a JSON parser won't verify.
#[derive(Clone, Debug)]
pub struct RawRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl RawRequest {
    /// Construct a new raw request from its components
    #[must_use]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            uri,
            headers,
            body: body.into(),
        }
    }

    /// Construct a raw request from the parts of an HTTP request and its buffered body
    #[must_use]
    pub fn from_parts(parts: Parts, body: impl Into<Bytes>) -> Self {
        Self::new(parts.method, parts.uri, parts.headers, body)
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path and query of the request, as used by the `(request-target)` pseudo-header
    #[must_use]
    pub fn request_target(&self) -> &str {
        self.uri.path_and_query().map_or_else(
            || self.uri.path(),
            |path_and_query| path_and_query.as_str(),
        )
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup
    #[must_use]
    pub fn header<K>(&self, name: K) -> Option<&HeaderValue>
    where
        K: AsHeaderName,
    {
        self.headers.get(name)
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl<B> From<Request<B>> for RawRequest
where
    B: Into<Bytes>,
{
    fn from(value: Request<B>) -> Self {
        let (parts, body) = value.into_parts();
        Self::from_parts(parts, body)
    }
}
