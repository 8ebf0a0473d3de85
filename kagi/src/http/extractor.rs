use crate::state::Zustand;
use axum::{
    body::Body,
    extract::{FromRequest, OriginalUri},
    response::{IntoResponse, Response},
    RequestExt,
};
use bytes::Bytes;
use http::{header, HeaderMap, Request, StatusCode};
use serde::de::DeserializeOwned;
use webhook_signatures::{RawRequest, VerificationOutcome};

/// Verifies the authenticity of a webhook request and parses its body
///
/// The signature is checked against the exact bytes received on the wire before anything
/// touches the JSON. An inauthentic request is refused with `422 Unprocessable Entity`.
pub struct VerifiedWebhook<T>(pub T);

impl<T> FromRequest<Zustand> for VerifiedWebhook<T>
where
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(mut req: Request<Body>, state: &Zustand) -> Result<Self, Self::Rejection> {
        let OriginalUri(original_uri) = req
            .extract_parts()
            .await
            .map_err(IntoResponse::into_response)?;

        let method = req.method().clone();
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let raw_request = RawRequest::new(method, original_uri, headers, body);
        if let VerificationOutcome::Rejected(reason) = state.verifier.verify(&raw_request) {
            info!(%reason, "refused unauthenticated webhook request");
            return Err(StatusCode::UNPROCESSABLE_ENTITY.into_response());
        }

        if !json_content_type(raw_request.headers()) {
            return Err(StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response());
        }

        match sonic_rs::from_slice(raw_request.body()) {
            Ok(value) => Ok(Self(value)),
            Err(error) => {
                debug!(?error, "Failed to parse JSON payload");
                Err(StatusCode::BAD_REQUEST.into_response())
            }
        }
    }
}

/// `application/json`, `application/vnd.api+json` or any other `+json` media type
fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };

    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let Ok(mime) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    mime.type_() == "application"
        && (mime.subtype() == "json" || mime.suffix().is_some_and(|name| name == "json"))
}
