use crate::{
    event::{self, WebhookDocument},
    http::extractor::VerifiedWebhook,
};
use http::StatusCode;

/// Receive an authenticated webhook notification
///
/// Always acknowledges an authentic event, even if we couldn't make sense of its payload.
/// The licensing service would otherwise keep redelivering it.
pub async fn post(VerifiedWebhook(document): VerifiedWebhook<WebhookDocument>) -> StatusCode {
    if let Err(error) = event::dispatch(&document.data) {
        warn!(
            ?error,
            webhook_event_id = %document.data.id,
            "failed to process webhook event"
        );
    }

    StatusCode::OK
}
