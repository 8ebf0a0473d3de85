//!
//! Webhook event documents and their dispatch
//!
//! The licensing service wraps every notification into a JSON:API document.
//! The resource the event is about travels as a JSON string in `attributes.payload`.
//!

use serde::Deserialize;
use smol_str::SmolStr;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Event \"{0}\" carries no payload")]
    MissingPayload(EventKind),

    #[error(transparent)]
    Payload(#[from] sonic_rs::Error),
}

/// Kind of a webhook event
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
pub enum EventKind {
    #[strum(serialize = "user.created")]
    UserCreated,
    #[strum(serialize = "user.deleted")]
    UserDeleted,
    #[strum(serialize = "user.password-reset")]
    UserPasswordReset,
    #[strum(serialize = "license.created")]
    LicenseCreated,
    #[strum(serialize = "license.deleted")]
    LicenseDeleted,

    /// Any event without a dedicated handler
    #[strum(serialize = "other", disabled)]
    Other,
}

impl EventKind {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::from_str(name).unwrap_or(Self::Other)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WebhookDocument {
    pub data: WebhookEvent,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WebhookEvent {
    pub id: SmolStr,
    pub attributes: WebhookEventAttributes,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WebhookEventAttributes {
    pub event: SmolStr,
    pub payload: Option<String>,
}

impl WebhookEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        EventKind::from_name(&self.attributes.event)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ResourceIdentifier {
    pub id: SmolStr,
    #[serde(rename = "type")]
    pub ty: SmolStr,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Relationship {
    pub data: Option<ResourceIdentifier>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Relationships {
    pub user: Option<Relationship>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Resource {
    pub id: SmolStr,
    #[serde(rename = "type")]
    pub ty: SmolStr,
    #[serde(default)]
    pub relationships: Relationships,
}

impl Resource {
    /// ID of the user this resource belongs to, if any
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.relationships
            .user
            .as_ref()
            .and_then(|user| user.data.as_ref())
            .map(|data| data.id.as_str())
    }
}

/// Decoded `attributes.payload`
///
/// The `meta` object (password reset tokens and the like) is intentionally not deserialised
#[derive(Clone, Debug, Deserialize)]
pub struct Payload {
    pub data: Resource,
}

fn payload(event: &WebhookEvent, kind: EventKind) -> Result<Payload, Error> {
    let payload = event
        .attributes
        .payload
        .as_deref()
        .ok_or(Error::MissingPayload(kind))?;

    Ok(sonic_rs::from_str(payload)?)
}

/// Act on an authenticated webhook event
#[instrument(skip_all, fields(webhook_event_id = %event.id, event = %event.attributes.event))]
pub fn dispatch(event: &WebhookEvent) -> Result<EventKind, Error> {
    let kind = event.kind();

    match kind {
        EventKind::UserCreated | EventKind::UserDeleted | EventKind::UserPasswordReset => {
            let user = payload(event, kind)?.data;
            info!(user_id = %user.id, "{kind}");
        }
        EventKind::LicenseCreated | EventKind::LicenseDeleted => {
            let license = payload(event, kind)?.data;
            info!(license_id = %license.id, user_id = ?license.user_id(), "{kind}");
        }
        EventKind::Other => {
            debug!("no handler for event");
        }
    }

    Ok(kind)
}

#[cfg(test)]
mod test {
    use super::{dispatch, Error, EventKind, WebhookDocument};

    const LICENSE_CREATED: &str = r#"{
        "data": {
            "id": "3f2c9a0e-5b4f-4a7e-9c61-2d1a8f0b7e55",
            "type": "webhook-events",
            "attributes": {
                "event": "license.created",
                "payload": "{\"data\":{\"id\":\"8c5c9ad4\",\"type\":\"licenses\",\"relationships\":{\"user\":{\"data\":{\"id\":\"5d0a2b6e\",\"type\":\"users\"}}}}}",
                "status": "DELIVERING"
            }
        }
    }"#;

    #[test]
    fn event_kind_from_name() {
        assert_eq!(EventKind::from_name("user.created"), EventKind::UserCreated);
        assert_eq!(
            EventKind::from_name("user.password-reset"),
            EventKind::UserPasswordReset
        );
        assert_eq!(EventKind::from_name("license.deleted"), EventKind::LicenseDeleted);
        assert_eq!(EventKind::from_name("machine.created"), EventKind::Other);
        assert_eq!(EventKind::from_name("other"), EventKind::Other);
        assert_eq!(EventKind::from_name("User.Created"), EventKind::Other);
    }

    #[test]
    fn dispatch_license_created() {
        let document: WebhookDocument = sonic_rs::from_str(LICENSE_CREATED).unwrap();
        assert_eq!(document.data.id, "3f2c9a0e-5b4f-4a7e-9c61-2d1a8f0b7e55");

        let payload = super::payload(&document.data, EventKind::LicenseCreated).unwrap();
        assert_eq!(payload.data.id, "8c5c9ad4");
        assert_eq!(payload.data.ty, "licenses");
        assert_eq!(payload.data.user_id(), Some("5d0a2b6e"));

        assert_eq!(dispatch(&document.data).unwrap(), EventKind::LicenseCreated);
    }

    #[test]
    fn password_reset_meta_is_ignored() {
        let document: WebhookDocument = sonic_rs::from_str(
            r#"{"data":{"id":"1","attributes":{"event":"user.password-reset","payload":"{\"meta\":{\"passwordResetToken\":\"secret\"},\"data\":{\"id\":\"2\",\"type\":\"users\"}}"}}}"#,
        )
        .unwrap();

        assert_eq!(dispatch(&document.data).unwrap(), EventKind::UserPasswordReset);
    }

    #[test]
    fn unknown_event_needs_no_payload() {
        let document: WebhookDocument =
            sonic_rs::from_str(r#"{"data":{"id":"1","attributes":{"event":"machine.heartbeat.dead"}}}"#)
                .unwrap();

        assert_eq!(dispatch(&document.data).unwrap(), EventKind::Other);
    }

    #[test]
    fn missing_payload() {
        let document: WebhookDocument =
            sonic_rs::from_str(r#"{"data":{"id":"1","attributes":{"event":"user.created"}}}"#)
                .unwrap();

        assert!(matches!(
            dispatch(&document.data),
            Err(Error::MissingPayload(EventKind::UserCreated))
        ));
    }

    #[test]
    fn malformed_payload() {
        let document: WebhookDocument = sonic_rs::from_str(
            r#"{"data":{"id":"1","attributes":{"event":"user.deleted","payload":"{not json"}}}"#,
        )
        .unwrap();

        assert!(matches!(dispatch(&document.data), Err(Error::Payload(..))));
    }
}
