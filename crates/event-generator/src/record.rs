//! Record and document types handed to the publisher.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::generators::structured::{is_success, status_message};

/// Number of user id characters that go into a structured record key.
pub const KEY_USER_ID_PREFIX_LEN: usize = 8;

/// A keyed document ready to be encoded and published.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Message key. Generated records always carry one.
    pub key: Option<String>,
    /// Message value, serialized as JSON on publish.
    pub value: EventDocument,
}

/// The document shapes a record value can take.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventDocument {
    Flat(FlatEvent),
    Structured(StructuredEvent),
}

impl EventDocument {
    /// Returns the structured event, if this is one.
    pub fn as_structured(&self) -> Option<&StructuredEvent> {
        match self {
            EventDocument::Structured(event) => Some(event),
            EventDocument::Flat(_) => None,
        }
    }
}

/// Flat random record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatEvent {
    pub id: String,
    pub name: String,
    pub value: i64,
    /// Epoch seconds with sub-second precision.
    pub timestamp: f64,
    pub data: FlatData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatData {
    pub field1: String,
    pub field2: f64,
    pub field3: bool,
}

/// Semi-structured HTTP log event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredEvent {
    pub meta: Meta,
    pub request: Request,
    pub response: Response,
    pub user: User,
    pub event: Event,
}

impl StructuredEvent {
    /// Key derived from the event's identity fields.
    pub fn key(&self) -> String {
        build_key(
            &self.meta.service,
            &self.meta.env,
            &self.meta.region,
            &self.user.id,
        )
    }

    /// Sets the response status and keeps `msg` and `event.success` consistent with it.
    pub fn set_status(&mut self, status: u16) {
        self.response.status = status;
        self.response.msg = status_message(status).to_string();
        self.event.success = is_success(status);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub id: Uuid,
    pub ts: DateTime<Utc>,
    pub service: String,
    pub env: String,
    pub region: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: RequestHeaders,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestHeaders {
    pub user_agent: String,
    pub request_id: Uuid,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub duration_ms: u32,
    pub size_bytes: u32,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub role: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub success: bool,
}

/// Build the partitioning key for a structured event.
///
/// The format is `{service}-{env}-{region}:{first 8 chars of user_id}`. Ids
/// shorter than 8 characters are used whole.
pub fn build_key(service: &str, env: &str, region: &str, user_id: &str) -> String {
    let user_prefix: String = user_id.chars().take(KEY_USER_ID_PREFIX_LEN).collect();
    format!("{service}-{env}-{region}:{user_prefix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_key_truncates_user_id() {
        assert_eq!(
            build_key("auth", "prod", "us-east-1", "abcdefgh1234"),
            "auth-prod-us-east-1:abcdefgh"
        );
    }

    #[test]
    fn test_build_key_short_user_id() {
        assert_eq!(
            build_key("orders", "dev", "eu-west-1", "abc"),
            "orders-dev-eu-west-1:abc"
        );
    }

    #[test]
    fn test_build_key_uuid_user_id() {
        let user_id = "3f2c9a1e-7b4d-4c1a-9e2f-0a1b2c3d4e5f";
        assert_eq!(
            build_key("billing", "staging", "us-west-2", user_id),
            "billing-staging-us-west-2:3f2c9a1e"
        );
    }

    #[test]
    fn test_event_type_serializes_as_type() {
        let event = Event {
            event_type: "login".to_string(),
            success: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "login");
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_flat_document_is_untagged() {
        let doc = EventDocument::Flat(FlatEvent {
            id: "abcd1234".to_string(),
            name: "name".to_string(),
            value: 7,
            timestamp: 1.5,
            data: FlatData {
                field1: "x".to_string(),
                field2: 2.0,
                field3: false,
            },
        });
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], "abcd1234");
        assert_eq!(json["data"]["field3"], false);
        assert!(json.get("Flat").is_none());
    }
}
