//! Structured log event generator.
//!
//! Every categorical field is drawn uniformly from a fixed vocabulary and
//! every numeric field uniformly from a fixed range. The response message and
//! the event success flag are derived from the drawn status code.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::pick;
use super::uuid::generate_uuid_v4;
use crate::record::{Event, Meta, Request, RequestHeaders, Response, StructuredEvent, User};

pub const SERVICES: &[&str] = &[
    "auth",
    "orders",
    "billing",
    "catalog",
    "search",
    "notifications",
];
pub const ENVS: &[&str] = &["prod", "staging", "dev"];
pub const REGIONS: &[&str] = &["us-east-1", "us-west-2", "eu-west-1", "ap-southeast-1"];
pub const SOURCES: &[&str] = &["api-gateway", "web", "mobile", "batch"];
pub const METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH"];
pub const PATHS: &[&str] = &[
    "/api/v1/login",
    "/api/v1/orders",
    "/api/v1/invoices",
    "/api/v1/products",
    "/api/v1/users/me",
    "/api/v1/search",
    "/healthz",
];
pub const STATUS_CODES: &[u16] = &[
    200, 201, 204, 301, 400, 401, 403, 404, 409, 429, 500, 502, 503,
];
pub const EVENT_TYPES: &[&str] = &[
    "login", "logout", "view", "search", "signup", "purchase", "api_call",
];
pub const ROLES: &[&str] = &["admin", "user", "guest", "service"];
pub const COUNTRIES: &[&str] = &["US", "DE", "FR", "GB", "IN", "BR", "JP"];
pub const USER_AGENTS: &[&str] = &[
    "curl/8.5.0",
    "Mozilla/5.0",
    "okhttp/4.12.0",
    "python-requests/2.31",
];
pub const CONTENT_TYPES: &[&str] = &[
    "application/json",
    "text/plain",
    "application/x-www-form-urlencoded",
];

pub const DURATION_MS_RANGE: std::ops::RangeInclusive<u32> = 1..=2000;
pub const SIZE_BYTES_RANGE: std::ops::RangeInclusive<u32> = 0..=65536;

/// Response message for a status code.
pub fn status_message(status: u16) -> &'static str {
    if status >= 500 {
        "internal server error"
    } else if status == 404 {
        "resource not found"
    } else if status >= 400 {
        "client error"
    } else {
        "ok"
    }
}

/// Whether a status code counts as a successful event.
pub fn is_success(status: u16) -> bool {
    status < 400
}

/// Generate a structured event stamped with `now`.
pub fn generate_structured_event<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> StructuredEvent {
    let status = pick(rng, STATUS_CODES);

    StructuredEvent {
        meta: Meta {
            id: generate_uuid_v4(rng),
            ts: now,
            service: pick(rng, SERVICES).to_string(),
            env: pick(rng, ENVS).to_string(),
            region: pick(rng, REGIONS).to_string(),
            source: pick(rng, SOURCES).to_string(),
        },
        request: Request {
            method: pick(rng, METHODS).to_string(),
            path: pick(rng, PATHS).to_string(),
            headers: RequestHeaders {
                user_agent: pick(rng, USER_AGENTS).to_string(),
                request_id: generate_uuid_v4(rng),
                content_type: pick(rng, CONTENT_TYPES).to_string(),
            },
        },
        response: Response {
            status,
            duration_ms: rng.random_range(DURATION_MS_RANGE),
            size_bytes: rng.random_range(SIZE_BYTES_RANGE),
            msg: status_message(status).to_string(),
        },
        user: User {
            id: generate_uuid_v4(rng).to_string(),
            role: pick(rng, ROLES).to_string(),
            country: pick(rng, COUNTRIES).to_string(),
        },
        event: Event {
            event_type: pick(rng, EVENT_TYPES).to_string(),
            success: is_success(status),
        },
    }
}
