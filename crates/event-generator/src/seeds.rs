//! Fixed seed records emitted ahead of the random stream.
//!
//! Each seed is a generated structured event with specific fields overridden,
//! so that downstream queries always find these combinations in the topic no
//! matter what the random stream contains. Every seed message contains the
//! substring "error" for text-search tests.

use crate::generator::EventGenerator;
use crate::record::{EventDocument, Record, StructuredEvent};

pub const SEED_RECORD_COUNT: usize = 5;

/// Build the five seed records, in their fixed emission order.
///
/// The generator's RNG supplies the fields that are not overridden. The
/// seeds do not count towards [`EventGenerator::generated_count`].
pub fn seed_records(generator: &mut EventGenerator) -> Vec<Record> {
    let overrides: [fn(&mut StructuredEvent); SEED_RECORD_COUNT] = [
        auth_put_failure,
        orders_post_created,
        billing_delete_missing,
        catalog_get_unavailable,
        purchase_completed,
    ];

    overrides
        .iter()
        .map(|apply| {
            let mut event = generator.structured_event();
            apply(&mut event);
            Record {
                key: Some(event.key()),
                value: EventDocument::Structured(event),
            }
        })
        .collect()
}

fn auth_put_failure(event: &mut StructuredEvent) {
    event.meta.service = "auth".to_string();
    event.meta.env = "prod".to_string();
    event.meta.region = "us-east-1".to_string();
    event.request.method = "PUT".to_string();
    event.request.path = "/api/v1/login".to_string();
    event.set_status(500);
    event.response.msg = "token refresh error: upstream auth provider timed out".to_string();
}

fn orders_post_created(event: &mut StructuredEvent) {
    event.meta.service = "orders".to_string();
    event.request.method = "POST".to_string();
    event.request.path = "/api/v1/orders".to_string();
    event.set_status(201);
    event.response.msg = "order created after retrying payment error".to_string();
}

fn billing_delete_missing(event: &mut StructuredEvent) {
    event.meta.service = "billing".to_string();
    event.request.method = "DELETE".to_string();
    event.request.path = "/api/v1/invoices".to_string();
    event.set_status(404);
    event.response.msg = "invoice not found error".to_string();
}

fn catalog_get_unavailable(event: &mut StructuredEvent) {
    event.meta.service = "catalog".to_string();
    event.request.method = "GET".to_string();
    event.request.path = "/api/v1/products".to_string();
    event.set_status(503);
    event.response.msg = "service unavailable error".to_string();
}

fn purchase_completed(event: &mut StructuredEvent) {
    event.event.event_type = "purchase".to_string();
    event.set_status(200);
    event.response.msg = "purchase completed, no error".to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventMode;

    fn structured(record: &Record) -> &StructuredEvent {
        record.value.as_structured().expect("seeds are structured")
    }

    #[test]
    fn test_seed_order_and_overrides() {
        let mut generator = EventGenerator::new(EventMode::Structured, Some(42));
        let seeds = seed_records(&mut generator);
        assert_eq!(seeds.len(), SEED_RECORD_COUNT);

        let first = structured(&seeds[0]);
        assert_eq!(first.meta.service, "auth");
        assert_eq!(first.meta.env, "prod");
        assert_eq!(first.meta.region, "us-east-1");
        assert_eq!(first.request.method, "PUT");
        assert_eq!(first.response.status, 500);

        let second = structured(&seeds[1]);
        assert_eq!(second.meta.service, "orders");
        assert_eq!(second.request.method, "POST");
        assert_eq!(second.response.status, 201);

        let third = structured(&seeds[2]);
        assert_eq!(third.meta.service, "billing");
        assert_eq!(third.request.method, "DELETE");
        assert_eq!(third.response.status, 404);

        let fourth = structured(&seeds[3]);
        assert_eq!(fourth.meta.service, "catalog");
        assert_eq!(fourth.request.method, "GET");
        assert_eq!(fourth.response.status, 503);
        assert_eq!(fourth.response.msg, "service unavailable error");

        let fifth = structured(&seeds[4]);
        assert_eq!(fifth.event.event_type, "purchase");
        assert_eq!(fifth.response.status, 200);
    }

    #[test]
    fn test_seed_messages_contain_error() {
        let mut generator = EventGenerator::new(EventMode::Structured, Some(7));

        for seed in seed_records(&mut generator) {
            assert!(structured(&seed).response.msg.contains("error"));
        }
    }

    #[test]
    fn test_seed_success_follows_status() {
        let mut generator = EventGenerator::new(EventMode::Structured, Some(7));
        let successes: Vec<bool> = seed_records(&mut generator)
            .iter()
            .map(|seed| structured(seed).event.success)
            .collect();

        assert_eq!(successes, vec![false, true, false, false, true]);
    }

    #[test]
    fn test_seed_keys_use_overridden_identity() {
        let mut generator = EventGenerator::new(EventMode::Structured, Some(3));
        let seeds = seed_records(&mut generator);

        let first = structured(&seeds[0]);
        let expected = format!("auth-prod-us-east-1:{}", &first.user.id[..8]);
        assert_eq!(seeds[0].key.as_deref(), Some(expected.as_str()));

        for seed in &seeds {
            assert_eq!(seed.key.as_deref(), Some(structured(seed).key().as_str()));
        }
    }

    #[test]
    fn test_seeds_not_counted_as_generated() {
        let mut generator = EventGenerator::new(EventMode::Flat, Some(3));
        let seeds = seed_records(&mut generator);

        assert_eq!(seeds.len(), SEED_RECORD_COUNT);
        assert_eq!(generator.generated_count(), 0);
    }
}
