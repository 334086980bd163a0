use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of event kinds the service emits. The serde tag doubles as
/// the wire-format discriminator, so renaming a variant is a breaking change
/// to the persisted outbox payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventKind {
    OpportunityCreated {
        opportunity_id: Uuid,
        title: String,
    },
    OpportunityClosed {
        opportunity_id: Uuid,
    },
    SupplierRegistered {
        supplier_id: Uuid,
        legal_name: String,
    },
    SupplierQualified {
        supplier_id: Uuid,
    },
    BidSubmitted {
        bid_id: Uuid,
        opportunity_id: Uuid,
        supplier_id: Uuid,
        unit_price: BigDecimal,
    },
}

impl EventKind {
    /// Stable name matching the serde tag, used as the outbox `event_type`
    /// column.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::OpportunityCreated { .. } => "OpportunityCreated",
            EventKind::OpportunityClosed { .. } => "OpportunityClosed",
            EventKind::SupplierRegistered { .. } => "SupplierRegistered",
            EventKind::SupplierQualified { .. } => "SupplierQualified",
            EventKind::BidSubmitted { .. } => "BidSubmitted",
        }
    }
}

/// An immutable fact describing a state change, stamped at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainEvent {
    pub occurred_at: DateTime<Utc>,
    pub kind: EventKind,
}

impl DomainEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            occurred_at: Utc::now(),
            kind,
        }
    }
}

/// Ordered buffer of events an entity has raised since its last successful
/// commit. Entities own one of these instead of inheriting event behaviour
/// from a shared base type.
///
/// The buffer must only be cleared once the transaction that persisted both
/// the entity state and the derived outbox rows has committed; a failed
/// commit leaves it intact so a retry reproduces the same events.
#[derive(Debug, Default)]
pub struct EventBuffer {
    events: Vec<DomainEvent>,
}

impl EventBuffer {
    pub fn record(&mut self, kind: EventKind) {
        self.events.push(DomainEvent::new(kind));
    }

    pub fn pending(&self) -> &[DomainEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Capability shared by every mutable entity that raises domain events.
pub trait RaisesEvents {
    fn pending_events(&self) -> &[DomainEvent];

    fn drain_events(&mut self) -> Vec<DomainEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_raise_order() {
        let id = Uuid::new_v4();
        let mut buffer = EventBuffer::default();
        buffer.record(EventKind::OpportunityCreated {
            opportunity_id: id,
            title: "Wheat".to_string(),
        });
        buffer.record(EventKind::OpportunityClosed { opportunity_id: id });

        let kinds: Vec<&'static str> =
            buffer.pending().iter().map(|e| e.kind.name()).collect();
        assert_eq!(kinds, vec!["OpportunityCreated", "OpportunityClosed"]);
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut buffer = EventBuffer::default();
        buffer.record(EventKind::SupplierQualified {
            supplier_id: Uuid::new_v4(),
        });

        let drained = buffer.drain();
        assert_eq!(drained.len(), 1);
        assert!(buffer.pending().is_empty());
    }

    #[test]
    fn event_kind_name_matches_serde_tag() {
        let kind = EventKind::SupplierRegistered {
            supplier_id: Uuid::new_v4(),
            legal_name: "Acme Grain Co".to_string(),
        };
        let value = serde_json::to_value(&kind).expect("serialize failed");
        assert_eq!(value["type"], kind.name());
    }

    #[test]
    fn payload_round_trips() {
        let kind = EventKind::BidSubmitted {
            bid_id: Uuid::new_v4(),
            opportunity_id: Uuid::new_v4(),
            supplier_id: Uuid::new_v4(),
            unit_price: BigDecimal::from(120),
        };
        let value = serde_json::to_value(&kind).expect("serialize failed");
        let back: EventKind = serde_json::from_value(value).expect("deserialize failed");
        assert_eq!(back, kind);
    }
}
