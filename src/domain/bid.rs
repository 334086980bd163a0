use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::DomainError;
use super::events::{DomainEvent, EventBuffer, EventKind, RaisesEvents};

/// A supplier's bid on an open opportunity. Whether the opportunity accepts
/// bids at all is checked by the application service, not here.
#[derive(Debug)]
pub struct Bid {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub supplier_id: Uuid,
    pub unit_price: BigDecimal,
    pub submitted_at: DateTime<Utc>,
    events: EventBuffer,
}

impl Bid {
    pub fn new(
        opportunity_id: Uuid,
        supplier_id: Uuid,
        unit_price: BigDecimal,
    ) -> Result<Self, DomainError> {
        if opportunity_id.is_nil() {
            return Err(DomainError::validation("Opportunity id is required"));
        }
        if supplier_id.is_nil() {
            return Err(DomainError::validation("Supplier id is required"));
        }
        if unit_price <= BigDecimal::from(0) {
            return Err(DomainError::validation(
                "Unit price must be greater than zero",
            ));
        }

        let id = Uuid::new_v4();
        let mut events = EventBuffer::default();
        events.record(EventKind::BidSubmitted {
            bid_id: id,
            opportunity_id,
            supplier_id,
            unit_price: unit_price.clone(),
        });

        Ok(Self {
            id,
            opportunity_id,
            supplier_id,
            unit_price,
            submitted_at: Utc::now(),
            events,
        })
    }
}

impl RaisesEvents for Bid {
    fn pending_events(&self) -> &[DomainEvent] {
        self.events.pending()
    }

    fn drain_events(&mut self) -> Vec<DomainEvent> {
        self.events.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raises_submitted_event() {
        let bid = Bid::new(Uuid::new_v4(), Uuid::new_v4(), BigDecimal::from(12))
            .expect("valid bid");
        assert_eq!(bid.pending_events().len(), 1);
        assert!(matches!(
            bid.pending_events()[0].kind,
            EventKind::BidSubmitted { bid_id, .. } if bid_id == bid.id
        ));
    }

    #[test]
    fn nil_opportunity_id_is_rejected() {
        let err = Bid::new(Uuid::nil(), Uuid::new_v4(), BigDecimal::from(12)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_positive_unit_price_is_rejected() {
        let err = Bid::new(Uuid::new_v4(), Uuid::new_v4(), BigDecimal::from(0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
