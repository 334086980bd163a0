use uuid::Uuid;

use super::errors::DomainError;
use super::events::{DomainEvent, EventBuffer, EventKind, RaisesEvents};

/// A supplier registered on the platform. Suppliers start unqualified and
/// may not bid until qualified.
#[derive(Debug)]
pub struct Supplier {
    pub id: Uuid,
    pub legal_name: String,
    pub region_code: String,
    pub qualified: bool,
    events: EventBuffer,
}

impl Supplier {
    pub fn new(legal_name: String, region_code: String) -> Result<Self, DomainError> {
        if legal_name.trim().is_empty() {
            return Err(DomainError::validation("Legal name is required"));
        }

        let id = Uuid::new_v4();
        let mut events = EventBuffer::default();
        events.record(EventKind::SupplierRegistered {
            supplier_id: id,
            legal_name: legal_name.clone(),
        });

        Ok(Self {
            id,
            legal_name,
            region_code,
            qualified: false,
            events,
        })
    }

    pub fn from_parts(id: Uuid, legal_name: String, region_code: String, qualified: bool) -> Self {
        Self {
            id,
            legal_name,
            region_code,
            qualified,
            events: EventBuffer::default(),
        }
    }

    /// Qualifying an already-qualified supplier is a no-op.
    pub fn qualify(&mut self) {
        if self.qualified {
            return;
        }
        self.qualified = true;
        self.events.record(EventKind::SupplierQualified {
            supplier_id: self.id,
        });
    }
}

impl RaisesEvents for Supplier {
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
    fn new_raises_registered_event() {
        let supplier = Supplier::new("Acme Grain Co".to_string(), "MN".to_string())
            .expect("valid supplier");
        assert!(!supplier.qualified);
        assert_eq!(supplier.pending_events().len(), 1);
        assert!(matches!(
            supplier.pending_events()[0].kind,
            EventKind::SupplierRegistered { supplier_id, .. } if supplier_id == supplier.id
        ));
    }

    #[test]
    fn blank_legal_name_is_rejected() {
        let err = Supplier::new("".to_string(), "MN".to_string()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn qualify_raises_event_once() {
        let mut supplier = Supplier::new("Acme Grain Co".to_string(), "MN".to_string())
            .expect("valid supplier");
        supplier.drain_events();

        supplier.qualify();
        assert!(supplier.qualified);
        assert_eq!(supplier.pending_events().len(), 1);

        supplier.qualify();
        assert_eq!(
            supplier.pending_events().len(),
            1,
            "repeat qualify raises nothing"
        );
    }
}
