use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::DomainError;
use super::events::{DomainEvent, EventBuffer, EventKind, RaisesEvents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunityStatus {
    Open,
    Closed,
}

impl OpportunityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityStatus::Open => "OPEN",
            OpportunityStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "OPEN" => Ok(OpportunityStatus::Open),
            "CLOSED" => Ok(OpportunityStatus::Closed),
            other => Err(DomainError::Internal(format!(
                "Unknown opportunity status '{other}'"
            ))),
        }
    }
}

/// A procurement opportunity posted by a buyer. Suppliers bid on it until the
/// deadline passes or a buyer closes it.
#[derive(Debug)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    pub product_category: String,
    pub quantity: BigDecimal,
    pub deadline_at: DateTime<Utc>,
    pub region_code: String,
    pub status: OpportunityStatus,
    events: EventBuffer,
}

impl Opportunity {
    pub fn new(
        title: String,
        product_category: String,
        quantity: BigDecimal,
        deadline_at: DateTime<Utc>,
        region_code: String,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("Title is required"));
        }
        if quantity <= BigDecimal::from(0) {
            return Err(DomainError::validation("Quantity must be greater than zero"));
        }
        if deadline_at <= Utc::now() {
            return Err(DomainError::validation("Deadline must be in the future"));
        }

        let id = Uuid::new_v4();
        let mut events = EventBuffer::default();
        events.record(EventKind::OpportunityCreated {
            opportunity_id: id,
            title: title.clone(),
        });

        Ok(Self {
            id,
            title,
            product_category,
            quantity,
            deadline_at,
            region_code,
            status: OpportunityStatus::Open,
            events,
        })
    }

    /// Rehydrate from storage without raising events.
    pub fn from_parts(
        id: Uuid,
        title: String,
        product_category: String,
        quantity: BigDecimal,
        deadline_at: DateTime<Utc>,
        region_code: String,
        status: OpportunityStatus,
    ) -> Self {
        Self {
            id,
            title,
            product_category,
            quantity,
            deadline_at,
            region_code,
            status,
            events: EventBuffer::default(),
        }
    }

    /// Close the opportunity. Closing an already-closed opportunity is a
    /// no-op and raises nothing.
    pub fn close(&mut self) {
        if self.status == OpportunityStatus::Closed {
            return;
        }
        self.status = OpportunityStatus::Closed;
        self.events.record(EventKind::OpportunityClosed {
            opportunity_id: self.id,
        });
    }

    pub fn is_open_for_bids(&self, now: DateTime<Utc>) -> bool {
        self.status == OpportunityStatus::Open && self.deadline_at > now
    }
}

impl RaisesEvents for Opportunity {
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
    use chrono::Duration;

    fn future_deadline() -> DateTime<Utc> {
        Utc::now() + Duration::hours(1)
    }

    fn open_opportunity() -> Opportunity {
        Opportunity::new(
            "Winter wheat, milling grade".to_string(),
            "grain".to_string(),
            BigDecimal::from(500),
            future_deadline(),
            "MN".to_string(),
        )
        .expect("valid opportunity")
    }

    #[test]
    fn new_raises_created_event() {
        let opp = open_opportunity();
        assert_eq!(opp.status, OpportunityStatus::Open);
        assert_eq!(opp.pending_events().len(), 1);
        assert!(matches!(
            opp.pending_events()[0].kind,
            EventKind::OpportunityCreated { opportunity_id, .. } if opportunity_id == opp.id
        ));
    }

    #[test]
    fn blank_title_is_rejected_without_events() {
        let err = Opportunity::new(
            "   ".to_string(),
            "grain".to_string(),
            BigDecimal::from(500),
            future_deadline(),
            "MN".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let err = Opportunity::new(
            "Wheat".to_string(),
            "grain".to_string(),
            BigDecimal::from(0),
            future_deadline(),
            "MN".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn past_deadline_is_rejected() {
        let err = Opportunity::new(
            "Wheat".to_string(),
            "grain".to_string(),
            BigDecimal::from(500),
            Utc::now() - Duration::minutes(1),
            "MN".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn close_raises_event_once() {
        let mut opp = open_opportunity();
        opp.drain_events();

        opp.close();
        assert_eq!(opp.status, OpportunityStatus::Closed);
        assert_eq!(opp.pending_events().len(), 1);

        opp.close();
        assert_eq!(opp.pending_events().len(), 1, "repeat close raises nothing");
    }

    #[test]
    fn closed_opportunity_is_not_open_for_bids() {
        let mut opp = open_opportunity();
        assert!(opp.is_open_for_bids(Utc::now()));
        opp.close();
        assert!(!opp.is_open_for_bids(Utc::now()));
    }

    #[test]
    fn passed_deadline_is_not_open_for_bids() {
        let opp = open_opportunity();
        assert!(!opp.is_open_for_bids(opp.deadline_at + Duration::seconds(1)));
    }
}
