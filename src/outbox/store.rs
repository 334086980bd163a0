use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::events::DomainEvent;
use crate::schema::outbox;

/// A durable outbox row. `processed_at IS NULL` means pending; the dispatcher
/// is the only writer after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = outbox)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OutboxRow {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub event_type: String,
    pub payload: Value,
    pub processed_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = outbox)]
pub struct NewOutboxRow {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub event_type: String,
    pub payload: Value,
}

/// Result of one delivery attempt, written back by the dispatcher.
#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered { id: Uuid, at: DateTime<Utc> },
    Failed { id: Uuid, error: String },
}

/// Insert one outbox row per event. Must be called inside the transaction
/// that also persists the entity change which raised the events, so that the
/// rows exist if and only if that change commits.
pub fn append_events(
    conn: &mut PgConnection,
    events: &[DomainEvent],
) -> Result<usize, DomainError> {
    if events.is_empty() {
        return Ok(0);
    }

    let rows: Result<Vec<NewOutboxRow>, DomainError> = events
        .iter()
        .map(|event| {
            let payload = serde_json::to_value(&event.kind)
                .map_err(|e| DomainError::Internal(format!("Event serialization failed: {e}")))?;
            Ok(NewOutboxRow {
                id: Uuid::new_v4(),
                occurred_at: event.occurred_at,
                event_type: event.kind.name().to_string(),
                payload,
            })
        })
        .collect();

    let count = diesel::insert_into(outbox::table)
        .values(&rows?)
        .execute(conn)
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    Ok(count)
}

/// Oldest pending rows first. Ordering is best-effort across batches: a row
/// committed after the select with an earlier `occurred_at` simply lands in a
/// later batch.
pub fn load_pending(
    conn: &mut PgConnection,
    limit: i64,
) -> Result<Vec<OutboxRow>, diesel::result::Error> {
    outbox::table
        .filter(outbox::processed_at.is_null())
        .order(outbox::occurred_at.asc())
        .limit(limit)
        .select(OutboxRow::as_select())
        .load(conn)
}

/// Persist all outcomes of one dispatch batch in a single transaction. A
/// delivered row becomes terminal; a failed row keeps `processed_at` null and
/// stays eligible for the next poll.
pub fn write_outcomes(
    conn: &mut PgConnection,
    outcomes: &[DeliveryOutcome],
) -> Result<(), diesel::result::Error> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for outcome in outcomes {
            match outcome {
                DeliveryOutcome::Delivered { id, at } => {
                    diesel::update(outbox::table.find(*id))
                        .set((
                            outbox::processed_at.eq(Some(*at)),
                            outbox::last_error.eq(None::<String>),
                        ))
                        .execute(conn)?;
                }
                DeliveryOutcome::Failed { id, error } => {
                    diesel::update(outbox::table.find(*id))
                        .set(outbox::last_error.eq(Some(error.as_str())))
                        .execute(conn)?;
                }
            }
        }
        Ok(())
    })
}
