use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Publish failed: {0}")]
pub struct PublishError(pub String);

/// Delivery channel for outbox events. The dispatcher retries failed rows on
/// every poll, so delivery is at-least-once: implementations (and whatever
/// sits behind them) must tolerate duplicates of the same `(event_type,
/// payload)`.
#[async_trait]
pub trait EventPublisher: Send + Sync + 'static {
    async fn publish(&self, event_type: &str, payload: &Value) -> Result<(), PublishError>;
}

/// Writes events to the application log. Stands in for a broker transport
/// until one is wired up.
pub struct LogPublisher;

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event_type: &str, payload: &Value) -> Result<(), PublishError> {
        log::info!("OUTBOX event {}: {}", event_type, payload);
        Ok(())
    }
}
