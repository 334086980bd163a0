//! Transactional outbox: durable event rows written in the same database
//! transaction as the entity change that raised them, plus the background
//! dispatcher that delivers them to an external publisher.

pub mod dispatcher;
pub mod publisher;
pub mod store;

pub use dispatcher::{Dispatcher, DispatcherSettings};
pub use publisher::{EventPublisher, LogPublisher, PublishError};
