use crate::models::{RecordId, SalesRecord};
use mediator::Event;

#[derive(Debug, Clone)]
pub struct RecordCreatedEvent(pub SalesRecord);
impl Event for RecordCreatedEvent {}

#[derive(Debug, Clone)]
pub struct RecordUpdatedEvent(pub SalesRecord);
impl Event for RecordUpdatedEvent {}

#[derive(Debug, Clone)]
pub struct RecordDeletedEvent(pub SalesRecord);
impl Event for RecordDeletedEvent {}

/// Published once after the startup load.
#[derive(Debug, Clone)]
pub struct RecordsLoadedEvent {
    pub count: usize,
    pub next_id: RecordId,
}
impl Event for RecordsLoadedEvent {}
