use crate::events::RecordUpdatedEvent;
use crate::models::{RecordId, SalesRecord, SalesRecordData};
use crate::services::record_store::{lock_store, SharedRecordStore};
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

/// Overwrites every field of the record with the given id.
#[derive(Debug, Clone)]
pub struct UpdateRecordCommand {
    pub id: RecordId,
    pub data: SalesRecordData,
}

impl Request<Option<SalesRecord>> for UpdateRecordCommand {}

pub struct UpdateRecordRequestHandler(pub SharedRecordStore, pub DefaultMediator);
impl RequestHandler<UpdateRecordCommand, Option<SalesRecord>> for UpdateRecordRequestHandler {
    fn handle(&mut self, command: UpdateRecordCommand) -> Option<SalesRecord> {
        let updated = lock_store(&self.0).update(command.id, command.data)?;

        if let Err(err) = self.1.publish(RecordUpdatedEvent(updated.clone())) {
            log::warn!("Could not publish record updated event: {}", err);
        }

        Some(updated)
    }
}
