use crate::events::RecordDeletedEvent;
use crate::models::{RecordId, SalesRecord};
use crate::services::record_store::{lock_store, SharedRecordStore};
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

pub struct DeleteRecordCommand(pub RecordId);
impl Request<Option<SalesRecord>> for DeleteRecordCommand {}

pub struct DeleteRecordRequestHandler(pub SharedRecordStore, pub DefaultMediator);
impl RequestHandler<DeleteRecordCommand, Option<SalesRecord>> for DeleteRecordRequestHandler {
    fn handle(&mut self, request: DeleteRecordCommand) -> Option<SalesRecord> {
        let result = lock_store(&self.0).delete(request.0);

        if let Some(deleted) = result.clone() {
            if let Err(err) = self.1.publish(RecordDeletedEvent(deleted)) {
                log::warn!("Could not publish record deleted event: {}", err);
            }
        }

        result
    }
}
