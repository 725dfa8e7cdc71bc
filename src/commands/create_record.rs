use crate::error::StoreError;
use crate::events::RecordCreatedEvent;
use crate::models::{SalesRecord, SalesRecordData};
use crate::services::record_store::{lock_store, SharedRecordStore};
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

#[derive(Debug, Clone)]
pub struct CreateRecordCommand(pub SalesRecordData);

impl Request<Result<SalesRecord, StoreError>> for CreateRecordCommand {}

pub struct CreateRecordRequestHandler(pub SharedRecordStore, pub DefaultMediator);
impl RequestHandler<CreateRecordCommand, Result<SalesRecord, StoreError>> for CreateRecordRequestHandler {
    fn handle(&mut self, command: CreateRecordCommand) -> Result<SalesRecord, StoreError> {
        let record = lock_store(&self.0).create(command.0)?;

        if let Err(err) = self.1.publish(RecordCreatedEvent(record.clone())) {
            log::warn!("Could not publish record created event: {}", err);
        }

        Ok(record)
    }
}
