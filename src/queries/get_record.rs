use crate::models::{RecordId, SalesRecord};
use crate::services::record_store::{lock_store, SharedRecordStore};
use mediator::{Request, RequestHandler};

pub struct GetRecordRequest(pub RecordId);
impl Request<Option<SalesRecord>> for GetRecordRequest {}

pub struct GetRecordRequestHandler(pub SharedRecordStore);
impl RequestHandler<GetRecordRequest, Option<SalesRecord>> for GetRecordRequestHandler {
    fn handle(&mut self, req: GetRecordRequest) -> Option<SalesRecord> {
        lock_store(&self.0).get(req.0)
    }
}
