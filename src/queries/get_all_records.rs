use crate::models::SalesRecord;
use crate::services::record_store::{lock_store, SharedRecordStore};
use mediator::{Request, RequestHandler};

pub struct GetAllRecordsRequest;
impl Request<Vec<SalesRecord>> for GetAllRecordsRequest {}

pub struct GetAllRecordsRequestHandler(pub SharedRecordStore);
impl RequestHandler<GetAllRecordsRequest, Vec<SalesRecord>> for GetAllRecordsRequestHandler {
    fn handle(&mut self, _: GetAllRecordsRequest) -> Vec<SalesRecord> {
        lock_store(&self.0).get_all()
    }
}
