//! # sales_api
//! A CRUD service over sales records loaded from a spreadsheet at startup.
//!
//! Requests reach the [RecordStore](services::record_store::RecordStore) through a
//! [DefaultMediator]: every endpoint sends a query or a command, and commands publish
//! an event once the store has changed.

pub mod client;
pub mod commands;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod events;
pub mod models;
pub mod queries;
pub mod services;

use crate::services::record_store::SharedRecordStore;
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use mediator::DefaultMediator;
use std::sync::{Arc, Mutex};

pub type SharedMediator = Arc<Mutex<DefaultMediator>>;

/// Registers the record endpoints, the JSON body configuration and the
/// OpenAPI document with its Swagger UI.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, req| {
        let message = err.to_string();
        log::debug!("Rejected body of {} {}: {}", req.method(), req.path(), message);
        InternalError::from_response(err, HttpResponse::BadRequest().body(message)).into()
    });

    cfg.app_data(json_config)
        .service(endpoints::records::get_all)
        .service(endpoints::records::get)
        .service(endpoints::records::create)
        .service(endpoints::records::update)
        .service(endpoints::records::delete)
        .service(endpoints::openapi::swagger_ui());
}

/// Builds the mediator with every request handler and event subscriber.
pub fn create_mediator_service(store: &SharedRecordStore) -> SharedMediator {
    use commands::*;
    use events::*;
    use queries::*;

    let store = store.clone();
    let mediator = DefaultMediator::builder()
        // Requests
        .add_handler(GetRecordRequestHandler(store.clone()))
        .add_handler(GetAllRecordsRequestHandler(store.clone()))
        .add_handler_deferred(|m| CreateRecordRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| UpdateRecordRequestHandler(store.clone(), m))
        .add_handler_deferred(|m| DeleteRecordRequestHandler(store.clone(), m))
        // Events
        .subscribe_fn(|event: RecordsLoadedEvent| {
            log::info!("Loaded {} records, next id {}", event.count, event.next_id);
        })
        .subscribe_fn(|event: RecordCreatedEvent| {
            log::info!("Created: {} - {}", event.0.product, event.0.id);
        })
        .subscribe_fn(|event: RecordUpdatedEvent| {
            log::info!("Updated: {} - {}", event.0.product, event.0.id);
        })
        .subscribe_fn(|event: RecordDeletedEvent| {
            log::info!("Deleted: {} - {}", event.0.product, event.0.id);
        })
        .build();

    Arc::new(Mutex::new(mediator))
}
