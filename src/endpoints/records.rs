use crate::commands::{CreateRecordCommand, DeleteRecordCommand, UpdateRecordCommand};
use crate::error::ApiError;
use crate::models::{RecordId, SalesRecord, SalesRecordData};
use crate::queries::{GetAllRecordsRequest, GetRecordRequest};
use crate::SharedMediator;
use actix_web::web::{Data, Json};
use actix_web::{delete, get, post, put, web, HttpResponse};
use mediator::{DefaultMediator, Mediator};
use std::sync::MutexGuard;

fn lock(mediator: &SharedMediator) -> Result<MutexGuard<'_, DefaultMediator>, ApiError> {
    mediator.lock().map_err(|_| ApiError::MediatorPoisoned)
}

#[utoipa::path(
    get,
    path = "/gets",
    tag = "records",
    operation_id = "GetAllSalesRecords",
    responses(
        (status = 200, description = "Every record in insertion order", body = Vec<SalesRecord>),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/gets")]
pub async fn get_all(mediator: Data<SharedMediator>) -> Result<HttpResponse, ApiError> {
    let mut mediator = lock(&mediator)?;
    let result = mediator.send(GetAllRecordsRequest)?;

    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = "records",
    operation_id = "GetSalesRecordById",
    params(("id" = u32, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record found", body = SalesRecord),
        (status = 404, description = "No record has this id"),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/get/{id}")]
pub async fn get(path: web::Path<RecordId>, mediator: Data<SharedMediator>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut mediator = lock(&mediator)?;
    let result = mediator.send(GetRecordRequest(id))?;

    match result {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[utoipa::path(
    post,
    path = "/create",
    tag = "records",
    operation_id = "CreateSalesRecord",
    request_body(content = SalesRecordData, description = "Record fields, any id is ignored"),
    responses(
        (status = 201, description = "Record created", body = SalesRecord,
            headers(("Location" = String, description = "Path of the new record"))),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
#[post("/create")]
pub async fn create(mediator: Data<SharedMediator>, body: Json<SalesRecordData>) -> Result<HttpResponse, ApiError> {
    let mut mediator = lock(&mediator)?;
    let result = mediator.send(CreateRecordCommand(body.into_inner()))??;

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/get/{}", result.id)))
        .json(result))
}

#[utoipa::path(
    put,
    path = "/updates/{id}",
    tag = "records",
    operation_id = "UpdateSalesRecord",
    params(("id" = u32, Path, description = "Record id")),
    request_body(content = SalesRecordData, description = "Replacement fields, any id is ignored"),
    responses(
        (status = 204, description = "Record updated"),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "No record has this id"),
        (status = 500, description = "Internal server error")
    )
)]
#[put("/updates/{id}")]
pub async fn update(
    path: web::Path<RecordId>,
    mediator: Data<SharedMediator>,
    body: Json<SalesRecordData>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut mediator = lock(&mediator)?;
    let result = mediator.send(UpdateRecordCommand {
        id,
        data: body.into_inner(),
    })?;

    match result {
        Some(_) => Ok(HttpResponse::NoContent().finish()),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[utoipa::path(
    delete,
    path = "/deletes/{id}",
    tag = "records",
    operation_id = "DeleteSalesRecord",
    params(("id" = u32, Path, description = "Record id")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "No record has this id"),
        (status = 500, description = "Internal server error")
    )
)]
#[delete("/deletes/{id}")]
pub async fn delete(path: web::Path<RecordId>, mediator: Data<SharedMediator>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut mediator = lock(&mediator)?;
    let result = mediator.send(DeleteRecordCommand(id))?;

    match result {
        Some(_) => Ok(HttpResponse::NoContent().finish()),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}
