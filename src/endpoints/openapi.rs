use super::records;
use crate::models::{SalesRecord, SalesRecordData};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Sales records API"),
    paths(
        records::get_all,
        records::get,
        records::create,
        records::update,
        records::delete,
    ),
    components(schemas(SalesRecord, SalesRecordData)),
    tags((name = "records", description = "Sales records loaded from the spreadsheet"))
)]
pub struct ApiDoc;

/// Swagger UI under `/swagger-ui/`, backed by the generated document.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_PATH, ApiDoc::openapi())
}
