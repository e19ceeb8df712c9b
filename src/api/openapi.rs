//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "bailcheck", description = "Case intake, bail drafting and citation verification"),
    paths(
        crate::api::case::process_case,
        crate::api::health::root,
        crate::api::health::health,
        crate::api::statutes::ipc_database,
    ),
    components(schemas(
        crate::api::case::ProcessCaseRequest,
        crate::api::error::ErrorResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ServiceInfo,
        crate::api::statutes::StatuteDatabaseResponse,
        crate::model::CaseReport,
        crate::model::CaseExtraction,
        crate::model::VerificationVerdict,
        crate::model::CitationDetail,
        crate::model::RiskAssessment,
        crate::model::RiskLevel,
        crate::model::StatuteInfo,
        crate::model::Severity,
    )),
    tags(
        (name = "cases", description = "Case processing pipeline"),
        (name = "statutes", description = "Reference registry"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
