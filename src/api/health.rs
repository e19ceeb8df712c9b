//! Service banner and health check endpoints

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::service::CasePipeline;

/// Name of the generative-text provider backing the pipeline
const LLM_PROVIDER: &str = "openai";

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub llm: String,
    pub model: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "health"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "Bail application drafting with citation verification".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint
///
/// Always returns 200 OK if the service is running. The provider is not
/// contacted; credentials are only exercised by real requests.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/api/health")]
pub async fn health(pipeline: web::Data<CasePipeline>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        llm: LLM_PROVIDER.to_string(),
        model: pipeline.model().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(health);
}
