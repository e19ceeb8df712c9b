//! REST API endpoint for case processing

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::service::CasePipeline;

/// Request body for case processing
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCaseRequest {
    /// Free-text FIR / case description
    pub case_description: Option<String>,
}

/// Run a case description through extraction, drafting, verification and scoring
#[utoipa::path(
    post,
    path = "/api/process-case",
    request_body = ProcessCaseRequest,
    responses(
        (status = 200, description = "Case processed", body = crate::model::CaseReport),
        (status = 400, description = "Missing or invalid case description", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorResponse)
    ),
    tag = "cases"
)]
#[post("/api/process-case")]
pub async fn process_case(
    pipeline: web::Data<CasePipeline>,
    body: web::Json<ProcessCaseRequest>,
) -> Result<HttpResponse, ApiError> {
    let description = body.into_inner().case_description.unwrap_or_default();

    tracing::info!(
        description_length = description.len(),
        "Received case processing request"
    );

    let report = pipeline.process(&description).await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure case routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(process_case);
}
