//! REST API endpoint exposing the reference registry

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{Severity, StatuteInfo};
use crate::service::ReferenceRegistry;

/// Registry listing used by clients to explain verification results
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatuteDatabaseResponse {
    pub database: Vec<StatuteInfo>,
    pub count: usize,
    pub description: String,
    pub categories: Vec<String>,
    pub severity_levels: Vec<Severity>,
}

/// List the statutory sections citations are verified against
#[utoipa::path(
    get,
    path = "/api/ipc-database",
    responses(
        (status = 200, description = "Reference registry contents", body = StatuteDatabaseResponse)
    ),
    tag = "statutes"
)]
#[get("/api/ipc-database")]
pub async fn ipc_database(registry: web::Data<ReferenceRegistry>) -> impl Responder {
    let database: Vec<StatuteInfo> = registry.entries().cloned().collect();

    HttpResponse::Ok().json(StatuteDatabaseResponse {
        count: database.len(),
        database,
        description: "Statutory sections used to detect hallucinated citations".to_string(),
        categories: registry.categories(),
        severity_levels: Severity::ALL.to_vec(),
    })
}

/// Configure statute routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(ipc_database);
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;

    #[actix_web::test]
    async fn test_lists_registry_entries() {
        let registry = web::Data::new(ReferenceRegistry::from_codes(["302", "379", "8888"]));
        let app = test::init_service(App::new().app_data(registry).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/ipc-database").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["count"], 2);
        assert_eq!(body["database"][0]["section"], "302");
        assert_eq!(body["database"][0]["severity"], "Critical");
        assert_eq!(body["database"][1]["bailable"], true);
        assert_eq!(body["categories"], json!(["Against Body", "Property"]));
        assert_eq!(
            body["severityLevels"],
            json!(["Critical", "High", "Medium", "Low"])
        );
    }
}
