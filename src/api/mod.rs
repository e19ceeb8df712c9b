pub mod case;
pub mod error;
pub mod health;
pub mod openapi;
pub mod statutes;

use actix_web::web;

/// Register every route group
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(case::configure)
        .configure(statutes::configure)
        .configure(health::configure)
        .configure(openapi::configure);
}
