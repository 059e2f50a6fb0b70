use std::sync::Arc;

use actix_web::{HttpResponse, web};

use crate::remote::Remote;

pub mod hook;
pub mod login;

pub struct AppState {
    pub remote: Arc<dyn Remote>,
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "trypod-remote"
    }))
}

/// Mounts the host-facing routes onto an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/login", web::get().to(login::handle_login))
        .route("/login", web::post().to(login::handle_login))
        .route("/hook", web::post().to(hook::handle_hook));
}

fn error_body(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}
