use actix_web::{HttpResponse, Result as ActixResult, web};
use log::{error, info};

use super::{AppState, error_body};

/// Accepts a Trypod commit notification. The payload is not signed, so no
/// verification happens here.
pub async fn handle_hook(body: web::Bytes, data: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match data.remote.hook(&body).await {
        Ok((repo, build)) => {
            info!(
                "Hook for {} at {} ({})",
                repo.full_name, build.commit, build.event
            );
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "repo": repo,
                "build": build,
            })))
        }
        Err(e) if e.is_decode() => {
            error!("Rejected hook payload: {}", e);
            Ok(HttpResponse::BadRequest().json(error_body(e)))
        }
        Err(e) => {
            error!("Hook processing failed: {}", e);
            Ok(HttpResponse::BadGateway().json(error_body(e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::configure;
    use crate::handlers::tests::{offline_client, state};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_hook_returns_repo_and_build() {
        let app = test::init_service(
            App::new()
                .app_data(state(offline_client()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/hook")
            .set_payload(
                r#"{"author":"alice","repository":"http://x/y.git","owner":"o","name":"r","rev":"abc123","branch":"main","description":"msg"}"#,
            )
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["repo"]["full_name"], "o/r");
        assert_eq!(body["repo"]["branch"], "main");
        assert_eq!(body["build"]["event"], "push");
        assert_eq!(body["build"]["ref"], "abc123");
        assert_eq!(body["build"]["email"], "alice");
    }

    #[actix_web::test]
    async fn test_hook_malformed_body_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state(offline_client()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/hook")
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(state(offline_client()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "trypod-remote");
    }
}
