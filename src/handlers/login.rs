use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use log::{error, info};

use super::{AppState, error_body};
use crate::remote::{LoginForm, LoginOutcome};

/// Reads credentials from a url-encoded body, falling back to the query
/// string. Anything absent or unparsable counts as empty.
pub async fn handle_login(
    req: HttpRequest,
    form: Option<web::Form<LoginForm>>,
    data: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let form = match form {
        Some(form) => form.into_inner(),
        None => web::Query::<LoginForm>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or_default(),
    };

    match data.remote.login(&form).await {
        Ok(LoginOutcome::Authenticated(user)) => {
            info!("Authenticated {}", user.login);
            Ok(HttpResponse::Ok().json(user))
        }
        Ok(LoginOutcome::Redirect { location }) => Ok(HttpResponse::SeeOther()
            .insert_header((LOCATION, location))
            .finish()),
        Err(e) => {
            error!("Login failed: {}", e);
            Ok(HttpResponse::BadGateway().json(error_body(e)))
        }
    }
}
