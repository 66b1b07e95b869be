use actix_web::{HttpRequest, HttpResponse, web};

use crate::config::service_config::PostResponse;
use crate::error::Result;
use crate::handlers::visit_handlers::log_visit;
use crate::state::app_state::AppState;
use crate::structs::profile::{ProfileForm, ProfileResponse, request_params, required};

/// Look up one profile by its key and return it as a JSON array of 0 or 1 items.
pub async fn get_profile(
    app_state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if app_state.config.log_visits_on_get {
        log_visit(&app_state, &req, false).await?;
    }

    let params = request_params(&req, &[]);
    let username = required(&params, &app_state.config.key_param)?;

    let profiles: Vec<ProfileResponse> = app_state
        .profiles
        .find(username)
        .await?
        .map(ProfileResponse::from)
        .into_iter()
        .collect();

    Ok(HttpResponse::Ok().json(profiles))
}

/// Log the visit, then create or overwrite the submitted profile.
///
/// Parameters come from the query string and a form-encoded body; the body
/// is taken raw so that visit logging runs whatever its content type.
pub async fn save_profile(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let render_visits = app_state.config.post_response == PostResponse::VisitLog;
    let report = log_visit(&app_state, &req, render_visits).await?;

    let params = request_params(&req, &body);
    let form = ProfileForm::from_params(&params, &app_state.config.key_param)?;
    app_state
        .profiles
        .upsert(&form.username, &form.first_name, form.age)
        .await?;

    match app_state.config.post_response {
        PostResponse::Json => Ok(HttpResponse::Ok().json(Vec::<ProfileResponse>::new())),
        PostResponse::VisitLog => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(report.map(|r| r.render()).unwrap_or_default())),
    }
}
