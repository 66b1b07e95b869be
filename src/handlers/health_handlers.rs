use actix_web::{HttpResponse, web};

use crate::state::app_state::AppState;

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    // Ping the document store, then the relational side if one is configured
    if let Err(e) = state.profiles.ping().await {
        log::error!("Health check failed: {}", e);
        return HttpResponse::InternalServerError()
            .json(serde_json::json!({ "success": false, "error": "Document store connection failed" }));
    }

    let sql_result = match state.visit_store() {
        Ok(store) => store.ping().await,
        Err(e) => Err(e),
    };

    match sql_result {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "success": false, "error": "Database connection failed" }))
        }
    }
}
