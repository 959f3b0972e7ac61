use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - active provider and whether its key is set
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let provider = state.summarizer.provider();

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        provider: provider.kind().to_string(),
        model: provider.model().to_string(),
        credential_configured: provider.has_credential(),
    })
}
