use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::view::PageContext;

/// GET / - empty summarize form
#[get("/")]
pub async fn index(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let page = PageContext {
        selected_length: "2".to_string(),
        selected_mode: "paragraph".to_string(),
        max_input_length: state.config.max_input_length,
        ..Default::default()
    };

    let html = state
        .renderer
        .render_index(&page)
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}
