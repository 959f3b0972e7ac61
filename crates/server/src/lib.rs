//! TextBrief HTTP Server
//!
//! Actix-web form handler, live word count API and health check

pub mod routes;
pub mod state;
pub mod types;
pub mod view;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use textbrief_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// Register state, extractor limits and every route on an actix service config
pub fn app_config(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let form_config = routes::form_config(state.config.max_input_length);
        cfg.app_data(state)
            .app_data(form_config)
            .service(routes::index)
            .service(routes::generate_summary)
            .service(routes::word_count)
            .service(routes::health);
    }
}

/// Build state from `config` and serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let static_dir = config.static_dir.clone();
    let state = web::Data::new(AppState::new(config)?);

    if !static_dir.exists() {
        tracing::warn!("Static directory {} not found", static_dir.display());
    }

    info!("HTTP server listening on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(app_config(state.clone()))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
