use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{post, web, HttpRequest, HttpResponse};
use textbrief_common::TextStats;
use textbrief_llm::{FormatMode, LengthTier, SummaryRequest};
use tracing::{error, info, warn};

use crate::state::AppState;
use crate::types::GenerateForm;
use crate::view::PageContext;

/// Room for the length/mode fields and field names
const FORM_OVERHEAD_BYTES: usize = 4096;

/// Form extractor settings for `/generate`
///
/// A character is at most 4 UTF-8 bytes and each byte percent-encodes to
/// 3 bytes, so the body limit admits any text of `max_input_length`
/// characters. Bodies that still fail to decode get the page with a message.
pub fn form_config(max_input_length: usize) -> web::FormConfig {
    let limit = max_input_length
        .saturating_mul(12)
        .saturating_add(FORM_OVERHEAD_BYTES);

    web::FormConfig::default()
        .limit(limit)
        .error_handler(form_error_page)
}

fn form_error_page(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    let state = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state,
        None => return err.into(),
    };
    let max_input_length = state.config.max_input_length;

    warn!("Rejected form body: {}", err);
    let message = match &err {
        UrlencodedError::Overflow { .. } => SummaryRequest::too_long(max_input_length).to_string(),
        other => format!("Could not read the submitted form: {}", other),
    };

    let page = PageContext {
        error: Some(message),
        selected_length: LengthTier::default().form_value().to_string(),
        selected_mode: FormatMode::default().form_value().to_string(),
        max_input_length,
        ..Default::default()
    };

    match state.renderer.render_index(&page) {
        Ok(html) => InternalError::from_response(
            err,
            HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html),
        )
        .into(),
        Err(e) => {
            error!("Failed to render form error page: {}", e);
            err.into()
        }
    }
}

/// POST /generate - validate, summarize and render the result page
///
/// Always answers 200; validation and provider failures are shown on the page.
#[post("/generate")]
pub async fn generate_summary(
    form: web::Form<GenerateForm>,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let form = form.into_inner();
    let length_tier = LengthTier::from_form_value(&form.length);
    let format_mode = FormatMode::from_form_value(&form.mode);

    let mut page = PageContext {
        selected_length: length_tier.form_value().to_string(),
        selected_mode: format_mode.form_value().to_string(),
        max_input_length: state.config.max_input_length,
        ..Default::default()
    };

    match SummaryRequest::new(
        &form.user_text,
        length_tier,
        format_mode,
        state.config.max_input_length,
    ) {
        Ok(request) => {
            page.input_stats = Some(TextStats::from_text(request.raw_text()));
            page.user_text = Some(request.raw_text().to_string());

            let result = state.summarizer.summarize(&request).await;
            if result.succeeded {
                page.summary_stats = Some(TextStats::from_text(&result.text));
                page.summarized_text = Some(result.text);
            } else {
                page.error = result.error_message;
            }
        }
        Err(e) => {
            info!("Rejected submission: {}", e);
            page.error = Some(e.to_string());
        }
    }

    let html = state
        .renderer
        .render_index(&page)
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}
