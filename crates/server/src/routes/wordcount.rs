use actix_web::{post, web, HttpResponse};
use textbrief_common::TextStats;

use crate::types::{WordCountRequest, WordCountResponse};

/// POST /api/wordcount - live statistics for the text area
#[post("/api/wordcount")]
pub async fn word_count(req: web::Json<WordCountRequest>) -> HttpResponse {
    let stats = TextStats::from_text(&req.text);

    HttpResponse::Ok().json(WordCountResponse {
        words: stats.word_count,
        characters: stats.character_count,
        sentences: stats.sentence_count,
    })
}
