use actix_web::{web, HttpResponse};
use confessional_core::{Matcher, Query, ScoringPolicy};

use crate::error::{ApiError, Result};
use crate::models::{AnalyzeFeelingsRequest, AnalyzeFeelingsResponse, AnalyzeRequest, AnalyzeResponse};
use crate::state::AppState;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

/// Extract themes from a chat message and find the song that fits best.
pub async fn analyze_feelings(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeFeelingsRequest>,
) -> Result<HttpResponse> {
    let message = body
        .into_inner()
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Message is required".to_string()))?;

    log::debug!("Extracting themes via {}", state.extractor.name());
    let themes = state.extractor.extract(&message).await?;
    log::info!("Themes to match: {:?}", themes);

    let result = state.matcher.find_best(&Query::themes(&themes), &state.catalog);
    log::info!("Best match found: {} (score: {})", result.title, result.score);

    Ok(HttpResponse::Ok().json(AnalyzeFeelingsResponse {
        song: result.song().map(str::to_string),
        themes: result.matched,
        score: result.score,
    }))
}

/// Score pre-extracted themes against the catalog.
pub async fn analyze(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    let preview: String = request.message.chars().take(100).collect();
    log::info!("Received analysis request for message: {}...", preview);

    let result = Matcher::new(ScoringPolicy::SetMembership)
        .find_best(&Query::themes(&request.themes), &state.catalog);

    let song = result.song().map(str::to_string).unwrap_or_default();
    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        score: result.score,
        song,
        themes: result.matched,
    }))
}
