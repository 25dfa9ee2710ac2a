//! # Assistant Routes
//!
//! ```text
//! POST /assistant/chat    rule-based planning chat (public)
//! ```
//!
//! The reply language follows the request's `Accept-Language` header;
//! there is no process-wide locale.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;
use qa3at_core::assistant::{
    canned_reply, recommend, recommendation_message, should_recommend, ChatContext, ChatReply,
    DEFAULT_GUEST_COUNT,
};
use qa3at_core::types::Lang;

pub fn router() -> Router<AppState> {
    Router::new().route("/assistant/chat", post(chat))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    message: String,
    #[serde(default)]
    context: ChatContext,
}

/// `POST /assistant/chat`
async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatReply>> {
    let lang = Lang::from_accept_language(
        headers
            .get(axum::http::header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );

    let cities = state.db.venues().distinct_cities().await?;

    if !should_recommend(&req.message, &req.context, &cities) {
        return Ok(Json(ChatReply {
            message: canned_reply(&req.message, lang),
            recommendations: Vec::new(),
        }));
    }

    let mut venues = state.db.venues().list_active().await?;

    // Narrow to the requested city when the context names one
    if let Some(city) = req.context.city.as_deref().filter(|c| !c.is_empty()) {
        let city = city.to_lowercase();
        venues.retain(|v| v.city.to_lowercase() == city);
    }

    let recommendations = recommend(&venues, &req.context);

    // Catalogue too small for a meaningful spread: answer like any other
    // non-triggering message
    if recommendations.is_empty() {
        return Ok(Json(ChatReply {
            message: canned_reply(&req.message, lang),
            recommendations: Vec::new(),
        }));
    }

    let guest_count = req.context.guest_count.unwrap_or(DEFAULT_GUEST_COUNT);
    Ok(Json(ChatReply {
        message: recommendation_message(guest_count, lang),
        recommendations,
    }))
}
