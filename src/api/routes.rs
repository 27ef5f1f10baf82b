use axum::{
    routing::get,
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_http::cors::{CorsLayer, Any};

use crate::api::models::TopStoriesParams;
use crate::api::response;
use crate::error::AppError;
use crate::AppState;

const MAX_TOP: i64 = 500;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/v1/stories", get(top_stories_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn top_stories_handler(
    State(state): State<AppState>,
    Query(params): Query<TopStoriesParams>,
) -> impl IntoResponse {
    // Boundary validation: reject before anything reaches upstream
    if params.top <= 0 || params.top > MAX_TOP {
        tracing::error!(top = params.top, "bad top stories request");
        return response::error(
            StatusCode::BAD_REQUEST,
            AppError::InvalidCount(params.top).to_string(),
        );
    }

    match state.service.top_stories(params.top as usize).await {
        Ok(stories) => response::success(stories),
        Err(err) => {
            let (status, message) = match &err {
                AppError::Upstream(detail) => {
                    tracing::error!(top = params.top, error = %detail, "upstream failure");
                    // Detail stays in the log, never on the wire
                    (StatusCode::BAD_GATEWAY, "upstream service unavailable".to_string())
                }
                AppError::InvalidCount(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                AppError::ConfigError(detail) => {
                    tracing::error!(error = %detail, "configuration failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
                }
            };

            response::error(status, message)
        }
    }
}
