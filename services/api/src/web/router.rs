//! services/api/src/web/router.rs
//!
//! Assembles the complete web application so the server binary and the
//! integration tests serve exactly the same routes and layers.

use crate::config::ConfigError;
use crate::error::ApiError;
use crate::web::rest::ApiDoc;
use crate::web::state::AppState;
use crate::web::{create_mood_handler, list_moods_handler};
use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Largest accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Builds the API routes plus the Swagger UI.
///
/// Fails only if the configured CORS origin is not a valid header value.
pub fn build_router(app_state: Arc<AppState>) -> Result<Router, ApiError> {
    let allow_origin: AllowOrigin = match &app_state.config.cors_allowed_origin {
        Some(origin) => origin
            .parse::<HeaderValue>()
            .map_err(|e| {
                ConfigError::InvalidValue("CORS_ALLOWED_ORIGIN".to_string(), e.to_string())
            })?
            .into(),
        None => Any.into(),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    let api_router = Router::new()
        .route("/moods", get(list_moods_handler).post(create_mood_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    Ok(Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryMoodStore;
    use crate::config::Config;

    fn state_with_origin(origin: &str) -> Arc<AppState> {
        let config = Config::from_lookup(|key| {
            (key == "CORS_ALLOWED_ORIGIN").then(|| origin.to_string())
        })
        .unwrap();
        Arc::new(AppState {
            store: Arc::new(InMemoryMoodStore::new()),
            config: Arc::new(config),
        })
    }

    #[test]
    fn accepts_a_valid_origin() {
        assert!(build_router(state_with_origin("http://localhost:5173")).is_ok());
    }

    #[test]
    fn rejects_an_origin_that_is_not_a_header_value() {
        let err = build_router(state_with_origin("http://localhost\n:5173")).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::InvalidValue(ref var, _)) if var == "CORS_ALLOWED_ORIGIN"
        ));
    }
}
