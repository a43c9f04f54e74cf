//! crates/storefront_http/src/server.rs
//!
//! Start-up helpers shared by the service binaries: wrapping an API router
//! with CORS, request logging and Swagger UI, binding it, and writing the
//! OpenAPI document to disk.

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware as axum_middleware, Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, error::ApiError, middleware::log_requests};

/// Wraps a service's API router with the layers every service shares.
pub fn build_app(
    config: &Config,
    api_router: Router,
    api_doc: utoipa::openapi::OpenApi,
) -> Result<Router, ApiError> {
    let origin = config
        .cors_allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| ApiError::Internal(format!("Invalid CORS origin: {}", e)))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    Ok(Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
        .layer(axum_middleware::from_fn(log_requests))
        .layer(cors))
}

/// Binds the configured address and serves `app` until the process exits.
pub async fn serve(service_name: &str, config: &Config, app: Router) -> Result<(), ApiError> {
    info!("Starting {} on {}", service_name, config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Serialises an OpenAPI document and writes it to `path`.
pub fn write_openapi(
    api_doc: utoipa::openapi::OpenApi,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec_json = api_doc.to_pretty_json()?;
    std::fs::write(path, spec_json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn config(origin: &str) -> Config {
        Config::from_lookup("127.0.0.1:0", |key| {
            (key == "CORS_ALLOWED_ORIGIN").then(|| origin.to_string())
        })
        .unwrap()
    }

    fn doc() -> utoipa::openapi::OpenApi {
        utoipa::openapi::OpenApiBuilder::new().build()
    }

    #[test]
    fn rejects_unparseable_cors_origin() {
        let api = Router::new().route("/ping", get(|| async { "pong" }));
        let result = build_app(&config("bad\norigin"), api, doc());
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }

    #[tokio::test]
    async fn serves_api_routes_and_openapi_document() {
        let api = Router::new().route("/ping", get(|| async { "pong" }));
        let app = build_app(&config("http://localhost:3000"), api, doc()).unwrap();

        let ping = app
            .clone()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ping.status(), StatusCode::OK);

        let spec = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(spec.status(), StatusCode::OK);
    }
}
